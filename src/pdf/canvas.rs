//! Minimal page-drawing layer over lopdf content streams.
//!
//! Text is set in the standard Helvetica faces with WinAnsi encoding, so
//! only Latin-1 characters render; anything else is drawn as `?`.

use lopdf::content::Operation;
use lopdf::{Object, StringFormat};

/// Points per inch.
pub const INCH: f32 = 72.0;
/// US Letter.
pub const PAGE_WIDTH: f32 = 8.5 * INCH;
pub const PAGE_HEIGHT: f32 = 11.0 * INCH;
/// Lowest baseline before a new page is started.
pub const BOTTOM_MARGIN: f32 = 0.75 * INCH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    /// Resource name under the page's `/Font` dictionary.
    pub fn resource_name(&self) -> &'static str {
        match self {
            Self::Regular => "F1",
            Self::Bold => "F2",
        }
    }

    pub fn base_font(&self) -> &'static str {
        match self {
            Self::Regular => "Helvetica",
            Self::Bold => "Helvetica-Bold",
        }
    }
}

/// Draws onto a sequence of pages, top to bottom.
pub struct Canvas {
    finished: Vec<Vec<Operation>>,
    ops: Vec<Operation>,
    /// Current baseline, in points from the bottom of the page.
    pub y: f32,
}

impl Canvas {
    pub fn new(y: f32) -> Self {
        Self {
            finished: Vec::new(),
            ops: Vec::new(),
            y,
        }
    }

    pub fn down(&mut self, dy: f32) {
        self.y -= dy;
    }

    /// Start a new page if fewer than `needed` points remain above the
    /// bottom margin. Returns true when a page was started.
    pub fn ensure_room(&mut self, needed: f32) -> bool {
        if self.y - needed >= BOTTOM_MARGIN {
            return false;
        }
        self.finished.push(std::mem::take(&mut self.ops));
        self.y = PAGE_HEIGHT - BOTTOM_MARGIN;
        true
    }

    /// Draw `text` with its left edge at `x` on the current baseline.
    pub fn text(&mut self, font: Font, size: f32, x: f32, text: &str) {
        self.ops.push(Operation::new("BT", vec![]));
        self.ops.push(Operation::new(
            "Tf",
            vec![Object::Name(font.resource_name().as_bytes().to_vec()), size.into()],
        ));
        self.ops.push(Operation::new("Td", vec![x.into(), self.y.into()]));
        self.ops.push(Operation::new(
            "Tj",
            vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
        ));
        self.ops.push(Operation::new("ET", vec![]));
    }

    /// Draw `text` with its right edge at `x_right`.
    pub fn text_right(&mut self, font: Font, size: f32, x_right: f32, text: &str) {
        self.text(font, size, x_right - text_width(text, size), text);
    }

    /// Paint the image XObject `name` into the given box.
    pub fn image(&mut self, name: &str, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(Operation::new("q", vec![]));
        self.ops.push(Operation::new(
            "cm",
            vec![
                width.into(),
                0.into(),
                0.into(),
                height.into(),
                x.into(),
                y.into(),
            ],
        ));
        self.ops
            .push(Operation::new("Do", vec![Object::Name(name.as_bytes().to_vec())]));
        self.ops.push(Operation::new("Q", vec![]));
    }

    /// Operations of every page drawn so far, the current one included.
    pub fn finish(mut self) -> Vec<Vec<Operation>> {
        self.finished.push(self.ops);
        self.finished
    }
}

/// Encode text for a WinAnsi-encoded standard font.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7e | 0xa0..=0xff => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

/// Approximate advance width of `text` in Helvetica at `size` points.
///
/// Exact for digits and the punctuation used in money amounts, which are
/// the only strings set right-aligned.
pub fn text_width(text: &str, size: f32) -> f32 {
    let units: u32 = text
        .chars()
        .map(|c| match c {
            ' ' | ',' | '.' | ':' | 'I' | 'i' | 'j' | 'l' => 278,
            '-' => 333,
            'f' | 't' => 278,
            'r' => 333,
            'm' | 'M' => 833,
            'W' => 944,
            'w' => 722,
            _ => 556,
        })
        .sum();
    units as f32 * size / 1000.0
}
