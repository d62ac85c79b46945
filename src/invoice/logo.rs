//! Best-effort loading of the optional letterhead logo.
//!
//! Nothing in here returns an error: a logo that cannot be read, decoded
//! or re-encoded is logged and left out, and rendering carries on.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use tracing::{debug, warn};

/// Longest side, in pixels, a logo is scaled down to before embedding.
const MAX_LOGO_PX: u32 = 512;

/// A decoded logo, flattened onto a white background.
#[derive(Debug, Clone)]
pub struct LogoImage {
    rgb: RgbImage,
}

impl LogoImage {
    pub fn width(&self) -> u32 {
        self.rgb.width()
    }

    pub fn height(&self) -> u32 {
        self.rgb.height()
    }

    /// Height for a given display width, keeping the aspect ratio.
    pub fn scaled_height(&self, width: f32) -> f32 {
        width * self.height() as f32 / self.width() as f32
    }

    /// JPEG bytes, as embedded into PDF pages.
    pub fn to_jpeg(&self) -> Option<Vec<u8>> {
        self.encode(ImageFormat::Jpeg)
    }

    /// PNG bytes, as embedded into DOCX documents.
    pub fn to_png(&self) -> Option<Vec<u8>> {
        self.encode(ImageFormat::Png)
    }

    fn encode(&self, format: ImageFormat) -> Option<Vec<u8>> {
        let mut out = Cursor::new(Vec::new());
        match DynamicImage::ImageRgb8(self.rgb.clone()).write_to(&mut out, format) {
            Ok(()) => Some(out.into_inner()),
            Err(e) => {
                warn!(?format, error = %e, "skipping logo: cannot encode");
                None
            }
        }
    }
}

/// Load the logo at `path`, or `None` if there is no usable image there.
pub fn load_logo(path: &Path) -> Option<LogoImage> {
    let img = match image::open(path) {
        Ok(img) => img,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "skipping logo: cannot load");
            return None;
        }
    };
    if img.width() == 0 || img.height() == 0 {
        warn!(path = %path.display(), "skipping logo: empty image");
        return None;
    }

    let img = shrink(img);
    debug!(path = %path.display(), width = img.width(), height = img.height(), "loaded logo");
    Some(LogoImage {
        rgb: flatten_on_white(&img),
    })
}

/// Decoded logo from in-memory bytes, for callers that ship their own asset.
pub fn logo_from_bytes(bytes: &[u8]) -> Option<LogoImage> {
    match image::load_from_memory(bytes) {
        Ok(img) if img.width() > 0 && img.height() > 0 => Some(LogoImage {
            rgb: flatten_on_white(&shrink(img)),
        }),
        Ok(_) => None,
        Err(e) => {
            warn!(error = %e, "skipping logo: cannot decode");
            None
        }
    }
}

fn shrink(img: DynamicImage) -> DynamicImage {
    if img.width() > MAX_LOGO_PX || img.height() > MAX_LOGO_PX {
        img.thumbnail(MAX_LOGO_PX, MAX_LOGO_PX)
    } else {
        img
    }
}

fn flatten_on_white(img: &DynamicImage) -> RgbImage {
    let rgba = img.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let blend = |c: u8| -> u8 {
            let a = u16::from(a);
            ((u16::from(c) * a + 255 * (255 - a)) / 255) as u8
        };
        Rgb([blend(r), blend(g), blend(b)])
    })
}
