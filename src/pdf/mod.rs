//! Invoice rendering to PDF.
//!
//! Produces a US-Letter document: optional logo and letterhead, the
//! `INVOICE` block with recipient details, the line-item table, right
//! aligned totals, and the payment footer. Tables that do not fit continue
//! on further pages.

mod canvas;

use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, Stream, dictionary};
use tracing::debug;

use crate::core::DeskError;
use crate::invoice::format::truncate_chars;
use crate::invoice::logo::{LogoImage, load_logo};
use crate::invoice::{Invoice, Letterhead, format_money, format_quantity};

pub use canvas::{INCH, PAGE_HEIGHT, PAGE_WIDTH, encode_win_ansi};
use canvas::{Canvas, Font};

/// Characters of a line description shown in the table.
pub const DESCRIPTION_MAX_CHARS: usize = 60;

const LOGO_RESOURCE: &str = "Im1";
const LOGO_WIDTH: f32 = 1.2 * INCH;

/// Render `invoice` to PDF bytes, loading the letterhead logo if one is
/// configured. A logo that cannot be loaded is left out.
pub fn render_pdf(invoice: &Invoice, letterhead: &Letterhead) -> Result<Vec<u8>, DeskError> {
    let logo = letterhead.logo_path.as_deref().and_then(load_logo);
    render_pdf_with_logo(invoice, letterhead, logo.as_ref())
}

/// Render with an already loaded logo.
pub fn render_pdf_with_logo(
    invoice: &Invoice,
    letterhead: &Letterhead,
    logo: Option<&LogoImage>,
) -> Result<Vec<u8>, DeskError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for font in [Font::Regular, Font::Bold] {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(font.resource_name(), Object::Reference(font_id));
    }
    let mut resources = dictionary! { "Font" => fonts };

    let logo = logo.and_then(|l| l.to_jpeg().map(|jpeg| (l, jpeg)));
    let logo_box = logo.map(|(l, jpeg)| {
        let image_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(l.width()),
                "Height" => i64::from(l.height()),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            },
            jpeg,
        ));
        resources.set(
            "XObject",
            dictionary! { LOGO_RESOURCE => Object::Reference(image_id) },
        );
        (LOGO_WIDTH, l.scaled_height(LOGO_WIDTH).min(LOGO_WIDTH))
    });
    let resources_id = doc.add_object(resources);

    let pages = draw(invoice, letterhead, logo_box);
    let mut kids = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations }
            .encode()
            .map_err(|e| DeskError::Render(format!("failed to encode page content: {e}")))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "Contents" => Object::Reference(content_id),
        });
        kids.push(Object::Reference(page_id));
    }
    let page_count = kids.len();

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Resources" => Object::Reference(resources_id),
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let title = if invoice.header.number.is_empty() {
        "Invoice (draft)".to_string()
    } else {
        format!("Invoice {}", invoice.header.number)
    };
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::String(encode_win_ansi(&title), lopdf::StringFormat::Literal),
        "Producer" => Object::string_literal("shipdesk"),
    });
    doc.trailer.set("Info", Object::Reference(info_id));

    let mut output = Vec::new();
    doc.save_to(&mut output)
        .map_err(|e| DeskError::Render(format!("failed to save PDF: {e}")))?;
    debug!(pages = page_count, bytes = output.len(), "rendered invoice PDF");
    Ok(output)
}

/// Lay out every page. `logo_box` is the logo's drawn width and height.
fn draw(
    invoice: &Invoice,
    letterhead: &Letterhead,
    logo_box: Option<(f32, f32)>,
) -> Vec<Vec<lopdf::content::Operation>> {
    let left = 0.75 * INCH;
    let header_x = 2.2 * INCH;
    let mut c = Canvas::new(PAGE_HEIGHT - 0.9 * INCH);

    if let Some((w, h)) = logo_box {
        c.image(LOGO_RESOURCE, left, PAGE_HEIGHT - 0.05 * INCH - h, w, h);
    }

    c.text(Font::Bold, 14.0, header_x, &letterhead.company_name);
    c.down(0.2 * INCH);
    c.text(Font::Regular, 10.0, header_x, &letterhead.contact_line);

    c.y = PAGE_HEIGHT - 1.6 * INCH;
    c.text(Font::Bold, 12.0, left, "INVOICE");
    c.down(0.3 * INCH);

    let header = &invoice.header;
    c.text(Font::Regular, 10.0, left, &format!("Date: {}", header.date.format("%Y-%m-%d")));
    c.text(
        Font::Regular,
        10.0,
        3.8 * INCH,
        &format!("Invoice #: {}", header.number),
    );
    c.down(0.25 * INCH);
    c.text(Font::Regular, 10.0, left, &format!("To: {}", header.recipient_name));
    c.down(0.2 * INCH);
    c.text(Font::Regular, 10.0, left, &format!("Phone: {}", header.recipient_phone));
    c.down(0.2 * INCH);
    c.text(Font::Regular, 10.0, left, "Address:");
    c.down(0.2 * INCH);
    for line in header.recipient_address.lines() {
        c.ensure_room(0.18 * INCH);
        c.text(Font::Regular, 10.0, 1.1 * INCH, line);
        c.down(0.18 * INCH);
    }

    c.down(0.15 * INCH);
    c.ensure_room(0.4 * INCH);
    table_header(&mut c);
    for item in &invoice.lines {
        if c.ensure_room(0.2 * INCH) {
            table_header(&mut c);
        }
        c.text(Font::Regular, 10.0, left, &format_quantity(item.quantity));
        c.text(
            Font::Regular,
            10.0,
            1.3 * INCH,
            truncate_chars(&item.description, DESCRIPTION_MAX_CHARS),
        );
        c.text(Font::Regular, 10.0, 4.6 * INCH, &format_quantity(item.weight));
        c.text(Font::Regular, 10.0, 5.5 * INCH, &format_money(item.amount));
        c.down(0.2 * INCH);
    }
    c.down(0.2 * INCH);

    let totals = &invoice.totals;
    c.ensure_room(0.9 * INCH);
    let label_x = 4.6 * INCH;
    let right = 7.5 * INCH;
    c.text(Font::Regular, 10.0, label_x, "Subtotal:");
    c.text_right(Font::Regular, 10.0, right, &format_money(totals.subtotal));
    c.down(0.2 * INCH);
    c.text(Font::Regular, 10.0, label_x, "Sales Tax:");
    c.text_right(Font::Regular, 10.0, right, &format_money(totals.tax));
    c.down(0.2 * INCH);
    c.text(Font::Bold, 11.0, label_x, "Total:");
    c.text_right(Font::Bold, 11.0, right, &format_money(totals.total));
    c.down(0.5 * INCH);

    c.ensure_room(0.2 * INCH);
    c.text(Font::Regular, 10.0, left, &letterhead.payment_note);
    c.down(0.2 * INCH);
    c.text(Font::Regular, 10.0, left, &letterhead.closing_line);

    c.finish()
}

fn table_header(c: &mut Canvas) {
    c.text(Font::Bold, 10.0, 0.75 * INCH, "Qty");
    c.text(Font::Bold, 10.0, 1.3 * INCH, "Description");
    c.text(Font::Bold, 10.0, 4.6 * INCH, "Weight");
    c.text(Font::Bold, 10.0, 5.5 * INCH, "Amount");
    c.down(0.2 * INCH);
}
