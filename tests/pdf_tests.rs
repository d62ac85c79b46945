#![cfg(feature = "pdf")]

use std::io::Cursor;

use chrono::NaiveDate;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use lopdf::content::Content;
use lopdf::{Document, Object};
use rust_decimal_macros::dec;
use shipdesk::invoice::logo::logo_from_bytes;
use shipdesk::invoice::*;
use shipdesk::pdf::{render_pdf, render_pdf_with_logo};

fn invoice() -> Invoice {
    InvoiceBuilder::new(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
        .number("BTR000001")
        .recipient(
            "Amy Chen",
            "626-555-0101",
            "14278 Valley Blvd. Unit A\nLa Puente, CA 91746",
        )
        .add_line(LineItem::new("Parcel to Taipei", dec!(10.00)).weight(dec!(2.5)))
        .add_line(LineItem::new("Parcel to Taichung", dec!(25.50)))
        .tax(dec!(2.00))
        .build()
        .unwrap()
}

/// Text drawn with `Tj` on each page, in drawing order.
fn page_texts(pdf: &[u8]) -> Vec<Vec<String>> {
    let doc = Document::load_mem(pdf).expect("load rendered PDF");
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let content = doc.get_page_content(page_id).unwrap();
            Content::decode(&content)
                .unwrap()
                .operations
                .into_iter()
                .filter(|op| op.operator == "Tj")
                .filter_map(|op| match op.operands.first() {
                    Some(Object::String(bytes, _)) => {
                        Some(bytes.iter().map(|&b| b as char).collect::<String>())
                    }
                    _ => None,
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

fn png_logo() -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(40, 20, Rgba([200, 30, 30, 255])))
        .write_to(&mut out, ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

fn has_image_xobject(pdf: &[u8]) -> bool {
    let doc = Document::load_mem(pdf).unwrap();
    doc.objects.values().any(|obj| match obj {
        Object::Stream(stream) => stream
            .dict
            .get(b"Subtype")
            .and_then(|s| s.as_name())
            .map(|n| n == b"Image")
            .unwrap_or(false),
        _ => false,
    })
}

#[test]
fn renders_header_lines_and_totals() {
    let letterhead = Letterhead::default().without_logo();
    let pdf = render_pdf(&invoice(), &letterhead).unwrap();
    assert!(pdf.starts_with(b"%PDF-1.5"));

    let pages = page_texts(&pdf);
    assert_eq!(pages.len(), 1);
    let text = &pages[0];
    for expected in [
        "MAKK CROSS BORDER SOLUTIONS LTD.",
        "INVOICE",
        "Date: 2025-03-01",
        "Invoice #: BTR000001",
        "To: Amy Chen",
        "Phone: 626-555-0101",
        "14278 Valley Blvd. Unit A",
        "La Puente, CA 91746",
        "Parcel to Taipei",
        "2.5",
        "$25.50",
        "Subtotal:",
        "$35.50",
        "$2.00",
        "$37.50",
        "Thank you for your business!",
    ] {
        assert!(
            text.iter().any(|t| t == expected),
            "missing {expected:?} in {text:?}"
        );
    }
}

#[test]
fn missing_logo_does_not_fail_rendering() {
    let letterhead = Letterhead::default().with_logo("/nonexistent/assets/logo.png");
    let pdf = render_pdf(&invoice(), &letterhead).unwrap();
    assert!(!has_image_xobject(&pdf));
}

#[test]
fn logo_is_embedded_when_available() {
    let logo = logo_from_bytes(&png_logo()).unwrap();
    let pdf = render_pdf_with_logo(&invoice(), &Letterhead::default(), Some(&logo)).unwrap();
    assert!(has_image_xobject(&pdf));
}

#[test]
fn logo_loaded_from_letterhead_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logo.png");
    std::fs::write(&path, png_logo()).unwrap();
    let pdf = render_pdf(&invoice(), &Letterhead::default().with_logo(&path)).unwrap();
    assert!(has_image_xobject(&pdf));
}

#[test]
fn long_description_is_truncated() {
    let inv = InvoiceBuilder::new(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
        .add_line(LineItem::new("x".repeat(80), dec!(1)))
        .build()
        .unwrap();
    let pdf = render_pdf(&inv, &Letterhead::default().without_logo()).unwrap();
    let pages = page_texts(&pdf);
    assert!(pages[0].iter().any(|t| t == &"x".repeat(60)));
    assert!(!pages[0].iter().any(|t| t.len() > 60 && t.starts_with('x')));
}

#[test]
fn non_latin_text_is_replaced() {
    let inv = InvoiceBuilder::new(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
        .recipient("陳小明", "0912", "台北市")
        .build()
        .unwrap();
    let pdf = render_pdf(&inv, &Letterhead::default().without_logo()).unwrap();
    let pages = page_texts(&pdf);
    assert!(pages[0].iter().any(|t| t == "To: ???"));
}

#[test]
fn many_lines_continue_on_next_page() {
    let mut builder = InvoiceBuilder::new(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    for i in 0..80 {
        builder = builder.add_line(LineItem::new(format!("Parcel {i}"), dec!(1)));
    }
    let pdf = render_pdf(&builder.build().unwrap(), &Letterhead::default().without_logo()).unwrap();
    let pages = page_texts(&pdf);
    assert!(pages.len() >= 2);
    // Table header is repeated on the continuation page.
    assert!(pages[1].iter().any(|t| t == "Description"));
    assert!(pages.last().unwrap().iter().any(|t| t == "$80.00"));
}

#[test]
fn draft_has_empty_invoice_number() {
    let inv = InvoiceBuilder::new(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
        .build()
        .unwrap();
    let pdf = render_pdf(&inv, &Letterhead::default().without_logo()).unwrap();
    assert!(page_texts(&pdf)[0].iter().any(|t| t == "Invoice #: "));
}
