#![cfg(feature = "docx")]

use std::io::Cursor;

use chrono::NaiveDate;
use docx_rs::{DocumentChild, ParagraphChild, RunChild, read_docx};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use rust_decimal_macros::dec;
use shipdesk::invoice::logo::logo_from_bytes;
use shipdesk::invoice::*;
use shipdesk::docx::{render_docx, render_docx_with_logo};

fn invoice() -> Invoice {
    InvoiceBuilder::new(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
        .number("BTR000001")
        .recipient(
            "Amy Chen",
            "626-555-0101",
            "14278 Valley Blvd. Unit A\nLa Puente, CA 91746",
        )
        .add_line(LineItem::new("Parcel to Taipei", dec!(10.00)))
        .add_line(LineItem::new("Parcel to Taichung", dec!(25.50)))
        .tax(dec!(2.00))
        .build()
        .unwrap()
}

/// Body paragraphs as plain text, skipping empty ones.
fn paragraphs(bytes: &[u8]) -> Vec<String> {
    let docx = read_docx(bytes).expect("read rendered DOCX");
    docx.document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(
                para.children
                    .iter()
                    .filter_map(|pc| match pc {
                        ParagraphChild::Run(run) => Some(
                            run.children
                                .iter()
                                .filter_map(|rc| match rc {
                                    RunChild::Text(t) => Some(t.text.clone()),
                                    _ => None,
                                })
                                .collect::<Vec<_>>()
                                .join(""),
                        ),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
                    .join(""),
            ),
            _ => None,
        })
        .filter(|text| !text.is_empty())
        .collect()
}

fn has_media(bytes: &[u8]) -> bool {
    bytes.windows(b"word/media/".len()).any(|w| w == b"word/media/")
}

fn png_logo() -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(RgbImage::from_pixel(30, 30, Rgb([0, 90, 160])))
        .write_to(&mut out, ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

#[test]
fn renders_header_and_totals_paragraphs() {
    let bytes = render_docx(&invoice(), &Letterhead::default().without_logo()).unwrap();
    assert!(bytes.starts_with(b"PK"));

    let text = paragraphs(&bytes);
    for expected in [
        "MAKK CROSS BORDER SOLUTIONS LTD.",
        "INVOICE",
        "Date: 2025-03-01",
        "Invoice #: BTR000001",
        "To: Amy Chen",
        "Phone: 626-555-0101",
        "Subtotal: $35.50",
        "Sales Tax: $2.00",
        "Total: $37.50",
        "Thank you for your business!",
    ] {
        assert!(
            text.iter().any(|t| t == expected),
            "missing {expected:?} in {text:?}"
        );
    }
    // Both address lines land in a single paragraph.
    assert!(
        text.iter()
            .any(|t| t == "14278 Valley Blvd. Unit ALa Puente, CA 91746")
    );
}

#[test]
fn line_items_go_into_a_table() {
    let bytes = render_docx(&invoice(), &Letterhead::default().without_logo()).unwrap();
    let docx = read_docx(&bytes).unwrap();
    let tables = docx
        .document
        .children
        .iter()
        .filter(|c| matches!(c, DocumentChild::Table(_)))
        .count();
    assert_eq!(tables, 1);
}

#[test]
fn missing_logo_does_not_fail_rendering() {
    let letterhead = Letterhead::default().with_logo("/nonexistent/assets/logo.png");
    let bytes = render_docx(&invoice(), &letterhead).unwrap();
    assert!(!has_media(&bytes));
    assert!(paragraphs(&bytes).iter().any(|t| t == "Total: $37.50"));
}

#[test]
fn logo_is_embedded_when_available() {
    let logo = logo_from_bytes(&png_logo()).unwrap();
    let bytes = render_docx_with_logo(&invoice(), &Letterhead::default(), Some(&logo)).unwrap();
    assert!(has_media(&bytes));
}

#[test]
fn logo_loaded_from_letterhead_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logo.png");
    std::fs::write(&path, png_logo()).unwrap();
    let bytes = render_docx(&invoice(), &Letterhead::default().with_logo(&path)).unwrap();
    assert!(has_media(&bytes));
}

#[test]
fn draft_invoice_renders() {
    let inv = InvoiceBuilder::new(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
        .build()
        .unwrap();
    let bytes = render_docx(&inv, &Letterhead::default().without_logo()).unwrap();
    assert!(paragraphs(&bytes).iter().any(|t| t == "Total: $0.00"));
}
