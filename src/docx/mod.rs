//! Invoice rendering to DOCX.
//!
//! Mirrors the PDF layout as a flowing word-processor document: headings
//! for the company and the `INVOICE` title, one paragraph per header field,
//! a four-column line-item table, and the totals and footer paragraphs.

use std::io::Cursor;

use docx_rs::{BreakType, Docx, Paragraph, Pic, Run, Style, StyleType, Table, TableCell, TableRow};
use tracing::debug;

use crate::core::DeskError;
use crate::invoice::logo::{LogoImage, load_logo};
use crate::invoice::{Invoice, Letterhead, LineItem, format_money, format_quantity};

/// English Metric Units per inch.
const EMU_PER_INCH: f32 = 914_400.0;
const LOGO_WIDTH_INCH: f32 = 1.2;

/// Render `invoice` to DOCX bytes, loading the letterhead logo if one is
/// configured. A logo that cannot be loaded is left out.
pub fn render_docx(invoice: &Invoice, letterhead: &Letterhead) -> Result<Vec<u8>, DeskError> {
    let logo = letterhead.logo_path.as_deref().and_then(load_logo);
    render_docx_with_logo(invoice, letterhead, logo.as_ref())
}

/// Render with an already loaded logo.
pub fn render_docx_with_logo(
    invoice: &Invoice,
    letterhead: &Letterhead,
    logo: Option<&LogoImage>,
) -> Result<Vec<u8>, DeskError> {
    let mut docx = Docx::new()
        .add_style(
            Style::new("Heading1", StyleType::Paragraph)
                .name("Heading 1")
                .bold()
                .size(32),
        )
        .add_style(
            Style::new("Heading2", StyleType::Paragraph)
                .name("Heading 2")
                .bold()
                .size(26),
        );

    if let Some((logo, png)) = logo.and_then(|l| l.to_png().map(|png| (l, png))) {
        let width = LOGO_WIDTH_INCH * EMU_PER_INCH;
        let height = logo.scaled_height(width);
        let pic = Pic::new(&png).size(width as u32, height as u32);
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_image(pic)));
    }

    let header = &invoice.header;
    docx = docx
        .add_paragraph(heading(&letterhead.company_name, "Heading1"))
        .add_paragraph(text(&letterhead.contact_line))
        .add_paragraph(heading("INVOICE", "Heading2"))
        .add_paragraph(text(&format!("Date: {}", header.date.format("%Y-%m-%d"))))
        .add_paragraph(text(&format!("Invoice #: {}", header.number)))
        .add_paragraph(text(&format!("To: {}", header.recipient_name)))
        .add_paragraph(text(&format!("Phone: {}", header.recipient_phone)))
        .add_paragraph(text("Address:"))
        .add_paragraph(multiline(&header.recipient_address))
        .add_table(line_table(&invoice.lines));

    let totals = &invoice.totals;
    docx = docx
        .add_paragraph(text(&format!("Subtotal: {}", format_money(totals.subtotal))))
        .add_paragraph(text(&format!("Sales Tax: {}", format_money(totals.tax))))
        .add_paragraph(text(&format!("Total: {}", format_money(totals.total))))
        .add_paragraph(text(&letterhead.payment_note))
        .add_paragraph(text(&letterhead.closing_line));

    let mut out = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut out)
        .map_err(|e| DeskError::Render(format!("failed to pack DOCX: {e}")))?;
    let bytes = out.into_inner();
    debug!(lines = invoice.lines.len(), bytes = bytes.len(), "rendered invoice DOCX");
    Ok(bytes)
}

fn text(value: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(value))
}

fn heading(value: &str, style: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(value))
        .style(style)
}

/// One paragraph with a line break between the lines of `value`.
fn multiline(value: &str) -> Paragraph {
    let mut run = Run::new();
    for (i, line) in value.lines().enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }
    Paragraph::new().add_run(run)
}

fn line_table(lines: &[LineItem]) -> Table {
    let cell = |value: &str, bold: bool| {
        let run = Run::new().add_text(value);
        let run = if bold { run.bold() } else { run };
        TableCell::new().add_paragraph(Paragraph::new().add_run(run))
    };

    let mut rows = vec![TableRow::new(vec![
        cell("Qty", true),
        cell("Description", true),
        cell("Weight", true),
        cell("Amount", true),
    ])];
    for item in lines {
        rows.push(TableRow::new(vec![
            cell(&format_quantity(item.quantity), false),
            cell(&item.description, false),
            cell(&format_quantity(item.weight), false),
            cell(&format_money(item.amount), false),
        ]));
    }
    Table::new(rows)
}
