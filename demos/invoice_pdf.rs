use chrono::Local;
use rust_decimal_macros::dec;
use shipdesk::docx::render_docx;
use shipdesk::invoice::*;
use shipdesk::pdf::render_pdf;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Lines are edited one action at a time, the list owned by the caller.
    let mut lines = Vec::new();
    for edit in [
        LineEdit::Add(LineItem::new("Parcel to Taipei, clothing", dec!(42.00)).weight(dec!(3.2))),
        LineEdit::Add(LineItem::new("Parcel to Taichung, snacks", dec!(18.50)).weight(dec!(1.1))),
        LineEdit::Add(LineItem::new("Insurance", dec!(5))),
        LineEdit::Update {
            index: 2,
            item: LineItem::new("Insurance (declared $300)", dec!(6)),
        },
    ] {
        lines = edit_lines(lines, edit).unwrap();
    }

    let invoice = InvoiceBuilder::new(Local::now().date_naive())
        .number("BTR000001")
        .recipient(
            "Amy Chen",
            "626-555-0101",
            "14278 Valley Blvd. Unit A\nLa Puente, CA 91746",
        )
        .lines(lines)
        .tax(dec!(1.25))
        .build()
        .unwrap();

    println!("Subtotal:  {}", format_money(invoice.totals.subtotal));
    println!("Sales Tax: {}", format_money(invoice.totals.tax));
    println!("Total:     {}", format_money(invoice.totals.total));

    // The default letterhead points at assets/logo.png; a missing file is
    // logged and skipped.
    let letterhead = Letterhead::default();
    let out = tempfile::tempdir().unwrap();

    let pdf = render_pdf(&invoice, &letterhead).unwrap();
    let pdf_path = out.path().join(invoice.file_name(&letterhead, DocumentKind::Pdf));
    std::fs::write(&pdf_path, &pdf).unwrap();
    println!("Wrote {} ({} bytes)", pdf_path.display(), pdf.len());

    let docx = render_docx(&invoice, &letterhead).unwrap();
    let docx_path = out.path().join(invoice.file_name(&letterhead, DocumentKind::Docx));
    std::fs::write(&docx_path, &docx).unwrap();
    println!("Wrote {} ({} bytes)", docx_path.display(), docx.len());
}
