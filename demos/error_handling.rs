use chrono::NaiveDate;
use rust_decimal_macros::dec;
use shipdesk::core::*;
use shipdesk::invoice::{InvoiceBuilder, LineEdit, LineItem, edit_lines};
use shipdesk::store::CustomerStore;

fn main() {
    // ── 1. Incomplete intake form ─────────────────────────────────────
    println!("=== Validation ===");
    let result = IntakeSubmissionBuilder::new("", "626-555-0101")
        .recipient("陳小明", "", "台北市", "0912-345-678")
        .build();
    match result {
        Ok(_) => println!("  accepted"),
        Err(e) => {
            println!("  {e}");
            println!("  fields to highlight: {:?}", e.invalid_fields());
        }
    }

    // ── 2. Unknown contact method label ──────────────────────────────
    println!("\n=== Contact method ===");
    if let Err(e) = IntakeSubmissionBuilder::new("Amy", "1").contact_method_label("Fax") {
        println!("  {e}");
    }

    // ── 3. Corrupt data file ─────────────────────────────────────────
    println!("\n=== Storage ===");
    let dir = tempfile::tempdir().unwrap();
    let store = CustomerStore::open(dir.path().join("btr_customers.csv"));
    std::fs::write(store.path(), "name,phone\nAmy,555\n").unwrap();
    match store.read_all() {
        Ok(records) => println!("  {} records", records.len()),
        Err(DeskError::StorageRead(msg)) => println!("  read failed: {msg}"),
        Err(e) => println!("  other error: {e}"),
    }

    // ── 4. Blank lookup ──────────────────────────────────────────────
    println!("\n=== Lookup ===");
    match LookupQuery::parse("  ") {
        Ok(_) => println!("  query accepted"),
        Err(e) => println!("  {e}"),
    }

    // ── 5. Invoice amounts and line edits ────────────────────────────
    println!("\n=== Invoice ===");
    let result = InvoiceBuilder::new(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
        .add_line(LineItem::new("Refund", dec!(-10)))
        .build();
    if let Err(e) = result {
        println!("  {e}");
    }
    if let Err(e) = edit_lines(Vec::new(), LineEdit::Remove(0)) {
        println!("  {e}");
    }

    // ── 6. ID space exhausted ────────────────────────────────────────
    println!("\n=== Customer IDs ===");
    let full = vec![CustomerRecord {
        customer_id: "BTR999999".into(),
        ..Default::default()
    }];
    if let Err(e) = next_customer_id(&full) {
        println!("  {e}");
    }
}
