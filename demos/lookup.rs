use shipdesk::core::*;
use shipdesk::store::CustomerStore;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let dir = tempfile::tempdir().unwrap();
    let store = CustomerStore::open(dir.path().join("btr_customers.csv"));
    for (name, phone, recipient_phone) in [
        ("Amy Chen", "626-555-0101", "0912-000-111"),
        ("Kevin Wu", "213-444-0000", "0912-555-345"),
        ("Mei Lin", "818-222-3333", "0933-222-333"),
    ] {
        let submission = IntakeSubmissionBuilder::new(name, phone)
            .recipient("收件人", "A123456789", "台北市", recipient_phone)
            .acknowledge_requirements(true)
            .build()
            .unwrap();
        store.append(submission).unwrap();
    }

    // Customer ID lookup: exact, case-insensitive.
    let query = LookupQuery::parse(" btr000002 ").unwrap();
    for record in store.lookup_by_id(&query).unwrap() {
        println!("ID {} -> {} ({})", query.as_str(), record.sender_name, record.sender_phone);
    }

    // Phone lookup: substring of either phone number.
    let query = LookupQuery::parse("555").unwrap();
    let hits = store.lookup_by_phone(&query).unwrap();
    println!("Phone contains {:?}: {} match(es)", query.as_str(), hits.len());
    for record in &hits {
        println!(
            "  {} {} / {}",
            record.customer_id, record.sender_phone, record.recipient_phone
        );
    }

    // Blank input never reaches the store.
    if let Err(e) = LookupQuery::parse("   ") {
        println!("Blank query: {e}");
    }
}
