use shipdesk::core::*;
use shipdesk::store::CustomerStore;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let dir = tempfile::tempdir().unwrap();
    let store = CustomerStore::open(dir.path().join("btr_customers.csv"));

    // A complete submission, as the intake form would send it.
    let submission = IntakeSubmissionBuilder::new("Amy Chen", "626-555-0101")
        .recipient(
            "陳小明",
            "A123456789",
            "台北市信義區市府路1號",
            "0912-345-678",
        )
        .acknowledge_requirements(true)
        .contact_method_label("Line")
        .unwrap()
        .build()
        .unwrap();

    let record = store.append(submission).unwrap();
    println!("Saved {} at {}", record.customer_id, record.created_at);

    // A second sender gets the next number.
    let second = IntakeSubmissionBuilder::new("Kevin Wu", "213-555-0199")
        .recipient("吳大同", "B223456789", "台中市西區", "0955-111-222")
        .acknowledge_requirements(true)
        .contact_method(ContactMethod::WeChat)
        .build()
        .unwrap();
    let record = store.append(second).unwrap();
    println!("Saved {}", record.customer_id);

    println!("Next ID would be {}", store.next_customer_id().unwrap());
    println!();
    println!("{}", std::fs::read_to_string(store.path()).unwrap());
}
