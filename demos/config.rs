use shipdesk::config::{DeskConfig, ENV_DATA_FILE, ENV_LOGO};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Everything has a default; a config file only names what differs.
    let config = DeskConfig::from_json_str(
        r#"{
            "store": { "data_file": "data/btr_customers.csv" },
            "letterhead": { "payment_note": "Payment due on pickup." }
        }"#,
    )
    .unwrap();
    println!("data file:    {}", config.store.data_file.display());
    println!("company:      {}", config.letterhead.company_name);
    println!("payment note: {}", config.letterhead.payment_note);

    // The environment wins over the file.
    let config = config.with_env_overrides();
    println!(
        "after {ENV_DATA_FILE}/{ENV_LOGO}: data file {}, logo {:?}",
        config.store.data_file.display(),
        config.letterhead.logo_path
    );

    let store = config.open_store();
    println!("store opens at {}", store.path().display());
}
