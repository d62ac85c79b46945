#![no_main]

use libfuzzer_sys::fuzz_target;
use shipdesk::core::CustomerRecord;
use shipdesk::store::{decode_table, encode_table};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    // Split the input into ten cells and make one record of them.
    let mut cells = s.split('\u{1f}').map(str::to_string);
    let fields: [String; 10] = std::array::from_fn(|_| cells.next().unwrap_or_default());
    let records = vec![CustomerRecord::from_fields(fields)];

    let decoded = decode_table(&encode_table(&records)).expect("encoded table must decode");
    assert_eq!(decoded, records);
});
