//! Flat-file customer record store.
//!
//! Records live in a single CSV file (see [`csv_table`] for the exact
//! layout). The store only appends and reads; records are never updated
//! or deleted.
//!
//! # Example
//!
//! ```no_run
//! use shipdesk::core::*;
//! use shipdesk::store::CustomerStore;
//!
//! let store = CustomerStore::open("btr_customers.csv");
//! let submission = IntakeSubmissionBuilder::new("Amy Chen", "626-555-0101")
//!     .recipient("陳小明", "A123456789", "台北市信義區市府路1號", "0912-345-678")
//!     .acknowledge_requirements(true)
//!     .build_unchecked();
//! let record = store.append(submission).unwrap();
//! println!("Your Customer ID is {}", record.customer_id);
//! ```

pub mod csv_table;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{
    CustomerRecord, DeskError, IntakeSubmission, LookupQuery, find_by_id, find_by_phone,
    next_customer_id, validate_submission,
};

pub use csv_table::{decode_table, encode_table};

/// Default backing file name.
pub const DEFAULT_DATA_FILE: &str = "btr_customers.csv";

/// Configuration for the record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the backing CSV file.
    pub data_file: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

/// Append-only customer record store backed by one CSV file.
///
/// Every [`append`](Self::append) reads the whole file, adds one record in
/// memory and rewrites the whole file. There is no locking: two processes
/// appending at the same time can both compute the same customer ID, or one
/// can overwrite the other's row. A failure halfway through the rewrite
/// can leave a truncated file. Callers needing either guarantee must
/// serialize access themselves.
#[derive(Debug, Clone)]
pub struct CustomerStore {
    path: PathBuf,
}

impl CustomerStore {
    /// Store backed by the file at `path`. Nothing is touched on disk
    /// until the first operation.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::open(config.data_file.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file with only the header row if it does not
    /// exist yet. An existing file is left untouched, even when empty.
    pub fn ensure_store(&self) -> Result<(), DeskError> {
        match fs::metadata(&self.path) {
            Ok(_) => return Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(DeskError::StorageRead(format!(
                    "cannot stat {}: {e}",
                    self.path.display()
                )));
            }
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                DeskError::StorageWrite(format!("cannot create {}: {e}", parent.display()))
            })?;
        }
        self.write_table(&[])?;
        info!(path = %self.path.display(), "created customer store");
        Ok(())
    }

    /// Load every record in insertion order.
    ///
    /// A zero-byte file is an empty store. A file that exists but cannot
    /// be parsed is a [`DeskError::StorageRead`], never an empty result.
    pub fn read_all(&self) -> Result<Vec<CustomerRecord>, DeskError> {
        self.ensure_store()?;

        let bytes = fs::read(&self.path).map_err(|e| {
            DeskError::StorageRead(format!("cannot read {}: {e}", self.path.display()))
        })?;
        if bytes.is_empty() {
            debug!(path = %self.path.display(), "customer store is empty");
            return Ok(Vec::new());
        }

        let text = String::from_utf8(bytes).map_err(|e| {
            DeskError::StorageRead(format!("{} is not valid UTF-8: {e}", self.path.display()))
        })?;
        let records = decode_table(&text)?;
        debug!(path = %self.path.display(), count = records.len(), "loaded customer records");
        Ok(records)
    }

    /// Customer ID the next successful append would receive.
    pub fn next_customer_id(&self) -> Result<String, DeskError> {
        next_customer_id(&self.read_all()?)
    }

    /// Validate and persist a submission, stamped with the current local
    /// time. Returns the stored record, including its new customer ID.
    pub fn append(&self, submission: IntakeSubmission) -> Result<CustomerRecord, DeskError> {
        self.append_at(submission, Local::now().naive_local())
    }

    /// Same as [`append`](Self::append) with an explicit creation time.
    pub fn append_at(
        &self,
        submission: IntakeSubmission,
        created_at: NaiveDateTime,
    ) -> Result<CustomerRecord, DeskError> {
        let errors = validate_submission(&submission);
        if !errors.is_empty() {
            let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
            warn!(?fields, "rejected intake submission");
            return Err(DeskError::Validation(errors));
        }

        let mut records = self.read_all()?;
        let customer_id = next_customer_id(&records)?;
        let record = submission.into_record(customer_id, created_at);
        records.push(record.clone());
        self.write_table(&records)?;

        info!(
            customer_id = %record.customer_id,
            total = records.len(),
            "appended intake record"
        );
        Ok(record)
    }

    /// Read the store and return records matching a customer ID.
    pub fn lookup_by_id(&self, query: &LookupQuery) -> Result<Vec<CustomerRecord>, DeskError> {
        let records = self.read_all()?;
        Ok(find_by_id(&records, query.as_str())
            .into_iter()
            .cloned()
            .collect())
    }

    /// Read the store and return records whose sender or recipient phone
    /// contains the query.
    pub fn lookup_by_phone(&self, query: &LookupQuery) -> Result<Vec<CustomerRecord>, DeskError> {
        let records = self.read_all()?;
        Ok(find_by_phone(&records, query.as_str())
            .into_iter()
            .cloned()
            .collect())
    }

    fn write_table(&self, records: &[CustomerRecord]) -> Result<(), DeskError> {
        fs::write(&self.path, encode_table(records)).map_err(|e| {
            DeskError::StorageWrite(format!("cannot write {}: {e}", self.path.display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{COLUMNS, ContactMethod};
    use chrono::NaiveDate;

    fn submission() -> IntakeSubmission {
        IntakeSubmission {
            sender_name: "Amy Chen".into(),
            sender_phone: "626-555-0101".into(),
            requirements_acknowledged: true,
            recipient_name_zh: "陳小明".into(),
            recipient_id_number: "A123456789".into(),
            recipient_address_zh: "台北市信義區市府路1號".into(),
            recipient_phone: "0912-345-678".into(),
            preferred_contact_method: ContactMethod::Phone,
        }
    }

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn ensure_store_writes_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = CustomerStore::open(dir.path().join("customers.csv"));
        store.ensure_store().unwrap();
        let first = fs::read_to_string(store.path()).unwrap();
        assert_eq!(first, format!("{}\n", COLUMNS.join(",")));

        store.append_at(submission(), at()).unwrap();
        store.ensure_store().unwrap();
        assert_eq!(store.read_all().unwrap().len(), 1);
    }

    #[test]
    fn ensure_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = CustomerStore::open(dir.path().join("data/intake/customers.csv"));
        assert!(store.read_all().unwrap().is_empty());
        assert!(store.path().exists());
    }

    #[test]
    fn append_returns_finalized_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = CustomerStore::open(dir.path().join("customers.csv"));
        let rec = store.append_at(submission(), at()).unwrap();
        assert_eq!(rec.customer_id, "BTR000001");
        assert_eq!(rec.created_at, "2025-03-01 12:00:00");
        assert_eq!(rec.preferred_contact_method, "Phone");
        assert_eq!(store.next_customer_id().unwrap(), "BTR000002");
    }

    #[test]
    fn append_stamps_current_time() {
        let dir = tempfile::tempdir().unwrap();
        let store = CustomerStore::open(dir.path().join("customers.csv"));
        let rec = store.append(submission()).unwrap();
        assert!(rec.created_at_parsed().is_some());
    }
}
