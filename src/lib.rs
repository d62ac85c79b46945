//! # shipdesk
//!
//! Back office for a USA-to-Taiwan parcel desk: a flat-file intake record
//! store with `BTR######` customer IDs and lookup by ID or phone, plus an
//! invoice generator that renders PDF and DOCX documents.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use shipdesk::core::*;
//!
//! let records = vec![CustomerRecord {
//!     customer_id: "BTR000005".into(),
//!     sender_phone: "626-555-0101".into(),
//!     ..Default::default()
//! }];
//!
//! assert_eq!(next_customer_id(&records).unwrap(), "BTR000006");
//! assert_eq!(find_by_id(&records, "btr000005").len(), 1);
//! assert_eq!(find_by_phone(&records, "555").len(), 1);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Intake types, validation, customer IDs, lookup |
//! | `store` (default) | CSV-backed customer record store |
//! | `invoice` (default) | Invoice model, totals, formatting |
//! | `pdf` | PDF rendering |
//! | `docx` | DOCX rendering |
//! | `config` | JSON configuration with environment overrides |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "store")]
pub mod store;

#[cfg(feature = "invoice")]
pub mod invoice;

#[cfg(feature = "pdf")]
pub mod pdf;

#[cfg(feature = "docx")]
pub mod docx;

#[cfg(feature = "config")]
pub mod config;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
