//! Core intake types, validation, customer-ID allocation and lookup.
//!
//! Everything here works on in-memory records; persistence lives in
//! [`crate::store`].

mod builder;
mod customer_id;
mod error;
pub mod search;
mod types;
mod validation;

pub use builder::*;
pub use customer_id::*;
pub use error::*;
pub use search::{LookupQuery, find_by_id, find_by_phone};
pub use types::*;
pub use validation::*;
