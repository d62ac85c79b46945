//! Invoice model, totals and formatting.
//!
//! Invoices are entered by hand: header fields, any number of line items
//! with a manual amount each, and a manual sales tax. Subtotal and total
//! are derived. Rendering lives in [`crate::pdf`] and [`crate::docx`].

mod builder;
pub mod format;
mod letterhead;
mod lines;
#[cfg(any(feature = "pdf", feature = "docx"))]
pub mod logo;
mod totals;
mod types;

pub use builder::*;
pub use format::{download_file_name, format_money, format_quantity};
pub use letterhead::Letterhead;
pub use lines::*;
pub use totals::calculate_totals;
pub use types::*;

impl Invoice {
    /// Download file name for this invoice under `letterhead`.
    pub fn file_name(&self, letterhead: &Letterhead, kind: DocumentKind) -> String {
        download_file_name(&letterhead.file_prefix, &self.header.number, kind)
    }
}
