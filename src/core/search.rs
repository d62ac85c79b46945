//! Lookup queries over a snapshot of intake records.
//!
//! Queries are literal text, compared case-insensitively. Both finders
//! expect a non-blank query; use [`LookupQuery::parse`] on raw UI input
//! before calling them.

use super::error::DeskError;
use super::types::CustomerRecord;

/// A trimmed, non-empty lookup query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery(String);

impl LookupQuery {
    /// Trim raw input and reject it if nothing is left.
    pub fn parse(raw: &str) -> Result<Self, DeskError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DeskError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LookupQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Records whose `customer_id` equals `id_query`, ignoring case.
///
/// The whole ID must match; "BTR0000" does not find "BTR000001".
/// Case folding is wider than ID allocation: a hand-edited `btr000007`
/// row is matched here but ignored by [`next_customer_id`], so a later
/// `BTR000007` makes one query return both rows.
///
/// [`next_customer_id`]: crate::core::next_customer_id
pub fn find_by_id<'a>(records: &'a [CustomerRecord], id_query: &str) -> Vec<&'a CustomerRecord> {
    let needle = id_query.to_lowercase();
    records
        .iter()
        .filter(|r| r.customer_id.to_lowercase() == needle)
        .collect()
}

/// Records whose sender or recipient phone contains `phone_query`,
/// ignoring case.
pub fn find_by_phone<'a>(
    records: &'a [CustomerRecord],
    phone_query: &str,
) -> Vec<&'a CustomerRecord> {
    let needle = phone_query.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.sender_phone.to_lowercase().contains(&needle)
                || r.recipient_phone.to_lowercase().contains(&needle)
        })
        .collect()
}
