use super::error::DeskError;
use super::types::CustomerRecord;

/// Fixed prefix of every customer ID.
pub const CUSTOMER_ID_PREFIX: &str = "BTR";

/// Number of zero-padded digits after the prefix.
pub const CUSTOMER_ID_DIGITS: usize = 6;

const MAX_SUFFIX: u32 = 999_999;

/// Customer ID sequence derived from the records already on file.
///
/// IDs are `BTR` followed by six zero-padded digits, e.g. "BTR000001".
/// The sequence continues from the highest well-formed ID it has seen, so
/// a removed or malformed row never causes an ID to be handed out twice.
#[derive(Debug, Clone)]
pub struct CustomerIdSequence {
    next: u32,
}

impl Default for CustomerIdSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerIdSequence {
    /// Start a fresh sequence at `BTR000001`.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Continue after the highest well-formed ID among `records`.
    /// IDs that do not match `BTR######` exactly are ignored.
    pub fn from_records(records: &[CustomerRecord]) -> Self {
        let max = records
            .iter()
            .filter_map(|r| parse_customer_id(&r.customer_id))
            .max()
            .unwrap_or(0);
        Self { next: max + 1 }
    }

    /// Preview the next ID without consuming it.
    pub fn peek(&self) -> Result<String, DeskError> {
        format_customer_id(self.next)
    }

    /// Issue the next ID.
    pub fn next_id(&mut self) -> Result<String, DeskError> {
        let id = format_customer_id(self.next)?;
        self.next += 1;
        Ok(id)
    }

    /// Numeric suffix that will be issued next.
    pub fn next_raw(&self) -> u32 {
        self.next
    }
}

/// Next customer ID for a snapshot of existing records.
///
/// Strictly greater than every well-formed ID in `existing`; `BTR000001`
/// when there is none.
pub fn next_customer_id(existing: &[CustomerRecord]) -> Result<String, DeskError> {
    CustomerIdSequence::from_records(existing).peek()
}

/// Numeric suffix of a well-formed customer ID.
///
/// The whole string must match: `"BTR000012"` parses, `"btr000012"`,
/// `"BTR12"` and `"XBTR000012"` do not. Such rows take no part in
/// allocation but stay in the store and in lookups.
pub fn parse_customer_id(id: &str) -> Option<u32> {
    let digits = id.strip_prefix(CUSTOMER_ID_PREFIX)?;
    if digits.len() != CUSTOMER_ID_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Format a numeric suffix as a customer ID.
pub fn format_customer_id(number: u32) -> Result<String, DeskError> {
    if number == 0 || number > MAX_SUFFIX {
        return Err(DeskError::Numbering(format!(
            "customer ID suffix {number} is outside 1..={MAX_SUFFIX}"
        )));
    }
    Ok(format!(
        "{CUSTOMER_ID_PREFIX}{number:0>width$}",
        width = CUSTOMER_ID_DIGITS
    ))
}
