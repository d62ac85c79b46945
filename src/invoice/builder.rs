use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::core::{DeskError, ValidationError, ValidationKind};

use super::totals::calculate_totals;
use super::types::{Invoice, InvoiceHeader, LineItem};

/// Builder for invoices.
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
/// use shipdesk::invoice::*;
///
/// let invoice = InvoiceBuilder::new(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
///     .number("BTR000001")
///     .recipient("Amy Chen", "626-555-0101", "14278 Valley Blvd.\nLa Puente, CA 91746")
///     .add_line(LineItem::new("Parcel to Taipei", dec!(10.00)).weight(dec!(2.5)))
///     .add_line(LineItem::new("Parcel to Taichung", dec!(25.50)))
///     .tax(dec!(2.00))
///     .build()
///     .unwrap();
/// assert_eq!(invoice.totals.subtotal, dec!(35.50));
/// assert_eq!(invoice.totals.total, dec!(37.50));
/// ```
pub struct InvoiceBuilder {
    header: InvoiceHeader,
    lines: Vec<LineItem>,
    tax: Decimal,
}

impl InvoiceBuilder {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            header: InvoiceHeader {
                date,
                number: String::new(),
                recipient_name: String::new(),
                recipient_phone: String::new(),
                recipient_address: String::new(),
            },
            lines: Vec::new(),
            tax: Decimal::ZERO,
        }
    }

    /// Invoice number or customer ID; leave unset for a draft.
    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.header.number = number.into();
        self
    }

    pub fn recipient(
        mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        self.header.recipient_name = name.into();
        self.header.recipient_phone = phone.into();
        self.header.recipient_address = address.into();
        self
    }

    pub fn add_line(mut self, line: LineItem) -> Self {
        self.lines.push(line);
        self
    }

    /// Replace all lines, e.g. with a list kept by the UI between edits.
    pub fn lines(mut self, lines: Vec<LineItem>) -> Self {
        self.lines = lines;
        self
    }

    /// Sales tax in USD.
    pub fn tax(mut self, tax: Decimal) -> Self {
        self.tax = tax;
        self
    }

    /// Build the invoice, calculating totals and running validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Invoice, DeskError> {
        if self.lines.len() > 1_000 {
            return Err(DeskError::Builder(
                "invoice cannot have more than 1,000 line items".into(),
            ));
        }

        let errors = validate_amounts(&self.lines, self.tax);
        if !errors.is_empty() {
            return Err(DeskError::Validation(errors));
        }

        let totals = calculate_totals(&self.lines, self.tax);
        Ok(Invoice {
            header: self.header,
            lines: self.lines,
            totals,
        })
    }
}

/// Every quantity, weight, amount and the tax must be zero or positive.
pub fn validate_amounts(lines: &[LineItem], tax: Decimal) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        for (name, value) in [
            ("quantity", line.quantity),
            ("weight", line.weight),
            ("amount", line.amount),
        ] {
            if value.is_sign_negative() && !value.is_zero() {
                errors.push(negative(format!("lines.{i}.{name}")));
            }
        }
    }
    if tax.is_sign_negative() && !tax.is_zero() {
        errors.push(negative("tax".to_string()));
    }
    errors
}

fn negative(field: String) -> ValidationError {
    ValidationError::new(field, "must not be negative", ValidationKind::Negative)
}
