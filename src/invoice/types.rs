use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Invoice header as entered on the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceHeader {
    pub date: NaiveDate,
    /// Invoice number or customer ID. Empty means draft.
    pub number: String,
    /// Receiver name or company.
    pub recipient_name: String,
    pub recipient_phone: String,
    /// Free-form, may span several lines.
    pub recipient_address: String,
}

/// A single invoice line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub quantity: Decimal,
    pub description: String,
    pub weight: Decimal,
    /// Line total in USD, entered manually.
    pub amount: Decimal,
}

impl LineItem {
    /// One unit, no weight.
    pub fn new(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            quantity: Decimal::ONE,
            description: description.into(),
            weight: Decimal::ZERO,
            amount,
        }
    }

    pub fn quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn weight(mut self, weight: Decimal) -> Self {
        self.weight = weight;
        self
    }
}

/// Invoice totals, each rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all line amounts.
    pub subtotal: Decimal,
    /// Sales tax as entered.
    pub tax: Decimal,
    /// subtotal + tax.
    pub total: Decimal,
}

/// A validated invoice ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub header: InvoiceHeader,
    pub lines: Vec<LineItem>,
    pub totals: Totals,
}

/// Output format for a rendered invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}
