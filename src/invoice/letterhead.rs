use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Issuer details printed on every invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Letterhead {
    pub company_name: String,
    /// Line under the company name (address, phone).
    pub contact_line: String,
    /// First footer line, usually who checks are payable to.
    pub payment_note: String,
    pub closing_line: String,
    /// Optional logo; a missing or unreadable file is skipped.
    pub logo_path: Option<PathBuf>,
    /// Prefix of the download file name.
    pub file_prefix: String,
}

impl Default for Letterhead {
    fn default() -> Self {
        Self {
            company_name: "MAKK CROSS BORDER SOLUTIONS LTD.".into(),
            contact_line: "address | 626-601-613".into(),
            payment_note: "Note: Make all checks payable to MAKK CROSS BORDER SOLUTIONS LTD."
                .into(),
            closing_line: "Thank you for your business!".into(),
            logo_path: Some(PathBuf::from("assets/logo.png")),
            file_prefix: "MAKK_Invoice".into(),
        }
    }
}

impl Letterhead {
    /// Same letterhead without a logo.
    pub fn without_logo(self) -> Self {
        Self {
            logo_path: None,
            ..self
        }
    }

    pub fn with_logo(self, path: impl Into<PathBuf>) -> Self {
        Self {
            logo_path: Some(path.into()),
            ..self
        }
    }
}
