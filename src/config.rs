//! Desk configuration: where records live and what goes on the letterhead.
//!
//! ```
//! use shipdesk::config::DeskConfig;
//!
//! let config = DeskConfig::from_json_str(r#"{ "store": { "data_file": "data/customers.csv" } }"#)
//!     .unwrap();
//! assert_eq!(config.store.data_file.to_str(), Some("data/customers.csv"));
//! assert_eq!(config.letterhead.file_prefix, "MAKK_Invoice");
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::DeskError;
use crate::invoice::Letterhead;
use crate::store::{CustomerStore, StoreConfig};

/// Overrides [`StoreConfig::data_file`].
pub const ENV_DATA_FILE: &str = "SHIPDESK_DATA_FILE";
/// Overrides [`Letterhead::logo_path`]; an empty value disables the logo.
pub const ENV_LOGO: &str = "SHIPDESK_LOGO";

/// Top-level configuration. Missing keys take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    pub store: StoreConfig,
    pub letterhead: Letterhead,
}

impl DeskConfig {
    pub fn from_json_str(json: &str) -> Result<Self, DeskError> {
        serde_json::from_str(json).map_err(|e| DeskError::Config(format!("invalid config: {e}")))
    }

    pub fn from_path(path: &Path) -> Result<Self, DeskError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| DeskError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    /// Apply `SHIPDESK_*` overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(ENV_DATA_FILE).filter(|p| !p.is_empty()) {
            self.store.data_file = PathBuf::from(path);
        }
        if let Some(logo) = lookup(ENV_LOGO) {
            self.letterhead.logo_path = if logo.is_empty() {
                None
            } else {
                Some(PathBuf::from(logo))
            };
        }
        self
    }

    pub fn open_store(&self) -> CustomerStore {
        CustomerStore::from_config(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        let config = DeskConfig::from_json_str("{}").unwrap();
        assert_eq!(config.store.data_file, PathBuf::from("btr_customers.csv"));
        assert_eq!(config.letterhead, Letterhead::default());
    }

    #[test]
    fn partial_letterhead_keeps_other_defaults() {
        let config = DeskConfig::from_json_str(
            r#"{ "letterhead": { "company_name": "ACME", "logo_path": null } }"#,
        )
        .unwrap();
        assert_eq!(config.letterhead.company_name, "ACME");
        assert_eq!(config.letterhead.logo_path, None);
        assert_eq!(config.letterhead.closing_line, "Thank you for your business!");
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = DeskConfig::from_json_str("{ store: ").unwrap_err();
        assert!(matches!(err, DeskError::Config(_)));
    }

    #[test]
    fn overrides_apply() {
        let config = DeskConfig::default().with_overrides(|key| match key {
            ENV_DATA_FILE => Some("/srv/intake.csv".into()),
            ENV_LOGO => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.store.data_file, PathBuf::from("/srv/intake.csv"));
        assert_eq!(config.letterhead.logo_path, None);
        assert_eq!(config.open_store().path(), Path::new("/srv/intake.csv"));
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = DeskConfig::from_path(Path::new("/nonexistent/shipdesk.json")).unwrap_err();
        assert!(matches!(err, DeskError::Config(_)));
    }
}
