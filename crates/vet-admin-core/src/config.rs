//! Panel configuration.
//!
//! ```toml
//! # Pin "today" for the appointment statistics (demo data is from January 2024).
//! reference_date = "2024-01-15"
//! log_filter = "vet_admin_core=debug"
//! ```

use std::fs;
use std::path::Path;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PanelResult;

/// Top-level configuration. Missing keys fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Date treated as "today"; the current UTC date when unset
    pub reference_date: Option<NaiveDate>,
    /// Default tracing filter directive, used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            reference_date: None,
            log_filter: "info".to_string(),
        }
    }
}

impl PanelConfig {
    /// Load config from a TOML string.
    pub fn from_toml(toml_str: &str) -> PanelResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> PanelResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        debug!(path = %path.display(), "Loaded panel config");
        Ok(config)
    }

    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Utc::now().date_naive())
    }
}
