//! Error types for the admin panel core.

use thiserror::Error;

/// Panel errors.
///
/// An empty view is never an error; these only cover input the presentation
/// layer should not have been able to produce.
#[derive(Error, Debug)]
pub enum PanelError {
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    #[error("Filter {key} is a {actual} filter, not a {requested} filter")]
    FilterKindMismatch {
        key: String,
        actual: &'static str,
        requested: &'static str,
    },

    #[error("Invalid option {value:?} for filter {key}")]
    InvalidOption { key: String, value: String },

    #[error("{kind} not found: {id}")]
    RecordNotFound { kind: &'static str, id: String },

    #[error("{kind} already exists: {id}")]
    DuplicateRecord { kind: &'static str, id: String },

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Seed data error: {0}")]
    SeedData(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PanelResult<T> = Result<T, PanelError>;
