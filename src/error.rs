//! Crate error type.

use thiserror::Error;

/// Everything that can go wrong while loading, editing, or saving a
/// listing configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// A persisted object did not match the expected shape. Carries the
    /// underlying decode error, including unknown predicate keys.
    #[error("persisted configuration is not in the expected shape: {0}")]
    Format(#[from] serde_json::Error),

    /// An operator string outside the closed set of five.
    #[error("unknown filter operator {0:?}")]
    UnknownOperator(String),

    /// Result computation requires a selected data source.
    #[error("no data source selected")]
    NoDataSource,

    /// A mode index outside the configured modes.
    #[error("mode index {0} is out of range")]
    ModeOutOfRange(usize),

    /// The host failed to list data sources.
    #[error("data source provider failed: {0}")]
    Provider(String),
}
