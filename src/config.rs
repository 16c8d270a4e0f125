//! Load/save boundary objects exchanged with the host platform.

use serde::{Deserialize, Serialize};

use crate::codec::FilterSet;
use crate::error::Error;
use crate::model::SelectedColumns;

/// The persisted configuration: produced on save, replayed on load.
///
/// Field names mirror the stored JSON (`applyFilters`, `dataSourceId`,
/// `selectedModeIdx`, `columns`, `columnsCompact`, `filters.$and`). Every
/// field tolerates being absent so partial configurations from older
/// saves still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingConfig {
    pub apply_filters: bool,
    pub data_source_id: Option<i64>,
    pub selected_mode_idx: usize,
    pub columns: SelectedColumns,
    pub columns_compact: Vec<String>,
    pub filters: FilterSet,
}

impl ListingConfig {
    /// Parse a previously persisted result object. Format errors —
    /// including unknown predicate keys in `filters.$and` — are returned
    /// as values, never panics.
    pub fn from_value(value: serde_json::Value) -> Result<Self, Error> {
        Ok(serde_json::from_value(value)?)
    }
}

/// What the host receives on save: the configuration, or a diagnostic
/// string when computing it failed. Serializes transparently as one or
/// the other, so a degraded save is visible in the stored data instead
/// of crashing the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SaveResult {
    Config(ListingConfig),
    Diagnostic(String),
}

impl SaveResult {
    pub fn as_config(&self) -> Option<&ListingConfig> {
        match self {
            SaveResult::Config(config) => Some(config),
            SaveResult::Diagnostic(_) => None,
        }
    }

    pub fn is_diagnostic(&self) -> bool {
        matches!(self, SaveResult::Diagnostic(_))
    }
}
