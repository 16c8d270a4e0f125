//! Widget instance settings.
//!
//! The studio hands the widget a settings object when it opens; fields can
//! be missing or carry out-of-range values, so everything deserializes
//! leniently and [`Settings::normalize`] applies the documented defaults
//! before the editor uses them.

use serde::{Deserialize, Deserializer, Serialize};

/// Editor kind for one configurable column slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// One field name per slot.
    #[default]
    Single,
    /// A tag-input list of field names.
    Multiple,
}

/// One configurable column slot in a mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub key: String,
    #[serde(default)]
    pub label: Option<String>,
    /// Missing or unrecognized values fall back to `single`.
    #[serde(rename = "type", default, deserialize_with = "lenient_column_type")]
    pub typ: ColumnType,
}

fn lenient_column_type<'de, D>(deserializer: D) -> Result<ColumnType, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref() {
        Some("multiple") => ColumnType::Multiple,
        _ => ColumnType::Single,
    })
}

/// One display mode of the listing component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mode {
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
    /// Whether this mode exposes the filter editor. Missing means true.
    #[serde(default = "default_true")]
    pub filters: bool,
}

fn default_true() -> bool {
    true
}

/// Seed data for the provider's "create a new data source" flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSourceSeed {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub entries: Vec<serde_json::Value>,
}

/// Widget instance settings, as supplied by the studio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub modes: Vec<Mode>,
    /// Top-level column slots, used only when `modes` is absent.
    pub columns: Vec<ColumnSpec>,
    pub modes_description: Option<String>,
    pub data_source_title: Option<String>,
    #[serde(rename = "default")]
    pub default_source: Option<DataSourceSeed>,
}

impl Settings {
    /// Apply defaults: a widget configured without modes gets a single
    /// mode built from the top-level column slots.
    pub fn normalize(&mut self) {
        if self.modes.is_empty() {
            self.modes.push(Mode {
                columns: self.columns.clone(),
                filters: true,
            });
        }
    }

    pub fn mode(&self, idx: usize) -> Option<&Mode> {
        self.modes.get(idx)
    }

    /// The mode selector only shows when there is a choice to make.
    pub fn has_mode_selector(&self) -> bool {
        self.modes.len() > 1
    }

    /// Title for the data source picker, with the stock fallback.
    pub fn data_source_title(&self) -> &str {
        self.data_source_title.as_deref().unwrap_or("Select data source")
    }
}
