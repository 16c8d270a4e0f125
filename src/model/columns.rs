use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value side of the selected-columns mapping: a single field name, or a
/// list of field names for multi-select column slots. Persists as a bare
/// string or an array, matching the stored shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnSelection {
    Single(String),
    Multiple(Vec<String>),
}

impl ColumnSelection {
    /// True when nothing is actually selected.
    pub fn is_empty(&self) -> bool {
        match self {
            ColumnSelection::Single(value) => value.is_empty(),
            ColumnSelection::Multiple(values) => values.is_empty(),
        }
    }
}

/// Ordered mapping from column key to the user's selection. Key order is
/// load-bearing: it drives the order of `columnsCompact`.
pub type SelectedColumns = IndexMap<String, ColumnSelection>;

/// Flatten the selection into the ordered list persisted as
/// `columnsCompact`: key iteration order first, then each list's internal
/// order. Empty selections are skipped.
pub fn columns_compact(columns: &SelectedColumns) -> Vec<String> {
    let mut compact = Vec::new();
    for selection in columns.values() {
        if selection.is_empty() {
            continue;
        }
        match selection {
            ColumnSelection::Single(value) => compact.push(value.clone()),
            ColumnSelection::Multiple(values) => compact.extend(values.iter().cloned()),
        }
    }
    compact
}
