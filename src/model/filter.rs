use serde::{Deserialize, Serialize};

use crate::model::FilterOperator;

/// One user-authored filter row.
///
/// `ignore_case` is only meaningful for [`FilterOperator::IsExactly`];
/// every other operator encodes to a case-insensitive pattern regardless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    /// Name of the data source column being filtered.
    pub column: String,
    /// How the value is matched.
    pub operator: FilterOperator,
    /// The user-supplied match text. May contain literal `%` characters.
    pub value: String,
    /// Case-insensitive match. Forced true for all operators except
    /// `is exactly`.
    pub ignore_case: bool,
}

impl Filter {
    /// The row inserted when the user enables filtering with an empty
    /// list: exact, case-sensitive match on the given column.
    pub fn default_for_column(column: impl Into<String>) -> Self {
        Filter {
            column: column.into(),
            operator: FilterOperator::IsExactly,
            value: String::new(),
            ignore_case: false,
        }
    }
}
