use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The match operator a user picks for one filter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperator {
    /// Whole-value match; the only operator that can be case-sensitive
    #[serde(rename = "is exactly")]
    IsExactly,
    /// Substring match
    #[serde(rename = "contains")]
    Contains,
    /// Prefix match
    #[serde(rename = "begins with")]
    BeginsWith,
    /// Suffix match
    #[serde(rename = "ends with")]
    EndsWith,
    /// Raw pattern match; wildcards at the value's boundaries pass through
    #[serde(rename = "like")]
    Like,
}

impl FilterOperator {
    /// All operators, in the order the editor lists them.
    pub const ALL: [FilterOperator; 5] = [
        FilterOperator::IsExactly,
        FilterOperator::Contains,
        FilterOperator::BeginsWith,
        FilterOperator::EndsWith,
        FilterOperator::Like,
    ];

    /// The human-facing label, as shown in the operator dropdown.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::IsExactly => "is exactly",
            FilterOperator::Contains => "contains",
            FilterOperator::BeginsWith => "begins with",
            FilterOperator::EndsWith => "ends with",
            FilterOperator::Like => "like",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "is exactly" => Ok(FilterOperator::IsExactly),
            "contains" => Ok(FilterOperator::Contains),
            "begins with" => Ok(FilterOperator::BeginsWith),
            "ends with" => Ok(FilterOperator::EndsWith),
            "like" => Ok(FilterOperator::Like),
            other => Err(Error::UnknownOperator(other.to_string())),
        }
    }
}
