//! Bidirectional mapping between UI filter rows and persisted predicates.
//!
//! [`encode`] turns a [`Filter`] into the `$eq` / `$iLike` entry the host
//! persists; [`decode`] reconstructs the filter row a pattern came from by
//! inspecting where its unescaped wildcards sit. Both directions are pure
//! functions over immutable inputs; encode-then-decode returns the
//! original filter for every value that does not trip the
//! wildcard-position ambiguity (see [`decode`]).

pub mod pattern;
pub mod predicate;

#[cfg(test)]
mod tests;

pub use predicate::{FilterEntry, FilterSet, Predicate};

use crate::model::{Filter, FilterOperator};
use pattern::{escape, has_escaped_percent, unescape};

/// Encode one UI filter row into its persisted predicate entry.
///
/// `is exactly` without `ignore_case` is the only case-sensitive form and
/// the only use of `$eq`; everything else becomes an `$iLike` pattern with
/// wildcards placed by operator.
pub fn encode(filter: &Filter) -> FilterEntry {
    let predicate = match filter.operator {
        FilterOperator::IsExactly if !filter.ignore_case => Predicate::Eq(filter.value.clone()),
        FilterOperator::IsExactly => Predicate::ILike(escape(&filter.value)),
        FilterOperator::Contains => Predicate::ILike(format!("%{}%", escape(&filter.value))),
        FilterOperator::BeginsWith => Predicate::ILike(format!("{}%", escape(&filter.value))),
        FilterOperator::EndsWith => Predicate::ILike(format!("%{}", escape(&filter.value))),
        FilterOperator::Like => Predicate::ILike(like_pattern(&filter.value)),
    };
    FilterEntry {
        column: filter.column.clone(),
        predicate,
    }
}

/// Assemble a `like` pattern: the first and last characters pass through
/// verbatim (they may be wildcards the user typed on purpose), only the
/// interior is escaped. Values shorter than two characters have no
/// interior and pass through unchanged.
fn like_pattern(value: &str) -> String {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str();
    let Some(last) = rest.chars().next_back() else {
        return value.to_string();
    };
    let interior = &rest[..rest.len() - last.len_utf8()];
    format!("{first}{}{last}", escape(interior))
}

/// Decode one persisted entry back into the UI filter row it came from.
///
/// An escaped percent anywhere in an `$iLike` pattern marks it as `like`:
/// that is the only operator that lets raw wildcards survive at the
/// boundaries, so the check runs before the boundary classification. A
/// consequence, inherited from the persisted format itself, is that a
/// non-`like` value containing a literal `%` decodes as `like` — the
/// ambiguity the round-trip invariant carves out.
pub fn decode(entry: &FilterEntry) -> Filter {
    let (operator, value, ignore_case) = match &entry.predicate {
        Predicate::Eq(value) => (FilterOperator::IsExactly, value.clone(), false),
        Predicate::ILike(pattern) => {
            let (operator, value) = classify_pattern(pattern);
            (operator, value, true)
        }
    };
    Filter {
        column: entry.column.clone(),
        operator,
        value,
        ignore_case,
    }
}

/// Work out which operator produced a pattern from where its unescaped
/// wildcards sit, and strip them back off the value.
fn classify_pattern(pattern: &str) -> (FilterOperator, String) {
    if has_escaped_percent(pattern) {
        return (FilterOperator::Like, unescape(pattern));
    }
    let starts = pattern.starts_with('%');
    let ends = pattern.ends_with('%');
    match (starts, ends) {
        (false, false) => (FilterOperator::IsExactly, unescape(pattern)),
        (false, true) => (
            FilterOperator::BeginsWith,
            unescape(&pattern[..pattern.len() - 1]),
        ),
        (true, false) => (FilterOperator::EndsWith, unescape(&pattern[1..])),
        (true, true) => {
            // A lone "%" is both boundaries at once; stripping the prefix
            // first makes it decode as `contains ""`.
            let inner = pattern.strip_prefix('%').unwrap_or(pattern);
            let inner = inner.strip_suffix('%').unwrap_or(inner);
            (FilterOperator::Contains, unescape(inner))
        }
    }
}

/// Decode a whole persisted filter set, in order.
pub fn decode_set(set: &FilterSet) -> Vec<Filter> {
    set.and.iter().map(decode).collect()
}

/// Encode the ordered filter list into a persisted `$and` set.
pub fn encode_set<'a, I>(filters: I) -> FilterSet
where
    I: IntoIterator<Item = &'a Filter>,
{
    FilterSet {
        and: filters.into_iter().map(encode).collect(),
    }
}
