use pretty_assertions::assert_eq;
use serde_json::json;

use crate::codec::{FilterEntry, FilterSet, Predicate, decode, decode_set, encode, encode_set};
use crate::model::{Filter, FilterOperator};

fn filter(operator: FilterOperator, value: &str, ignore_case: bool) -> Filter {
    Filter {
        column: "Email".to_string(),
        operator,
        value: value.to_string(),
        ignore_case,
    }
}

#[test]
fn encode_is_exactly_case_sensitive() {
    let entry = encode(&filter(FilterOperator::IsExactly, "Alice", false));
    assert_eq!(entry.predicate, Predicate::Eq("Alice".to_string()));
}

#[test]
fn encode_is_exactly_ignore_case() {
    let entry = encode(&filter(FilterOperator::IsExactly, "Alice", true));
    assert_eq!(entry.predicate, Predicate::ILike("Alice".to_string()));
}

#[test]
fn encode_contains_wraps_in_wildcards() {
    let entry = encode(&filter(FilterOperator::Contains, "acme", true));
    assert_eq!(entry.predicate, Predicate::ILike("%acme%".to_string()));
}

#[test]
fn encode_begins_with_appends_wildcard() {
    let entry = encode(&filter(FilterOperator::BeginsWith, "acme", true));
    assert_eq!(entry.predicate, Predicate::ILike("acme%".to_string()));
}

#[test]
fn encode_ends_with_prepends_wildcard() {
    let entry = encode(&filter(FilterOperator::EndsWith, "acme", true));
    assert_eq!(entry.predicate, Predicate::ILike("%acme".to_string()));
}

#[test]
fn encode_escapes_literal_percent() {
    let entry = encode(&filter(FilterOperator::Contains, "50%", true));
    assert_eq!(entry.predicate, Predicate::ILike("%50\\%%".to_string()));
}

#[test]
fn encode_escapes_every_literal_percent() {
    let entry = encode(&filter(FilterOperator::BeginsWith, "10% of 50%", true));
    assert_eq!(
        entry.predicate,
        Predicate::ILike("10\\% of 50\\%%".to_string())
    );
}

#[test]
fn encode_like_keeps_boundary_wildcards() {
    let entry = encode(&filter(FilterOperator::Like, "%acme%", true));
    assert_eq!(entry.predicate, Predicate::ILike("%acme%".to_string()));
}

#[test]
fn encode_like_escapes_interior_only() {
    let entry = encode(&filter(FilterOperator::Like, "%50% off%", true));
    assert_eq!(entry.predicate, Predicate::ILike("%50\\% off%".to_string()));
}

#[test]
fn encode_like_short_values_pass_through() {
    let entry = encode(&filter(FilterOperator::Like, "%", true));
    assert_eq!(entry.predicate, Predicate::ILike("%".to_string()));

    let entry = encode(&filter(FilterOperator::Like, "", true));
    assert_eq!(entry.predicate, Predicate::ILike(String::new()));
}

#[test]
fn decode_eq_is_case_sensitive_exact() {
    let entry = FilterEntry {
        column: "Email".to_string(),
        predicate: Predicate::Eq("abc".to_string()),
    };
    assert_eq!(decode(&entry), filter(FilterOperator::IsExactly, "abc", false));
}

#[test]
fn decode_classifies_by_wildcard_position() {
    let cases = [
        ("abc", FilterOperator::IsExactly, "abc"),
        ("abc%", FilterOperator::BeginsWith, "abc"),
        ("%abc", FilterOperator::EndsWith, "abc"),
        ("%abc%", FilterOperator::Contains, "abc"),
    ];
    for (pattern, operator, value) in cases {
        let entry = FilterEntry {
            column: "Email".to_string(),
            predicate: Predicate::ILike(pattern.to_string()),
        };
        assert_eq!(decode(&entry), filter(operator, value, true), "pattern {pattern:?}");
    }
}

#[test]
fn decode_lone_wildcard_is_contains_empty() {
    let entry = FilterEntry {
        column: "Email".to_string(),
        predicate: Predicate::ILike("%".to_string()),
    };
    assert_eq!(decode(&entry), filter(FilterOperator::Contains, "", true));
}

#[test]
fn decode_escaped_percent_means_like() {
    let entry = FilterEntry {
        column: "Email".to_string(),
        predicate: Predicate::ILike("%50\\% off\\%".to_string()),
    };
    assert_eq!(decode(&entry), filter(FilterOperator::Like, "%50% off%", true));
}

#[test]
fn round_trip_simple_values() {
    let operators = [
        (FilterOperator::IsExactly, false),
        (FilterOperator::IsExactly, true),
        (FilterOperator::Contains, true),
        (FilterOperator::BeginsWith, true),
        (FilterOperator::EndsWith, true),
    ];
    for (operator, ignore_case) in operators {
        for value in ["a", "Alice Smith", "@acme.com", "über"] {
            let original = filter(operator, value, ignore_case);
            assert_eq!(decode(&encode(&original)), original, "{operator} {value:?}");
        }
    }
}

#[test]
fn round_trip_empty_values() {
    // Exact and contains survive; begins/ends with an empty value produce
    // a lone "%", which reads back as `contains ""` — same pattern, so
    // nothing the query engine sees changes.
    for (operator, ignore_case) in [
        (FilterOperator::IsExactly, false),
        (FilterOperator::IsExactly, true),
        (FilterOperator::Contains, true),
    ] {
        let original = filter(operator, "", ignore_case);
        assert_eq!(decode(&encode(&original)), original, "{operator}");
    }
    for operator in [FilterOperator::BeginsWith, FilterOperator::EndsWith] {
        let decoded = decode(&encode(&filter(operator, "", true)));
        assert_eq!(decoded, filter(FilterOperator::Contains, "", true), "{operator}");
    }
}

#[test]
fn round_trip_like_with_escaped_interior() {
    // `like` is recognized on decode by the `\%` marker, so it round-trips
    // exactly when the interior carries a literal percent.
    for value in ["a%z", "%50% off%", "%a%b%"] {
        let original = filter(FilterOperator::Like, value, true);
        assert_eq!(decode(&encode(&original)), original, "{value:?}");
    }
}

#[test]
fn like_without_interior_percent_decodes_by_wildcard_position() {
    // "%acme%" typed as a raw pattern produces the same pattern `contains`
    // would; decode cannot tell them apart and picks the simpler operator.
    let decoded = decode(&encode(&filter(FilterOperator::Like, "%acme%", true)));
    assert_eq!(decoded, filter(FilterOperator::Contains, "acme", true));
}

#[test]
fn percent_value_decodes_as_like() {
    // Inherited ambiguity: the escaped percent marks the pattern as
    // user-authored, so the operator comes back as `like`.
    let original = filter(FilterOperator::Contains, "50%", true);
    let decoded = decode(&encode(&original));
    assert_eq!(decoded.operator, FilterOperator::Like);
    assert_eq!(decoded.value, "%50%%");
}

#[test]
fn entry_serializes_as_single_key_object() {
    let entry = encode(&filter(FilterOperator::EndsWith, "@acme.com", true));
    assert_eq!(
        serde_json::to_value(&entry).unwrap(),
        json!({"Email": {"$iLike": "%@acme.com"}})
    );
}

#[test]
fn entry_deserializes_from_wire_shape() {
    let entry: FilterEntry =
        serde_json::from_value(json!({"Status": {"$eq": "Active"}})).unwrap();
    assert_eq!(entry.column, "Status");
    assert_eq!(entry.predicate, Predicate::Eq("Active".to_string()));
}

#[test]
fn unknown_predicate_key_is_a_format_error() {
    let err = serde_json::from_value::<FilterEntry>(json!({"Email": {"unknownOp": "x"}}))
        .unwrap_err();
    assert!(err.to_string().contains("expected key to be \"$eq\" or \"$iLike\""));
    assert!(err.to_string().contains("unknownOp"));
}

#[test]
fn non_string_pattern_is_a_format_error() {
    assert!(serde_json::from_value::<FilterEntry>(json!({"Email": {"$iLike": 5}})).is_err());
}

#[test]
fn empty_predicate_object_is_a_format_error() {
    assert!(serde_json::from_value::<FilterEntry>(json!({"Email": {}})).is_err());
}

#[test]
fn filter_set_round_trips_in_order() {
    let filters = vec![
        Filter {
            column: "Email".to_string(),
            operator: FilterOperator::EndsWith,
            value: "@acme.com".to_string(),
            ignore_case: true,
        },
        Filter {
            column: "Status".to_string(),
            operator: FilterOperator::IsExactly,
            value: "Active".to_string(),
            ignore_case: false,
        },
    ];
    let set = encode_set(&filters);
    assert_eq!(set.and.len(), 2);
    assert_eq!(decode_set(&set), filters);

    let value = serde_json::to_value(&set).unwrap();
    assert_eq!(
        value,
        json!({"$and": [
            {"Email": {"$iLike": "%@acme.com"}},
            {"Status": {"$eq": "Active"}},
        ]})
    );
    let parsed: FilterSet = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, set);
}
