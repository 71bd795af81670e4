use chrono::NaiveDate;

use super::builder::{build_search_query, Criteria};
use super::fields::SearchField;
use super::typed::{DateFieldValue, NumberFieldValue, StringFieldValue};
use super::types::{FieldValue, Ops, Scalar};

#[derive(Debug, Clone, Copy)]
enum TestField {
    Code,
    Price,
    Status,
    DocDate,
}

impl SearchField for TestField {
    fn wire_name(self) -> &'static str {
        match self {
            TestField::Code => "CODE",
            TestField::Price => "PRICE",
            TestField::Status => "STATUS",
            TestField::DocDate => "DOC_DATE",
        }
    }
}

#[test]
fn test_scalar_string_eq() {
    let mut criteria = Criteria::new();
    criteria.set(TestField::Code, "A-100");
    assert_eq!(criteria.to_query().unwrap(), "CODE eq 'A-100'");
}

#[test]
fn test_scalar_number_unquoted() {
    let mut criteria = Criteria::new();
    criteria.set(TestField::Status, 4);
    assert_eq!(criteria.to_query().unwrap(), "STATUS eq 4");
}

#[test]
fn test_scalar_bool_unquoted() {
    let mut criteria = Criteria::new();
    criteria.set_raw("ACTIVE", true);
    assert_eq!(criteria.to_query().unwrap(), "ACTIVE eq true");
}

#[test]
fn test_scalar_float() {
    let mut criteria = Criteria::new();
    criteria.set(TestField::Price, 99.5);
    assert_eq!(criteria.to_query().unwrap(), "PRICE eq 99.5");
}

#[test]
fn test_string_quote_escaping() {
    let mut criteria = Criteria::new();
    criteria.set(TestField::Code, "O'Brien");
    assert_eq!(criteria.to_query().unwrap(), "CODE eq 'O''Brien'");
}

#[test]
fn test_like_pattern_escaped_but_verbatim() {
    let mut criteria = Criteria::new();
    criteria.set(TestField::Code, StringFieldValue::like("AB*"));
    assert_eq!(criteria.to_query().unwrap(), "CODE like 'AB*'");
}

#[test]
fn test_like_pattern_with_quote() {
    let mut criteria = Criteria::new();
    criteria.set(TestField::Code, StringFieldValue::like("O'B*"));
    assert_eq!(criteria.to_query().unwrap(), "CODE like 'O''B*'");
}

#[test]
fn test_array_multiple_values_or_group() {
    let mut criteria = Criteria::new();
    criteria.set(TestField::Code, vec!["A", "B", "C"]);
    assert_eq!(
        criteria.to_query().unwrap(),
        "(CODE eq 'A' or CODE eq 'B' or CODE eq 'C')"
    );
}

#[test]
fn test_array_single_value_collapses_to_scalar_form() {
    let mut criteria = Criteria::new();
    criteria.set(TestField::Code, vec!["A"]);
    assert_eq!(criteria.to_query().unwrap(), "CODE eq 'A'");
}

#[test]
fn test_array_empty_skipped() {
    let mut criteria = Criteria::new();
    criteria.set(TestField::Code, Vec::<String>::new());
    assert_eq!(criteria.to_query(), None);
}

#[test]
fn test_array_order_preserved() {
    let mut criteria = Criteria::new();
    criteria.set(TestField::Status, [3, 1, 2]);
    assert_eq!(
        criteria.to_query().unwrap(),
        "(STATUS eq 3 or STATUS eq 1 or STATUS eq 2)"
    );
}

#[test]
fn test_range_gte_before_lte() {
    let mut criteria = Criteria::new();
    criteria.set(TestField::Price, NumberFieldValue::between(100, 500));
    assert_eq!(
        criteria.to_query().unwrap(),
        "PRICE gte 100 and PRICE lte 500"
    );
}

#[test]
fn test_operator_fixed_order() {
    // All five operators on one field emit in eq, like, gte, lte, in order
    // regardless of construction order.
    let ops = Ops {
        one_of: Some(vec![Scalar::Int(1), Scalar::Int(2)]),
        lte: Some(Scalar::Int(9)),
        gte: Some(Scalar::Int(1)),
        like: Some("X*".to_string()),
        eq: Some(Scalar::Str("X1".to_string())),
    };
    let mut criteria = Criteria::new();
    criteria.set(TestField::Code, ops);
    assert_eq!(
        criteria.to_query().unwrap(),
        "CODE eq 'X1' and CODE like 'X*' and CODE gte 1 and CODE lte 9 and (CODE eq 1 or CODE eq 2)"
    );
}

#[test]
fn test_in_operator_expands_like_array() {
    let mut criteria = Criteria::new();
    criteria.set(TestField::Status, NumberFieldValue::one_of([1, 2, 3]));
    assert_eq!(
        criteria.to_query().unwrap(),
        "(STATUS eq 1 or STATUS eq 2 or STATUS eq 3)"
    );
}

#[test]
fn test_in_operator_empty_list_skipped() {
    let ops = Ops {
        one_of: Some(Vec::new()),
        ..Ops::default()
    };
    let mut criteria = Criteria::new();
    criteria.set(TestField::Status, ops);
    assert_eq!(criteria.to_query(), None);
}

#[test]
fn test_empty_operator_set_skipped() {
    let mut criteria = Criteria::new();
    criteria.set(TestField::Code, Ops::new());
    assert_eq!(criteria.to_query(), None);
}

#[test]
fn test_empty_criteria_compiles_to_none() {
    assert_eq!(Criteria::new().to_query(), None);
}

#[test]
fn test_set_opt_none_skipped() {
    let mut criteria = Criteria::new();
    criteria.set_opt(TestField::Code, None::<&str>);
    assert_eq!(criteria.to_query(), None);

    criteria.set_opt(TestField::Code, Some("A"));
    assert_eq!(criteria.to_query().unwrap(), "CODE eq 'A'");
}

#[test]
fn test_multi_field_insertion_order() {
    let mut criteria = Criteria::new();
    criteria.set_raw("A", 1);
    criteria.set_raw("B", "x");
    assert_eq!(criteria.to_query().unwrap(), "A eq 1 and B eq 'x'");
}

#[test]
fn test_reset_field_keeps_position() {
    let mut criteria = Criteria::new();
    criteria.set_raw("A", 1);
    criteria.set_raw("B", 2);
    criteria.set_raw("A", 3);
    assert_eq!(criteria.to_query().unwrap(), "A eq 3 and B eq 2");
}

#[test]
fn test_compile_is_idempotent() {
    let mut criteria = Criteria::new();
    criteria.set(TestField::Code, StringFieldValue::like("AB*"));
    criteria.set(TestField::Price, NumberFieldValue::between(100, 500));
    let first = criteria.to_query();
    let second = criteria.to_query();
    assert_eq!(first, second);
}

#[test]
fn test_documented_scenario() {
    let mut criteria = Criteria::new();
    criteria.set(TestField::Code, StringFieldValue::like("AB*"));
    criteria.set(TestField::Price, NumberFieldValue::between(100, 500));
    criteria.set(TestField::Status, NumberFieldValue::one_of([1, 2, 3]));
    assert_eq!(
        criteria.to_query().unwrap(),
        "CODE like 'AB*' and PRICE gte 100 and PRICE lte 500 and \
         (STATUS eq 1 or STATUS eq 2 or STATUS eq 3)"
    );
}

#[test]
fn test_date_values_render_iso_quoted() {
    let from = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let to = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();
    let mut criteria = Criteria::new();
    criteria.set(TestField::DocDate, DateFieldValue::between(from, to));
    assert_eq!(
        criteria.to_query().unwrap(),
        "DOC_DATE gte '2026-01-01' and DOC_DATE lte '2026-06-30'"
    );
}

#[test]
fn test_string_one_of() {
    let mut criteria = Criteria::new();
    criteria.set(TestField::Code, StringFieldValue::one_of(["A", "B"]));
    assert_eq!(
        criteria.to_query().unwrap(),
        "(CODE eq 'A' or CODE eq 'B')"
    );
}

#[test]
fn test_build_search_query_raw_pairs() {
    let code: FieldValue = "X".into();
    let status: FieldValue = [1, 2].into();
    let entries = [("CODE", &code), ("STATUS", &status)];
    assert_eq!(
        build_search_query(entries.iter().map(|(name, value)| (*name, *value))).unwrap(),
        "CODE eq 'X' and (STATUS eq 1 or STATUS eq 2)"
    );
}

#[test]
fn test_sort_key_rendering() {
    assert_eq!(TestField::Code.asc().to_string(), "CODE");
    assert_eq!(TestField::DocDate.desc().to_string(), "-DOC_DATE");
}

#[test]
fn test_dynamic_criteria_from_json() {
    let criteria: Criteria = serde_json::from_str(
        r#"{
            "CODE": {"like": "AB*"},
            "PRICE": {"gte": 100, "lte": 500},
            "STATUS": {"in": [1, 2, 3]}
        }"#,
    )
    .unwrap();
    assert_eq!(
        criteria.to_query().unwrap(),
        "CODE like 'AB*' and PRICE gte 100 and PRICE lte 500 and \
         (STATUS eq 1 or STATUS eq 2 or STATUS eq 3)"
    );
}

#[test]
fn test_dynamic_criteria_scalar_and_array() {
    let criteria: Criteria =
        serde_json::from_str(r#"{"CODE": "A", "STATUS": [1, 2], "ACTIVE": true}"#).unwrap();
    assert_eq!(
        criteria.to_query().unwrap(),
        "CODE eq 'A' and (STATUS eq 1 or STATUS eq 2) and ACTIVE eq true"
    );
}

#[test]
fn test_dynamic_criteria_null_skipped() {
    let criteria: Criteria = serde_json::from_str(r#"{"CODE": null, "STATUS": 1}"#).unwrap();
    assert_eq!(criteria.to_query().unwrap(), "STATUS eq 1");
}

#[test]
fn test_dynamic_criteria_unknown_operator_ignored() {
    // An operator object with only unrecognized keys degrades to no clause
    // instead of failing the compilation.
    let criteria: Criteria =
        serde_json::from_str(r#"{"CODE": {"regex": ".*"}, "STATUS": 1}"#).unwrap();
    assert_eq!(criteria.to_query().unwrap(), "STATUS eq 1");
}

#[test]
fn test_dynamic_criteria_mixed_known_and_unknown_operators() {
    let criteria: Criteria =
        serde_json::from_str(r#"{"PRICE": {"gte": 10, "regex": ".*"}}"#).unwrap();
    assert_eq!(criteria.to_query().unwrap(), "PRICE gte 10");
}

#[test]
fn test_whole_number_float_renders_without_fraction() {
    let mut criteria = Criteria::new();
    criteria.set(TestField::Price, 100.0);
    assert_eq!(criteria.to_query().unwrap(), "PRICE eq 100");
}
