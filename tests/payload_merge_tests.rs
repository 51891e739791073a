use chart_bind::api::{
    ATTR_DATA, ATTR_SERIES, ATTR_TEMPLATE, PayloadShape, extract_raw, merge_config,
};
use chart_bind::error::BindError;
use chart_bind::host::MemoryElement;
use serde_json::json;

#[test]
fn merge_overlays_payload_onto_template() {
    let merged = merge_config(Some(r#"{"a":1,"b":2}"#), "[1,2,3]", "series", None).expect("merge");
    assert_eq!(merged, json!({"a": 1, "b": 2, "series": [1, 2, 3]}));
}

#[test]
fn merge_overwrites_colliding_template_key() {
    let merged =
        merge_config(Some(r#"{"series":[9,9],"a":1}"#), "[1]", "series", None).expect("merge");
    assert_eq!(merged, json!({"series": [1], "a": 1}));
}

#[test]
fn merge_preserves_template_key_order() {
    let merged = merge_config(Some(r#"{"b":2,"a":1}"#), "[3]", "series", None).expect("merge");
    assert_eq!(
        serde_json::to_string(&merged).expect("serialize"),
        r#"{"b":2,"a":1,"series":[3]}"#
    );
}

#[test]
fn absent_template_yields_bare_payload_object() {
    let merged = merge_config(None, "[1]", "data", None).expect("merge");
    assert_eq!(merged, json!({"data": [1]}));
}

#[test]
fn absent_template_uses_fallback() {
    let fallback = json!({"bg": "dark"});
    let merged = merge_config(None, "[1]", "series", Some(&fallback)).expect("merge");
    assert_eq!(merged, json!({"bg": "dark", "series": [1]}));
}

#[test]
fn fallback_template_must_be_an_object() {
    let fallback = json!([1, 2]);
    let err = merge_config(None, "[1]", "series", Some(&fallback)).expect_err("array fallback");
    assert!(matches!(err, BindError::InvalidPayload(_)));
}

#[test]
fn malformed_template_fails_with_parse_error() {
    let err = merge_config(Some("{nope"), "[1]", "series", None).expect_err("bad template");
    assert!(matches!(err, BindError::Parse(_)));
}

#[test]
fn payload_may_be_any_json_value() {
    let merged = merge_config(Some("{}"), r#"{"traces":[{"y":[1]}]}"#, "data", None).expect("merge");
    assert_eq!(merged, json!({"data": {"traces": [{"y": [1]}]}}));
}

#[test]
fn extract_raw_requires_the_payload_attribute() {
    let element = MemoryElement::new("el").with_attribute(ATTR_TEMPLATE, "{}");
    let err = extract_raw(&element, &PayloadShape::series()).expect_err("no series");
    match err {
        BindError::MissingAttribute(attr) => assert_eq!(attr, ATTR_SERIES),
        other => panic!("expected MissingAttribute, got {other:?}"),
    }
}

#[test]
fn extract_raw_reads_both_attributes_untouched() {
    let element = MemoryElement::new("el")
        .with_attribute(ATTR_TEMPLATE, " {\"a\": 1} ")
        .with_attribute(ATTR_SERIES, "[1, 2]");
    let raw = extract_raw(&element, &PayloadShape::series()).expect("extract");
    assert_eq!(raw.template, Some(" {\"a\": 1} "));
    assert_eq!(raw.payload, "[1, 2]");
}

#[test]
fn figure_shape_reads_the_data_attribute() {
    let element = MemoryElement::new("el").with_attribute(ATTR_DATA, "[]");
    let raw = extract_raw(&element, &PayloadShape::figure()).expect("extract");
    assert_eq!(raw.payload, "[]");
    assert_eq!(raw.template, None);
}
