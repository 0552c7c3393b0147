use crate::env::AttributeValue;

#[test]
fn as_bool_only_accepts_bool() {
    assert_eq!(AttributeValue::Bool(true).as_bool(), Some(true));
    assert_eq!(AttributeValue::Bool(false).as_bool(), Some(false));
    assert_eq!(AttributeValue::Int(1).as_bool(), None);
    assert_eq!(AttributeValue::Real(0.0).as_bool(), None);
    assert_eq!(AttributeValue::Text("true".into()).as_bool(), None);
}

#[test]
fn type_names_describe_variants() {
    assert_eq!(AttributeValue::Bool(true).type_name(), "bool");
    assert_eq!(AttributeValue::Int(3).type_name(), "int");
    assert_eq!(AttributeValue::Real(3.5).type_name(), "real");
    assert_eq!(AttributeValue::Text("x".into()).type_name(), "text");
}

#[test]
fn attribute_values_parse_from_json_literals() {
    let b: AttributeValue = serde_json::from_str("true").expect("parse bool");
    assert_eq!(b, AttributeValue::Bool(true));

    let i: AttributeValue = serde_json::from_str("42").expect("parse int");
    assert_eq!(i, AttributeValue::Int(42));

    let r: AttributeValue = serde_json::from_str("2.5").expect("parse real");
    assert_eq!(r, AttributeValue::Real(2.5));

    let t: AttributeValue = serde_json::from_str("\"relay\"").expect("parse text");
    assert_eq!(t, AttributeValue::Text("relay".into()));
}
