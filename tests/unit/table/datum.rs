use super::*;
use std::collections::HashSet;

#[test]
fn ordering_ranks_variants_then_values() {
    let mut v = vec![
        Datum::from("b"),
        Datum::Int(3),
        Datum::Null,
        Datum::Float(2.5),
        Datum::Bool(true),
        Datum::from("a"),
        Datum::Int(-1),
    ];
    v.sort();
    assert_eq!(
        v,
        vec![
            Datum::Null,
            Datum::Bool(true),
            Datum::Int(-1),
            Datum::Float(2.5),
            Datum::Int(3),
            Datum::from("a"),
            Datum::from("b"),
        ]
    );
}

#[test]
fn int_and_float_of_equal_value_stay_distinct() {
    assert_ne!(Datum::Int(1), Datum::Float(1.0));
    assert!(Datum::Int(1) < Datum::Float(1.0));

    let set: HashSet<Datum> = [Datum::Int(1), Datum::Float(1.0), Datum::Int(1)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn infer_prefers_int_then_float_then_text() {
    assert_eq!(Datum::infer(" 42 "), Datum::Int(42));
    assert_eq!(Datum::infer("0.5"), Datum::Float(0.5));
    assert_eq!(Datum::infer("t0"), Datum::from("t0"));
    assert_eq!(Datum::infer(""), Datum::Null);
    assert_eq!(Datum::infer("NaN"), Datum::from("NaN"));
}

#[test]
fn from_json_accepts_scalars_only() {
    use serde_json::json;
    assert_eq!(Datum::from_json(&json!(7)).unwrap(), Datum::Int(7));
    assert_eq!(Datum::from_json(&json!(7.25)).unwrap(), Datum::Float(7.25));
    assert_eq!(Datum::from_json(&json!("x")).unwrap(), Datum::from("x"));
    assert!(Datum::from_json(&json!(null)).unwrap().is_null());
    assert!(Datum::from_json(&json!([1])).is_err());
}

#[test]
fn display_renders_plain_labels() {
    assert_eq!(Datum::from("module 1").to_string(), "module 1");
    assert_eq!(Datum::Int(12).to_string(), "12");
    assert_eq!(Datum::Null.to_string(), "");
}

#[test]
fn serde_roundtrip_is_untagged() {
    let v = vec![Datum::Int(1), Datum::from("a"), Datum::Null];
    let s = serde_json::to_string(&v).unwrap();
    assert_eq!(s, r#"[1,"a",null]"#);
    let back: Vec<Datum> = serde_json::from_str(&s).unwrap();
    assert_eq!(back, v);
}
