use super::*;
use serde_json::json;

#[test]
fn from_columns_rejects_ragged_and_duplicate_columns() {
    let err = Table::from_columns([
        ("a", vec![Datum::Int(1), Datum::Int(2)]),
        ("b", vec![Datum::Int(1)]),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("column \"b\" has 1 rows"));

    let err = Table::from_columns([("a", vec![]), ("a", vec![])]).unwrap_err();
    assert!(err.to_string().contains("duplicate column"));
}

#[test]
fn records_fill_missing_fields_with_null() {
    let t = Table::from_json(&json!([
        {"x": "t0", "id": 1},
        {"x": "t1", "id": 2, "hue": "red"},
    ]))
    .unwrap();
    assert_eq!(t.n_rows(), 2);
    assert_eq!(t.column("hue").unwrap(), &[Datum::Null, Datum::from("red")]);
}

#[test]
fn columnar_json_is_accepted() {
    let t = Table::from_json_str(r#"{"x": ["t0", "t0"], "id": [1, 2]}"#).unwrap();
    assert_eq!(t.n_rows(), 2);
    let mut names: Vec<&str> = t.column_names().collect();
    names.sort_unstable();
    assert_eq!(names, vec!["id", "x"]);
}

#[test]
fn bad_json_shapes_are_rejected() {
    assert!(Table::from_json(&json!(3)).is_err());
    assert!(Table::from_json(&json!([1, 2])).is_err());
    assert!(Table::from_json(&json!({"x": 1})).is_err());
    assert!(matches!(
        Table::from_json_str("{").unwrap_err(),
        AlluvialError::Serde(_)
    ));
}

#[test]
fn missing_column_is_reported_by_name() {
    let t = Table::from_columns([("x", vec![Datum::Int(1)])]).unwrap();
    match t.column("y") {
        Err(AlluvialError::MissingColumn(name)) => assert_eq!(name, "y"),
        other => panic!("unexpected: {other:?}"),
    }
    assert!(t.view().values("y").is_err());
}

#[test]
fn view_iterates_selected_rows_in_order() {
    let t = Table::from_columns([(
        "x",
        vec![Datum::Int(10), Datum::Int(11), Datum::Int(12)],
    )])
    .unwrap();
    let v = t.view().select(vec![2, 0]);
    assert_eq!(v.len(), 2);
    let got: Vec<&Datum> = v.values("x").unwrap().collect();
    assert_eq!(got, vec![&Datum::Int(12), &Datum::Int(10)]);
}
