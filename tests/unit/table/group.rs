use super::*;
use crate::table::frame::Table;

fn table() -> Table {
    Table::from_columns([
        (
            "x",
            ["t1", "t0", "t1", "t0", "t2"].map(Datum::from).to_vec(),
        ),
        ("id", [1i64, 2, 3, 4, 5].map(Datum::from).to_vec()),
    ])
    .unwrap()
}

fn summary(groups: &[(Datum, TableView<'_>)]) -> Vec<(String, Vec<usize>)> {
    groups
        .iter()
        .map(|(k, v)| (k.to_string(), v.rows().to_vec()))
        .collect()
}

#[test]
fn first_seen_keeps_encounter_order() {
    let t = table();
    let groups = group_by(&t.view(), "x", &GroupOrder::FirstSeen).unwrap();
    assert_eq!(
        summary(&groups),
        vec![
            ("t1".to_string(), vec![0, 2]),
            ("t0".to_string(), vec![1, 3]),
            ("t2".to_string(), vec![4]),
        ]
    );
}

#[test]
fn sorted_orders_keys() {
    let t = table();
    let groups = group_by(&t.view(), "x", &GroupOrder::Sorted).unwrap();
    let keys: Vec<String> = groups.iter().map(|(k, _)| k.to_string()).collect();
    assert_eq!(keys, vec!["t0", "t1", "t2"]);
}

#[test]
fn levels_keep_empty_groups_and_drop_unknown_keys() {
    let t = table();
    let order = GroupOrder::Levels(vec![Datum::from("t2"), Datum::from("t9"), Datum::from("t0")]);
    let groups = group_by(&t.view(), "x", &order).unwrap();
    assert_eq!(
        summary(&groups),
        vec![
            ("t2".to_string(), vec![4]),
            ("t9".to_string(), vec![]),
            ("t0".to_string(), vec![1, 3]),
        ]
    );
}

#[test]
fn duplicate_levels_are_rejected() {
    let t = table();
    let order = GroupOrder::Levels(vec![Datum::from("t0"), Datum::from("t0")]);
    assert!(group_by(&t.view(), "x", &order).is_err());
}

#[test]
fn nested_split_narrows_without_copying() {
    let t = table();
    let outer = group_by(&t.view(), "x", &GroupOrder::FirstSeen).unwrap();
    let (_, t1) = &outer[0];
    let inner = group_by(t1, "id", &GroupOrder::Sorted).unwrap();
    assert_eq!(
        summary(&inner),
        vec![("1".to_string(), vec![0]), ("3".to_string(), vec![2])]
    );
    assert!(std::ptr::eq(inner[0].1.table(), &t));
}

#[test]
fn pairwise_yields_overlapping_pairs() {
    let pairs: Vec<(i32, i32)> = pairwise(&[1, 2, 3]).map(|(a, b)| (*a, *b)).collect();
    assert_eq!(pairs, vec![(1, 2), (2, 3)]);
    assert_eq!(pairwise::<i32>(&[]).count(), 0);
}
