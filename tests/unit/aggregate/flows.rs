use super::*;
use crate::table::frame::Table;

fn ids(vals: &[&str]) -> Vec<Datum> {
    vals.iter().map(|v| Datum::from(*v)).collect()
}

fn matrix(origins: &[&[&str]], destinations: &[&[&str]]) -> FlowMatrix {
    let left: Vec<Datum> = origins.iter().flat_map(|s| ids(s)).collect();
    let right: Vec<Datum> = destinations.iter().flat_map(|s| ids(s)).collect();
    let lt = Table::from_columns([("id", left)]).unwrap();
    let rt = Table::from_columns([("id", right)]).unwrap();

    fn split<'a>(t: &'a Table, sizes: &[usize]) -> Vec<TableView<'a>> {
        let mut start = 0;
        sizes
            .iter()
            .map(|&n| {
                let v = t.view().select((start..start + n).collect());
                start += n;
                v
            })
            .collect()
    }
    let o = split(&lt, &origins.iter().map(|s| s.len()).collect::<Vec<_>>());
    let d = split(&rt, &destinations.iter().map(|s| s.len()).collect::<Vec<_>>());
    flow_matrix(&o, &d, "id").unwrap()
}

#[test]
fn fractions_follow_membership_counts() {
    let m = matrix(&[&["a", "b"], &["c"]], &[&["a"], &["b", "c"]]);
    assert_eq!((m.n_origins(), m.n_destinations()), (2, 2));
    assert_eq!(m.get(0, 0).unwrap().fractions(), (0.5, 1.0));
    assert_eq!(m.get(0, 1).unwrap().fractions(), (0.5, 0.5));
    assert_eq!(m.get(1, 0).unwrap().fractions(), (0.0, 0.0));
    assert_eq!(m.get(1, 1).unwrap().fractions(), (1.0, 0.5));
    assert!(m.get(2, 0).is_none());
}

#[test]
fn attrition_yields_a_row_of_zeros() {
    let m = matrix(&[&["a"], &["z"]], &[&["a"], &["a"]]);
    assert!(m.row(1).iter().all(Lode::is_empty));
    assert_eq!(m.origin_sum(1), 0.0);
    assert!(m.row(7).is_empty());
}

#[test]
fn duplicate_destination_ids_are_each_counted() {
    let m = matrix(&[&["a", "b"]], &[&["a", "a", "c"]]);
    let lode = m.get(0, 0).unwrap();
    assert_eq!(lode.count, 2);
    assert_eq!(lode.origin_fraction, 1.0);
    assert!((lode.destination_fraction - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn partial_presence_closes_below_one() {
    // "c" leaves the diagram after the origin group.
    let m = matrix(&[&["a", "b", "c", "d"]], &[&["a"], &["b", "d"]]);
    assert!((m.origin_sum(0) - 0.75).abs() < 1e-12);
    assert_eq!(m.destination_sum(0), 1.0);
    assert_eq!(m.destination_sum(1), 1.0);
    assert_eq!(m.rows().count(), 1);
}
