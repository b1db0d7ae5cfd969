use super::*;

#[test]
fn linspace_includes_both_endpoints() {
    let xs = linspace(0.0, 1.0, 5);
    assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
    assert!(linspace(0.0, 1.0, 0).is_empty());
}

#[test]
fn polyfit_interpolates_five_points_exactly() {
    let xs = linspace(20.0, 130.0, 5);
    let ys: Vec<f64> = [0.0, 0.15, 0.5, 0.85, 1.0]
        .iter()
        .map(|t| t * 40.0 + 10.0)
        .collect();
    let p = polyfit(&xs, &ys, 4).unwrap();
    assert_eq!(p.degree(), 4);
    for (x, y) in xs.iter().zip(&ys) {
        assert!((p.eval(*x) - y).abs() < 1e-9, "{x}: {} vs {y}", p.eval(*x));
    }
}

#[test]
fn polyfit_recovers_a_line() {
    let xs = linspace(-3.0, 5.0, 9);
    let ys: Vec<f64> = xs.iter().map(|x| 2.0 * x - 1.0).collect();
    let p = polyfit(&xs, &ys, 1).unwrap();
    assert!((p.eval(10.0) - 19.0).abs() < 1e-9);
}

#[test]
fn polyfit_rejects_degenerate_input() {
    assert!(polyfit(&[1.0, 1.0, 1.0], &[0.0, 1.0, 2.0], 1).is_err());
    assert!(polyfit(&[0.0, 1.0], &[0.0, 1.0], 4).is_err());
    assert!(polyfit(&[0.0, 1.0], &[0.0], 1).is_err());
}
