use super::*;

#[test]
fn outline_runs_top_forward_then_bottom_back() {
    let top = [Point::new(0.0, 5.0), Point::new(1.0, 6.0)];
    let bottom = [Point::new(0.0, 3.0), Point::new(1.0, 4.0)];
    assert_eq!(
        ribbon_outline(&top, &bottom),
        vec![
            Point::new(0.0, 5.0),
            Point::new(1.0, 6.0),
            Point::new(1.0, 4.0),
            Point::new(0.0, 3.0),
        ]
    );
}

#[test]
fn flow_outline_docks_on_both_slices() {
    let origin = FlowSlice {
        top: 50.0,
        bottom: 40.0,
    };
    let destination = FlowSlice {
        top: 20.0,
        bottom: 5.0,
    };
    let res = 10;
    let outline = flow_outline(origin, destination, 1.0, 9.0, res, FitMode::default()).unwrap();
    let n = outline.len();
    assert_eq!(n, 2 * 3 * res);
    assert_eq!(outline[0], Point::new(1.0, 50.0));
    assert_eq!(outline[n / 2 - 1], Point::new(9.0, 20.0));
    assert_eq!(outline[n / 2], Point::new(9.0, 5.0));
    assert_eq!(outline[n - 1], Point::new(1.0, 40.0));
}

#[test]
fn bez_path_is_closed_polyline() {
    let outline = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
    ];
    let path = outline_to_bez_path(&outline);
    let els = path.elements();
    assert_eq!(els.len(), 4);
    assert_eq!(els[0], kurbo::PathEl::MoveTo(Point::new(0.0, 0.0)));
    assert_eq!(els[3], kurbo::PathEl::ClosePath);
    assert!(outline_to_bez_path(&[]).elements().is_empty());
}
