use super::*;

const POLY: FitMode = FitMode::Poly {
    straight_fraction: 0.2,
};

#[test]
fn equal_endpoints_at_zero_give_a_flat_line() {
    for mode in [POLY, FitMode::Sigmoid] {
        let path = fit_path(0.0, 0.0, 0.0, 10.0, 50, mode).unwrap();
        assert_eq!(path.len(), mode.sample_count(50));
        assert!(path.iter().all(|p| p.y == 0.0), "{mode:?}");
        assert_eq!(path.first().unwrap().x, 0.0);
        assert_eq!(path.last().unwrap().x, 10.0);
    }
}

#[test]
fn poly_has_flat_docking_segments() {
    let res = 20;
    let path = fit_path(10.0, 40.0, 0.0, 100.0, res, POLY).unwrap();
    assert_eq!(path.len(), 3 * res);

    let (lead, rest) = path.split_at(res);
    let (bend, tail) = rest.split_at(res);
    assert!(lead.iter().all(|p| p.y == 10.0 && p.x <= 20.0));
    assert!(tail.iter().all(|p| p.y == 40.0 && p.x >= 80.0));
    assert!((bend[0].y - 10.0).abs() < 1e-9);
    assert!((bend[res - 1].y - 40.0).abs() < 1e-9);
    assert_eq!(bend[0].x, 20.0);
    assert_eq!(bend[res - 1].x, 80.0);
}

#[test]
fn poly_passes_through_the_midpoint() {
    // Odd resolution puts a sample at the centre of the bend.
    let path = fit_path(0.0, 30.0, 10.0, 20.0, 11, POLY).unwrap();
    let mid = path[11 + 5];
    assert!((mid.x - 15.0).abs() < 1e-12);
    assert!((mid.y - 15.0).abs() < 1e-9);
}

#[test]
fn samples_never_move_left() {
    for mode in [POLY, FitMode::Poly { straight_fraction: 0.0 }, FitMode::Sigmoid] {
        let path = fit_path(5.0, -5.0, 1.0, 9.0, 30, mode).unwrap();
        assert!(path.windows(2).all(|w| w[1].x >= w[0].x), "{mode:?}");
    }
}

#[test]
fn sigmoid_meets_both_endpoints_and_rises_monotonically() {
    let path = fit_path(2.0, 12.0, 0.0, 4.0, 40, FitMode::Sigmoid).unwrap();
    assert_eq!(path.len(), 40);
    assert!((path[0].y - 2.0).abs() < 1e-12);
    assert!((path[39].y - 12.0).abs() < 1e-12);
    assert!(path.windows(2).all(|w| w[1].y >= w[0].y));
    assert!((path[20].y - 7.0).abs() < 1.0);
}

#[test]
fn invalid_requests_are_rejected() {
    assert!(fit_path(0.0, 1.0, 0.0, 1.0, 1, POLY).is_err());
    assert!(fit_path(0.0, 1.0, 0.0, 1.0, usize::MAX, POLY).is_err());
    assert!(fit_path(0.0, 1.0, 0.0, 1.0, MAX_RESOLUTION + 1, FitMode::Sigmoid).is_err());
    assert_eq!(
        fit_path(0.0, 1.0, 0.0, 1.0, MAX_RESOLUTION, FitMode::Sigmoid)
            .unwrap()
            .len(),
        MAX_RESOLUTION
    );
    assert!(fit_path(0.0, 1.0, 1.0, 1.0, 10, POLY).is_err());
    assert!(fit_path(0.0, 1.0, 2.0, 1.0, 10, FitMode::Sigmoid).is_err());
    assert!(fit_path(f64::NAN, 1.0, 0.0, 1.0, 10, POLY).is_err());
    let wide = FitMode::Poly {
        straight_fraction: 0.5,
    };
    assert!(fit_path(0.0, 1.0, 0.0, 1.0, 10, wide).is_err());
}

#[test]
fn fit_mode_serde_uses_kind_tag() {
    let m: FitMode = serde_json::from_str(r#"{"kind": "poly"}"#).unwrap();
    assert_eq!(m, FitMode::default());
    let m: FitMode = serde_json::from_str(r#"{"kind": "sigmoid"}"#).unwrap();
    assert_eq!(m, FitMode::Sigmoid);
    assert_eq!(
        serde_json::to_string(&FitMode::Poly {
            straight_fraction: 0.1
        })
        .unwrap(),
        r#"{"kind":"poly","straight_fraction":0.1}"#
    );
}
