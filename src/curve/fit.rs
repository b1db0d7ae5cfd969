use crate::{
    foundation::core::Point,
    foundation::error::{AlluvialError, AlluvialResult},
    foundation::math::{linspace, polyfit},
};

/// Control-point profile of the polynomial segment, as a share of `y2 - y1`.
const POLY_PROFILE: [f64; 5] = [0.0, 0.15, 0.5, 0.85, 1.0];

/// Largest accepted sample count per curve segment.
pub const MAX_RESOLUTION: usize = 10_000;

/// The logistic curve is sampled over `[-SIGMOID_SPAN, SIGMOID_SPAN]`.
const SIGMOID_SPAN: f64 = 10.0;

fn default_straight_fraction() -> f64 {
    0.2
}

/// Shape of the transition curve between two flow edges.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FitMode {
    /// Flat docking segments around a degree-4 least-squares polynomial.
    Poly {
        /// Share of `x2 - x1` taken by each flat segment, in `[0, 0.5)`.
        #[serde(default = "default_straight_fraction")]
        straight_fraction: f64,
    },
    /// Logistic curve over the whole span.
    Sigmoid,
}

impl Default for FitMode {
    fn default() -> Self {
        Self::Poly {
            straight_fraction: default_straight_fraction(),
        }
    }
}

impl FitMode {
    /// Reject straight fractions outside `[0, 0.5)`.
    pub fn validate(&self) -> AlluvialResult<()> {
        match *self {
            Self::Poly { straight_fraction } => {
                if !(0.0..0.5).contains(&straight_fraction) {
                    return Err(AlluvialError::validation(format!(
                        "straight_fraction must be in [0, 0.5), got {straight_fraction}"
                    )));
                }
                Ok(())
            }
            Self::Sigmoid => Ok(()),
        }
    }

    /// Number of samples [`fit_path`] returns for `resolution`.
    pub fn sample_count(&self, resolution: usize) -> usize {
        match self {
            Self::Poly { .. } => 3 * resolution,
            Self::Sigmoid => resolution,
        }
    }
}

/// Sample a smooth, monotonic-in-x transition from `(x1, y1)` to `(x2, y2)`.
///
/// `resolution` is the sample count of every segment, at most [`MAX_RESOLUTION`]:
/// poly mode yields `3 * resolution` points (flat, polynomial, flat), sigmoid
/// mode `resolution`.
pub fn fit_path(
    y1: f64,
    y2: f64,
    x1: f64,
    x2: f64,
    resolution: usize,
    mode: FitMode,
) -> AlluvialResult<Vec<Point>> {
    if !(2..=MAX_RESOLUTION).contains(&resolution) {
        return Err(AlluvialError::validation(format!(
            "curve resolution must be in [2, {MAX_RESOLUTION}], got {resolution}"
        )));
    }
    if ![y1, y2, x1, x2].iter().all(|v| v.is_finite()) {
        return Err(AlluvialError::validation("curve endpoints must be finite"));
    }
    if x2 <= x1 {
        return Err(AlluvialError::validation(format!(
            "curve must run left to right, got x1 = {x1}, x2 = {x2}"
        )));
    }
    mode.validate()?;

    match mode {
        FitMode::Poly { straight_fraction } => {
            poly_fit_with_straights(y1, y2, x1, x2, resolution, straight_fraction)
        }
        FitMode::Sigmoid => Ok(sigmoid_fit(y1, y2, x1, x2, resolution)),
    }
}

fn poly_fit_with_straights(
    y1: f64,
    y2: f64,
    x1: f64,
    x2: f64,
    resolution: usize,
    straight_fraction: f64,
) -> AlluvialResult<Vec<Point>> {
    let straight = (x2 - x1) * straight_fraction;
    let (bend_start, bend_end) = (x1 + straight, x2 - straight);

    let ctrl_x = linspace(bend_start, bend_end, POLY_PROFILE.len());
    let ctrl_y: Vec<f64> = POLY_PROFILE.iter().map(|p| p * (y2 - y1) + y1).collect();
    let poly = polyfit(&ctrl_x, &ctrl_y, POLY_PROFILE.len() - 1)?;

    let mut out = Vec::with_capacity(3 * resolution);
    out.extend(
        linspace(x1, bend_start, resolution)
            .into_iter()
            .map(|x| Point::new(x, y1)),
    );
    out.extend(
        linspace(bend_start, bend_end, resolution)
            .into_iter()
            .map(|x| Point::new(x, poly.eval(x))),
    );
    out.extend(
        linspace(bend_end, x2, resolution)
            .into_iter()
            .map(|x| Point::new(x, y2)),
    );
    Ok(out)
}

fn sigmoid_fit(y1: f64, y2: f64, x1: f64, x2: f64, resolution: usize) -> Vec<Point> {
    let sigmoid = |t: f64| 1.0 / (1.0 + (-t).exp());
    let lo = sigmoid(-SIGMOID_SPAN);
    let hi = sigmoid(SIGMOID_SPAN);

    linspace(-SIGMOID_SPAN, SIGMOID_SPAN, resolution)
        .into_iter()
        .zip(linspace(x1, x2, resolution))
        .map(|(t, x)| {
            // Stretch the logistic tails so the curve meets both endpoints.
            let s = (sigmoid(t) - lo) / (hi - lo);
            Point::new(x, s * (y2 - y1) + y1)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/curve/fit.rs"]
mod tests;
