use crate::foundation::error::{AlluvialError, AlluvialResult};

/// `n` evenly spaced samples over `[start, end]`, both endpoints included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / ((n - 1) as f64);
            let mut out: Vec<f64> = (0..n).map(|i| start + step * (i as f64)).collect();
            // Pin the endpoint so it does not drift by accumulated rounding.
            out[n - 1] = end;
            out
        }
    }
}

/// Polynomial fitted in a normalised abscissa `t = (x - shift) / scale`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    /// Coefficients, lowest degree first.
    coeffs: Vec<f64>,
    shift: f64,
    scale: f64,
}

impl Polynomial {
    /// Polynomial degree.
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Evaluate at `x` (Horner).
    pub fn eval(&self, x: f64) -> f64 {
        let t = (x - self.shift) / self.scale;
        self.coeffs.iter().rev().fold(0.0, |acc, c| acc * t + c)
    }
}

/// Least-squares polynomial fit of `degree` through `(xs, ys)`.
///
/// The abscissa is centred and scaled to `[-1, 1]` before the normal
/// equations are built.
pub fn polyfit(xs: &[f64], ys: &[f64], degree: usize) -> AlluvialResult<Polynomial> {
    if xs.len() != ys.len() {
        return Err(AlluvialError::validation("polyfit: xs and ys differ in length"));
    }
    if xs.len() <= degree {
        return Err(AlluvialError::validation(format!(
            "polyfit: degree {degree} needs at least {} points, got {}",
            degree + 1,
            xs.len()
        )));
    }

    let lo = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let shift = 0.5 * (lo + hi);
    let scale = 0.5 * (hi - lo);
    if !scale.is_finite() || scale <= 0.0 {
        return Err(AlluvialError::validation(
            "polyfit: sample abscissae must span a non-empty finite range",
        ));
    }

    let m = degree + 1;
    // Normal equations: (V^T V) c = V^T y.
    let mut a = vec![vec![0.0f64; m + 1]; m];
    for (&x, &y) in xs.iter().zip(ys) {
        let t = (x - shift) / scale;
        let mut powers = vec![1.0f64; 2 * m - 1];
        for p in 1..powers.len() {
            powers[p] = powers[p - 1] * t;
        }
        for (r, row) in a.iter_mut().enumerate() {
            for c in 0..m {
                row[c] += powers[r + c];
            }
            row[m] += powers[r] * y;
        }
    }

    let coeffs = solve_augmented(a)?;
    Ok(Polynomial {
        coeffs,
        shift,
        scale,
    })
}

/// Gaussian elimination with partial pivoting on an `m x (m + 1)` augmented matrix.
fn solve_augmented(mut a: Vec<Vec<f64>>) -> AlluvialResult<Vec<f64>> {
    let m = a.len();
    for col in 0..m {
        let pivot = (col..m)
            .max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))
            .unwrap_or(col);
        if a[pivot][col].abs() < 1e-12 {
            return Err(AlluvialError::validation("polyfit: singular system"));
        }
        a.swap(col, pivot);

        for row in (col + 1)..m {
            let factor = a[row][col] / a[col][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..=m {
                a[row][k] -= factor * a[col][k];
            }
        }
    }

    let mut out = vec![0.0f64; m];
    for row in (0..m).rev() {
        let tail: f64 = ((row + 1)..m).map(|k| a[row][k] * out[k]).sum();
        out[row] = (a[row][m] - tail) / a[row][row];
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
