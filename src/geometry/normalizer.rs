use crate::foundation::error::{AlluvialError, AlluvialResult};

/// Linear map from `[vmin, vmax]` onto `[0, 1]`, optionally rescaled.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Normalizer {
    /// Value mapped to 0.
    pub vmin: f64,
    /// Value mapped to 1.
    pub vmax: f64,
}

impl Normalizer {
    /// Build a normalizer; the range must be finite and non-empty.
    pub fn new(vmin: f64, vmax: f64) -> AlluvialResult<Self> {
        if !vmin.is_finite() || !vmax.is_finite() || vmax <= vmin {
            return Err(AlluvialError::validation(format!(
                "normalizer range [{vmin}, {vmax}] must be finite with vmax > vmin"
            )));
        }
        Ok(Self { vmin, vmax })
    }

    /// Map `v` to its position in `[0, 1]` (values outside the range extrapolate).
    pub fn normalize(&self, v: f64) -> f64 {
        (v - self.vmin) / (self.vmax - self.vmin)
    }

    /// Map `v` onto `[0, scale]`.
    pub fn scaled(&self, v: f64, scale: f64) -> f64 {
        self.normalize(v) * scale
    }
}
