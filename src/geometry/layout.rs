use crate::{
    foundation::error::{AlluvialError, AlluvialResult},
    geometry::{normalizer::Normalizer, stratum::Stratum},
};

/// Vertical layout parameters shared by every group column.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GroupLayout {
    /// Nominal column height.
    pub scale: f64,
    /// Gap between stacked strata.
    pub gap: f64,
    /// Rectangle width.
    pub width: f64,
}

impl GroupLayout {
    /// Reject non-finite or non-positive sizes and negative gaps.
    pub fn validate(&self) -> AlluvialResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(AlluvialError::validation("layout scale must be > 0"));
        }
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(AlluvialError::validation("layout gap must be >= 0"));
        }
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(AlluvialError::validation("layout width must be >= 0"));
        }
        Ok(())
    }
}

/// Assign geometry to the strata of one group centred at `x`.
///
/// Heights are normalised against `scale + gap * (n - 1)` so the stack,
/// gaps included, fits the nominal column height. Strata are stacked upward
/// from y = 0 in reverse order, which puts the first category on top.
/// Returns the y-coordinate of the top of the stack.
pub fn layout_group(strata: &mut [Stratum], x: f64, layout: &GroupLayout) -> AlluvialResult<f64> {
    layout.validate()?;
    if strata.is_empty() {
        return Ok(0.0);
    }

    let gaps = layout.gap * (strata.len() - 1) as f64;
    let norm = Normalizer::new(0.0, layout.scale + gaps)?;

    let mut y = 0.0;
    for stratum in strata.iter_mut().rev() {
        stratum.set_height(layout.scale, Some(&norm));
        stratum.set_width(layout.width);
        stratum.set_xy(x, y);
        y += stratum.height + layout.gap;
    }
    Ok(y - layout.gap)
}

/// Horizontal centre of each of `n_groups` columns spread over `plot_width`,
/// the first centred half a stratum width from the origin.
pub fn column_positions(n_groups: usize, stratum_width: f64, plot_width: f64) -> Vec<f64> {
    if n_groups == 0 {
        return Vec::new();
    }
    let step = plot_width / n_groups as f64;
    (0..n_groups)
        .map(|i| stratum_width / 2.0 + step * i as f64)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/layout.rs"]
mod tests;
