use crate::{
    aggregate::aggregator::{AggregateSpec, ColumnMap, KeyOrder},
    curve::fit::{FitMode, MAX_RESOLUTION},
    foundation::error::{AlluvialError, AlluvialResult},
    geometry::layout::GroupLayout,
    table::datum::Datum,
};

/// Sizes and styling knobs for [`crate::Diagram`]. Every field has a default,
/// so a partial JSON object is a valid config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Nominal column height, gaps included.
    pub plot_height: f64,
    /// Horizontal space shared out between the group columns.
    pub plot_width: f64,
    /// Width of every stratum rectangle.
    pub stratum_width: f64,
    /// Vertical gap between stacked strata.
    pub stratum_gap: f64,
    /// Horizontal clearance between a stratum edge and the ribbons touching it.
    pub flow_gap: f64,
    /// Samples per curve segment.
    pub resolution: usize,
    /// Ribbon edge curve.
    pub fit: FitMode,
    /// Alpha applied to stratum colours.
    pub stratum_alpha: f64,
    /// Alpha applied to ribbon colours.
    pub flow_alpha: f64,
    /// Group and stratum ordering.
    pub order: KeyOrder,
    /// Fixed stratum categories, see [`AggregateSpec::stratum_levels`].
    pub stratum_levels: Option<Vec<Datum>>,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            plot_height: 100.0,
            plot_width: 150.0,
            stratum_width: 1.0,
            stratum_gap: 1.0,
            flow_gap: 0.5,
            resolution: 50,
            fit: FitMode::default(),
            stratum_alpha: 0.5,
            flow_alpha: 0.5,
            order: KeyOrder::default(),
            stratum_levels: None,
        }
    }
}

impl DiagramConfig {
    /// Reject non-positive sizes, negative gaps, alphas outside `[0, 1]` and bad fit parameters.
    pub fn validate(&self) -> AlluvialResult<()> {
        positive("plot_height", self.plot_height)?;
        positive("plot_width", self.plot_width)?;
        positive("stratum_width", self.stratum_width)?;
        non_negative("stratum_gap", self.stratum_gap)?;
        non_negative("flow_gap", self.flow_gap)?;
        if !(2..=MAX_RESOLUTION).contains(&self.resolution) {
            return Err(AlluvialError::validation(format!(
                "resolution must be in [2, {MAX_RESOLUTION}], got {}",
                self.resolution
            )));
        }
        unit("stratum_alpha", self.stratum_alpha)?;
        unit("flow_alpha", self.flow_alpha)?;
        self.fit.validate()
    }

    /// Vertical layout shared by every group column.
    pub fn group_layout(&self) -> GroupLayout {
        GroupLayout {
            scale: self.plot_height,
            gap: self.stratum_gap,
            width: self.stratum_width,
        }
    }

    /// Aggregation request for `columns` using this config's ordering.
    pub fn aggregate_spec(&self, columns: ColumnMap) -> AggregateSpec {
        AggregateSpec {
            columns,
            order: self.order,
            stratum_levels: self.stratum_levels.clone(),
        }
    }
}

fn positive(name: &str, v: f64) -> AlluvialResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(AlluvialError::validation(format!("{name} must be > 0, got {v}")))
    }
}

fn non_negative(name: &str, v: f64) -> AlluvialResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(AlluvialError::validation(format!("{name} must be >= 0, got {v}")))
    }
}

fn unit(name: &str, v: f64) -> AlluvialResult<()> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(AlluvialError::validation(format!(
            "{name} must be in [0, 1], got {v}"
        )))
    }
}
