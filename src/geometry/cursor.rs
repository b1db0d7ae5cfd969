use crate::geometry::stratum::Stratum;

/// Slack allowed below zero before a cursor counts as overconsumed, relative
/// to the stratum height.
const OVERCONSUMPTION_TOLERANCE: f64 = 1e-9;

/// Vertical slice of a stratum claimed by one flow.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FlowSlice {
    /// Upper y-coordinate.
    pub top: f64,
    /// Lower y-coordinate.
    pub bottom: f64,
}

impl FlowSlice {
    /// Slice thickness.
    pub fn width(&self) -> f64 {
        self.top - self.bottom
    }
}

/// Remaining unclaimed height of one stratum during a flow-drawing round.
///
/// Flows are carved from the top of the unclaimed region downward, so the
/// order of [`LodeCursor::consume_flow`] calls fixes the stacking of ribbons
/// against the stratum. A cursor belongs to exactly one round; start the next
/// round with a fresh cursor or [`LodeCursor::reset_lode_position`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LodeCursor {
    base_y: f64,
    height: f64,
    lode_position: f64,
}

impl LodeCursor {
    /// Cursor over `[base_y, base_y + height]`, fully unclaimed.
    pub fn new(base_y: f64, height: f64) -> Self {
        Self {
            base_y,
            height,
            lode_position: height,
        }
    }

    /// Remaining unclaimed height, measured up from the stratum's bottom edge.
    pub fn lode_position(&self) -> f64 {
        self.lode_position
    }

    /// Reclaim the full stratum height.
    pub fn reset_lode_position(&mut self) {
        self.lode_position = self.height;
    }

    /// Claim `relative_flow_width` of the stratum's height below what is
    /// already claimed and return the claimed slice.
    ///
    /// Claiming more than is left is not an error: the slice extends below the
    /// stratum and an overconsumption warning is logged.
    pub fn consume_flow(&mut self, relative_flow_width: f64) -> FlowSlice {
        let flow_width = self.height * relative_flow_width;
        let top = self.lode_position + self.base_y;
        let bottom = top - flow_width;
        self.lode_position -= flow_width;

        if self.is_overconsumed() {
            tracing::warn!(
                base_y = self.base_y,
                height = self.height,
                lode_position = self.lode_position,
                relative_flow_width,
                "overconsumption: flows claim more than the stratum height"
            );
        }

        FlowSlice { top, bottom }
    }

    /// Whether more than the full height has been claimed.
    pub fn is_overconsumed(&self) -> bool {
        self.lode_position < -OVERCONSUMPTION_TOLERANCE * self.height.abs().max(1.0)
    }
}

/// Fresh cursors for every stratum of a group, in group order.
pub fn reset_strata(strata: &[Stratum]) -> Vec<LodeCursor> {
    strata.iter().map(Stratum::lode_cursor).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/cursor.rs"]
mod tests;
