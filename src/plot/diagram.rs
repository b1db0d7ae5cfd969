use rayon::prelude::*;

use crate::{
    aggregate::{
        aggregator::{Aggregation, ColumnMap, aggregate},
        flows::{FlowMatrix, Lode},
    },
    curve::ribbon::{flow_outline, outline_to_bez_path},
    foundation::{
        core::{BezPath, Point, Rect, Rgba8},
        error::{AlluvialError, AlluvialResult},
    },
    geometry::{
        cursor::reset_strata,
        layout::{column_positions, layout_group},
        stratum::{LabelAnchor, Stratum},
    },
    palette::strategy::{Palette, StratumKey},
    plot::config::DiagramConfig,
    table::{datum::Datum, frame::Table},
};

/// Right-hand margin added after the last column.
const X_MARGIN: f64 = 0.25;

/// `(group index, stratum index)` of one stratum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct StratumRef {
    /// Group position on the x-axis.
    pub group: usize,
    /// Stratum position within the group.
    pub stratum: usize,
}

/// One drawn flow: a closed outline between two strata of adjacent groups.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Ribbon {
    /// Stratum the flow leaves.
    pub origin: StratumRef,
    /// Stratum the flow enters.
    pub destination: StratumRef,
    /// Measured flow.
    pub lode: Lode,
    /// Origin stratum colour with the flow alpha.
    pub color: Rgba8,
    /// Top edge left to right, then bottom edge right to left.
    pub outline: Vec<Point>,
}

impl Ribbon {
    /// Closed polyline path of the outline.
    pub fn to_bez_path(&self) -> BezPath {
        outline_to_bez_path(&self.outline)
    }
}

/// One group column with its laid-out strata.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GroupColumn {
    /// Group key value.
    pub label: Datum,
    /// Horizontal centre.
    pub x: f64,
    /// Top of the stratum stack.
    pub top: f64,
    /// Strata in category order; the first is drawn on top.
    pub strata: Vec<Stratum>,
}

/// Fully laid-out alluvial diagram, ready for any rendering backend.
///
/// Coordinates use a y-up plot space with the origin at the bottom left.
/// `bounds` spans `[0, last column + 0.25]` horizontally and at least
/// `[0, plot_height]` vertically, covering every column.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Diagram {
    /// Group columns in axis order.
    pub columns: Vec<GroupColumn>,
    /// Flow matrix of every adjacent column pair.
    pub flows: Vec<FlowMatrix>,
    /// Non-empty flows; pair by pair, origin-major, destination-minor.
    pub ribbons: Vec<Ribbon>,
    /// Plot extent.
    pub bounds: Rect,
}

impl Diagram {
    /// Aggregate `table` and lay out the result.
    #[tracing::instrument(skip(table, config, palette), fields(rows = table.n_rows()))]
    pub fn build(
        table: &Table,
        columns: &ColumnMap,
        config: &DiagramConfig,
        palette: &dyn Palette,
    ) -> AlluvialResult<Self> {
        config.validate()?;
        let aggregation = aggregate(table, &config.aggregate_spec(columns.clone()))?;
        Self::from_aggregation(aggregation, config, palette)
    }

    /// Lay out an existing aggregation.
    pub fn from_aggregation(
        aggregation: Aggregation,
        config: &DiagramConfig,
        palette: &dyn Palette,
    ) -> AlluvialResult<Self> {
        config.validate()?;
        check_shape(&aggregation)?;
        let Aggregation {
            strata_by_group,
            flows,
            group_labels,
        } = aggregation;

        let layout = config.group_layout();
        let xs = column_positions(group_labels.len(), config.stratum_width, config.plot_width);

        let mut columns = Vec::with_capacity(group_labels.len());
        for (group_index, ((label, mut strata), x)) in group_labels
            .into_iter()
            .zip(strata_by_group)
            .zip(xs)
            .enumerate()
        {
            let top = layout_group(&mut strata, x, &layout)?;
            for (stratum_index, stratum) in strata.iter_mut().enumerate() {
                let key = StratumKey {
                    group_index,
                    group_label: &label,
                    stratum_index,
                    stratum_label: &stratum.label,
                    hue: stratum.hues.first(),
                };
                let color = palette.color_for(&key).with_alpha(config.stratum_alpha);
                stratum.set_color(color);
            }
            columns.push(GroupColumn {
                label,
                x,
                top,
                strata,
            });
        }

        let ribbons = (0..flows.len())
            .into_par_iter()
            .map(|i| pair_ribbons(i, &columns[i], &columns[i + 1], &flows[i], config))
            .collect::<AlluvialResult<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();
        tracing::debug!(
            columns = columns.len(),
            ribbons = ribbons.len(),
            "laid out diagram"
        );

        // Gaps are normalised with the heights, so a stack can end slightly
        // above the nominal plot height.
        let right = columns.last().map_or(0.0, |c| c.x) + X_MARGIN;
        let top = columns
            .iter()
            .map(|c| c.top)
            .fold(config.plot_height, f64::max);
        Ok(Self {
            columns,
            flows,
            ribbons,
            bounds: Rect::new(0.0, 0.0, right, top),
        })
    }

    /// Label anchors of every stratum, column by column.
    pub fn label_anchors(&self) -> Vec<LabelAnchor> {
        self.columns
            .iter()
            .flat_map(|c| c.strata.iter().map(Stratum::label_anchor))
            .collect()
    }

    /// Ribbons leaving column `group`.
    pub fn ribbons_from(&self, group: usize) -> impl Iterator<Item = &Ribbon> {
        self.ribbons.iter().filter(move |r| r.origin.group == group)
    }
}

/// Labels, strata and flow matrices must describe the same groups.
fn check_shape(aggregation: &Aggregation) -> AlluvialResult<()> {
    let n_groups = aggregation.group_labels.len();
    if aggregation.strata_by_group.len() != n_groups {
        return Err(AlluvialError::validation(format!(
            "aggregation has {n_groups} group labels but {} strata groups",
            aggregation.strata_by_group.len()
        )));
    }
    if aggregation.flows.len() != n_groups.saturating_sub(1) {
        return Err(AlluvialError::validation(format!(
            "aggregation of {n_groups} groups has {} flow matrices",
            aggregation.flows.len()
        )));
    }
    for (i, (matrix, pair)) in aggregation
        .flows
        .iter()
        .zip(aggregation.strata_by_group.windows(2))
        .enumerate()
    {
        if matrix.n_origins() != pair[0].len() || matrix.n_destinations() != pair[1].len() {
            return Err(AlluvialError::validation(format!(
                "flow matrix {i} is {}x{} but groups {i} and {} have {} and {} strata",
                matrix.n_origins(),
                matrix.n_destinations(),
                i + 1,
                pair[0].len(),
                pair[1].len()
            )));
        }
    }
    Ok(())
}

/// Ribbons between column `i` and `i + 1`.
///
/// Each pair starts from fresh cursors. Origins are visited in order and,
/// within an origin, destinations in order, so slices tile both strata from
/// the top down.
fn pair_ribbons(
    i: usize,
    origin: &GroupColumn,
    destination: &GroupColumn,
    matrix: &FlowMatrix,
    config: &DiagramConfig,
) -> AlluvialResult<Vec<Ribbon>> {
    let mut origin_cursors = reset_strata(&origin.strata);
    let mut destination_cursors = reset_strata(&destination.strata);

    let mut ribbons = Vec::new();
    for (j, (from, cursor_j)) in origin.strata.iter().zip(&mut origin_cursors).enumerate() {
        for (k, lode) in matrix.row(j).iter().enumerate() {
            let (origin_fraction, destination_fraction) = lode.fractions();
            let a = cursor_j.consume_flow(origin_fraction);
            let b = destination_cursors[k].consume_flow(destination_fraction);
            if lode.is_empty() {
                continue;
            }

            let to = &destination.strata[k];
            let outline = flow_outline(
                a,
                b,
                from.right_bound(config.flow_gap),
                to.left_bound(config.flow_gap),
                config.resolution,
                config.fit,
            )?;
            ribbons.push(Ribbon {
                origin: StratumRef { group: i, stratum: j },
                destination: StratumRef {
                    group: i + 1,
                    stratum: k,
                },
                lode: *lode,
                color: from
                    .color
                    .unwrap_or_else(Rgba8::grey)
                    .with_alpha(config.flow_alpha),
                outline,
            });
        }
    }
    Ok(ribbons)
}

#[cfg(test)]
#[path = "../../tests/unit/plot/diagram.rs"]
mod tests;
