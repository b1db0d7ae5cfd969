use rayon::prelude::*;

use crate::{
    aggregate::flows::{FlowMatrix, flow_matrix},
    foundation::error::{AlluvialError, AlluvialResult},
    geometry::stratum::Stratum,
    table::{
        datum::Datum,
        frame::{Table, TableView},
        group::{GroupOrder, group_by},
    },
};

/// Names of the table columns the engine reads.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColumnMap {
    /// Group key; one diagram column per distinct value.
    pub x: String,
    /// Category within a group.
    pub stratum: String,
    /// Identity matched across groups to measure flows.
    pub alluvium: String,
    /// Optional sub-grouping used only for colouring.
    #[serde(default)]
    pub hue: Option<String>,
}

impl ColumnMap {
    /// Column map without a hue column.
    pub fn new(
        x: impl Into<String>,
        stratum: impl Into<String>,
        alluvium: impl Into<String>,
    ) -> Self {
        Self {
            x: x.into(),
            stratum: stratum.into(),
            alluvium: alluvium.into(),
            hue: None,
        }
    }

    /// Add a hue column.
    pub fn with_hue(mut self, hue: impl Into<String>) -> Self {
        self.hue = Some(hue.into());
        self
    }
}

/// Ordering policy applied to both the group axis and the stratum axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyOrder {
    /// Order of first appearance in the table.
    #[default]
    FirstSeen,
    /// Ascending value order.
    Sorted,
}

impl KeyOrder {
    fn group_order(self) -> GroupOrder {
        match self {
            Self::FirstSeen => GroupOrder::FirstSeen,
            Self::Sorted => GroupOrder::Sorted,
        }
    }
}

/// What to aggregate and how to order it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AggregateSpec {
    /// Column names.
    pub columns: ColumnMap,
    /// Group and stratum ordering.
    #[serde(default)]
    pub order: KeyOrder,
    /// Fixed stratum categories for every group. An unobserved level becomes
    /// an empty stratum, which is an error.
    #[serde(default)]
    pub stratum_levels: Option<Vec<Datum>>,
}

impl AggregateSpec {
    /// Spec with first-seen ordering and no fixed levels.
    pub fn new(columns: ColumnMap) -> Self {
        Self {
            columns,
            order: KeyOrder::default(),
            stratum_levels: None,
        }
    }

    /// Replace the ordering policy.
    pub fn with_order(mut self, order: KeyOrder) -> Self {
        self.order = order;
        self
    }

    /// Fix the stratum categories.
    pub fn with_stratum_levels(mut self, levels: Vec<Datum>) -> Self {
        self.stratum_levels = Some(levels);
        self
    }
}

/// Result of [`aggregate`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Aggregation {
    /// Strata of every group in axis order, each in stratum order.
    pub strata_by_group: Vec<Vec<Stratum>>,
    /// Flow matrix of every adjacent group pair; `flows[i]` links group `i` to `i + 1`.
    pub flows: Vec<FlowMatrix>,
    /// Group key values in axis order.
    pub group_labels: Vec<Datum>,
}

impl Aggregation {
    /// Number of groups.
    pub fn n_groups(&self) -> usize {
        self.group_labels.len()
    }

    /// Relative stratum heights per group.
    pub fn relative_heights(&self) -> Vec<Vec<f64>> {
        self.strata_by_group
            .iter()
            .map(|g| g.iter().map(|s| s.relative_height).collect())
            .collect()
    }
}

/// Split `table` into groups and strata, size every stratum relative to its
/// group and measure the flows between every pair of adjacent groups.
///
/// Fails with [`AlluvialError::MissingColumn`] for unknown columns,
/// [`AlluvialError::InvalidGroupCount`] when fewer than two groups exist and
/// [`AlluvialError::EmptyGroup`] when a group or stratum has no rows.
#[tracing::instrument(skip(table, spec), fields(rows = table.n_rows()))]
pub fn aggregate(table: &Table, spec: &AggregateSpec) -> AlluvialResult<Aggregation> {
    let cols = &spec.columns;
    table.column(&cols.x)?;
    table.column(&cols.stratum)?;
    table.column(&cols.alluvium)?;
    if let Some(hue) = &cols.hue {
        table.column(hue)?;
    }

    let group_order = spec.order.group_order();
    let stratum_order = match &spec.stratum_levels {
        Some(levels) => GroupOrder::Levels(levels.clone()),
        None => group_order.clone(),
    };

    let groups = group_by(&table.view(), &cols.x, &group_order)?;
    if groups.len() < 2 {
        return Err(AlluvialError::InvalidGroupCount(groups.len()));
    }
    tracing::debug!(groups = groups.len(), "split table into groups");

    let mut group_labels = Vec::with_capacity(groups.len());
    let mut strata_by_group = Vec::with_capacity(groups.len());
    let mut stratum_rows: Vec<Vec<TableView<'_>>> = Vec::with_capacity(groups.len());
    for (group_label, group) in &groups {
        let (strata, rows) = split_group(group_label, group, cols, &stratum_order)?;
        group_labels.push(group_label.clone());
        strata_by_group.push(strata);
        stratum_rows.push(rows);
    }

    let flows = stratum_rows
        .par_windows(2)
        .map(|pair| flow_matrix(&pair[0], &pair[1], &cols.alluvium))
        .collect::<AlluvialResult<Vec<_>>>()?;
    tracing::debug!(pairs = flows.len(), "computed flow matrices");

    Ok(Aggregation {
        strata_by_group,
        flows,
        group_labels,
    })
}

fn split_group<'a>(
    group_label: &Datum,
    group: &TableView<'a>,
    cols: &ColumnMap,
    order: &GroupOrder,
) -> AlluvialResult<(Vec<Stratum>, Vec<TableView<'a>>)> {
    if group.is_empty() {
        return Err(AlluvialError::empty_group(group_label.to_string()));
    }

    let split = group_by(group, &cols.stratum, order)?;
    // Levels may drop rows, so size against the rows that landed in a stratum.
    let total: usize = split.iter().map(|(_, rows)| rows.len()).sum();
    if total == 0 {
        return Err(AlluvialError::empty_group(group_label.to_string()));
    }

    let mut strata = Vec::with_capacity(split.len());
    let mut rows = Vec::with_capacity(split.len());
    for (label, view) in split {
        if view.is_empty() {
            return Err(AlluvialError::empty_stratum(
                group_label.to_string(),
                label.to_string(),
            ));
        }
        let hues = match &cols.hue {
            Some(hue) => group_by(&view, hue, &GroupOrder::FirstSeen)?
                .into_iter()
                .map(|(h, _)| h)
                .collect(),
            None => Vec::new(),
        };
        let relative_height = view.len() as f64 / total as f64;
        strata.push(Stratum::new(label, relative_height, view.len()).with_hues(hues));
        rows.push(view);
    }
    Ok((strata, rows))
}

#[cfg(test)]
#[path = "../../tests/unit/aggregate/aggregator.rs"]
mod tests;
