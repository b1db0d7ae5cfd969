use std::collections::HashSet;

use crate::{
    foundation::error::AlluvialResult,
    table::{datum::Datum, frame::TableView},
};

/// Flow between one origin stratum and one destination stratum.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Lode {
    /// Destination rows whose alluvium also occurs in the origin stratum.
    pub count: usize,
    /// `count` as a share of the origin stratum's rows.
    pub origin_fraction: f64,
    /// `count` as a share of the destination stratum's rows.
    pub destination_fraction: f64,
}

impl Lode {
    /// `(origin_fraction, destination_fraction)`.
    pub fn fractions(&self) -> (f64, f64) {
        (self.origin_fraction, self.destination_fraction)
    }

    /// Whether no rows flow along this lode.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Flows between the strata of two adjacent groups, indexed
/// `[origin_stratum][destination_stratum]`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FlowMatrix {
    cells: Vec<Vec<Lode>>,
    n_destinations: usize,
}

impl FlowMatrix {
    /// Number of origin strata.
    pub fn n_origins(&self) -> usize {
        self.cells.len()
    }

    /// Number of destination strata.
    pub fn n_destinations(&self) -> usize {
        self.n_destinations
    }

    /// Lode from origin `j` to destination `k`.
    pub fn get(&self, j: usize, k: usize) -> Option<&Lode> {
        self.cells.get(j).and_then(|row| row.get(k))
    }

    /// All lodes leaving origin `j`, in destination order.
    pub fn row(&self, j: usize) -> &[Lode] {
        self.cells.get(j).map_or(&[], Vec::as_slice)
    }

    /// Rows in origin order.
    pub fn rows(&self) -> impl Iterator<Item = &[Lode]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Sum of origin-side fractions leaving origin `j`. This is 1 when every
    /// alluvium of `j` reappears in the next group.
    pub fn origin_sum(&self, j: usize) -> f64 {
        self.row(j).iter().map(|l| l.origin_fraction).sum()
    }

    /// Sum of destination-side fractions arriving at destination `k`.
    pub fn destination_sum(&self, k: usize) -> f64 {
        self.cells
            .iter()
            .filter_map(|row| row.get(k))
            .map(|l| l.destination_fraction)
            .sum()
    }
}

/// Flow matrix between the strata of two adjacent groups.
///
/// A destination row counts towards origin `j` when its alluvium value occurs
/// anywhere in `j` (set membership, not an equality join), so repeated
/// alluvium values in the destination are each counted.
pub(crate) fn flow_matrix(
    origins: &[TableView<'_>],
    destinations: &[TableView<'_>],
    alluvium: &str,
) -> AlluvialResult<FlowMatrix> {
    let destination_ids = destinations
        .iter()
        .map(|d| d.values(alluvium).map(|ids| ids.collect::<Vec<&Datum>>()))
        .collect::<AlluvialResult<Vec<_>>>()?;

    let mut cells = Vec::with_capacity(origins.len());
    for origin in origins {
        let origin_ids: HashSet<&Datum> = origin.values(alluvium)?.collect();
        let origin_len = origin.len() as f64;

        let row = destination_ids
            .iter()
            .map(|ids| {
                let count = ids.iter().filter(|id| origin_ids.contains(**id)).count();
                Lode {
                    count,
                    origin_fraction: count as f64 / origin_len,
                    destination_fraction: count as f64 / ids.len() as f64,
                }
            })
            .collect();
        cells.push(row);
    }

    Ok(FlowMatrix {
        cells,
        n_destinations: destinations.len(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/aggregate/flows.rs"]
mod tests;
