use std::collections::{BTreeMap, HashMap};

use crate::{
    foundation::error::{AlluvialError, AlluvialResult},
    table::{datum::Datum, frame::TableView},
};

/// Order in which the sub-views of a split are returned.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupOrder {
    /// Order of first appearance in the parent view.
    #[default]
    FirstSeen,
    /// Ascending [`Datum`] order.
    Sorted,
    /// Explicit category levels. Every level yields a sub-view, even an empty
    /// one; rows whose key is not a level are dropped.
    Levels(Vec<Datum>),
}

/// Stable split of `view` by the values of column `key`.
///
/// Rows inside each sub-view keep their order from `view`.
pub fn group_by<'a>(
    view: &TableView<'a>,
    key: &str,
    order: &GroupOrder,
) -> AlluvialResult<Vec<(Datum, TableView<'a>)>> {
    let keys = view.values(key)?;
    let rows = view.rows();

    let groups: Vec<(Datum, Vec<usize>)> = match order {
        GroupOrder::FirstSeen => {
            let mut slots: HashMap<&Datum, usize> = HashMap::new();
            let mut out: Vec<(Datum, Vec<usize>)> = Vec::new();
            for (&row, k) in rows.iter().zip(keys) {
                let slot = *slots.entry(k).or_insert_with(|| {
                    out.push((k.clone(), Vec::new()));
                    out.len() - 1
                });
                out[slot].1.push(row);
            }
            out
        }
        GroupOrder::Sorted => {
            let mut sorted: BTreeMap<&Datum, Vec<usize>> = BTreeMap::new();
            for (&row, k) in rows.iter().zip(keys) {
                sorted.entry(k).or_default().push(row);
            }
            sorted.into_iter().map(|(k, r)| (k.clone(), r)).collect()
        }
        GroupOrder::Levels(levels) => {
            let mut slots: HashMap<&Datum, usize> = HashMap::with_capacity(levels.len());
            for (idx, level) in levels.iter().enumerate() {
                if slots.insert(level, idx).is_some() {
                    return Err(AlluvialError::validation(format!(
                        "duplicate level \"{level}\" for column \"{key}\""
                    )));
                }
            }
            let mut out: Vec<(Datum, Vec<usize>)> =
                levels.iter().map(|l| (l.clone(), Vec::new())).collect();
            for (&row, k) in rows.iter().zip(keys) {
                if let Some(&slot) = slots.get(k) {
                    out[slot].1.push(row);
                }
            }
            out
        }
    };

    Ok(groups
        .into_iter()
        .map(|(k, r)| (k, view.select(r)))
        .collect())
}

/// Successive overlapping pairs: `[a, b, c]` yields `(a, b), (b, c)`.
pub fn pairwise<T>(items: &[T]) -> impl Iterator<Item = (&T, &T)> {
    items.windows(2).map(|w| (&w[0], &w[1]))
}

#[cfg(test)]
#[path = "../../tests/unit/table/group.rs"]
mod tests;
