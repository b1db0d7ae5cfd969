use std::collections::HashSet;

use crate::{
    foundation::error::{AlluvialError, AlluvialResult},
    table::datum::Datum,
};

/// A named column of categorical cells.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Column {
    /// Column name as referenced by callers.
    pub name: String,
    /// Cell values, one per row.
    pub values: Vec<Datum>,
}

/// In-memory, column-major table of equal-length named columns.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Table {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Table {
    /// Build a table from `(name, values)` pairs. Columns must share one length
    /// and names must be unique.
    pub fn from_columns<I, S>(columns: I) -> AlluvialResult<Self>
    where
        I: IntoIterator<Item = (S, Vec<Datum>)>,
        S: Into<String>,
    {
        let columns: Vec<Column> = columns
            .into_iter()
            .map(|(name, values)| Column {
                name: name.into(),
                values,
            })
            .collect();

        let mut seen = HashSet::with_capacity(columns.len());
        for c in &columns {
            if !seen.insert(c.name.as_str()) {
                return Err(AlluvialError::validation(format!(
                    "duplicate column \"{}\"",
                    c.name
                )));
            }
        }

        let n_rows = columns.first().map_or(0, |c| c.values.len());
        if let Some(bad) = columns.iter().find(|c| c.values.len() != n_rows) {
            return Err(AlluvialError::validation(format!(
                "column \"{}\" has {} rows, expected {n_rows}",
                bad.name,
                bad.values.len()
            )));
        }
        Ok(Self { columns, n_rows })
    }

    /// Build a table from JSON records. The column set is the union of all
    /// record keys in first-seen order; absent fields become [`Datum::Null`].
    pub fn from_records(
        records: &[serde_json::Map<String, serde_json::Value>],
    ) -> AlluvialResult<Self> {
        let mut names: Vec<&str> = Vec::new();
        let mut known = HashSet::new();
        for rec in records {
            for key in rec.keys() {
                if known.insert(key.as_str()) {
                    names.push(key.as_str());
                }
            }
        }

        let mut columns = Vec::with_capacity(names.len());
        for name in names {
            let mut values = Vec::with_capacity(records.len());
            for rec in records {
                values.push(match rec.get(name) {
                    Some(v) => Datum::from_json(v)?,
                    None => Datum::Null,
                });
            }
            columns.push((name.to_owned(), values));
        }
        Self::from_columns(columns)
    }

    /// Build a table from either an array of records or an object of column arrays.
    pub fn from_json(value: &serde_json::Value) -> AlluvialResult<Self> {
        use serde_json::Value;
        match value {
            Value::Array(items) => {
                let mut records = Vec::with_capacity(items.len());
                for (idx, item) in items.iter().enumerate() {
                    match item {
                        Value::Object(map) => records.push(map.clone()),
                        _ => {
                            return Err(AlluvialError::validation(format!(
                                "record {idx} is not a JSON object"
                            )));
                        }
                    }
                }
                Self::from_records(&records)
            }
            Value::Object(map) => {
                let mut columns = Vec::with_capacity(map.len());
                for (name, cells) in map {
                    let Value::Array(cells) = cells else {
                        return Err(AlluvialError::validation(format!(
                            "column \"{name}\" is not a JSON array"
                        )));
                    };
                    let values = cells
                        .iter()
                        .map(Datum::from_json)
                        .collect::<AlluvialResult<Vec<_>>>()?;
                    columns.push((name.clone(), values));
                }
                Self::from_columns(columns)
            }
            _ => Err(AlluvialError::validation(
                "table JSON must be an array of records or an object of columns",
            )),
        }
    }

    /// Parse a JSON document with [`Table::from_json`].
    pub fn from_json_str(s: &str) -> AlluvialResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(s).map_err(|e| AlluvialError::serde(e.to_string()))?;
        Self::from_json(&value)
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Column names in table order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Cells of the column called `name`.
    pub fn column(&self, name: &str) -> AlluvialResult<&[Datum]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
            .ok_or_else(|| AlluvialError::MissingColumn(name.to_owned()))
    }

    /// A view over every row, in table order.
    pub fn view(&self) -> TableView<'_> {
        TableView {
            table: self,
            rows: (0..self.n_rows).collect(),
        }
    }
}

/// A borrowed selection of rows of a [`Table`].
///
/// Views hold row indices only; narrowing a view (for example by nested
/// grouping) never copies cell data.
#[derive(Clone, Debug)]
pub struct TableView<'a> {
    table: &'a Table,
    rows: Vec<usize>,
}

impl<'a> TableView<'a> {
    pub(crate) fn select(&self, rows: Vec<usize>) -> Self {
        Self {
            table: self.table,
            rows,
        }
    }

    /// Number of selected rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows are selected.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Selected row indices into the underlying table.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// The underlying table.
    pub fn table(&self) -> &'a Table {
        self.table
    }

    /// Iterate the cells of column `name` for the selected rows, in view order.
    pub fn values(&self, name: &str) -> AlluvialResult<impl Iterator<Item = &'a Datum> + '_> {
        let column = self.table.column(name)?;
        Ok(self.rows.iter().map(move |&r| &column[r]))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/table/frame.rs"]
mod tests;
