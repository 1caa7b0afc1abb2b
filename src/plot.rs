//! Projection of result rows into chart-ready records.
//!
//! Only the first [`MAX_PLOT_RECORDS`] rows are plotted, in their original
//! order. The cap bounds rendering cost; it is not an aggregate, so callers
//! that need totals over the full result must compute them from the rows.

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{
    chart::ChartType,
    data::{Row, Value},
    select::ChartSelection,
};

pub const MAX_PLOT_RECORDS: usize = 20;

pub const UNKNOWN_LABEL: &str = "Unknown";

/// Value key used for the y axis of a scatter chart fed a single measure.
/// Suffixed with `_` when the measure itself already uses this name.
pub const SCATTER_Y_FALLBACK: &str = "y";

#[derive(Debug, Clone, PartialEq)]
pub struct PlotValue {
    pub column: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotRecord {
    pub label: String,
    pub values: Vec<PlotValue>,
}

impl PlotRecord {
    pub fn value(&self, column: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|v| v.column == column)
            .map(|v| v.value)
    }
}

/// Serializes as `{"label": .., "values": {"<column>": n, ..}}`, keeping
/// column names out of the label's key space.
impl Serialize for PlotRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("label", &self.label)?;
        map.serialize_entry("values", &ColumnValues(&self.values))?;
        map.end()
    }
}

struct ColumnValues<'a>(&'a [PlotValue]);

impl Serialize for ColumnValues<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            map.serialize_entry(&entry.column, &entry.value)?;
        }
        map.end()
    }
}

fn scatter_y_key(columns: &[String]) -> String {
    let mut key = SCATTER_Y_FALLBACK.to_string();
    while columns.contains(&key) {
        key.push('_');
    }
    key
}

/// Builds at most [`MAX_PLOT_RECORDS`] records from `rows`. Never fails:
/// unreadable numbers plot as zero and missing labels as [`UNKNOWN_LABEL`].
pub fn build(rows: &[Row], selection: &ChartSelection) -> Vec<PlotRecord> {
    let pad_scatter = (selection.chart_type() == ChartType::Scatter
        && selection.value_columns.len() < 2)
        .then(|| scatter_y_key(&selection.value_columns));
    rows.iter()
        .take(MAX_PLOT_RECORDS)
        .map(|row| {
            let label = row
                .get(&selection.label_column)
                .and_then(Value::as_label)
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string());
            let mut values = selection
                .value_columns
                .iter()
                .map(|column| PlotValue {
                    column: column.clone(),
                    value: row.get(column).map(Value::to_number).unwrap_or(0.0),
                })
                .collect::<Vec<_>>();
            if let Some(y_key) = &pad_scatter {
                values.push(PlotValue {
                    column: y_key.clone(),
                    value: 0.0,
                });
            }
            PlotRecord { label, values }
        })
        .collect()
}
