//! End-to-end rendering of one query result into a [`ChartPlan`].

use log::debug;
use serde::Serialize;

use crate::{
    chart::ChartType,
    classify::{self, ColumnRole},
    data::TabularResult,
    format,
    plot::{self, MAX_PLOT_RECORDS, PlotRecord},
    select::{self, ChartSelection},
};

/// Everything a renderer needs to draw one query result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPlan {
    pub chart_type: ChartType,
    #[serde(flatten)]
    pub selection: ChartSelection,
    pub roles: Vec<ColumnRole>,
    pub records: Vec<PlotRecord>,
    /// True when `records` holds only the first [`MAX_PLOT_RECORDS`] rows.
    pub truncated: bool,
    pub total_rows: usize,
    pub colors: Vec<&'static str>,
}

/// Runs classification, selection, and record building over `result`.
/// `None` means no chart: the result is empty or has no measure column.
pub fn render(result: &TabularResult, override_type: Option<ChartType>) -> Option<ChartPlan> {
    let Some(roles) = classify::classify_result(result) else {
        debug!("Result has no rows; no chart");
        return None;
    };
    let selection = select::select(&roles, result.rows.len(), override_type)?;
    let records = plot::build(&result.rows, &selection);
    let colors = (0..selection.value_columns.len())
        .map(format::series_color)
        .collect();
    Some(ChartPlan {
        chart_type: selection.chart_type(),
        roles,
        records,
        truncated: result.rows.len() > MAX_PLOT_RECORDS,
        total_rows: result.rows.len(),
        colors,
        selection,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Value;

    #[test]
    fn plan_serializes_selection_fields_inline() {
        let result = TabularResult::from_records(
            &["CATEGORY", "REVENUE"],
            vec![
                vec![Value::from("Books"), Value::from(120.0)],
                vec![Value::from("Music"), Value::from(80.0)],
            ],
        );
        let plan = render(&result, None).unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["chartType"], "pie");
        assert_eq!(json["autoType"], "pie");
        assert_eq!(json["labelColumn"], "CATEGORY");
        assert_eq!(json["valueColumns"], serde_json::json!(["REVENUE"]));
        assert_eq!(json["overrideType"], serde_json::Value::Null);
        assert_eq!(json["truncated"], false);
        assert_eq!(json["records"][1]["label"], "Music");
        assert_eq!(json["roles"][1]["kind"], "measure");
    }

    #[test]
    fn plan_flags_truncation() {
        let result = TabularResult::from_records(
            &["N"],
            (0..25i64).map(|i| vec![Value::from(i)]),
        );
        let plan = render(&result, None).unwrap();
        assert!(plan.truncated);
        assert_eq!(plan.total_rows, 25);
        assert_eq!(plan.records.len(), MAX_PLOT_RECORDS);
    }
}
