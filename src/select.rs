//! Chart type selection.
//!
//! The default chart is picked by walking [`DECISION_RULES`] in order; every
//! rule whose predicate holds replaces the previous winner, so the last
//! matching rule decides. The set of chart types a user may switch to is
//! computed separately by [`available_types`] from the same column counts.

use log::{debug, warn};
use serde::Serialize;

use crate::{chart::ChartType, classify::ColumnRole};

/// Results with at most this many rows may default to a pie chart.
pub const PIE_MAX_ROWS: usize = 6;

/// Column-role counts that every selection rule is expressed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DataShape {
    pub row_count: usize,
    pub measures: usize,
    pub dimensions: usize,
    pub temporals: usize,
}

impl DataShape {
    pub fn from_roles(roles: &[ColumnRole], row_count: usize) -> Self {
        let mut shape = DataShape {
            row_count,
            ..DataShape::default()
        };
        for role in roles {
            if role.is_measure() {
                shape.measures += 1;
            } else if role.is_temporal() {
                shape.temporals += 1;
            } else {
                shape.dimensions += 1;
            }
        }
        shape
    }

    fn is_measures_only(&self) -> bool {
        self.measures >= 2 && self.dimensions == 0 && self.temporals == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSource {
    /// First dimension, else first temporal, else first declared column.
    Default,
    FirstTemporal,
}

pub struct DecisionRule {
    pub name: &'static str,
    pub applies: fn(&DataShape) -> bool,
    pub chart: fn(&DataShape) -> ChartType,
    pub label: LabelSource,
}

pub const DECISION_RULES: &[DecisionRule] = &[
    DecisionRule {
        name: "base",
        applies: |_| true,
        chart: |_| ChartType::Bar,
        label: LabelSource::Default,
    },
    DecisionRule {
        name: "single-series-share",
        applies: |shape| {
            shape.row_count <= PIE_MAX_ROWS && shape.measures == 1 && shape.dimensions == 1
        },
        chart: |_| ChartType::Pie,
        label: LabelSource::Default,
    },
    DecisionRule {
        name: "time-series",
        applies: |shape| shape.temporals >= 1 && shape.measures >= 1,
        chart: |shape| {
            if shape.measures == 1 {
                ChartType::Line
            } else {
                ChartType::Area
            }
        },
        label: LabelSource::FirstTemporal,
    },
    DecisionRule {
        name: "measure-correlation",
        applies: |shape| shape.is_measures_only(),
        chart: |_| ChartType::Scatter,
        label: LabelSource::Default,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub rule: &'static str,
    pub chart: ChartType,
    pub label: LabelSource,
}

pub fn decide(shape: &DataShape) -> Decision {
    let mut decision = Decision {
        rule: "base",
        chart: ChartType::Bar,
        label: LabelSource::Default,
    };
    for rule in DECISION_RULES {
        if (rule.applies)(shape) {
            decision = Decision {
                rule: rule.name,
                chart: (rule.chart)(shape),
                label: rule.label,
            };
        }
    }
    decision
}

pub fn available_types(shape: &DataShape) -> Vec<ChartType> {
    let mut types = vec![ChartType::Bar, ChartType::Line, ChartType::Area];
    if shape.measures == 1 {
        types.extend([ChartType::Pie, ChartType::Donut]);
    }
    if shape.measures > 1 {
        types.extend([ChartType::StackedBar, ChartType::Composed]);
    }
    if shape.is_measures_only() {
        types.push(ChartType::Scatter);
    }
    if shape.measures >= 3 {
        types.push(ChartType::Radar);
    }
    types
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSelection {
    pub auto_type: ChartType,
    pub available_types: Vec<ChartType>,
    pub override_type: Option<ChartType>,
    pub label_column: String,
    /// Columns plotted by the effective chart type; never empty.
    pub value_columns: Vec<String>,
}

impl ChartSelection {
    /// The chart to draw: a valid override, otherwise the automatic default.
    pub fn chart_type(&self) -> ChartType {
        self.override_type.unwrap_or(self.auto_type)
    }

    pub fn is_available(&self, chart: ChartType) -> bool {
        self.available_types.contains(&chart)
    }
}

/// Picks the default chart, the switchable set, and the columns to plot.
///
/// Returns `None` when no column is a measure: there is nothing to draw.
/// An `override_type` outside the available set is discarded.
pub fn select(
    roles: &[ColumnRole],
    row_count: usize,
    override_type: Option<ChartType>,
) -> Option<ChartSelection> {
    let shape = DataShape::from_roles(roles, row_count);
    if shape.measures == 0 {
        debug!("No measure columns among {} column(s); no chart", roles.len());
        return None;
    }

    let decision = decide(&shape);
    let available = available_types(&shape);
    let override_type = override_type.filter(|chart| {
        let valid = available.contains(chart);
        if !valid {
            warn!("Ignoring chart override '{chart}': not available for this result");
        }
        valid
    });
    debug!(
        "Rule '{}' selected {} for {shape:?}; override {override_type:?}",
        decision.rule, decision.chart
    );

    let label_column = match decision.label {
        LabelSource::FirstTemporal => first_of(roles, ColumnRole::is_temporal),
        LabelSource::Default => None,
    }
    .or_else(|| default_label(roles))?;

    let effective = override_type.unwrap_or(decision.chart);
    let measures = roles
        .iter()
        .filter(|role| role.is_measure())
        .map(|role| role.name.clone());
    let value_columns = if effective == ChartType::Scatter {
        measures.take(2).collect()
    } else {
        measures.collect()
    };

    Some(ChartSelection {
        auto_type: decision.chart,
        available_types: available,
        override_type,
        label_column,
        value_columns,
    })
}

fn first_of(roles: &[ColumnRole], predicate: fn(&ColumnRole) -> bool) -> Option<String> {
    roles
        .iter()
        .find(|role| predicate(role))
        .map(|role| role.name.clone())
}

fn default_label(roles: &[ColumnRole]) -> Option<String> {
    first_of(roles, ColumnRole::is_dimension)
        .or_else(|| first_of(roles, ColumnRole::is_temporal))
        .or_else(|| roles.first().map(|role| role.name.clone()))
}
