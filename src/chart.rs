//! Chart kinds a renderer can draw.

use std::fmt;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartType {
    Bar,
    Line,
    Area,
    Pie,
    Donut,
    StackedBar,
    Composed,
    Scatter,
    Radar,
}

impl ChartType {
    pub const ALL: [ChartType; 9] = [
        ChartType::Bar,
        ChartType::Line,
        ChartType::Area,
        ChartType::Pie,
        ChartType::Donut,
        ChartType::StackedBar,
        ChartType::Composed,
        ChartType::Scatter,
        ChartType::Radar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Area => "area",
            ChartType::Pie => "pie",
            ChartType::Donut => "donut",
            ChartType::StackedBar => "stacked-bar",
            ChartType::Composed => "composed",
            ChartType::Scatter => "scatter",
            ChartType::Radar => "radar",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChartType {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "bar" => Ok(ChartType::Bar),
            "line" => Ok(ChartType::Line),
            "area" => Ok(ChartType::Area),
            "pie" => Ok(ChartType::Pie),
            "donut" | "doughnut" => Ok(ChartType::Donut),
            "stacked-bar" | "stackedbar" => Ok(ChartType::StackedBar),
            "composed" => Ok(ChartType::Composed),
            "scatter" => Ok(ChartType::Scatter),
            "radar" => Ok(ChartType::Radar),
            _ => Err(anyhow!(
                "Unknown chart type '{value}'. Supported types: {}",
                ChartType::ALL.map(|c| c.as_str()).join(", ")
            )),
        }
    }
}
