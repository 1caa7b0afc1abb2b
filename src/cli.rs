use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::chart::ChartType;

#[derive(Debug, Parser)]
#[command(author, version, about = "Infer chart configurations from query results", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify columns, pick a chart, and emit the plotting payload
    Plan(PlanArgs),
    /// Show the role inferred for each column
    Classify(InputArgs),
    /// List the chart types available for a result
    Types(InputArgs),
}

#[derive(Debug, Args)]
pub struct InputArgs {
    /// Query result JSON (bare result or full response envelope); `-` reads stdin
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
}

#[derive(Debug, Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub source: InputArgs,
    /// Chart type to use instead of the automatic choice
    #[arg(long = "chart", value_parser = parse_chart_type)]
    pub chart: Option<ChartType>,
    /// Output format
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,
    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
#[value(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

pub fn parse_chart_type(value: &str) -> Result<ChartType, String> {
    value.parse::<ChartType>().map_err(|err| err.to_string())
}
