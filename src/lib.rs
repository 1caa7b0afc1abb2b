pub mod chart;
pub mod classify;
pub mod cli;
pub mod data;
pub mod error;
pub mod format;
pub mod io_utils;
pub mod plan;
pub mod plot;
pub mod select;
pub mod session;
pub mod table;

use std::{env, sync::OnceLock};

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use log::{LevelFilter, info, warn};

use crate::{
    cli::{Cli, Commands, InputArgs, OutputFormat, PlanArgs},
    data::TabularResult,
    session::ChartSession,
};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("chart_inference", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Plan(args) => handle_plan(&args),
        Commands::Classify(args) => handle_classify(&args),
        Commands::Types(args) => handle_types(&args),
    }
}

fn load(args: &InputArgs) -> Result<TabularResult> {
    let result = io_utils::load_result(&args.input)
        .with_context(|| format!("Loading query result from {:?}", args.input))?;
    info!(
        "Loaded {} row(s) across {} column(s){}",
        result.rows.len(),
        result.columns.len(),
        result
            .execution_time
            .map(|ms| format!(" (query took {ms:.0} ms)"))
            .unwrap_or_default()
    );
    Ok(result)
}

fn handle_plan(args: &PlanArgs) -> Result<()> {
    let mut session = ChartSession::new();
    session.receive(load(&args.source)?);
    if let Some(chart) = args.chart
        && !session.set_override(chart)
    {
        warn!("Chart type '{chart}' is not available for this result; using the automatic choice");
    }

    let Some(plan) = session.plan() else {
        println!("No chart available: the result has no rows or no numeric measure column");
        return Ok(());
    };
    info!(
        "Selected {} chart (automatic: {}) labelled by '{}'",
        plan.chart_type, plan.selection.auto_type, plan.selection.label_column
    );
    if plan.truncated {
        info!(
            "Plotting the first {} of {} row(s)",
            plan.records.len(),
            plan.total_rows
        );
    }

    match args.format {
        OutputFormat::Json => {
            let rendered = if args.compact {
                serde_json::to_string(&plan)
            } else {
                serde_json::to_string_pretty(&plan)
            }
            .context("Serializing chart plan")?;
            println!("{rendered}");
        }
        OutputFormat::Table => {
            let (headers, rows) = table::plan_table(&plan);
            table::print_table(&headers, &rows);
        }
    }
    Ok(())
}

fn handle_classify(args: &InputArgs) -> Result<()> {
    let result = load(args)?;
    let Some(roles) = classify::classify_result(&result) else {
        println!("No rows to classify");
        return Ok(());
    };
    let rows = roles
        .iter()
        .enumerate()
        .map(|(idx, role)| vec![(idx + 1).to_string(), role.name.clone(), role.kind.to_string()])
        .collect::<Vec<_>>();
    let headers = vec!["#".to_string(), "column".to_string(), "role".to_string()];
    table::print_table(&headers, &rows);
    Ok(())
}

fn handle_types(args: &InputArgs) -> Result<()> {
    let mut session = ChartSession::new();
    session.receive(load(args)?);
    let Some(plan) = session.plan() else {
        println!("No chart available: the result has no rows or no numeric measure column");
        return Ok(());
    };
    let auto_type = plan.selection.auto_type;
    let listing = plan
        .selection
        .available_types
        .iter()
        .map(|chart| {
            if *chart == auto_type {
                format!("{chart} (auto)")
            } else {
                chart.to_string()
            }
        })
        .join("\n");
    println!("{listing}");
    Ok(())
}
