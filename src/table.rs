use std::fmt::Write as _;

use crate::{format::compact_number, plan::ChartPlan};

/// Left-aligned, two-space separated text table with a dashed rule under
/// the header. Cells are flattened to a single line.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths = headers
        .iter()
        .map(|h| h.chars().count().max(3))
        .collect::<Vec<_>>();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(single_line(cell).chars().count());
        }
    }

    let mut output = String::new();
    let rule = widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>();
    let _ = writeln!(output, "{}", format_row(headers, &widths));
    let _ = writeln!(output, "{}", format_row(&rule, &widths));
    for row in rows {
        let _ = writeln!(output, "{}", format_row(row, &widths));
    }
    output
}

pub fn print_table(headers: &[String], rows: &[Vec<String>]) {
    print!("{}", render_table(headers, rows));
}

/// Header and rows for the plotted records, values compacted as on an axis.
pub fn plan_table(plan: &ChartPlan) -> (Vec<String>, Vec<Vec<String>>) {
    let mut headers = vec![plan.selection.label_column.clone()];
    if let Some(first) = plan.records.first() {
        headers.extend(first.values.iter().map(|v| v.column.clone()));
    } else {
        headers.extend(plan.selection.value_columns.iter().cloned());
    }
    let rows = plan
        .records
        .iter()
        .map(|record| {
            std::iter::once(record.label.clone())
                .chain(record.values.iter().map(|v| compact_number(v.value)))
                .collect::<Vec<_>>()
        })
        .collect();
    (headers, rows)
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", single_line(cell), width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}

fn single_line(value: &str) -> String {
    value.replace(['\n', '\r', '\t'], " ")
}
