//! Column role inference.
//!
//! Every column is assigned exactly one [`ColumnKind`] from its name and the
//! value found in the first row. Later rows are never consulted: a column
//! that is numeric in row one is trusted as numeric for the whole result,
//! and a null in row one makes the column a dimension even if every other
//! row is numeric.

use std::{fmt, sync::OnceLock};

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::data::{Row, TabularResult, Value};

const TEMPORAL_NAME_TOKENS: &[&str] = &["date", "quarter", "month", "year"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Measure,
    Dimension,
    Temporal,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Measure => "measure",
            ColumnKind::Dimension => "dimension",
            ColumnKind::Temporal => "temporal",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRole {
    pub name: String,
    pub kind: ColumnKind,
}

impl ColumnRole {
    pub fn is_measure(&self) -> bool {
        self.kind == ColumnKind::Measure
    }

    pub fn is_dimension(&self) -> bool {
        self.kind == ColumnKind::Dimension
    }

    pub fn is_temporal(&self) -> bool {
        self.kind == ColumnKind::Temporal
    }
}

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(?:_id|_code|_key|_no|_num|_ref|_seq|_pk|code|id)$")
            .expect("identifier suffix pattern is valid")
    })
}

pub fn is_temporal_name(name: &str) -> bool {
    let lowered = name.to_ascii_lowercase();
    TEMPORAL_NAME_TOKENS
        .iter()
        .any(|token| lowered.contains(token))
}

/// Surrogate keys and codes look numeric but are never magnitudes.
pub fn is_identifier_name(name: &str) -> bool {
    identifier_pattern().is_match(name)
}

pub fn classify_column(name: &str, sample: &Value) -> ColumnKind {
    if is_temporal_name(name) {
        ColumnKind::Temporal
    } else if is_identifier_name(name) {
        ColumnKind::Dimension
    } else if sample.is_numeric() {
        ColumnKind::Measure
    } else {
        ColumnKind::Dimension
    }
}

/// Classifies `columns` in order using the matching cells of `sample_row`.
/// A column absent from the sample row is treated as holding null.
pub fn classify(columns: &[String], sample_row: &Row) -> Vec<ColumnRole> {
    columns
        .iter()
        .map(|name| {
            let sample = sample_row.get(name).unwrap_or(&Value::Null);
            let kind = classify_column(name, sample);
            debug!("Column '{name}' classified as {kind}");
            ColumnRole {
                name: name.clone(),
                kind,
            }
        })
        .collect()
}

/// Classifies a whole result from its first row. An empty result has no
/// classification, which callers treat as "no chart possible".
pub fn classify_result(result: &TabularResult) -> Option<Vec<ColumnRole>> {
    result
        .first_row()
        .map(|row| classify(&result.columns, row))
}
