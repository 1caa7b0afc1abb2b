//! Result-set model shared by every stage of the chart pipeline.
//!
//! A [`TabularResult`] is what the query layer hands over: an ordered list of
//! column names plus rows keyed by those names. Cells are [`Value`]s, which
//! carry the handful of runtime types the warehouse serializes (numbers,
//! strings, booleans, nulls) plus a calendar date for programmatic callers.

use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::InputError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum Value {
    Null,
    Number(f64),
    String(String),
    Boolean(bool),
    Date(NaiveDate),
}

pub type Row = HashMap<String, Value>;

impl Value {
    /// True only for the numeric runtime type; numeric-looking strings do not count.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn as_display(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Number(n) => format_plain_number(*n),
            Value::String(s) => s.clone(),
            Value::Boolean(b) => b.to_string(),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }

    /// Text used to label a category. Nulls and empty strings have no label.
    pub fn as_label(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            other => Some(other.as_display()),
        }
    }

    /// Lenient numeric coercion: anything that cannot be read as a finite
    /// number becomes `0.0`.
    pub fn to_number(&self) -> f64 {
        let coerced = match self {
            Value::Number(n) => *n,
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().unwrap_or(0.0)
                }
            }
            Value::Boolean(true) => 1.0,
            Value::Boolean(false) | Value::Null | Value::Date(_) => 0.0,
        };
        if coerced.is_finite() { coerced } else { 0.0 }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_display())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => n.as_f64().map(Value::Number).unwrap_or(Value::Null),
            serde_json::Value::String(s) => Value::String(s),
            nested @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
                Value::String(nested.to_string())
            }
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Number(n) if is_whole(*n) => serializer.serialize_i64(*n as i64),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Date(d) => serializer.collect_str(&d.format("%Y-%m-%d")),
        }
    }
}

fn is_whole(value: f64) -> bool {
    value.fract() == 0.0 && value.abs() < i64::MAX as f64
}

/// Integers print without a fractional part; everything else uses the
/// shortest round-tripping representation.
pub fn format_plain_number(value: f64) -> String {
    if is_whole(value) {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}

/// One query result as returned by the execution layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabularResult {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Row>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_count: Option<usize>,
    /// Milliseconds spent executing the query upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<f64>,
}

impl TabularResult {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self {
            columns,
            rows,
            row_count: None,
            execution_time: None,
        }
    }

    /// Builds a result from positional rows, pairing each cell with the
    /// column at the same index. Short rows are padded with nulls.
    pub fn from_records<C, R, V>(columns: &[C], records: R) -> Self
    where
        C: AsRef<str>,
        R: IntoIterator<Item = Vec<V>>,
        V: Into<Value>,
    {
        let names = columns
            .iter()
            .map(|c| c.as_ref().to_string())
            .collect::<Vec<_>>();
        let rows = records
            .into_iter()
            .map(|record| {
                let mut cells = record.into_iter().map(Into::into);
                names
                    .iter()
                    .map(|name| (name.clone(), cells.next().unwrap_or(Value::Null)))
                    .collect::<Row>()
            })
            .collect();
        Self::new(names, rows)
    }

    pub fn first_row(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Enforces the row invariant: every row carries a value for every
    /// declared column, and column names are unique.
    pub fn normalize(mut self) -> Result<Self, InputError> {
        let mut seen = HashSet::with_capacity(self.columns.len());
        for column in &self.columns {
            if !seen.insert(column.as_str()) {
                return Err(InputError::DuplicateColumn(column.clone()));
            }
        }

        let mut filled = 0usize;
        for row in &mut self.rows {
            row.retain(|key, _| seen.contains(key.as_str()));
            for column in &self.columns {
                if !row.contains_key(column) {
                    row.insert(column.clone(), Value::Null);
                    filled += 1;
                }
            }
        }
        if filled > 0 {
            debug!("Filled {filled} missing cell(s) with nulls");
        }

        if let Some(declared) = self.row_count
            && declared != self.rows.len()
        {
            warn!(
                "Declared row count {declared} does not match {} row(s) received",
                self.rows.len()
            );
        }
        Ok(self)
    }
}

/// Full response envelope produced by the analyst query endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub sql: Option<String>,
    #[serde(default)]
    pub data: Option<TabularResult>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

fn default_success() -> bool {
    true
}

impl QueryResponse {
    pub fn into_result(self) -> Result<TabularResult, InputError> {
        if !self.success {
            let reason = self
                .error
                .or(self.answer)
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(InputError::QueryFailed(reason));
        }
        let data = self.data.ok_or(InputError::MissingData)?;
        data.normalize()
    }
}

/// Parses either a bare result object or a full query response envelope.
pub fn parse_payload(text: &str) -> Result<TabularResult, InputError> {
    let document: serde_json::Value = serde_json::from_str(text)?;
    let is_envelope = document
        .as_object()
        .is_some_and(|object| object.contains_key("data") || object.contains_key("success"));
    if is_envelope {
        let response: QueryResponse = serde_json::from_value(document)?;
        response.into_result()
    } else {
        let result: TabularResult = serde_json::from_value(document)?;
        result.normalize()
    }
}
