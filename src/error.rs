//! Error types for loading query results.

use thiserror::Error;

/// Failures while loading a query result. The inference engine itself never
/// fails; only getting data into it can.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read result payload from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed result payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate column name '{0}' in result set")]
    DuplicateColumn(String),
    #[error("Upstream query failed: {0}")]
    QueryFailed(String),
    #[error("Query response does not contain a data section")]
    MissingData,
}
