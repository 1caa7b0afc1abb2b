#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chart_inference::data::{TabularResult, Value};
use tempfile::{tempdir, TempDir};

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }

    /// Serializes `result` as a query response envelope.
    pub fn write_response(&self, name: &str, result: &TabularResult) -> PathBuf {
        let envelope = serde_json::json!({
            "success": true,
            "answer": "Here are your results.",
            "sql": "SELECT 1",
            "data": result,
        });
        self.write(name, &envelope.to_string())
    }
}

/// `CATEGORY` (text) and `REVENUE` (number) over `rows` rows.
pub fn category_revenue(rows: usize) -> TabularResult {
    TabularResult::from_records(
        &["CATEGORY", "REVENUE"],
        (0..rows).map(|i| {
            vec![
                Value::from(format!("Category {i}").as_str()),
                Value::from(1_000.0 * (i + 1) as f64),
            ]
        }),
    )
}

/// `MONTH` (text), `VIEWS` and `DOWNLOADS` (numbers).
pub fn monthly_engagement(rows: usize) -> TabularResult {
    TabularResult::from_records(
        &["MONTH", "VIEWS", "DOWNLOADS"],
        (0..rows).map(|i| {
            vec![
                Value::from(format!("2024-{:02}", i % 12 + 1).as_str()),
                Value::from((i * 10) as f64),
                Value::from(i as f64),
            ]
        }),
    )
}

/// Two numeric columns and nothing else.
pub fn views_downloads(rows: usize) -> TabularResult {
    TabularResult::from_records(
        &["VIEWS", "DOWNLOADS"],
        (0..rows).map(|i| vec![Value::from(i as f64 * 3.0), Value::from(i as f64)]),
    )
}
