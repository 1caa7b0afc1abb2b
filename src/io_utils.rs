//! Loading query result payloads.
//!
//! Payloads are JSON, either the bare `data` object or the full response
//! envelope of the query endpoint. The `-` path reads from stdin.

use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

use log::debug;

use crate::{
    data::{self, TabularResult},
    error::InputError,
};

pub fn is_dash(path: &Path) -> bool {
    path == Path::new("-")
}

pub fn read_payload_text(path: &Path) -> Result<String, InputError> {
    let io_error = |source: io::Error| InputError::Io {
        path: path.display().to_string(),
        source,
    };
    let mut text = String::new();
    if is_dash(path) {
        io::stdin().lock().read_to_string(&mut text).map_err(io_error)?;
    } else {
        let file = File::open(path).map_err(io_error)?;
        BufReader::new(file)
            .read_to_string(&mut text)
            .map_err(io_error)?;
    }
    Ok(text)
}

pub fn load_result(path: &Path) -> Result<TabularResult, InputError> {
    let text = read_payload_text(path)?;
    let result = data::parse_payload(&text)?;
    debug!(
        "Loaded {} column(s) and {} row(s) from {:?}",
        result.columns.len(),
        result.rows.len(),
        path
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_result_reports_missing_files() {
        let err = load_result(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }

    #[test]
    fn load_result_reads_files() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"columns": ["A"], "rows": [{{"A": 1}}]}}"#).expect("write payload");
        let result = load_result(file.path()).expect("load result");
        assert_eq!(result.rows.len(), 1);
    }
}
