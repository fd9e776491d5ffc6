//! CSV Data Loader Module
//! Loads the actors CSV export into a string-typed DataFrame using Polars.

use polars::prelude::*;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Input file not found or unreadable: {}", path.display())]
    InputNotFound { path: PathBuf },
    #[error("Malformed CSV input {}: {source}", path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
}

/// Reads the actors CSV export.
///
/// Schema inference is disabled so every column comes back as a UTF-8 string
/// column; empty cells are read as null. Blank lines are not data rows and are
/// dropped before parsing. Fields beyond the header width are ignored.
pub struct ActorLoader;

impl ActorLoader {
    /// Load a CSV file with a header row.
    pub fn load_csv(path: &Path) -> Result<DataFrame, LoaderError> {
        if !path.is_file() {
            return Err(LoaderError::InputNotFound {
                path: path.to_path_buf(),
            });
        }
        let bytes = std::fs::read(path).map_err(|e| {
            debug!(error = %e, "input read failed");
            LoaderError::InputNotFound {
                path: path.to_path_buf(),
            }
        })?;

        let (bytes, blank_lines) = strip_blank_lines(&bytes);

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .map_parse_options(|opts| opts.with_truncate_ragged_lines(true))
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()
            .map_err(|source| LoaderError::MalformedInput {
                path: path.to_path_buf(),
                source,
            })?;

        info!(
            path = %path.display(),
            rows = df.height(),
            blank_lines,
            columns = df.width(),
            "loaded actors CSV"
        );

        Ok(df)
    }
}

/// Copy of `bytes` without its blank lines, and how many were dropped.
/// Line breaks inside quoted fields are data, not line ends.
fn strip_blank_lines(bytes: &[u8]) -> (Vec<u8>, usize) {
    let mut out = Vec::with_capacity(bytes.len());
    let mut dropped = 0;
    let mut in_quotes = false;

    for line in bytes.split_inclusive(|&b| b == b'\n') {
        if !in_quotes && matches!(line, b"\n" | b"\r\n") {
            dropped += 1;
            continue;
        }
        // An escaped quote ("") toggles twice
        for &b in line {
            if b == b'"' {
                in_quotes = !in_quotes;
            }
        }
        out.extend_from_slice(line);
    }

    (out, dropped)
}
