//! Data Processor Module
//! Resolves the action columns of a loaded frame and turns each actor row into
//! its deduplicated set of sub-category tokens.

use polars::prelude::*;
use std::collections::HashSet;
use thiserror::Error;
use tracing::warn;

/// Separator between sub-category tokens inside one action cell.
pub const TOKEN_SEPARATOR: char = '|';

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Action column '{column}' is not a string column: {source}")]
    NotStringColumn {
        column: String,
        #[source]
        source: PolarsError,
    },
}

/// Split one action cell into trimmed, non-empty tokens.
pub fn split_tokens(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(TOKEN_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Union of the tokens of several action cells. Null cells contribute nothing.
pub fn collect_tokens<'a, I>(values: I) -> HashSet<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    values.into_iter().flatten().flat_map(split_tokens).collect()
}

/// The action columns present in a frame, plus the ones that were expected but
/// absent. Absent columns behave as empty for every row.
pub struct ActionColumns<'df> {
    present: Vec<&'df StringChunked>,
    missing: Vec<String>,
    height: usize,
}

impl<'df> ActionColumns<'df> {
    pub fn resolve(df: &'df DataFrame, names: &[&str]) -> Result<Self, ProcessorError> {
        let mut present = Vec::with_capacity(names.len());
        let mut missing = Vec::new();

        for &name in names {
            match Self::last_occurrence(df, name) {
                Ok(column) => {
                    let ca = column
                        .str()
                        .map_err(|source| ProcessorError::NotStringColumn {
                            column: name.to_string(),
                            source,
                        })?;
                    present.push(ca);
                }
                Err(_) => {
                    warn!(column = name, "action column missing, treated as empty");
                    missing.push(name.to_string());
                }
            }
        }

        Ok(Self {
            present,
            missing,
            height: df.height(),
        })
    }

    /// A repeated header name is read as `name`, `name_duplicated_0`, ...;
    /// the right-most copy holds the value kept for the row.
    fn last_occurrence<'a>(df: &'a DataFrame, name: &str) -> PolarsResult<&'a Column> {
        let mut found = df.column(name)?;
        for idx in 0.. {
            match df.column(&format!("{name}_duplicated_{idx}")) {
                Ok(column) => found = column,
                Err(_) => break,
            }
        }
        Ok(found)
    }

    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Token set of row `idx`.
    pub fn row_tokens(&self, idx: usize) -> HashSet<&'df str> {
        collect_tokens(self.present.iter().map(|ca| ca.get(idx)))
    }

    /// Token sets for every row, in file order.
    pub fn rows(&self) -> impl Iterator<Item = HashSet<&'df str>> + '_ {
        (0..self.height).map(move |idx| self.row_tokens(idx))
    }
}
