//! Aggregator
//! Loads the actors CSV, counts locations per category and produces the counts
//! document.

use crate::categories::{CategoryMapping, ACTION_COLUMNS};
use crate::config::RunConfig;
use crate::data::{ActionColumns, ActorLoader, LoaderError, ProcessorError};
use crate::report::{OutputDocument, ReportWriter, WriterError};
use crate::stats::CountsCalculator;
use chrono::{Local, NaiveDate};
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum AggregatorError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Process(#[from] ProcessorError),
    #[error(transparent)]
    Write(#[from] WriterError),
}

/// Result of one aggregation.
#[derive(Debug, Clone)]
pub struct Aggregation {
    pub document: OutputDocument,
    /// Expected action columns absent from the header, counted as empty.
    pub missing_columns: Vec<String>,
}

/// One-shot CSV → counts aggregation.
pub struct Aggregator<'m> {
    mapping: &'m CategoryMapping,
    action_columns: Vec<&'m str>,
}

impl Default for Aggregator<'static> {
    fn default() -> Self {
        Self::new(CategoryMapping::builtin(), &ACTION_COLUMNS)
    }
}

impl<'m> Aggregator<'m> {
    pub fn new(mapping: &'m CategoryMapping, action_columns: &[&'m str]) -> Self {
        Self {
            mapping,
            action_columns: action_columns.to_vec(),
        }
    }

    /// Count `input` without writing anything.
    pub fn aggregate(
        &self,
        input: &Path,
        generation_date: NaiveDate,
    ) -> Result<Aggregation, AggregatorError> {
        let df = ActorLoader::load_csv(input)?;
        let columns = ActionColumns::resolve(&df, &self.action_columns)?;
        if columns.missing().len() == self.action_columns.len() {
            warn!("no action column found in header, every category will be zero");
        }

        let counts = CountsCalculator::count(&columns, self.mapping);
        let document = OutputDocument::from_counts(&counts, generation_date);

        Ok(Aggregation {
            document,
            missing_columns: columns.missing().to_vec(),
        })
    }

    /// Full run: aggregate with today's date, report, then write the output.
    pub fn run(&self, config: &RunConfig) -> Result<Aggregation, AggregatorError> {
        info!(input = %config.input.display(), "reading actors CSV");

        let aggregation = self.aggregate(&config.input, Local::now().date_naive())?;
        let document = &aggregation.document;

        info!(total_rows = document.meta.total_input_rows, "rows counted");
        for (id, summary) in document.national.iter() {
            info!(
                category = id,
                lieux = summary.lieux,
                services_a_domicile = summary.services_a_domicile,
                solutions_en_ligne = summary.solutions_en_ligne,
                total = summary.total(),
                "category counted"
            );
        }

        ReportWriter::write(document, &config.output)?;
        Ok(aggregation)
    }
}
