//! Run configuration and compiled-in constants of the counts file.

use std::path::PathBuf;

/// Default destination, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "data/counts.json";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV_VAR: &str = "ECOCOUNTS_LOG";

pub const SOURCE_NAME: &str = "data.gouv.fr - Acteurs de l'économie circulaire (ADEME)";
pub const SOURCE_URL: &str =
    "https://www.data.gouv.fr/api/1/datasets/r/0e864a1c-b147-4549-a2dd-0b918e70c53c";
pub const SOURCE_DESCRIPTION: &str = "Comptages nationaux par catégorie. Lieux = réels (CSV). \
Services à domicile et solutions en ligne = estimations.";

/// Paths for one aggregation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl RunConfig {
    /// Build a run configuration; `output` falls back to [`DEFAULT_OUTPUT_PATH`].
    pub fn new(input: impl Into<PathBuf>, output: Option<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        let config = RunConfig::new("acteurs.csv", None);
        assert_eq!(config.output, PathBuf::from("data/counts.json"));
        assert_eq!(config.input, PathBuf::from("acteurs.csv"));
    }

    #[test]
    fn test_output_override() {
        let config = RunConfig::new("acteurs.csv", Some(PathBuf::from("/tmp/out.json")));
        assert_eq!(config.output, PathBuf::from("/tmp/out.json"));
    }

    #[test]
    fn test_description_is_single_line() {
        assert!(!SOURCE_DESCRIPTION.contains('\n'));
        assert!(SOURCE_DESCRIPTION.contains("(CSV). Services"));
    }
}
