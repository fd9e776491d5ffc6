//! Report Writer Module
//! Writes the counts document to disk in one atomic step.

use super::OutputDocument;
use std::fs::Permissions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum WriterError {
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write output file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize counts document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Mode of a newly created counts file (rw-r--r--).
#[cfg(unix)]
pub const DEFAULT_MODE: u32 = 0o644;

/// Writes counts documents as indented JSON.
pub struct ReportWriter;

impl ReportWriter {
    /// Write `document` to `output_path`, creating parent directories and
    /// replacing any existing file. Nothing is left at `output_path` on failure
    /// other than what was there before.
    pub fn write(document: &OutputDocument, output_path: &Path) -> Result<(), WriterError> {
        let dir = match output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        std::fs::create_dir_all(&dir).map_err(|source| WriterError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let io_err = |source| WriterError::Io {
            path: output_path.to_path_buf(),
            source,
        };

        let tmp = NamedTempFile::new_in(&dir).map_err(io_err)?;
        // Temp files start as 0600
        if let Some(permissions) = Self::target_permissions(output_path) {
            tmp.as_file().set_permissions(permissions).map_err(io_err)?;
        }
        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer_pretty(&mut writer, document)?;
            writer.flush().map_err(io_err)?;
        }
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(output_path).map_err(|e| io_err(e.error))?;

        info!(path = %output_path.display(), "counts file written");
        Ok(())
    }

    /// Mode of the file being replaced, or [`DEFAULT_MODE`] for a new one.
    #[cfg(unix)]
    fn target_permissions(output_path: &Path) -> Option<Permissions> {
        use std::os::unix::fs::PermissionsExt;

        Some(
            std::fs::metadata(output_path)
                .map(|m| m.permissions())
                .unwrap_or_else(|_| Permissions::from_mode(DEFAULT_MODE)),
        )
    }

    #[cfg(not(unix))]
    fn target_permissions(output_path: &Path) -> Option<Permissions> {
        std::fs::metadata(output_path).map(|m| m.permissions()).ok()
    }
}
