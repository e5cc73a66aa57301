use super::config::ConfigError;
use crate::core::io::error::ReportError;
use crate::core::io::filenames::FilenameListError;
use crate::core::models::residue_key::{ResidueKey, ResidueKeyError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Cannot average residue {residue}: it has no observations")]
    EmptyAggregationBin { residue: ResidueKey },

    #[error("Series lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Series residues differ at position {position}: {left} vs {right}")]
    KeyMismatch {
        position: usize,
        left: ResidueKey,
        right: ResidueKey,
    },

    #[error("Significance cutoff must be finite and non-negative (got {0})")]
    InvalidThreshold(f64),

    #[error("Invalid residue: {0}")]
    ResidueKey(#[from] ResidueKeyError),

    #[error("Failed to read '{path}': {source}", path = path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: ReportError,
    },

    #[error("Failed to write '{path}': {source}", path = path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: ReportError,
    },

    #[error("Invalid filename list: {0}")]
    Filenames(#[from] FilenameListError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("No input tables to align")]
    NoInput,
}

impl EngineError {
    pub(crate) fn report(path: impl Into<PathBuf>, source: impl Into<ReportError>) -> Self {
        EngineError::Report {
            path: path.into(),
            source: source.into(),
        }
    }

    pub(crate) fn output(path: impl Into<PathBuf>, source: impl Into<ReportError>) -> Self {
        EngineError::Output {
            path: path.into(),
            source: source.into(),
        }
    }
}
