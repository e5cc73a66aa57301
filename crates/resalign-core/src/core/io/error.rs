use crate::core::models::residue_key::ResidueKeyError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("File access error: {0}")]
    FileAccess(#[from] io::Error),
    #[error("Malformed record on line {line}: {kind}")]
    MalformedRecord { line: usize, kind: ParseErrorKind },
    #[error("Invalid residue label on line {line}: {source}")]
    ResidueKey {
        line: usize,
        #[source]
        source: ResidueKeyError,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },
    #[error("expected at most {expected} fields, found {found}")]
    TooManyFields { expected: usize, found: usize },
    #[error("invalid integer in field '{field}' (value: '{value}')")]
    InvalidInt { field: &'static str, value: String },
    #[error("invalid float in field '{field}' (value: '{value}')")]
    InvalidFloat { field: &'static str, value: String },
    #[error("invalid pK_(1/2) '{value}': expected a number or a '>'/'<' bound")]
    InvalidPkHalf { value: String },
}

impl ReportError {
    pub(crate) fn malformed(line: usize, kind: ParseErrorKind) -> Self {
        ReportError::MalformedRecord { line, kind }
    }
}
