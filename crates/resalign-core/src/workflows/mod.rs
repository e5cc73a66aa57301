//! # Workflows Module
//!
//! End-to-end operations that read reports, run the engine and write the
//! resulting table.
//!
//! Each workflow parses all of its inputs and builds its complete result in
//! memory before any output file is created, so a failure never leaves a
//! partially written table behind.
//!
//! - **Conversion** ([`convert`]) - DDG and H++ text reports to CSV
//! - **Averaging** ([`average`]) - Mean DDG per residue
//! - **Significance** ([`significance`]) - Per-residue counts of significant DDG values
//! - **Alignment** ([`align`]) - Residue-aligned merge of several H++ reports
//! - **Comparison** ([`compare`]) - Per-residue mean DDG difference between two reports

pub mod align;
pub mod average;
pub mod compare;
pub mod convert;
pub mod significance;

use crate::core::io::error::ReportError;
use crate::core::io::traits::ReportReader;
use crate::engine::error::EngineError;
use std::path::Path;

pub(crate) fn load<F>(path: &Path, options: &F::Options) -> Result<F::Report, EngineError>
where
    F: ReportReader<Error = ReportError>,
{
    F::read_from_path(path, options).map_err(|e| EngineError::report(path, e))
}
