use super::load;
use crate::core::io::ddg::{DdgCsv, DdgTextReport};
use crate::core::io::filenames::derive_table_name;
use crate::core::io::hpp::{HppCsv, HppParseOptions, HppTextReport};
use crate::core::io::traits::ReportWriter;
use crate::engine::error::EngineError;
use std::path::Path;
use tracing::{info, instrument};

/// Converts a DDG text report to DDG CSV and returns the number of records.
#[instrument(skip_all, name = "convert_ddg_workflow")]
pub fn ddg_to_csv(input: &Path, output: &Path) -> Result<usize, EngineError> {
    info!("Converting DDG report {:?} to {:?}.", input, output);
    let report = load::<DdgTextReport>(input, &())?;

    DdgCsv::write_to_path(&report, output).map_err(|e| EngineError::output(output, e))?;
    info!("Wrote {} DDG record(s).", report.records.len());
    Ok(report.records.len())
}

/// Converts an H++ text report to H++ CSV, naming the table after `output`.
#[instrument(skip_all, name = "convert_hpp_workflow")]
pub fn hpp_to_csv(
    input: &Path,
    output: &Path,
    options: &HppParseOptions,
) -> Result<usize, EngineError> {
    info!("Converting H++ report {:?} to {:?}.", input, output);
    let report = load::<HppTextReport>(input, options)?.with_name(derive_table_name(output));

    HppCsv::write_to_path(&report, output).map_err(|e| EngineError::output(output, e))?;
    info!(
        "Wrote {} H++ record(s) as table '{}'.",
        report.records.len(),
        report.name
    );
    Ok(report.records.len())
}
