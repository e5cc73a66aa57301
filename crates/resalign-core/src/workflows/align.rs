use super::load;
use crate::core::io::filenames::derive_table_name;
use crate::core::io::hpp::{HppCsv, HppParseOptions, HppReport, HppTextReport};
use crate::core::io::tabular;
use crate::core::io::traits::ReportWriter;
use crate::core::models::hpp::HppRecord;
use crate::engine::aligner::{AlignedTable, ResidueTable, align};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct AlignRequest {
    /// H++ text reports or H++ CSV files, in output column order.
    pub inputs: Vec<PathBuf>,
    /// Where to also write each input as H++ CSV; one path per input.
    pub csv_outputs: Option<Vec<PathBuf>>,
    pub output: PathBuf,
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn load_hpp(
    input: &Path,
    csv_output: Option<&Path>,
    options: &HppParseOptions,
) -> Result<HppReport, EngineError> {
    if is_csv(input) {
        let report = load::<HppCsv>(input, &())?;
        if report.name.is_empty() {
            return Ok(report.with_name(derive_table_name(input)));
        }
        return Ok(report);
    }
    let name = derive_table_name(csv_output.unwrap_or(input));
    Ok(load::<HppTextReport>(input, options)?.with_name(name))
}

/// Aligns several H++ reports by residue number and writes the merged table.
///
/// Inputs are read one at a time, each file closed before the next is
/// opened. Nothing is written until every input has been parsed and aligned;
/// the aligned table is written before any per-file CSV, so a failed
/// aligned write leaves no per-file CSVs behind.
#[instrument(skip_all, name = "align_workflow")]
pub fn run(
    request: &AlignRequest,
    options: &HppParseOptions,
    reporter: &ProgressReporter,
) -> Result<AlignedTable<HppRecord>, EngineError> {
    if let Some(csv_outputs) = &request.csv_outputs {
        if csv_outputs.len() != request.inputs.len() {
            return Err(EngineError::LengthMismatch {
                left: request.inputs.len(),
                right: csv_outputs.len(),
            });
        }
    }
    let csv_output_for = |i: usize| {
        request
            .csv_outputs
            .as_ref()
            .map(|outputs| outputs[i].as_path())
    };

    reporter.report(Progress::PhaseStart {
        name: "Loading reports",
    });
    reporter.report(Progress::FilesStart {
        total_files: request.inputs.len() as u64,
    });
    info!("Loading {} H++ report(s) for alignment.", request.inputs.len());

    let mut reports = Vec::with_capacity(request.inputs.len());
    for (i, input) in request.inputs.iter().enumerate() {
        let report = load_hpp(input, csv_output_for(i), options)?;
        debug!(
            "Loaded {} record(s) from {:?} as table '{}'.",
            report.records.len(),
            input,
            report.name
        );
        reporter.report(Progress::FileLoaded {
            path: input.clone(),
            records: report.records.len(),
        });
        reports.push(report);
    }
    reporter.report(Progress::FilesFinish);
    reporter.report(Progress::PhaseFinish);

    let tables = reports
        .iter()
        .map(|report| {
            ResidueTable::from_records(
                report.name.clone(),
                report.csv_preamble(),
                report.records.iter().cloned(),
            )
        })
        .collect::<Result<Vec<_>, _>>()?;
    for table in &tables {
        debug!(
            "Table '{}' holds {} residue(s) up to {:?}.",
            table.name(),
            table.record_count(),
            table.max_key()
        );
    }
    let aligned = align(tables)?;
    info!(
        "Largest residue number across {} file(s): {}.",
        aligned.table_count(),
        aligned.max_key().map_or(0, |k| k.get())
    );

    tabular::write_rows_to_path(&request.output, aligned.csv_rows())
        .map_err(|e| EngineError::output(&request.output, e))?;
    info!(
        "Wrote {} aligned residue row(s) to {:?}.",
        aligned.rows().len(),
        request.output
    );
    if let Some(csv_outputs) = &request.csv_outputs {
        for (report, path) in reports.iter().zip(csv_outputs) {
            HppCsv::write_to_path(report, path).map_err(|e| EngineError::output(path, e))?;
            debug!("Wrote H++ CSV {:?}.", path);
        }
    }

    Ok(aligned)
}
