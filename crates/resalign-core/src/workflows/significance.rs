use super::load;
use crate::core::io::ddg::DdgTextReport;
use crate::core::io::tabular;
use crate::engine::binning::{SignificanceCounts, SignificanceRow};
use crate::engine::config::SignificanceConfig;
use crate::engine::error::EngineError;
use std::path::Path;
use tracing::{info, instrument};

/// Header of the significance-count table; the last column records the cutoff.
pub fn significance_header(cutoff: f64) -> [String; 4] {
    [
        "residue".to_string(),
        "+_sig_count".to_string(),
        "-_sig_count".to_string(),
        format!("(cutoff_ddg={})", format_cutoff(cutoff)),
    ]
}

fn format_cutoff(cutoff: f64) -> String {
    if cutoff.fract() == 0.0 {
        format!("{:.1}", cutoff)
    } else {
        cutoff.to_string()
    }
}

/// Counts, per residue, the DDG values at or beyond `±cutoff`.
#[instrument(skip_all, name = "significance_workflow")]
pub fn run(
    input: &Path,
    output: &Path,
    config: &SignificanceConfig,
) -> Result<Vec<SignificanceRow>, EngineError> {
    info!(
        "Counting significant DDG values in {:?} with cutoff {}.",
        input, config.cutoff
    );
    let report = load::<DdgTextReport>(input, &())?;
    let rows = SignificanceCounts::from_ddg_records(&report.records, config.cutoff)?.rows();

    tabular::write_table_to_path(output, &significance_header(config.cutoff), &rows)
        .map_err(|e| EngineError::output(output, e))?;
    info!("Wrote significance counts for {} residue(s).", rows.len());
    Ok(rows)
}
