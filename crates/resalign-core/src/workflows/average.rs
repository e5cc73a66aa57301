use super::load;
use crate::core::io::ddg::DdgTextReport;
use crate::core::io::tabular;
use crate::engine::binning::{ResidueBins, ResidueMean};
use crate::engine::config::AveragingConfig;
use crate::engine::error::EngineError;
use std::path::Path;
use tracing::{info, instrument};

pub const MEAN_CSV_HEADER: [&str; 2] = ["residue", "mean_ddG"];

/// Writes the mean DDG of every residue in `1..=max_key` of `input`.
#[instrument(skip_all, name = "average_workflow")]
pub fn run(
    input: &Path,
    output: &Path,
    config: &AveragingConfig,
) -> Result<Vec<ResidueMean>, EngineError> {
    info!("Averaging DDG values per residue from {:?}.", input);
    let report = load::<DdgTextReport>(input, &())?;
    let means = ResidueBins::from_ddg_records(&report.records)?.means(config.empty_bins)?;

    tabular::write_table_to_path(output, &MEAN_CSV_HEADER, &means)
        .map_err(|e| EngineError::output(output, e))?;
    info!("Wrote {} residue mean(s) to {:?}.", means.len(), output);
    Ok(means)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::error::ReportError;
    use crate::engine::config::EmptyBinPolicy;
    use std::fs;
    use tempfile::tempdir;

    const REPORT: &str = "\
chain WT ResID Mut ddG
A MET 1 ALA 2.0
A MET 1 GLY 4.0
A LYS 3 ALA 1.0
";

    #[test]
    fn run_fails_on_residue_without_observations() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("scan.txt");
        let output = dir.path().join("means.csv");
        fs::write(&input, REPORT).unwrap();

        let result = run(&input, &output, &AveragingConfig::default());
        assert!(matches!(
            result,
            Err(EngineError::EmptyAggregationBin { residue }) if residue.get() == 2
        ));
        assert!(!output.exists());
    }

    #[test]
    fn run_reports_file_and_line_of_out_of_range_residue_number() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("means.csv");
        for (name, text, bad_line) in [
            ("zero.txt", "h\nA M 1 A 1.0\nA M 0 G 2.0\n", 3),
            ("huge.txt", "h\nA M 4000000000 A 1.0\n", 2),
        ] {
            let input = dir.path().join(name);
            fs::write(&input, text).unwrap();

            let err = run(&input, &output, &AveragingConfig::default()).unwrap_err();
            assert!(err.to_string().contains(name));
            match err {
                EngineError::Report {
                    path,
                    source: ReportError::ResidueKey { line, .. },
                } => {
                    assert_eq!(path, input);
                    assert_eq!(line, bad_line);
                }
                other => panic!("unexpected error: {other:?}"),
            }
            assert!(!output.exists());
        }
    }

    #[test]
    fn run_with_omit_policy_writes_observed_residues_only() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("scan.txt");
        let output = dir.path().join("means.csv");
        fs::write(&input, REPORT).unwrap();

        let config = AveragingConfig {
            empty_bins: EmptyBinPolicy::Omit,
        };
        let means = run(&input, &output, &config).unwrap();
        assert_eq!(means.len(), 2);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "residue,mean_ddG\n1,3.0\n3,1.0\n"
        );
    }

    #[test]
    fn run_writes_every_residue_when_all_are_observed() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("scan.txt");
        let output = dir.path().join("means.csv");
        fs::write(&input, "h\nA M 2 A -1.0\nA M 1 G 0.5\nA M 2 G -2.0\n").unwrap();

        run(&input, &output, &AveragingConfig::default()).unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "residue,mean_ddG\n1,0.5\n2,-1.5\n"
        );
    }
}
