use super::load;
use crate::core::io::ddg::DdgTextReport;
use crate::core::io::tabular;
use crate::core::models::residue_key::ResidueKey;
use crate::engine::binning::{ResidueBins, ResidueMean};
use crate::engine::config::{AveragingConfig, EmptyBinPolicy};
use crate::engine::difference::{ResidueDifference, mean_difference};
use crate::engine::error::EngineError;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

pub const COMPARE_CSV_HEADER: [&str; 4] = ["residue", "mean_ddG_1", "mean_ddG_2", "difference"];

/// Per-residue mean DDG of `first` minus that of `second`.
///
/// Both reports are averaged over the same residue range, the union of
/// their ranges, so their series line up position by position. Under
/// [`EmptyBinPolicy::Omit`] a residue is left out when either report has no
/// observation for it.
#[instrument(skip_all, name = "compare_workflow")]
pub fn run(
    first: &Path,
    second: &Path,
    output: &Path,
    config: &AveragingConfig,
) -> Result<Vec<ResidueDifference>, EngineError> {
    info!("Comparing per-residue DDG means of {:?} and {:?}.", first, second);
    let first_report = load::<DdgTextReport>(first, &())?;
    let second_report = load::<DdgTextReport>(second, &())?;

    let mut first_bins = ResidueBins::from_ddg_records(&first_report.records)?;
    let mut second_bins = ResidueBins::from_ddg_records(&second_report.records)?;
    if let Some(max_key) = first_bins.max_key().max(second_bins.max_key()) {
        debug!("Shared residue range is 1..={}.", max_key);
        first_bins.extend_to(max_key);
        second_bins.extend_to(max_key);
    }

    let (first_means, second_means) = match config.empty_bins {
        EmptyBinPolicy::Error => (
            first_bins.means(EmptyBinPolicy::Error)?,
            second_bins.means(EmptyBinPolicy::Error)?,
        ),
        EmptyBinPolicy::Omit => shared_means(&first_bins, &second_bins)?,
    };
    let differences = mean_difference(&first_means, &second_means)?;

    tabular::write_table_to_path(output, &COMPARE_CSV_HEADER, &differences)
        .map_err(|e| EngineError::output(output, e))?;
    info!("Wrote {} residue difference(s).", differences.len());
    Ok(differences)
}

fn shared_means(
    first: &ResidueBins,
    second: &ResidueBins,
) -> Result<(Vec<ResidueMean>, Vec<ResidueMean>), EngineError> {
    let mut first_means = Vec::new();
    let mut second_means = Vec::new();
    let mut omitted = 0usize;

    if let Some(max_key) = first.max_key() {
        for residue in ResidueKey::range_to(max_key) {
            if first.values(residue).is_empty() || second.values(residue).is_empty() {
                omitted += 1;
                continue;
            }
            first_means.push(ResidueMean {
                residue,
                mean: first.mean_of(residue)?,
            });
            second_means.push(ResidueMean {
                residue,
                mean: second.mean_of(residue)?,
            });
        }
    }

    if omitted > 0 {
        warn!(
            "Omitted {} residue(s) without observations in both reports from the comparison.",
            omitted
        );
    }
    Ok((first_means, second_means))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("chain WT ResID Mut ddG\n{body}")).unwrap();
        path
    }

    #[test]
    fn run_subtracts_second_mean_from_first() {
        let dir = tempdir().unwrap();
        let a = write(dir.path(), "a.txt", "A M 1 A 5.0\nA K 2 A 3.0\nA K 3 A 1.0\n");
        let b = write(dir.path(), "b.txt", "A M 1 A 2.0\nA K 2 A 3.0\nA K 3 A 0.5\n");
        let output = dir.path().join("diff.csv");

        let diffs = run(&a, &b, &output, &AveragingConfig::default()).unwrap();
        let values: Vec<f64> = diffs.iter().map(|d| d.difference).collect();
        assert_eq!(values, vec![3.0, 0.0, 0.5]);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "residue,mean_ddG_1,mean_ddG_2,difference\n1,5.0,2.0,3.0\n2,3.0,3.0,0.0\n3,1.0,0.5,0.5\n"
        );
    }

    #[test]
    fn run_fails_when_one_report_lacks_a_residue_of_the_shared_range() {
        let dir = tempdir().unwrap();
        let a = write(dir.path(), "a.txt", "A M 1 A 5.0\nA K 2 A 3.0\n");
        let b = write(dir.path(), "b.txt", "A M 1 A 2.0\n");
        let output = dir.path().join("diff.csv");

        let result = run(&a, &b, &output, &AveragingConfig::default());
        assert!(matches!(
            result,
            Err(EngineError::EmptyAggregationBin { residue }) if residue.get() == 2
        ));
        assert!(!output.exists());
    }

    #[test]
    fn run_with_omit_policy_keeps_only_residues_observed_in_both() {
        let dir = tempdir().unwrap();
        let a = write(dir.path(), "a.txt", "A M 1 A 5.0\nA K 2 A 3.0\n");
        let b = write(dir.path(), "b.txt", "A M 1 A 2.0\nA K 3 A 3.0\n");
        let output = dir.path().join("diff.csv");
        let config = AveragingConfig {
            empty_bins: EmptyBinPolicy::Omit,
        };

        let diffs = run(&a, &b, &output, &config).unwrap();
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].residue.get(), 1);
        assert_eq!(diffs[0].difference, 3.0);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "residue,mean_ddG_1,mean_ddG_2,difference\n1,5.0,2.0,3.0\n"
        );
    }
}
