use super::config::EmptyBinPolicy;
use super::error::EngineError;
use crate::core::models::ddg::DdgRecord;
use crate::core::models::indexed::ResidueIndexed;
use crate::core::models::record::ResidueRecord;
use crate::core::models::residue_key::ResidueKey;
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResidueMean {
    pub residue: ResidueKey,
    pub mean: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignificanceRow {
    pub residue: ResidueKey,
    pub positive: u32,
    pub negative: u32,
}

/// Observed values grouped by residue over `1..=max_key`.
#[derive(Debug, Clone, Default)]
pub struct ResidueBins {
    bins: ResidueIndexed<Vec<f64>>,
}

impl ResidueBins {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, residue: ResidueKey, value: f64) {
        self.bins.slot_mut(residue).push(value);
    }

    pub fn from_ddg_records(records: &[DdgRecord]) -> Result<Self, EngineError> {
        let mut bins = Self::new();
        for record in records {
            bins.push(record.residue_key()?, record.ddg());
        }
        debug!(
            "Binned {} DDG value(s) over {} residue(s).",
            records.len(),
            bins.bins.len()
        );
        Ok(bins)
    }

    /// Extends the covered range so that `max_key` is included even if no
    /// value was observed there.
    pub fn extend_to(&mut self, max_key: ResidueKey) {
        self.bins.grow_to(max_key);
    }

    pub fn max_key(&self) -> Option<ResidueKey> {
        self.bins.max_key()
    }

    pub fn values(&self, residue: ResidueKey) -> &[f64] {
        self.bins.get(residue).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn mean_of(&self, residue: ResidueKey) -> Result<f64, EngineError> {
        let values = self.values(residue);
        if values.is_empty() {
            return Err(EngineError::EmptyAggregationBin { residue });
        }
        Ok(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Means for every residue in `1..=max_key`, in ascending residue order.
    pub fn means(&self, policy: EmptyBinPolicy) -> Result<Vec<ResidueMean>, EngineError> {
        let mut means = Vec::with_capacity(self.bins.len());
        let mut omitted = 0usize;

        for (residue, values) in self.bins.iter() {
            if values.is_empty() {
                match policy {
                    EmptyBinPolicy::Error => {
                        return Err(EngineError::EmptyAggregationBin { residue });
                    }
                    EmptyBinPolicy::Omit => {
                        omitted += 1;
                        continue;
                    }
                }
            }
            means.push(ResidueMean {
                residue,
                mean: values.iter().sum::<f64>() / values.len() as f64,
            });
        }

        if omitted > 0 {
            warn!(
                "Omitted {} residue(s) with no observations from the averaged output.",
                omitted
            );
        }
        Ok(means)
    }
}

/// Per-residue counts of values at or beyond a significance cutoff.
///
/// A value `v` is a positive hit when `v >= cutoff` and a negative hit when
/// `v <= -cutoff`; with a cutoff of zero both can fire for the same value.
#[derive(Debug, Clone)]
pub struct SignificanceCounts {
    cutoff: f64,
    positive: ResidueIndexed<u32>,
    negative: ResidueIndexed<u32>,
}

impl SignificanceCounts {
    pub fn new(cutoff: f64) -> Result<Self, EngineError> {
        if !cutoff.is_finite() || cutoff < 0.0 {
            return Err(EngineError::InvalidThreshold(cutoff));
        }
        Ok(Self {
            cutoff,
            positive: ResidueIndexed::new(),
            negative: ResidueIndexed::new(),
        })
    }

    pub fn from_ddg_records(records: &[DdgRecord], cutoff: f64) -> Result<Self, EngineError> {
        let mut counts = Self::new(cutoff)?;
        for record in records {
            counts.observe(record.residue_key()?, record.ddg());
        }
        Ok(counts)
    }

    pub fn observe(&mut self, residue: ResidueKey, value: f64) {
        self.positive.grow_to(residue);
        self.negative.grow_to(residue);
        if value >= self.cutoff {
            *self.positive.slot_mut(residue) += 1;
        }
        if value <= -self.cutoff {
            *self.negative.slot_mut(residue) += 1;
        }
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    pub fn max_key(&self) -> Option<ResidueKey> {
        self.positive.max_key()
    }

    /// One row per residue in `1..=max_key`; residues without hits count zero.
    pub fn rows(&self) -> Vec<SignificanceRow> {
        let Some(max_key) = self.max_key() else {
            return Vec::new();
        };
        ResidueKey::range_to(max_key)
            .map(|residue| SignificanceRow {
                residue,
                positive: self.positive.get(residue).copied().unwrap_or(0),
                negative: self.negative.get(residue).copied().unwrap_or(0),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::value::ReportedValue;

    fn key(n: u32) -> ResidueKey {
        ResidueKey::new(n).unwrap()
    }

    fn ddg(residue_number: i64, value: f64) -> DdgRecord {
        DdgRecord {
            chain: "A".to_string(),
            wildtype_residue: "LYS".to_string(),
            residue_number,
            mutant_residue: "ALA".to_string(),
            ddg_value: ReportedValue::from(value),
        }
    }

    fn sample_bins() -> ResidueBins {
        let mut bins = ResidueBins::new();
        bins.push(key(1), 2.0);
        bins.push(key(1), 4.0);
        bins.push(key(3), 1.0);
        bins
    }

    #[test]
    fn mean_of_averages_observed_residues() {
        let bins = sample_bins();
        assert_eq!(bins.mean_of(key(1)).unwrap(), 3.0);
        assert_eq!(bins.mean_of(key(3)).unwrap(), 1.0);
    }

    #[test]
    fn mean_of_empty_residue_surfaces_empty_bin_error() {
        let bins = sample_bins();
        assert!(matches!(
            bins.mean_of(key(2)),
            Err(EngineError::EmptyAggregationBin { residue }) if residue == key(2)
        ));
        assert!(matches!(
            bins.mean_of(key(40)),
            Err(EngineError::EmptyAggregationBin { .. })
        ));
    }

    #[test]
    fn means_fails_on_first_empty_bin_by_default() {
        let result = sample_bins().means(EmptyBinPolicy::Error);
        assert!(matches!(
            result,
            Err(EngineError::EmptyAggregationBin { residue }) if residue == key(2)
        ));
    }

    #[test]
    fn means_with_omit_policy_skips_empty_bins() {
        let means = sample_bins().means(EmptyBinPolicy::Omit).unwrap();
        assert_eq!(
            means,
            vec![
                ResidueMean {
                    residue: key(1),
                    mean: 3.0
                },
                ResidueMean {
                    residue: key(3),
                    mean: 1.0
                },
            ]
        );
    }

    #[test]
    fn means_are_ordered_by_residue_regardless_of_input_order() {
        let records = vec![ddg(3, 1.0), ddg(1, 2.0), ddg(2, 5.0), ddg(1, 4.0)];
        let means = ResidueBins::from_ddg_records(&records)
            .unwrap()
            .means(EmptyBinPolicy::Error)
            .unwrap();
        let pairs: Vec<_> = means.iter().map(|m| (m.residue.get(), m.mean)).collect();
        assert_eq!(pairs, vec![(1, 3.0), (2, 5.0), (3, 1.0)]);
    }

    #[test]
    fn from_ddg_records_rejects_non_positive_residue_numbers() {
        let result = ResidueBins::from_ddg_records(&[ddg(0, 1.0)]);
        assert!(matches!(result, Err(EngineError::ResidueKey(_))));
    }

    #[test]
    fn extend_to_adds_empty_trailing_bins() {
        let mut bins = sample_bins();
        bins.extend_to(key(5));
        assert_eq!(bins.max_key(), Some(key(5)));
        assert!(bins.values(key(5)).is_empty());
    }

    #[test]
    fn significance_counts_positive_and_negative_hits() {
        let records = vec![ddg(5, 2.5), ddg(5, -3.0), ddg(5, 1.0)];
        let counts = SignificanceCounts::from_ddg_records(&records, 2.0).unwrap();
        let rows = counts.rows();

        assert_eq!(rows.len(), 5);
        assert_eq!(
            rows[4],
            SignificanceRow {
                residue: key(5),
                positive: 1,
                negative: 1
            }
        );
        assert!(rows[..4].iter().all(|r| r.positive == 0 && r.negative == 0));
    }

    #[test]
    fn significance_cutoff_is_inclusive_on_both_sides() {
        let mut counts = SignificanceCounts::new(1.0).unwrap();
        counts.observe(key(1), 1.0);
        counts.observe(key(1), -1.0);
        counts.observe(key(1), 0.999);
        assert_eq!(
            counts.rows(),
            vec![SignificanceRow {
                residue: key(1),
                positive: 1,
                negative: 1
            }]
        );
    }

    #[test]
    fn zero_cutoff_counts_zero_as_both_positive_and_negative() {
        let mut counts = SignificanceCounts::new(0.0).unwrap();
        counts.observe(key(2), 0.0);
        let rows = counts.rows();
        assert_eq!(rows[1].positive, 1);
        assert_eq!(rows[1].negative, 1);
    }

    #[test]
    fn non_significant_values_still_extend_the_residue_range() {
        let mut counts = SignificanceCounts::new(5.0).unwrap();
        counts.observe(key(3), 0.1);
        assert_eq!(counts.max_key(), Some(key(3)));
        assert_eq!(counts.rows().len(), 3);
    }

    #[test]
    fn invalid_cutoffs_are_rejected() {
        assert!(matches!(
            SignificanceCounts::new(-1.0),
            Err(EngineError::InvalidThreshold(_))
        ));
        assert!(matches!(
            SignificanceCounts::new(f64::NAN),
            Err(EngineError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn empty_input_produces_no_rows() {
        let counts = SignificanceCounts::from_ddg_records(&[], 1.0).unwrap();
        assert!(counts.rows().is_empty());
        let bins = ResidueBins::from_ddg_records(&[]).unwrap();
        assert!(bins.means(EmptyBinPolicy::Error).unwrap().is_empty());
    }
}
