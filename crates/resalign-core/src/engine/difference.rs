use super::binning::ResidueMean;
use super::error::EngineError;
use crate::core::models::residue_key::ResidueKey;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResidueDifference {
    pub residue: ResidueKey,
    pub first: f64,
    pub second: f64,
    pub difference: f64,
}

/// Elementwise `first[i] - second[i]` over two series already in the same
/// residue order.
pub fn difference(first: &[f64], second: &[f64]) -> Result<Vec<f64>, EngineError> {
    if first.len() != second.len() {
        return Err(EngineError::LengthMismatch {
            left: first.len(),
            right: second.len(),
        });
    }
    Ok(first.iter().zip(second).map(|(a, b)| a - b).collect())
}

/// Differences of two per-residue mean series.
///
/// The series must list the same residues in the same order; they are
/// checked, not re-aligned.
pub fn mean_difference(
    first: &[ResidueMean],
    second: &[ResidueMean],
) -> Result<Vec<ResidueDifference>, EngineError> {
    if first.len() != second.len() {
        return Err(EngineError::LengthMismatch {
            left: first.len(),
            right: second.len(),
        });
    }
    if let Some((position, (a, b))) = first
        .iter()
        .zip(second)
        .enumerate()
        .find(|(_, (a, b))| a.residue != b.residue)
    {
        return Err(EngineError::KeyMismatch {
            position,
            left: a.residue,
            right: b.residue,
        });
    }

    let first_values: Vec<f64> = first.iter().map(|m| m.mean).collect();
    let second_values: Vec<f64> = second.iter().map(|m| m.mean).collect();
    let deltas = difference(&first_values, &second_values)?;

    Ok(first
        .iter()
        .zip(second)
        .zip(deltas)
        .map(|((a, b), difference)| ResidueDifference {
            residue: a.residue,
            first: a.mean,
            second: b.mean,
            difference,
        })
        .collect())
}
