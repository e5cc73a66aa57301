use super::record::ResidueRecord;
use super::residue_key::{ResidueKey, ResidueKeyError, ResidueKeyExtractor};
use super::value::ReportedValue;
use std::fmt;

/// Apparent pKa of a titratable site.
///
/// H++ writes a bound such as `>12.000` when the value falls outside the
/// titration window; that text is kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum PkHalf {
    Value(ReportedValue),
    OutOfRange(String),
}

impl PkHalf {
    pub fn value(&self) -> Option<f64> {
        match self {
            PkHalf::Value(v) => Some(v.value()),
            PkHalf::OutOfRange(_) => None,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            PkHalf::Value(v) => v.text(),
            PkHalf::OutOfRange(text) => text,
        }
    }
}

impl fmt::Display for PkHalf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// One titratable site from an H++ protonation report.
#[derive(Debug, Clone, PartialEq)]
pub struct HppRecord {
    pub residue_label: String, // e.g. "LYS-3", "NTMET-1", "CTLYS-313"
    pub pk_intrinsic: ReportedValue,
    pub pk_half: PkHalf,
}

impl ResidueRecord for HppRecord {
    const FIELD_COUNT: usize = 3;

    fn residue_key(&self) -> Result<ResidueKey, ResidueKeyError> {
        ResidueKeyExtractor::extract(&self.residue_label)
    }

    fn csv_fields(&self) -> Vec<String> {
        vec![
            self.residue_label.clone(),
            self.pk_intrinsic.text().to_string(),
            self.pk_half.text().to_string(),
        ]
    }
}
