use super::record::ResidueRecord;
use super::residue_key::{ResidueKey, ResidueKeyError};
use super::value::ReportedValue;

/// One point mutation from a stability-change (DDG) report.
#[derive(Debug, Clone, PartialEq)]
pub struct DdgRecord {
    pub chain: String,
    pub wildtype_residue: String,
    pub residue_number: i64,
    pub mutant_residue: String,
    pub ddg_value: ReportedValue, // kcal/mol
}

impl DdgRecord {
    pub fn ddg(&self) -> f64 {
        self.ddg_value.value()
    }
}

impl ResidueRecord for DdgRecord {
    const FIELD_COUNT: usize = 5;

    fn residue_key(&self) -> Result<ResidueKey, ResidueKeyError> {
        ResidueKey::from_number(self.residue_number)
    }

    fn csv_fields(&self) -> Vec<String> {
        vec![
            self.chain.clone(),
            self.wildtype_residue.clone(),
            self.residue_number.to_string(),
            self.mutant_residue.clone(),
            self.ddg_value.text().to_string(),
        ]
    }
}
