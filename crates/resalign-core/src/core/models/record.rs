use super::residue_key::{ResidueKey, ResidueKeyError};

/// A parsed report row that can be placed into a residue-indexed table.
pub trait ResidueRecord {
    /// Number of CSV fields a rendered record occupies.
    const FIELD_COUNT: usize;

    fn residue_key(&self) -> Result<ResidueKey, ResidueKeyError>;

    /// Renders the record as exactly `FIELD_COUNT` CSV fields.
    fn csv_fields(&self) -> Vec<String>;
}
