use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResidueKeyError {
    #[error("Label '{label}' contains no residue number")]
    NoResidueNumber { label: String },
    #[error("Residue number in label '{label}' is outside 1..={max}", max = MAX_RESIDUE_NUMBER)]
    OutOfRange { label: String },
}

/// Largest residue number accepted in a label or DDG record.
///
/// Residue-indexed containers allocate one slot per number up to the largest
/// key, so the bound also caps their size.
pub const MAX_RESIDUE_NUMBER: u32 = 1_000_000;

/// Canonical residue number used to group and align records across reports.
///
/// Always in `1..=MAX_RESIDUE_NUMBER`, so `key - 1` is a valid zero-based
/// slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ResidueKey(u32);

impl ResidueKey {
    pub fn new(number: u32) -> Option<Self> {
        (1..=MAX_RESIDUE_NUMBER)
            .contains(&number)
            .then_some(Self(number))
    }

    pub fn from_number(number: i64) -> Result<Self, ResidueKeyError> {
        u32::try_from(number)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ResidueKeyError::OutOfRange {
                label: number.to_string(),
            })
    }

    pub fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    /// Iterates every key in `1..=max`, in ascending order.
    pub fn range_to(max: ResidueKey) -> impl Iterator<Item = ResidueKey> {
        (1..=max.0).map(ResidueKey)
    }
}

impl fmt::Display for ResidueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ResidueKey {
    type Err = ResidueKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResidueKeyExtractor::extract(s)
    }
}

/// Derives residue keys from labels such as `LYS-3`, `NTMET-1` or `CTLYS-313`.
///
/// The key is the rightmost maximal run of ASCII digits; any chain or terminus
/// prefix before it is discarded.
pub struct ResidueKeyExtractor;

impl ResidueKeyExtractor {
    pub fn extract(label: &str) -> Result<ResidueKey, ResidueKeyError> {
        let trimmed = label.trim();
        let bytes = trimmed.as_bytes();

        let end = bytes
            .iter()
            .rposition(u8::is_ascii_digit)
            .map(|pos| pos + 1)
            .ok_or_else(|| ResidueKeyError::NoResidueNumber {
                label: label.to_string(),
            })?;
        let start = bytes[..end]
            .iter()
            .rposition(|b| !b.is_ascii_digit())
            .map_or(0, |pos| pos + 1);

        trimmed[start..end]
            .parse::<u32>()
            .ok()
            .and_then(ResidueKey::new)
            .ok_or_else(|| ResidueKeyError::OutOfRange {
                label: label.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u32) -> ResidueKey {
        ResidueKey::new(n).unwrap()
    }

    #[test]
    fn extract_returns_number_for_plain_residue_label() {
        assert_eq!(ResidueKeyExtractor::extract("LYS-3"), Ok(key(3)));
        assert_eq!(ResidueKeyExtractor::extract("GLU-18"), Ok(key(18)));
    }

    #[test]
    fn extract_discards_terminus_prefixes() {
        assert_eq!(ResidueKeyExtractor::extract("NTMET-1"), Ok(key(1)));
        assert_eq!(ResidueKeyExtractor::extract("CTLYS-313"), Ok(key(313)));
    }

    #[test]
    fn extract_accepts_bare_numbers_and_surrounding_whitespace() {
        assert_eq!(ResidueKeyExtractor::extract("42"), Ok(key(42)));
        assert_eq!(ResidueKeyExtractor::extract("  HIS-7\n"), Ok(key(7)));
    }

    #[test]
    fn extract_uses_rightmost_digit_run() {
        assert_eq!(ResidueKeyExtractor::extract("A2-LYS-15"), Ok(key(15)));
    }

    #[test]
    fn extract_fails_when_label_has_no_digits() {
        assert_eq!(
            ResidueKeyExtractor::extract("Residue"),
            Err(ResidueKeyError::NoResidueNumber {
                label: "Residue".to_string()
            })
        );
        assert!(matches!(
            ResidueKeyExtractor::extract(""),
            Err(ResidueKeyError::NoResidueNumber { .. })
        ));
    }

    #[test]
    fn extract_rejects_zero_and_overflowing_numbers() {
        assert!(matches!(
            ResidueKeyExtractor::extract("ALA-0"),
            Err(ResidueKeyError::OutOfRange { .. })
        ));
        assert!(matches!(
            ResidueKeyExtractor::extract("ALA-99999999999"),
            Err(ResidueKeyError::OutOfRange { .. })
        ));
    }

    #[test]
    fn numbers_above_the_residue_bound_are_out_of_range() {
        assert_eq!(ResidueKeyExtractor::extract("LYS-1000000"), Ok(key(MAX_RESIDUE_NUMBER)));
        assert!(matches!(
            ResidueKeyExtractor::extract("LYS-1000001"),
            Err(ResidueKeyError::OutOfRange { .. })
        ));
        assert!(matches!(
            ResidueKey::from_number(4_000_000_000),
            Err(ResidueKeyError::OutOfRange { .. })
        ));
        assert_eq!(ResidueKey::new(MAX_RESIDUE_NUMBER + 1), None);
    }

    #[test]
    fn from_number_rejects_non_positive_residue_numbers() {
        assert_eq!(ResidueKey::from_number(12), Ok(key(12)));
        assert!(ResidueKey::from_number(0).is_err());
        assert!(ResidueKey::from_number(-4).is_err());
    }

    #[test]
    fn range_to_covers_every_key_in_ascending_order() {
        let keys: Vec<u32> = ResidueKey::range_to(key(4)).map(ResidueKey::get).collect();
        assert_eq!(keys, vec![1, 2, 3, 4]);
    }

    #[test]
    fn index_round_trips_through_from_index() {
        assert_eq!(key(1).index(), 0);
        assert_eq!(ResidueKey::from_index(9), key(10));
    }
}
