use std::fmt;

/// A numeric report field that remembers the exact text it was parsed from.
///
/// Arithmetic uses `value`; rendering writes `text` back unchanged, so a
/// report converted to CSV keeps values such as `1.50` or `-0.000` verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportedValue {
    value: f64,
    text: String,
}

impl ReportedValue {
    /// Parses `text` as an `f64`, returning `None` when it is not a number.
    pub fn parse(text: &str) -> Option<Self> {
        let value = text.parse::<f64>().ok()?;
        Some(Self {
            value,
            text: text.to_string(),
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<f64> for ReportedValue {
    fn from(value: f64) -> Self {
        Self {
            value,
            text: value.to_string(),
        }
    }
}

impl fmt::Display for ReportedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
