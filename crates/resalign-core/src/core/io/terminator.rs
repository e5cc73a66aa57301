//! End-of-data policies for H++ report tables.
//!
//! H++ repeats the label of the first table row after the last one, and the
//! reader must stop there rather than read the repeat as a new record. The
//! check is isolated behind [`Terminator`] so a different report layout only
//! needs a different policy, not a different reader.

use serde::Deserialize;

pub trait Terminator {
    /// Inspects the label of the next data row and returns `true` if that row
    /// ends the table. The terminating row itself is not a record.
    fn is_end(&mut self, label: &str) -> bool;

    /// Whether reaching end of input without a terminating row is unexpected.
    fn expects_marker(&self) -> bool {
        false
    }
}

/// Stops at the second occurrence of the first row's label.
#[derive(Debug, Default)]
pub struct RepeatedFirstLabel {
    first: Option<String>,
}

impl Terminator for RepeatedFirstLabel {
    fn is_end(&mut self, label: &str) -> bool {
        match &self.first {
            Some(first) => first == label,
            None => {
                self.first = Some(label.to_string());
                false
            }
        }
    }

    fn expects_marker(&self) -> bool {
        true
    }
}

/// Reads every row until the input is exhausted.
#[derive(Debug, Default)]
pub struct EndOfInput;

impl Terminator for EndOfInput {
    fn is_end(&mut self, _label: &str) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminatorPolicy {
    #[default]
    RepeatedFirstLabel,
    EndOfInput,
}

impl TerminatorPolicy {
    pub fn terminator(self) -> Box<dyn Terminator> {
        match self {
            TerminatorPolicy::RepeatedFirstLabel => Box::new(RepeatedFirstLabel::default()),
            TerminatorPolicy::EndOfInput => Box::new(EndOfInput),
        }
    }
}
