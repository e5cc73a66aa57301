use crate::core::io::hpp::HppParseOptions;
use crate::core::io::terminator::TerminatorPolicy;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

/// What per-residue averaging does with a residue that has no observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyBinPolicy {
    /// Fail with `EmptyAggregationBin`.
    #[default]
    Error,
    /// Leave the residue out of the output and log how many were left out.
    Omit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignificanceConfig {
    pub cutoff: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AveragingConfig {
    pub empty_bins: EmptyBinPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    pub hpp: HppParseOptions,
    pub significance: SignificanceConfig,
    pub averaging: AveragingConfig,
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    preamble_lines: Option<usize>,
    terminator: Option<TerminatorPolicy>,
    significance_cutoff: Option<f64>,
    empty_bins: Option<EmptyBinPolicy>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preamble_lines(mut self, lines: usize) -> Self {
        self.preamble_lines = Some(lines);
        self
    }
    pub fn terminator(mut self, policy: TerminatorPolicy) -> Self {
        self.terminator = Some(policy);
        self
    }
    pub fn significance_cutoff(mut self, cutoff: f64) -> Self {
        self.significance_cutoff = Some(cutoff);
        self
    }
    pub fn empty_bins(mut self, policy: EmptyBinPolicy) -> Self {
        self.empty_bins = Some(policy);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let cutoff = self
            .significance_cutoff
            .ok_or(ConfigError::MissingParameter("significance_cutoff"))?;
        if !cutoff.is_finite() || cutoff < 0.0 {
            return Err(ConfigError::InvalidValue {
                parameter: "significance_cutoff",
                reason: format!("must be finite and non-negative, got {}", cutoff),
            });
        }

        Ok(AnalysisConfig {
            hpp: HppParseOptions {
                preamble_lines: self
                    .preamble_lines
                    .ok_or(ConfigError::MissingParameter("preamble_lines"))?,
                terminator: self
                    .terminator
                    .ok_or(ConfigError::MissingParameter("terminator"))?,
            },
            significance: SignificanceConfig { cutoff },
            averaging: AveragingConfig {
                empty_bins: self
                    .empty_bins
                    .ok_or(ConfigError::MissingParameter("empty_bins"))?,
            },
        })
    }
}
