mod defaults;

use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use resalign::core::io::terminator::TerminatorPolicy;
use resalign::engine::config::{AnalysisConfig, AnalysisConfigBuilder, EmptyBinPolicy};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialHppConfig {
    #[serde(rename = "preamble-lines")]
    preamble_lines: Option<usize>,
    terminator: Option<TerminatorPolicy>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialSignificanceConfig {
    cutoff: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialAveragingConfig {
    #[serde(rename = "empty-bins")]
    empty_bins: Option<EmptyBinPolicy>,
}

/// The analysis config file as written, with every value optional.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAnalysisConfig {
    hpp: Option<PartialHppConfig>,
    significance: Option<PartialSignificanceConfig>,
    averaging: Option<PartialAveragingConfig>,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub preamble_lines: Option<usize>,
    pub read_to_end: bool,
    pub significance_cutoff: Option<f64>,
    pub omit_empty: bool,
}

impl PartialAnalysisConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads `path` if given; without a file every value comes from the
    /// command line or the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(self, overrides: &CliOverrides) -> Result<AnalysisConfig> {
        let defaults = DefaultsConfig::default();
        let hpp = self.hpp.unwrap_or_default();
        let significance = self.significance.unwrap_or_default();
        let averaging = self.averaging.unwrap_or_default();

        let terminator = if overrides.read_to_end {
            TerminatorPolicy::EndOfInput
        } else {
            hpp.terminator.unwrap_or(defaults.terminator)
        };
        let empty_bins = if overrides.omit_empty {
            EmptyBinPolicy::Omit
        } else {
            averaging.empty_bins.unwrap_or(defaults.empty_bins)
        };

        AnalysisConfigBuilder::new()
            .preamble_lines(
                overrides
                    .preamble_lines
                    .or(hpp.preamble_lines)
                    .unwrap_or(defaults.preamble_lines),
            )
            .terminator(terminator)
            .significance_cutoff(
                overrides
                    .significance_cutoff
                    .or(significance.cutoff)
                    .unwrap_or(defaults.significance_cutoff),
            )
            .empty_bins(empty_bins)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }
}
