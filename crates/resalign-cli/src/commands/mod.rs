pub mod align;
pub mod average;
pub mod compare;
pub mod convert;
pub mod significance;

use crate::cli::HppArgs;
use crate::config::{CliOverrides, PartialAnalysisConfig};
use crate::error::Result;
use resalign::engine::config::AnalysisConfig;
use std::path::Path;
use tracing::info;

fn resolve_config(config_path: Option<&Path>, overrides: CliOverrides) -> Result<AnalysisConfig> {
    let partial = PartialAnalysisConfig::load(config_path)?;
    info!("Merging configuration from file and CLI arguments...");
    partial.merge_with_cli(&overrides)
}

impl HppArgs {
    fn overrides(self) -> CliOverrides {
        CliOverrides {
            preamble_lines: self.preamble_lines,
            read_to_end: self.read_to_end,
            ..Default::default()
        }
    }
}
