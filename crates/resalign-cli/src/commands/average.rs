use super::resolve_config;
use crate::cli::AverageArgs;
use crate::config::CliOverrides;
use crate::error::Result;
use resalign::workflows::average;
use std::path::Path;

pub fn run(args: AverageArgs, config_path: Option<&Path>) -> Result<()> {
    let overrides = CliOverrides {
        omit_empty: args.omit_empty,
        ..Default::default()
    };
    let config = resolve_config(config_path, overrides)?;

    let means = average::run(&args.input, &args.output, &config.averaging)?;
    println!(
        "Wrote mean DDG for {} residue(s) to {}.",
        means.len(),
        args.output.display()
    );
    Ok(())
}
