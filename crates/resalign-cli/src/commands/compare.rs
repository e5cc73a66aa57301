use super::resolve_config;
use crate::cli::CompareArgs;
use crate::config::CliOverrides;
use crate::error::Result;
use resalign::workflows::compare;
use std::path::Path;
use tracing::warn;

pub fn run(args: CompareArgs, config_path: Option<&Path>) -> Result<()> {
    let overrides = CliOverrides {
        omit_empty: args.omit_empty,
        ..Default::default()
    };
    let config = resolve_config(config_path, overrides)?;

    let differences = compare::run(&args.first, &args.second, &args.output, &config.averaging)?;
    if differences.is_empty() {
        warn!("The compared reports share no residues with observations.");
    }
    println!(
        "Wrote {} residue difference(s) to {}.",
        differences.len(),
        args.output.display()
    );
    Ok(())
}
