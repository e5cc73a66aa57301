use super::resolve_config;
use crate::cli::SignificanceArgs;
use crate::config::CliOverrides;
use crate::error::Result;
use resalign::workflows::significance;
use std::path::Path;

pub fn run(args: SignificanceArgs, config_path: Option<&Path>) -> Result<()> {
    let overrides = CliOverrides {
        significance_cutoff: args.cutoff,
        ..Default::default()
    };
    let config = resolve_config(config_path, overrides)?;

    let rows = significance::run(&args.input, &args.output, &config.significance)?;
    let (positive, negative) = rows.iter().fold((0u64, 0u64), |(p, n), row| {
        (p + u64::from(row.positive), n + u64::from(row.negative))
    });
    println!(
        "Counted {} positive and {} negative hit(s) at cutoff {} over {} residue(s); written to {}.",
        positive,
        negative,
        config.significance.cutoff,
        rows.len(),
        args.output.display()
    );
    Ok(())
}
