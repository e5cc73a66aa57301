use super::resolve_config;
use crate::cli::{ConvertArgs, ReportKind};
use crate::error::Result;
use resalign::workflows::convert;
use std::path::Path;
use tracing::info;

pub fn run(args: ConvertArgs, config_path: Option<&Path>) -> Result<()> {
    let records = match args.kind {
        ReportKind::Ddg => convert::ddg_to_csv(&args.input, &args.output)?,
        ReportKind::Hpp => {
            let config = resolve_config(config_path, args.hpp.overrides())?;
            convert::hpp_to_csv(&args.input, &args.output, &config.hpp)?
        }
    };

    info!("Conversion of {:?} finished.", args.input);
    println!(
        "Converted {} record(s) to {}.",
        records,
        args.output.display()
    );
    Ok(())
}
