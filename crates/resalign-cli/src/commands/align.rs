use super::resolve_config;
use crate::cli::AlignArgs;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use resalign::core::io::filenames::split_filename_list;
use resalign::engine::error::EngineError;
use resalign::engine::progress::ProgressReporter;
use resalign::workflows::align::{self, AlignRequest};
use std::path::Path;
use tracing::info;

pub fn run(args: AlignArgs, config_path: Option<&Path>) -> Result<()> {
    let config = resolve_config(config_path, args.hpp.overrides())?;

    let inputs = split_filename_list(&args.inputs).map_err(EngineError::from)?;
    let csv_outputs = args
        .csv_outputs
        .as_deref()
        .map(split_filename_list)
        .transpose()
        .map_err(EngineError::from)?;
    let request = AlignRequest {
        inputs,
        csv_outputs,
        output: args.output,
    };

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the alignment workflow...");
    let aligned = align::run(&request, &config.hpp, &reporter)?;

    println!(
        "Aligned {} file(s) into {} residue row(s) in {}.",
        aligned.table_count(),
        aligned.rows().len(),
        request.output.display()
    );
    Ok(())
}
