mod cli;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use imgcvt::image_pipeline::PngToRawPipeline;
use imgcvt::logger;

use tracing::{error, info};

use crate::cli::Cli;

fn main() -> ExitCode {
    // Option errors are reported by clap before anything touches the filesystem.
    let cli = Cli::parse();

    logger::init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Conversion failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let pipeline = PngToRawPipeline::new(cli.config());

    info!("Color format: {}", pipeline.config().color_format);
    info!("Rotation: {}", pipeline.config().orientation);

    let summary = pipeline
        .convert_file(&cli.input, &cli.output)
        .with_context(|| format!("{} -> {}", cli.input.display(), cli.output.display()))?;

    info!(
        "Wrote {}x{} image ({} bytes) to {}",
        summary.width,
        summary.height,
        summary.bytes_written,
        cli.output.display()
    );

    if cli.timings {
        summary.timings.log_summary();
    }

    Ok(())
}
