use crate::cli::Cli;
use crate::config::PartialSelectionConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use grablow::engine::progress::ProgressReporter;
use grablow::workflows::select::{self, RunSummary};
use tracing::{info, warn};

pub fn run(args: &Cli) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialSelectionConfig::from_file(path)?,
        None => PartialSelectionConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(args, std::env::current_dir()?)?;
    info!(
        "Selecting the top {} structure(s) per protein from {:?} into {:?}",
        config.hit_length, &config.input_dir, &config.output_dir
    );

    let progress_handler = CliProgressHandler::new(!args.quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let summary = select::run(&config, &reporter)?;
    print_summary(&summary);

    Ok(())
}

fn print_summary(summary: &RunSummary) {
    let processed = summary.processed().count();
    if processed == 0 {
        warn!("No protein directory produced a ranking.");
    }

    println!(
        "Processed {} protein(s), skipped {}; copied {} structure file(s).",
        processed,
        summary.skipped_count(),
        summary.total_copied()
    );
    for (name, report) in summary.processed() {
        match &report.manifest {
            Some(manifest) => println!(
                "  {}: {} of {} selected structure(s) copied, listed in {}",
                name,
                report.copied.len(),
                report.selected,
                manifest.display()
            ),
            None => println!(
                "  {}: nothing new copied ({} already present, {} not found)",
                name,
                report.already_present.len(),
                report.unresolved.len()
            ),
        }
    }
}
