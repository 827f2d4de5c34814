//! Command implementation for the gleaner CLI.

use crate::cli::args::GleanerArgs;
use crate::error::Result;
use crate::pipeline;

/// Execute a CLI invocation: run the pipeline and print a summary.
pub fn execute_command(args: GleanerArgs) -> Result<()> {
    let config = args.to_config();

    if args.verbosity() > 1 {
        println!("Scanning documents in: {}", config.docs_path.display());
        println!("Occurrence threshold:  {}", config.threshold);
    }

    let summary = pipeline::run(&config)?;

    if args.verbosity() > 0 {
        println!(
            "Processed {} documents, reported {} words -> {}",
            summary.documents,
            summary.words,
            summary.report_path.display()
        );
    }

    Ok(())
}
