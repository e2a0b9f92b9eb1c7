//! nomina - entity-level transcription accuracy CLI.
//!
//! Two commands, communicating through persisted JSON artifacts:
//!
//! ```bash
//! # Detect entities in each transcript (requires PRIVATE_AI_API_KEY)
//! nomina extract ground_truth.txt out/truth
//! nomina extract prediction.txt out/prediction --entity-types NAME ORGANIZATION
//!
//! # Reconcile the timelines and report accuracy
//! nomina analyze out/truth/timeline.json ground_truth.txt \
//!                out/prediction/timeline.json prediction.txt out/report
//! ```

use std::process::ExitCode;

use clap::Parser;

use nomina::cli::commands::{analyze, extract};
use nomina::cli::{color, Cli, Commands};

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract(args) => extract::run(args),
        Commands::Analyze(args) => analyze::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", color("31", "error:"), e);
            ExitCode::FAILURE
        }
    }
}
