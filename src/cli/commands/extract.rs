//! Extract command: transcript file → entity map + occurrence timeline.

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use crate::cli::output::{color, log_info};
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::extract::ExtractionClient;
use crate::occurrence::organize_by_position;
use crate::report::{write_entity_map, write_timeline};

/// Extract entities from a transcript
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Path to the transcript file
    pub transcript_file: PathBuf,

    /// Directory to store output files
    pub output_dir: PathBuf,

    /// Entity types to extract
    #[arg(
        long = "entity-types",
        value_name = "TYPE",
        num_args = 1..,
        default_values = ["NAME", "ORGANIZATION"]
    )]
    pub entity_types: Vec<String>,

    /// Suppress non-essential messages
    #[arg(short, long)]
    pub quiet: bool,
}

/// Run the extract command.
pub fn run(args: ExtractArgs) -> Result<()> {
    // The credential check happens before the transcript is even read, so a
    // misconfigured environment fails fast without touching the network.
    let config = ApiConfig::from_env()?;

    let transcript = fs::read_to_string(&args.transcript_file).map_err(|e| {
        Error::invalid_input(format!(
            "Failed to read transcript {}: {}",
            args.transcript_file.display(),
            e
        ))
    })?;

    let client = ExtractionClient::new(config);
    let entities = client.extract_entities(&transcript, &args.entity_types)?;
    write_entity_map(&args.output_dir, &entities)?;

    let timeline = organize_by_position(&entities);
    write_timeline(&args.output_dir, &timeline)?;

    log_info(
        &format!(
            "{} extracted {} entities ({} occurrences) into {}",
            color("32", "ok:"),
            entities.len(),
            timeline.len(),
            args.output_dir.display()
        ),
        args.quiet,
    );

    Ok(())
}
