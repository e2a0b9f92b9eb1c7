//! Analyze command: two timelines + two transcripts → match report,
//! statistics, and a human-readable summary.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::{Error, Result};
use crate::matcher::{match_occurrences, DEFAULT_POSITION_TOLERANCE};
use crate::metrics::statistics;
use crate::normalize::SpokenTextNormalizer;
use crate::report::{read_timeline, write_match_result, write_statistics};

/// Match entity timelines and generate statistics
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Path to the ground truth timeline JSON file
    pub ground_truth_timeline: PathBuf,

    /// Path to the ground truth transcript file
    pub ground_truth_transcript: PathBuf,

    /// Path to the prediction timeline JSON file
    pub prediction_timeline: PathBuf,

    /// Path to the prediction transcript file
    pub prediction_transcript: PathBuf,

    /// Path to the output folder
    pub output_folder: PathBuf,

    /// Maximum normalized-position difference for the gated matching passes
    #[arg(long, value_name = "N", default_value_t = DEFAULT_POSITION_TOLERANCE)]
    pub position_tolerance: u32,
}

fn read_transcript(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        Error::invalid_input(format!("Failed to read transcript {}: {}", path.display(), e))
    })
}

/// Run the analyze command.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let ground_truth = read_timeline(&args.ground_truth_timeline)?;
    let prediction = read_timeline(&args.prediction_timeline)?;

    let result = match_occurrences(&ground_truth, &prediction, args.position_tolerance);
    write_match_result(&args.output_folder, &result)?;

    let truth_text = read_transcript(&args.ground_truth_transcript)?;
    let prediction_text = read_transcript(&args.prediction_transcript)?;

    let normalizer = SpokenTextNormalizer::new();
    let stats = statistics(&result, &truth_text, &prediction_text, &normalizer)?;
    write_statistics(&args.output_folder, &stats)?;

    println!("Matched entities: {}", stats.total_matches);
    println!(
        "Unmatched ground truth entities: {}",
        stats.total_unmatched_truth
    );
    println!(
        "Unmatched predicted entities: {}",
        stats.total_unmatched_transcribed
    );
    println!("Transcript WER: {}", stats.transcript_wer);

    Ok(())
}
