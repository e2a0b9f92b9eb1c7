//! CLI argument parsing and structure definitions.

use clap::{Parser, Subcommand};

use super::commands::{AnalyzeArgs, ExtractArgs};

/// Entity-level transcription accuracy evaluation
#[derive(Parser)]
#[command(name = "nomina")]
#[command(
    author,
    version,
    about = "Entity-level transcription accuracy evaluation",
    long_about = r#"
nomina - how badly did the transcription pipeline mangle proper nouns?

Compares the named entities detected in a candidate transcript against
those detected in a ground-truth transcript, reconciles them despite
shifted positions and phonetic confusions, and reports entity-level and
whole-transcript accuracy.

WORKFLOW:
  1. Extract entities from each transcript into a timeline:
       nomina extract ground_truth.txt out/truth
       nomina extract prediction.txt   out/prediction
  2. Match the timelines and compute statistics:
       nomina analyze out/truth/timeline.json ground_truth.txt \
                      out/prediction/timeline.json prediction.txt out/report
"#
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Extract entities from a transcript into an output directory
    #[command(visible_alias = "x")]
    Extract(ExtractArgs),

    /// Match two entity timelines and write accuracy statistics
    #[command(visible_alias = "a")]
    Analyze(AnalyzeArgs),
}
