// vidpress-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "vidpress: compress a video file with ffmpeg",
    long_about = "Compresses a chosen video file to a smaller .mp4 using ffmpeg. \
                  With no FILE argument, scans a directory and prompts for one."
)]
pub struct Cli {
    /// Video file to compress; prompts interactively when omitted
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory to scan for video files when no FILE is given
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Suffix appended to the output filename (before the .mp4 extension)
    #[arg(short, long, value_name = "SUFFIX")]
    pub suffix: Option<String>,
}
