//! Core library for the vidpress video compression tool.
//!
//! This crate provides video file discovery, output naming, progress
//! formatting, size statistics, and the ffmpeg encode pipeline. The CLI
//! crate layers argument parsing, the interactive picker, and terminal
//! presentation on top.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vidpress_core::{EncodeRequest, compress_video};
//! use vidpress_core::external::{SidecarSpawner, StdFsMetadataProvider};
//! use std::path::PathBuf;
//!
//! let request = EncodeRequest {
//!     input_path: PathBuf::from("/videos/movie.mov"),
//!     suffix: "_small".to_string(),
//! };
//!
//! let result = compress_video(&SidecarSpawner, &StdFsMetadataProvider, &request).unwrap();
//! println!(
//!     "{} -> {} ({:.2}% smaller)",
//!     result.input_path.display(),
//!     result.output_path.display(),
//!     result.reduction_percent
//! );
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod output_name;
pub mod processing;
pub mod progress_reporting;
pub mod stats;
pub mod utils;

// Re-exports for public API
pub use discovery::find_video_files;
pub use error::{CoreError, CoreResult};
pub use external::{check_dependency, FileMetadataProvider, StdFsMetadataProvider};
pub use output_name::{build_output_name, build_output_path};
pub use processing::compress_video;
pub use progress_reporting::format_progress_label;
pub use stats::{SizeStats, compute_size_stats};
pub use utils::{format_duration, parse_ffmpeg_time};

use std::path::PathBuf;
use std::time::Duration;

/// A single compression request: which file, and what to call the output.
///
/// Built at selection time and consumed once by [`compress_video`].
#[derive(Debug, Clone)]
pub struct EncodeRequest {
    pub input_path: PathBuf,
    /// Appended to the input's stem to form the output filename.
    pub suffix: String,
}

/// Result of a successful compression run.
#[derive(Debug, Clone)]
pub struct CompressionResult {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub input_size_mb: f64,
    pub output_size_mb: f64,
    pub reduction_percent: f64,
    /// Wall-clock time the encode took.
    pub elapsed: Duration,
}
