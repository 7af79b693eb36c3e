//! Fixed configuration for the compression pipeline.
//!
//! vidpress deliberately exposes no codec or quality knobs; a single fixed
//! preset keeps every run reproducible. The constants live here so the
//! command builder, discovery, and the CLI share one source.

/// Container extension every output file uses, regardless of the input's
/// original container.
pub const OUTPUT_CONTAINER_EXT: &str = "mp4";

/// Extensions eligible for discovery. Matched case-sensitively against the
/// text after the last `.` of a filename.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv"];

/// Default suffix appended to output filenames when the user supplies none.
pub const DEFAULT_SUFFIX: &str = "_compressed";

/// Constant rate factor passed to libx264. Higher means smaller output.
pub const VIDEO_CRF: u32 = 28;

/// libx264 speed/quality preset.
pub const VIDEO_PRESET: &str = "medium";

/// Audio bitrate in kbit/s for the aac track.
pub const AUDIO_BITRATE_KBPS: u32 = 128;
