//! ffmpeg command construction for the fixed compression preset.
//!
//! Every run uses the same settings: libx264 at a fixed CRF with aac audio
//! and `+faststart`, writing the computed `.mp4` output path. There are no
//! quality knobs.

use crate::config;

use ffmpeg_sidecar::command::FfmpegCommand;
use std::path::Path;

/// Builds the ffmpeg command for compressing `input_path` to `output_path`.
#[must_use]
pub fn build_ffmpeg_command(input_path: &Path, output_path: &Path) -> FfmpegCommand {
    let mut cmd = FfmpegCommand::new();
    cmd.args(["-hide_banner"]);
    cmd.input(input_path.to_string_lossy().as_ref());

    cmd.args(["-c:v", "libx264"]);
    cmd.args(["-crf", &config::VIDEO_CRF.to_string()]);
    cmd.args(["-preset", config::VIDEO_PRESET]);

    cmd.args(["-c:a", "aac"]);
    cmd.args(["-b:a", &format!("{}k", config::AUDIO_BITRATE_KBPS)]);

    cmd.args(["-movflags", "+faststart"]);

    // Overwrite a leftover output from an earlier failed run.
    cmd.args(["-y"]);
    cmd.output(output_path.to_string_lossy().as_ref());

    cmd
}

/// Determines if an ffmpeg stderr message is non-critical.
///
/// These appear on stderr during normal operation and don't indicate
/// actual problems.
#[must_use]
pub fn is_non_critical_ffmpeg_message(message: &str) -> bool {
    message.contains("deprecated pixel format")
        || message.contains("No accelerated colorspace conversion")
        || message.contains("automatically inserted filter")
        || message.contains("Timestamps are unset")
        || message.contains("Queue input is backward")
        || message.contains("first frame is no keyframe")
}
