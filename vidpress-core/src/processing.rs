//! The encode pipeline: spawn ffmpeg, track progress, produce the result.
//!
//! One call runs one encode. The call blocks on the child process: events
//! are consumed in emission order from the parsed stream, and the function
//! returns only after a terminal event (clean end or failure). There is no
//! timeout and no cancellation once the encode has started; a hung encoder
//! hangs the call.

use crate::error::{CoreResult, command_failed_error};
use crate::external::ffmpeg::{build_ffmpeg_command, is_non_critical_ffmpeg_message};
use crate::external::{FfmpegProcess, FfmpegSpawner, FileMetadataProvider};
use crate::output_name::build_output_path;
use crate::progress_reporting;
use crate::utils::parse_ffmpeg_time;
use crate::{CompressionResult, EncodeRequest};

use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel as FfmpegLogLevel};
use log::{debug, info, warn};
use std::time::Instant;

/// Runs the external encoder against the requested input and returns the
/// completed [`CompressionResult`].
///
/// Exactly one child process is spawned per call. On success exactly one
/// output file exists next to the input; on failure a partially-written
/// output file may be left in place, and the returned error names it.
///
/// # Errors
///
/// * `CoreError::PathError` - the input path has no filename to derive from
/// * `CoreError::CommandStart` - the encoder process could not be spawned
/// * `CoreError::CommandFailed` - the encoder exited abnormally
/// * `CoreError::StatsIo` - the post-encode size read failed
pub fn compress_video<S, M>(
    spawner: &S,
    metadata: &M,
    request: &EncodeRequest,
) -> CoreResult<CompressionResult>
where
    S: FfmpegSpawner,
    M: FileMetadataProvider,
{
    let output_path = build_output_path(&request.input_path, &request.suffix)?;

    info!(
        "Starting encode: {} -> {}",
        request.input_path.display(),
        output_path.display()
    );
    progress_reporting::status("Output", &output_path.display().to_string());

    let cmd = build_ffmpeg_command(&request.input_path, &output_path);
    debug!("ffmpeg command: {cmd:?}");

    let start_time = Instant::now();
    let mut process = spawner.spawn(cmd)?;

    let mut total_duration: Option<f64> = None;
    let mut stderr_buffer = String::new();

    process.handle_events(|event| {
        match event {
            FfmpegEvent::ParsedDuration(parsed) => {
                debug!("Source duration: {:.2}s", parsed.duration);
                if total_duration.is_none() {
                    total_duration = Some(parsed.duration);
                    progress_reporting::progress(parsed.duration, 0.0);
                }
            }
            FfmpegEvent::Progress(p) => {
                let elapsed = parse_ffmpeg_time(&p.time).unwrap_or(0.0);
                match total_duration {
                    Some(total) => progress_reporting::progress(total, elapsed),
                    None => debug!("Progress before duration event: {}", p.time),
                }
            }
            FfmpegEvent::Log(level, message) => {
                match level {
                    FfmpegLogLevel::Fatal | FfmpegLogLevel::Error => {
                        if !is_non_critical_ffmpeg_message(&message) {
                            stderr_buffer.push_str(&message);
                            stderr_buffer.push('\n');
                        }
                        log::error!(target: "ffmpeg_log", "{message}");
                    }
                    FfmpegLogLevel::Warning => {
                        log::warn!(target: "ffmpeg_log", "{message}")
                    }
                    _ => log::debug!(target: "ffmpeg_log", "{message}"),
                }
            }
            FfmpegEvent::Error(error) => {
                if is_non_critical_ffmpeg_message(&error) {
                    debug!("ffmpeg non-critical message: {error}");
                } else {
                    stderr_buffer.push_str(&error);
                    stderr_buffer.push('\n');
                }
            }
            _ => {}
        }
        Ok(())
    })?;

    let status = process.wait()?;

    if !status.success() {
        progress_reporting::clear_progress();
        let error_message = format!(
            "ffmpeg exited with {}: {}\nPartial output left at {}",
            status,
            stderr_buffer.trim(),
            output_path.display()
        );
        progress_reporting::error(&error_message);
        return Err(command_failed_error("ffmpeg", status, error_message));
    }

    progress_reporting::clear_progress();

    let stats = crate::stats::compute_size_stats(metadata, &request.input_path, &output_path)?;
    if !(0.0..=100.0).contains(&stats.reduction_percent) {
        warn!(
            "Size reduction {:.2}% outside the expected 0-100% range for {}",
            stats.reduction_percent,
            request.input_path.display()
        );
    }

    progress_reporting::success(&format!(
        "Encode finished for {}",
        request.input_path.display()
    ));

    Ok(CompressionResult {
        input_path: request.input_path.clone(),
        output_path,
        input_size_mb: stats.input_size_mb,
        output_size_mb: stats.output_size_mb,
        reduction_percent: stats.reduction_percent,
        elapsed: start_time.elapsed(),
    })
}
