//! Interactions with the external ffmpeg tool and the file system.
//!
//! Everything that touches a process or file metadata goes through the
//! traits in this module and its submodules, so the pipeline can be driven
//! by a scripted process in tests.

use crate::error::{CoreError, CoreResult};

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// ffmpeg command construction for the fixed compression preset.
pub mod ffmpeg;

/// Traits and implementations for spawning ffmpeg processes.
pub mod ffmpeg_executor;

pub use ffmpeg::build_ffmpeg_command;
pub use ffmpeg_executor::{FfmpegProcess, FfmpegSpawner, SidecarProcess, SidecarSpawner};

/// Checks if a required external command is available and executable.
///
/// Runs `<cmd> -version` with output discarded and inspects only whether
/// the command could be started at all.
///
/// # Errors
///
/// * `CoreError::DependencyNotFound` - the command is not on the path
/// * `CoreError::CommandStart` - the command exists but failed to start
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {cmd_name}");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{cmd_name}' not found.");
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{cmd_name}': {e}");
            Err(CoreError::CommandStart(cmd_name.to_string(), e))
        }
    }
}

/// Trait for abstracting file metadata access.
///
/// Decouples size statistics from direct file system access so tests can
/// substitute fixed sizes.
pub trait FileMetadataProvider {
    /// Gets the size of the file at the given path in bytes.
    fn get_size(&self, path: &Path) -> CoreResult<u64>;
}

/// Standard implementation of `FileMetadataProvider` using `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct StdFsMetadataProvider;

impl FileMetadataProvider for StdFsMetadataProvider {
    fn get_size(&self, path: &Path) -> CoreResult<u64> {
        Ok(std::fs::metadata(path)?.len())
    }
}
