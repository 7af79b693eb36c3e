//! File discovery module for finding video files to compress.
//!
//! Scans the top level of a directory for files whose extension is in the
//! allowed set. The extension match is case-sensitive: it compares the text
//! after the last `.` against [`crate::config::VIDEO_EXTENSIONS`] exactly.
//! Subdirectories are not searched.

use crate::config::VIDEO_EXTENSIONS;
use crate::error::CoreResult;

use std::path::{Path, PathBuf};

/// Finds video files eligible for compression in the specified directory.
///
/// Returns the matching paths sorted by filename so listings are stable.
/// An empty result is not an error here; the caller decides whether zero
/// candidates is fatal.
///
/// # Errors
///
/// Returns `CoreError::Io` if the directory cannot be read.
pub fn find_video_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(input_dir)?;
    let mut files: Vec<PathBuf> = read_dir
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();

            if !path.is_file() {
                return None;
            }

            path.extension()
                .and_then(|ext| ext.to_str())
                .filter(|ext_str| VIDEO_EXTENSIONS.contains(ext_str))
                .map(|_| path.clone())
        })
        .collect();

    files.sort();
    Ok(files)
}
