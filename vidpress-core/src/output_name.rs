//! Output filename derivation.
//!
//! The output name is built by removing the last `.`-delimited segment of
//! the input name, appending the user's suffix, and normalizing to the
//! fixed container extension. The last segment is removed unconditionally:
//! an input with no real extension loses its final segment too
//! (`"movie"` + `"_small"` becomes `"_small.mp4"`). The suffix is not
//! validated for filesystem safety.

use crate::config::OUTPUT_CONTAINER_EXT;
use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// Derives an output filename from an input filename and a suffix.
#[must_use]
pub fn build_output_name(input_name: &str, suffix: &str) -> String {
    let stem = match input_name.rfind('.') {
        Some(idx) => &input_name[..idx],
        None => "",
    };
    format!("{stem}{suffix}.{OUTPUT_CONTAINER_EXT}")
}

/// Derives the full output path for an input file: same directory, derived
/// filename.
///
/// # Errors
///
/// Returns `CoreError::PathError` if the input path has no filename
/// component.
pub fn build_output_path(input_path: &Path, suffix: &str) -> CoreResult<PathBuf> {
    let file_name = input_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            CoreError::PathError(format!(
                "Failed to get filename for {}",
                input_path.display()
            ))
        })?;

    let output_name = build_output_name(file_name, suffix);
    Ok(input_path.with_file_name(output_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_extension_with_suffix_and_mp4() {
        assert_eq!(build_output_name("movie.mov", "_small"), "movie_small.mp4");
        assert_eq!(build_output_name("clip.mkv", "_x"), "clip_x.mp4");
        assert_eq!(build_output_name("video.mp4", "_small"), "video_small.mp4");
    }

    #[test]
    fn removes_last_segment_even_without_real_extension() {
        // The last dot-delimited segment goes unconditionally.
        assert_eq!(build_output_name("movie", "_small"), "_small.mp4");
        assert_eq!(build_output_name("archive.tar.gz", "_x"), "archive.tar_x.mp4");
    }

    #[test]
    fn output_path_stays_in_input_directory() {
        let input = Path::new("/videos/movie.mov");
        let output = build_output_path(input, "_small").unwrap();
        assert_eq!(output, PathBuf::from("/videos/movie_small.mp4"));
    }

    #[test]
    fn output_path_without_filename_is_an_error() {
        assert!(build_output_path(Path::new("/"), "_small").is_err());
    }
}
