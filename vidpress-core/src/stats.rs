//! Size statistics for a completed encode.
//!
//! Reads the byte length of the input and output files and computes the
//! megabyte figures and percentage reduction shown to the user. Only sizes
//! are needed, so nothing is streamed. Both files must exist on disk; the
//! pipeline calls this strictly after the encoder process has exited.

use crate::error::{CoreError, CoreResult};
use crate::external::FileMetadataProvider;

use std::path::Path;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Before/after size figures for one encode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeStats {
    pub input_size_mb: f64,
    pub output_size_mb: f64,
    pub reduction_percent: f64,
}

/// Computes size statistics for an input/output file pair.
///
/// `reduction_percent` is `(input - output) / input * 100`; it is negative
/// when the output outgrew the input. A zero-byte input is defined as a
/// 0.0% reduction rather than propagating NaN.
///
/// # Errors
///
/// Returns `CoreError::StatsIo` naming the offending path if either file
/// is missing or unreadable.
pub fn compute_size_stats<M: FileMetadataProvider>(
    metadata: &M,
    input_path: &Path,
    output_path: &Path,
) -> CoreResult<SizeStats> {
    let input_bytes = file_size(metadata, input_path)?;
    let output_bytes = file_size(metadata, output_path)?;

    let reduction_percent = if input_bytes == 0 {
        0.0
    } else {
        (input_bytes as f64 - output_bytes as f64) / input_bytes as f64 * 100.0
    };

    Ok(SizeStats {
        input_size_mb: input_bytes as f64 / BYTES_PER_MB,
        output_size_mb: output_bytes as f64 / BYTES_PER_MB,
        reduction_percent,
    })
}

fn file_size<M: FileMetadataProvider>(metadata: &M, path: &Path) -> CoreResult<u64> {
    metadata.get_size(path).map_err(|e| match e {
        CoreError::Io(source) => CoreError::StatsIo {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::StdFsMetadataProvider;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_file(dir: &Path, name: &str, len: usize) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&vec![0u8; len]).unwrap();
        path
    }

    #[test]
    fn computes_mb_and_reduction() {
        let dir = tempdir().unwrap();
        let input = write_file(dir.path(), "input.mp4", 10_485_760);
        let output = write_file(dir.path(), "output.mp4", 5_242_880);

        let stats = compute_size_stats(&StdFsMetadataProvider, &input, &output).unwrap();
        assert_eq!(stats.input_size_mb, 10.0);
        assert_eq!(stats.output_size_mb, 5.0);
        assert_eq!(stats.reduction_percent, 50.0);
    }

    #[test]
    fn zero_byte_input_is_zero_reduction() {
        let dir = tempdir().unwrap();
        let input = write_file(dir.path(), "input.mp4", 0);
        let output = write_file(dir.path(), "output.mp4", 1024);

        let stats = compute_size_stats(&StdFsMetadataProvider, &input, &output).unwrap();
        assert_eq!(stats.reduction_percent, 0.0);
    }

    #[test]
    fn larger_output_yields_negative_reduction() {
        let dir = tempdir().unwrap();
        let input = write_file(dir.path(), "input.mp4", 1_048_576);
        let output = write_file(dir.path(), "output.mp4", 2_097_152);

        let stats = compute_size_stats(&StdFsMetadataProvider, &input, &output).unwrap();
        assert_eq!(stats.reduction_percent, -100.0);
    }

    #[test]
    fn missing_file_is_a_stats_error() {
        let dir = tempdir().unwrap();
        let input = write_file(dir.path(), "input.mp4", 1024);
        let missing = dir.path().join("missing.mp4");

        let result = compute_size_stats(&StdFsMetadataProvider, &input, &missing);
        match result {
            Err(CoreError::StatsIo { path, .. }) => assert_eq!(path, missing),
            other => panic!("Unexpected result: {other:?}"),
        }
    }
}
