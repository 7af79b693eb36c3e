//! Progress reporting for the encode pipeline.
//!
//! The core library publishes progress and status messages through a small
//! reporter trait without depending on any CLI-specific formatting. The CLI
//! registers a concrete reporter at startup; with none registered the
//! pipeline runs silently, which is what library use and tests want.

use std::sync::Mutex;

/// Renders an ETA/percent label for an in-flight encode.
///
/// `remaining = total - elapsed`, shown as `<minutes>m:<seconds>s` with no
/// zero padding; both values go negative when the reported position exceeds
/// the total (a known encoder quirk, displayed as-is). Percent is
/// `elapsed / total * 100` to two decimals; a non-positive total yields
/// `0.00%`.
#[must_use]
pub fn format_progress_label(total_secs: f64, elapsed_secs: f64) -> String {
    let remaining = total_secs - elapsed_secs;
    let minutes = (remaining / 60.0).floor() as i64;
    let seconds = (remaining % 60.0) as i64;
    let percent = if total_secs > 0.0 {
        elapsed_secs / total_secs * 100.0
    } else {
        0.0
    };
    format!("{minutes}m:{seconds}s | {percent:.2}%")
}

/// A simplified trait for progress reporting
pub trait ProgressReporter: Send + Sync {
    /// Report encode progress: completion percent plus a preformatted label.
    fn progress(&self, percent: f64, label: &str);

    /// Clear any active progress display.
    fn clear_progress(&self);

    /// Output a key-value status pair.
    fn status(&self, label: &str, value: &str);

    /// Output a success message.
    fn success(&self, message: &str);

    /// Output an error message.
    fn error(&self, message: &str);
}

/// Global progress reporter instance
static PROGRESS_REPORTER: std::sync::LazyLock<Mutex<Option<Box<dyn ProgressReporter>>>> =
    std::sync::LazyLock::new(|| Mutex::new(None));

/// Set the global progress reporter
pub fn set_progress_reporter(reporter: Box<dyn ProgressReporter>) {
    if let Ok(mut r) = PROGRESS_REPORTER.lock() {
        *r = Some(reporter);
    }
}

/// Execute a function with the progress reporter if available
#[inline]
fn with_reporter<F>(f: F)
where
    F: FnOnce(&dyn ProgressReporter),
{
    if let Ok(guard) = PROGRESS_REPORTER.lock() {
        if let Some(reporter) = guard.as_ref() {
            f(reporter.as_ref());
        }
    }
}

/// Report encode progress for the given total/elapsed pair.
pub fn progress(total_secs: f64, elapsed_secs: f64) {
    let percent = if total_secs > 0.0 {
        (elapsed_secs / total_secs * 100.0).min(100.0)
    } else {
        0.0
    };
    let label = format_progress_label(total_secs, elapsed_secs);
    with_reporter(|r| r.progress(percent, &label));
}

/// Clear the progress display
pub fn clear_progress() {
    with_reporter(|r| r.clear_progress());
}

/// Output a status line
pub fn status(label: &str, value: &str) {
    with_reporter(|r| r.status(label, value));
}

/// Output a success message
pub fn success(message: &str) {
    with_reporter(|r| r.success(message));
}

/// Output an error message
pub fn error(message: &str) {
    with_reporter(|r| r.error(message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_shows_remaining_time_and_percent() {
        assert_eq!(format_progress_label(120.0, 30.0), "1m:30s | 25.00%");
        assert_eq!(format_progress_label(120.0, 120.0), "0m:0s | 100.00%");
        assert_eq!(format_progress_label(45.0, 0.0), "0m:45s | 0.00%");
    }

    #[test]
    fn label_goes_negative_when_elapsed_exceeds_total() {
        // Not corrected; shown as-is.
        assert_eq!(format_progress_label(120.0, 150.0), "-1m:-30s | 125.00%");
    }

    #[test]
    fn zero_total_yields_zero_percent() {
        assert_eq!(format_progress_label(0.0, 10.0), "-1m:-10s | 0.00%");
    }

    #[test]
    fn fractional_seconds_are_truncated() {
        assert_eq!(format_progress_label(100.0, 9.3), "1m:30s | 9.30%");
    }
}
