// vidpress-cli/src/terminal.rs
//
// Terminal presentation: the startup banner, the indicatif-backed progress
// reporter registered with vidpress-core, and the final summary block.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use vidpress_core::progress_reporting::ProgressReporter;
use vidpress_core::{format_duration, CompressionResult};

/// Prints the startup banner.
pub fn print_banner() {
    println!(
        "{} {}",
        style("vidpress").cyan().bold(),
        style(env!("CARGO_PKG_VERSION")).dim()
    );
    println!("{}", style("Compress a video file with ffmpeg").dim());
    println!();
}

/// Progress reporter drawing a single indicatif bar.
///
/// The bar is created lazily on the first progress event so nothing is
/// drawn while prompts are still on screen.
#[derive(Default)]
pub struct TerminalReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for TerminalReporter {
    fn progress(&self, percent: f64, label: &str) {
        let mut guard = match self.bar.lock() {
            Ok(guard) => guard,
            Err(_) => return,
        };
        let bar = guard.get_or_insert_with(|| {
            let bar = ProgressBar::new(100);
            bar.set_style(
                ProgressStyle::with_template("  [{bar:40.cyan/blue}] {msg}")
                    .expect("static progress template is valid")
                    .progress_chars("#>-"),
            );
            bar
        });
        bar.set_position(percent.round() as u64);
        bar.set_message(label.to_string());
    }

    fn clear_progress(&self) {
        if let Ok(mut guard) = self.bar.lock() {
            if let Some(bar) = guard.take() {
                bar.finish_and_clear();
            }
        }
    }

    fn status(&self, label: &str, value: &str) {
        let line = format!("  {:<12} {}", format!("{label}:"), value);
        if let Ok(guard) = self.bar.lock() {
            if let Some(bar) = guard.as_ref() {
                bar.println(line);
                return;
            }
        }
        println!("{line}");
    }

    fn success(&self, message: &str) {
        println!("{} {}", style("✓").green().bold(), message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red().bold(), message);
    }
}

/// Prints the final summary for a completed run.
pub fn print_summary(result: &CompressionResult) {
    let input_name = result
        .input_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| result.input_path.display().to_string());
    let output_name = result
        .output_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| result.output_path.display().to_string());

    println!();
    println!("{}", style("Compression complete").bold());
    println!("  Input:       {} ({:.2} MB)", input_name, result.input_size_mb);
    println!("  Output:      {} ({:.2} MB)", output_name, result.output_size_mb);
    println!(
        "  Reduced by:  {}",
        style(format!("{:.2}%", result.reduction_percent)).green().bold()
    );
    println!(
        "  Encode time: {}",
        format_duration(result.elapsed.as_secs_f64())
    );
}
