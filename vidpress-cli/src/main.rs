// vidpress-cli/src/main.rs
//
// Entry point for the vidpress CLI.
//
// Responsibilities:
// - Parsing command-line arguments and setting up logging.
// - Verifying the external ffmpeg dependency before any work.
// - Building the EncodeRequest, interactively when no file was given.
// - Running the core compression pipeline and printing the summary.
// - Mapping every error kind to its own exit code.

use clap::Parser;
use console::style;
use log::info;
use std::process;
use vidpress_cli::cli::Cli;
use vidpress_cli::{logging, select, terminal};
use vidpress_core::progress_reporting::set_progress_reporter;
use vidpress_core::{
    check_dependency, compress_video, find_video_files, CompressionResult, CoreError, CoreResult,
    EncodeRequest, StdFsMetadataProvider,
};
use vidpress_core::config::DEFAULT_SUFFIX;
use vidpress_core::external::SidecarSpawner;

// Exit codes, one per terminal error kind.
const EXIT_OK: i32 = 0;
const EXIT_GENERIC: i32 = 1;
const EXIT_MISSING_DEPENDENCY: i32 = 2;
const EXIT_NO_INPUT_FILES: i32 = 3;
const EXIT_ENCODE_FAILURE: i32 = 4;
const EXIT_STATS_FAILURE: i32 = 5;

fn main() {
    let cli = Cli::parse();
    logging::init_logging();
    terminal::print_banner();

    match run(cli) {
        Ok(result) => {
            terminal::print_summary(&result);
            process::exit(EXIT_OK);
        }
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            process::exit(exit_code_for(&e));
        }
    }
}

fn run(cli: Cli) -> CoreResult<CompressionResult> {
    info!("vidpress run started: {}", logging::run_timestamp());

    // Fatal before any work: the external encoder must be resolvable.
    check_dependency("ffmpeg")?;

    let request = build_request(&cli)?;

    set_progress_reporter(Box::new(terminal::TerminalReporter::new()));

    compress_video(&SidecarSpawner, &StdFsMetadataProvider, &request)
}

/// Builds the encode request from the arguments, prompting for whatever
/// was not supplied.
fn build_request(cli: &Cli) -> CoreResult<EncodeRequest> {
    let input_path = match &cli.input {
        Some(path) => select::validate_input_file(path)?,
        None => {
            let files = find_video_files(&cli.dir)?;
            if files.is_empty() {
                return Err(CoreError::NoFilesFound);
            }
            select::pick_video_file(&files)?
        }
    };

    let suffix = match &cli.suffix {
        Some(suffix) => suffix.clone(),
        None if cli.input.is_some() => DEFAULT_SUFFIX.to_string(),
        None => select::prompt_suffix()?,
    };

    Ok(EncodeRequest { input_path, suffix })
}

fn exit_code_for(error: &CoreError) -> i32 {
    match error {
        CoreError::DependencyNotFound(_) => EXIT_MISSING_DEPENDENCY,
        CoreError::NoFilesFound => EXIT_NO_INPUT_FILES,
        CoreError::CommandStart(_, _) | CoreError::CommandFailed(_, _, _) => EXIT_ENCODE_FAILURE,
        CoreError::StatsIo { .. } => EXIT_STATS_FAILURE,
        _ => EXIT_GENERIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::ExitStatus;

    #[test]
    fn test_exit_codes_are_distinct_per_error_kind() {
        assert_eq!(
            exit_code_for(&CoreError::DependencyNotFound("ffmpeg".into())),
            EXIT_MISSING_DEPENDENCY
        );
        assert_eq!(exit_code_for(&CoreError::NoFilesFound), EXIT_NO_INPUT_FILES);
        assert_eq!(
            exit_code_for(&CoreError::CommandFailed(
                "ffmpeg".into(),
                ExitStatus::default(),
                "boom".into()
            )),
            EXIT_ENCODE_FAILURE
        );
        assert_eq!(
            exit_code_for(&CoreError::StatsIo {
                path: "out.mp4".into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            }),
            EXIT_STATS_FAILURE
        );
        assert_eq!(
            exit_code_for(&CoreError::PathError("bad".into())),
            EXIT_GENERIC
        );
    }
}
