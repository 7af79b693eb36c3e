// vidpress-cli/src/select.rs
//
// Interactive prompts: pick a video file from the discovered candidates
// and choose an output suffix. Thin wrappers over dialoguer; all decisions
// about what is selectable happen in vidpress-core's discovery.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use std::path::{Path, PathBuf};
use vidpress_core::config::DEFAULT_SUFFIX;
use vidpress_core::error::{CoreError, CoreResult};

/// Prompts the user to pick one of the discovered video files.
pub fn pick_video_file(files: &[PathBuf]) -> CoreResult<PathBuf> {
    let names: Vec<String> = files
        .iter()
        .map(|path| {
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        })
        .collect();

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a video to compress")
        .items(&names)
        .default(0)
        .interact()
        .map_err(prompt_error)?;

    Ok(files[index].clone())
}

/// Prompts the user for the output filename suffix.
pub fn prompt_suffix() -> CoreResult<String> {
    let suffix: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Output filename suffix")
        .default(DEFAULT_SUFFIX.to_string())
        .interact_text()
        .map_err(prompt_error)?;

    Ok(suffix)
}

/// Validates a directly-supplied input path.
pub fn validate_input_file(path: &Path) -> CoreResult<PathBuf> {
    if path.is_file() {
        Ok(path.to_path_buf())
    } else {
        Err(CoreError::PathError(format!(
            "Input file not found: {}",
            path.display()
        )))
    }
}

fn prompt_error(e: dialoguer::Error) -> CoreError {
    CoreError::Io(std::io::Error::other(e.to_string()))
}
