use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn vidpress_cmd() -> Command {
    Command::cargo_bin("vidpress").expect("Failed to find vidpress binary")
}

#[test]
fn test_help_describes_the_tool() -> Result<(), Box<dyn Error>> {
    let mut cmd = vidpress_cmd();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(contains("compress a video file"));

    Ok(())
}

#[test]
fn test_unknown_flag_is_rejected() {
    let mut cmd = vidpress_cmd();
    cmd.arg("--no-such-flag");

    cmd.assert().failure();
}

#[test]
fn test_non_existent_input_fails() -> Result<(), Box<dyn Error>> {
    let non_existent = "surely/this/does/not/exist/input.mkv";

    // Fails either at the dependency probe or at input validation; both are
    // terminal and print to stderr.
    let mut cmd = vidpress_cmd();
    cmd.arg(non_existent);

    cmd.assert().failure().stderr(contains("Error:"));

    Ok(())
}

#[test]
fn test_empty_directory_has_nothing_to_offer() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    let mut cmd = vidpress_cmd();
    cmd.arg("--dir").arg(dir.path());

    cmd.assert().failure().stderr(contains("Error:"));

    Ok(())
}
