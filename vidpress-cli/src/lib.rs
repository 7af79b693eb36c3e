// vidpress-cli/src/lib.rs
//
// Library portion of the vidpress CLI application.
// Contains argument definitions and the presentation layer.

pub mod cli;
pub mod logging;
pub mod select;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::Cli;
