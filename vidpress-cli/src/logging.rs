// vidpress-cli/src/logging.rs
//
// Logging setup for the CLI. Uses the standard `log` crate with
// `env_logger` as the backend, driven by RUST_LOG (default: info).

/// Initializes env_logger with an info default.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();
}

/// Returns the current local timestamp formatted as "YYYY-MM-DD HH:MM:SS".
pub fn run_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
