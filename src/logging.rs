use anyhow::Result;
use flexi_logger::{Logger, LoggerHandle};

/// Crates whose log output is shown.
const CRATE_TARGETS: &[&str] = &["daybook", "daybook_core"];

/// Log specification for a `-v` count.
///
/// Mapping:
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
fn log_spec(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Start logging to stderr. `RUST_LOG` overrides the CLI flag if set.
///
/// The returned handle must stay alive for as long as logging is needed.
pub fn init(verbosity: u8) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(log_spec(verbosity))?
        .log_to_stderr()
        .start()?;
    Ok(handle)
}
