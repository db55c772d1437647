//! Logging bootstrap for the command-line client.
//!
//! The library only talks to the `log` facade. The binary calls
//! [`init_logging`] once, which starts a `flexi_logger` writing to stderr.
//! `RUST_LOG` overrides the configured level when set.

use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Starts logging at `level`. Later calls are no-ops.
pub fn init_logging(level: &str) -> Result<(), String> {
    LOGGER
        .get_or_try_init(|| {
            Logger::try_with_env_or_str(level)
                .map_err(|err| format!("invalid log level `{level}`: {err}"))?
                .log_to_stderr()
                .format(flexi_logger::default_format)
                .start()
                .map_err(|err| format!("failed to start logger: {err}"))
        })
        .map(|_| ())
}

/// The level to log at: `debug` when verbose, else the configured one.
pub fn effective_level(verbose: bool, configured: &str) -> String {
    if verbose {
        "debug".to_string()
    } else {
        configured.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_wins_over_config() {
        assert_eq!(effective_level(true, "warn"), "debug");
        assert_eq!(effective_level(false, "info"), "info");
    }
}
