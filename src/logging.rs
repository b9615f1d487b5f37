//! Logging bootstrap

use flexi_logger::{Duplicate, FileSpec, Logger, LoggerHandle};
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Initialize process-wide logging: `nota.log` in the working directory,
/// with warnings and errors duplicated to stderr. The level comes from the
/// `NOTA_LOG` environment variable, defaulting to `info`.
///
/// Only the first call does anything; repeated calls are no-ops.
pub fn init() -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let level = std::env::var("NOTA_LOG").unwrap_or_else(|_| "info".to_string());

    let logger = Logger::try_with_str(&level)
        .map_err(|e| format!("invalid log level `{}`: {}", level, e))?
        .log_to_file(FileSpec::default().basename("nota").suppress_timestamp())
        .append()
        .duplicate_to_stderr(Duplicate::Warn)
        .start()
        .map_err(|e| format!("failed to start logger: {}", e))?;

    // Losing the set race is fine, some other caller initialized first.
    let _ = LOGGER.set(logger);
    log::debug!("logging configured, level={}", level);
    Ok(())
}
