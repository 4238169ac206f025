use log::{LevelFilter, SetLoggerError};
use simple_logger::SimpleLogger;

/// Installs the global logger.
///
/// `RUST_LOG` overrides `level` when set. Fails if a logger is already
/// installed.
pub fn init_logging(level: LevelFilter) -> Result<(), SetLoggerError> {
    SimpleLogger::new().with_level(level).env().init()?;
    log::debug!("logging initialized at {level}");
    Ok(())
}
