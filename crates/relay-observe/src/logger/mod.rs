mod config;
mod error;
mod log;
mod object;

pub use config::{ENV_COLOR, ENV_FORMAT, ENV_LEVEL, LoggerConfig};
pub use error::{LoggerError, LoggerResult};
pub use object::{LoggerFormat, LoggerLevel};

/// Installs the global tracing subscriber described by `cfg`.
///
/// Records go to stderr (or journald) so stdout stays free for command output.
///
/// ```no_run
/// use relay_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::from_env().unwrap_or_default();
/// init_logger(&config).expect("logger");
/// tracing::info!("ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    match cfg.format {
        LoggerFormat::Text => log::logger_text(cfg),
        LoggerFormat::Json => log::logger_json(cfg),
        LoggerFormat::Journald => log::logger_journald(cfg),
    }
}
