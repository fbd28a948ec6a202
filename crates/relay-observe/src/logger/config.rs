use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

use crate::logger::{
    error::{LoggerError, LoggerResult},
    object::{LoggerFormat, LoggerLevel},
};

/// Filter expression, e.g. `RELAY_LOG=debug`.
pub const ENV_LEVEL: &str = "RELAY_LOG";
/// `text`, `json` or `journald`.
pub const ENV_FORMAT: &str = "RELAY_LOG_FORMAT";
/// `0`/`false` disables ANSI colors.
pub const ENV_COLOR: &str = "RELAY_LOG_COLOR";

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Output format.
    pub format: LoggerFormat,
    /// Log level filter expression.
    pub level: LoggerLevel,
    /// Whether to include module/target names in log output.
    pub with_targets: bool,
    /// Whether to use colored output.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Reads overrides from `RELAY_LOG`, `RELAY_LOG_FORMAT` and `RELAY_LOG_COLOR`.
    ///
    /// Unset or empty variables keep the defaults; malformed values are errors.
    pub fn from_env() -> LoggerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`LoggerConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> LoggerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();

        if let Some(level) = get(ENV_LEVEL) {
            cfg.level = level.parse()?;
        }
        if let Some(format) = get(ENV_FORMAT) {
            cfg.format = format.parse()?;
        }
        if let Some(color) = get(ENV_COLOR) {
            cfg.use_color = parse_switch(&color)?;
        }
        Ok(cfg)
    }

    /// Color is used only when enabled in config and stderr is a terminal.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stderr().is_terminal()
    }
}

fn parse_switch(raw: &str) -> LoggerResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(LoggerError::InvalidColor(raw.to_string())),
    }
}
