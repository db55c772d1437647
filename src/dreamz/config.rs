use crate::error::{DreamzError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";
pub const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Configuration for dreamz, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DreamzConfig {
    /// strftime pattern used to turn the picked date into the entry's date text
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Log level when `--verbose` is not given
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for DreamzConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            log_level: default_log_level(),
        }
    }
}

impl DreamzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DreamzError::Io)?;
        let config: DreamzConfig =
            serde_json::from_str(&content).map_err(DreamzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DreamzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DreamzError::Serialization)?;
        fs::write(config_path, content).map_err(DreamzError::Io)?;
        Ok(())
    }

    /// Set the date format after checking chrono can render it
    pub fn set_date_format(&mut self, format: &str) -> Result<()> {
        let sample = NaiveDate::from_ymd_opt(2000, 1, 31).unwrap_or_default();
        format_date(sample, format)?;
        self.date_format = format.to_string();
        Ok(())
    }

    /// Set the log level (one of trace, debug, info, warn, error)
    pub fn set_log_level(&mut self, level: &str) -> Result<()> {
        let normalized = level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&normalized.as_str()) {
            return Err(DreamzError::Api(format!(
                "Unsupported log level: {} (expected {})",
                level,
                LOG_LEVELS.join("|")
            )));
        }
        self.log_level = normalized;
        Ok(())
    }

    /// Value of a config key as shown by the `config` command
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "date-format" => Some(&self.date_format),
            "log-level" => Some(&self.log_level),
            _ => None,
        }
    }

    pub fn keys() -> &'static [&'static str] {
        &["date-format", "log-level"]
    }
}

/// Formats `date` with a strftime pattern, rejecting patterns chrono cannot render.
pub fn format_date(date: NaiveDate, format: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format))
        .map_err(|_| DreamzError::Api(format!("Invalid date format: {}", format)))?;
    Ok(out)
}
