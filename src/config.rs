use log::warn;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "config.txt";

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 300;

/// Runtime configuration, loaded once at startup and shared read-only
/// with every handler. There is no hot-reload.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    pub app_port: u16,
    pub search_patterns: Vec<String>,
    pub command_timeout: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            app_port: DEFAULT_PORT,
            search_patterns: Vec::new(),
            command_timeout: Duration::from_secs(DEFAULT_COMMAND_TIMEOUT_SECS),
        }
    }
}

impl RuntimeConfig {
    /// Reads a line-oriented `key=value` file. Keys are case-insensitive,
    /// unknown keys are ignored, and a missing file means defaults.
    /// Malformed values are logged and fall back, never fatal.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(_) => {
                warn!("Config file {} not found, using defaults", path.display());
                Self::default()
            }
        }
    }

    fn parse(content: &str) -> Self {
        let mut config = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim();

            match key.trim().to_lowercase().as_str() {
                "appport" => match value.parse::<u16>() {
                    Ok(port) => config.app_port = port,
                    Err(_) => {
                        warn!("Invalid appPort value {:?}, using default {}", value, DEFAULT_PORT)
                    }
                },
                "searchpatterns" => {
                    config.search_patterns = value
                        .split(';')
                        .map(str::trim)
                        .filter(|p| !p.is_empty())
                        .map(String::from)
                        .collect();
                }
                "commandtimeoutsecs" => match value.parse::<u64>() {
                    Ok(secs) => config.command_timeout = Duration::from_secs(secs),
                    Err(_) => warn!(
                        "Invalid commandTimeoutSecs value {:?}, using default {}",
                        value, DEFAULT_COMMAND_TIMEOUT_SECS
                    ),
                },
                _ => {}
            }
        }

        config
    }
}
