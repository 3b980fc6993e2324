//! App Configuration

use std::str::FromStr;

use log::LevelFilter;

/// localStorage key holding the serialized vote mapping
pub const DEFAULT_STORAGE_KEY: &str = "dankyDonutVotes";

/// Runtime settings, fixed at build time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_key: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Defaults, with the log level taken from `DANKY_DONUTS_LOG` at build time
    pub fn from_build_env() -> Self {
        Self {
            log_level: parse_log_level(option_env!("DANKY_DONUTS_LOG")),
            ..Self::default()
        }
    }
}

/// Parse a level name (`off`, `error` .. `trace`), falling back to `info`
pub fn parse_log_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|s| LevelFilter::from_str(s.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}
