use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use crate::error::ConfigError;

pub const LOG_LEVEL_VAR: &str = "RSH_LOG";
pub const LOG_FILE_VAR: &str = "RSH_LOG_FILE";
pub const PROMPT_VAR: &str = "RSH_PROMPT";

const DEFAULT_PROMPT: &str = "$ ";

/// Startup settings. The shell takes no flags, so everything comes from the
/// environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Off,
            log_file: default_log_file(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Config {
    /// Read settings from the environment. Nothing here is fatal: an
    /// unrecognised log level leaves logging off.
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(level) = env::var(LOG_LEVEL_VAR) {
            config.log_level = parse_level(&level).unwrap_or(LevelFilter::Off);
        }
        if let Ok(file) = env::var(LOG_FILE_VAR) {
            if !file.is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }
        if let Ok(prompt) = env::var(PROMPT_VAR) {
            config.prompt = prompt;
        }

        config
    }
}

pub fn parse_level(value: &str) -> Result<LevelFilter, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidVar {
        var: LOG_LEVEL_VAR,
        value: value.to_string(),
    })
}

fn default_log_file() -> Option<PathBuf> {
    let home = env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".local/share/rsh/rsh.log"))
}
