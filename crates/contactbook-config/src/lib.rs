use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use contactbook_core::rules::{validate_window_days, BirthdayWindow, LeapDayPolicy};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "contactbook";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub birthdays: BirthdayWindow,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid birthday_window_days value: {0}")]
    InvalidWindowDays(i64),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    birthday_window_days: Option<i64>,
    shift_weekends: Option<bool>,
    leap_day_policy: Option<LeapDayPolicy>,
}

/// Environment variable naming a config file; `--config` still wins over it.
pub const CONFIG_ENV: &str = "CONTACTBOOK_CONFIG";

/// Loads the config file. A path given by flag or `CONTACTBOOK_CONFIG` must
/// exist; the default location falls back to defaults when absent.
pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let custom = config_path.or_else(env_config_path);
    let required = custom.is_some();
    let path = match resolve_with(custom, None) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

/// Resolution order: `custom`, then `CONTACTBOOK_CONFIG`, then
/// `$XDG_CONFIG_HOME/contactbook/config.toml`, then
/// `~/.config/contactbook/config.toml`.
pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    resolve_with(custom, env_config_path())
}

fn resolve_with(custom: Option<PathBuf>, env_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = custom.or(env_override) {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfigPath(path));
        }
        return Ok(path);
    }

    let base = match env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if dir.is_empty() => {
            return Err(ConfigError::InvalidConfigPath(PathBuf::from(dir)));
        }
        Some(dir) => PathBuf::from(dir),
        None => dirs::home_dir()
            .ok_or(ConfigError::MissingHomeDir)?
            .join(".config"),
    };
    Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
}

// An empty variable counts as unset.
fn env_config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(days) = parsed.birthday_window_days {
        config.birthdays.days =
            validate_window_days(days).map_err(|_| ConfigError::InvalidWindowDays(days))?;
    }
    if let Some(shift) = parsed.shift_weekends {
        config.birthdays.shift_weekends = shift;
    }
    if let Some(policy) = parsed.leap_day_policy {
        config.birthdays.leap_day = policy;
    }

    Ok(config)
}
