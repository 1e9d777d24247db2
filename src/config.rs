use crate::constants::DEFAULT_BASE_URL;
use crate::errors::{HelpbotError, HelpbotResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf, sync::RwLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 120,
            log_level: "info".to_string(),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> HelpbotResult<()> {
    let config_path = get_config_path()?;

    let mut config = if config_path.exists() {
        let config_str = fs::read_to_string(&config_path)
            .map_err(|e| HelpbotError::config_error(format!("failed to read config file: {}", e)))?;
        serde_json::from_str(&config_str)
            .map_err(|e| HelpbotError::config_error(format!("failed to parse config: {}", e)))?
    } else {
        let config = Config::default();
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                HelpbotError::config_error(format!("failed to create config directory: {}", e))
            })?;
        }
        let config_str = serde_json::to_string_pretty(&config)
            .map_err(|e| HelpbotError::config_error(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, config_str)
            .map_err(|e| HelpbotError::config_error(format!("failed to write config file: {}", e)))?;
        config
    };

    // Environment wins over the file
    if let Ok(url) = env::var("HELPBOT_API_URL") {
        config.base_url = url;
    }

    validate_config(&config)?;
    *CONFIG.write().unwrap() = config;

    Ok(())
}

fn get_config_path() -> HelpbotResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| HelpbotError::config_error("could not determine home directory"))?;
    Ok(home_dir.join(".config").join("helpbot").join("config.json"))
}

fn validate_config(config: &Config) -> HelpbotResult<()> {
    if config.base_url.is_empty() {
        return Err(HelpbotError::config_error("base_url is required"));
    }
    if config.base_url.ends_with('/') {
        return Err(HelpbotError::config_error(
            "base_url must not end with a slash",
        ));
    }
    if config.request_timeout_secs == 0 {
        return Err(HelpbotError::config_error(
            "request_timeout_secs must be greater than 0",
        ));
    }
    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}
