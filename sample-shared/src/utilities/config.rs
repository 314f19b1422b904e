use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;
use crate::models::errors::ConfigError;
use crate::utilities::cors::CorsConfig;
use crate::utilities::logging::log_error;

pub const DEFAULT_APP_NAME: &str = "lambda-python-sample";
const DEFAULT_STAGES: [&str; 2] = ["dev", "prod"];

/// Initialize dotenv (only needs to be called once at startup)
pub fn init() {
    if dotenv().is_ok() {
        log::info!("Loaded .env file");
    } else {
        log::debug!("No .env file loaded");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub app_name: String,
    /// Stage names stripped from the front of the raw path, e.g. `/dev/`.
    pub stages: Vec<String>,
    pub cors: CorsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            app_name: DEFAULT_APP_NAME.to_string(),
            stages: DEFAULT_STAGES.iter().map(|s| s.to_string()).collect(),
            cors: CorsConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Missing keys keep their defaults;
    /// an invalid key is logged, keeps its default and is returned, while every
    /// valid override is still applied.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();
        let mut errors = Vec::new();

        if let Some(name) = lookup("APP_NAME").filter(|v| !v.trim().is_empty()) {
            config.app_name = name.trim().to_string();
        }
        if let Some(stages) = lookup("API_STAGES") {
            config.stages = split_list(&stages);
        }
        if let Some(origin) = lookup("CORS_ALLOW_ORIGIN").filter(|v| !v.trim().is_empty()) {
            config.cors.allow_origin = origin.trim().to_string();
        }
        if let Some(value) = lookup("CORS_ALLOW_CREDENTIALS") {
            match parse_bool("CORS_ALLOW_CREDENTIALS", &value) {
                Ok(allow) => config.cors.allow_credentials = allow,
                Err(e) => errors.push(e),
            }
        }
        if let Some(value) = lookup("CORS_MAX_AGE") {
            match value.trim().parse::<u64>() {
                Ok(max_age) => config.cors.max_age = Some(max_age),
                Err(_) => errors.push(ConfigError::invalid("CORS_MAX_AGE", &value)),
            }
        }

        for e in &errors {
            log_error("config", &format!("{}; keeping default", e));
        }
        (config, errors)
    }
}

static SETTINGS: Lazy<AppConfig> = Lazy::new(|| AppConfig::from_env().0);

/// Process-wide configuration, read from the environment on first use.
pub fn settings() -> &'static AppConfig {
    &SETTINGS
}

fn split_list(value: &str) -> Vec<String> {
    value.split(',')
        .map(|s| s.trim().trim_matches('/'))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::invalid(key, value)),
    }
}
