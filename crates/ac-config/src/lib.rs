mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

/// Environment variable naming the config directory
pub const CONFIG_DIR_ENV: &str = "AC_CONFIG_DIR";
/// Config directory used when `AC_CONFIG_DIR` is unset, relative to the cwd
pub const DEFAULT_CONFIG_DIR: &str = ".ac";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;
const DEFAULT_PAGE_SIZE: u32 = 100;
const MIN_PAGE_SIZE: u32 = 1;
const MAX_PAGE_SIZE: u32 = 1000;

const DEFAULT_TOKEN_FILE: &str = "session.json";
const DEFAULT_KEEP_TOKEN_ON_TRANSIENT_FAILURE: bool = true;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
