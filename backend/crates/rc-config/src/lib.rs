mod admin_config;
mod config;
mod emergency_config;
mod error;
mod halt_config;
mod log_level;
mod logging_config;
mod messages_config;
mod monitoring_config;
mod schedule_config;
mod warnings_config;

#[cfg(test)]
mod tests;

pub use admin_config::AdminConfig;
pub use config::Config;
pub use emergency_config::EmergencyConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use halt_config::HaltConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use messages_config::MessagesConfig;
pub use monitoring_config::MonitoringConfig;
pub use schedule_config::ScheduleConfig;
pub use warnings_config::WarningsConfig;

const CONFIG_DIR_ENV: &str = "RC_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".rc";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_ADMIN_HOST: &str = "127.0.0.1";
const DEFAULT_ADMIN_PORT: u16 = 8085;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
