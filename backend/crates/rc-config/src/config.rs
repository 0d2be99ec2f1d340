use crate::{
    AdminConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError,
    ConfigErrorResult, EmergencyConfig, HaltConfig, LoggingConfig, MessagesConfig,
    MonitoringConfig, ScheduleConfig, WarningsConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use rc_core::RecurringRestart;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub schedule: ScheduleConfig,
    pub warnings: WarningsConfig,
    pub monitoring: MonitoringConfig,
    pub emergency: EmergencyConfig,
    pub messages: MessagesConfig,
    pub halt: HaltConfig,
    pub admin: AdminConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for RC_CONFIG_DIR env var, else use ./.rc/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply RC_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: RC_CONFIG_DIR env var > ./.rc/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    ///
    /// Malformed restart times are not errors; see recurring_restarts().
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.schedule.validate()?;
        self.warnings.validate()?;
        self.monitoring.validate()?;
        self.emergency.validate(&self.monitoring)?;
        self.halt.validate()?;
        self.admin.validate()?;

        Ok(())
    }

    /// Valid recurring restart definitions, malformed entries skipped.
    pub fn recurring_restarts(&self) -> Vec<RecurringRestart> {
        self.schedule.recurring_restarts()
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  schedule: [{}] ({}, countdown {}s)",
            self.schedule.restart_times.join(", "),
            self.schedule.timezone,
            self.schedule.countdown_secs
        );
        info!(
            "  warnings: {} intervals={:?} min_delay={}s",
            if self.warnings.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.warnings.intervals,
            self.warnings.min_delay_secs
        );
        info!(
            "  monitoring: {} every {}s (healthy: throughput>={}, memory<={}%)",
            if self.monitoring.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.monitoring.check_interval_secs,
            self.monitoring.throughput_threshold,
            self.monitoring.memory_threshold
        );
        info!(
            "  emergency: {} delay={}s (throughput<{}, memory>{}%)",
            if self.emergency.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.emergency.delay_secs,
            self.emergency.throughput_threshold,
            self.emergency.memory_threshold
        );
        info!(
            "  halt: grace={}s reload={:?} shutdown={:?}",
            self.halt.grace_period_secs, self.halt.reload_command, self.halt.shutdown_command
        );
        info!(
            "  admin: {} ({})",
            if self.admin.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.admin.bind_addr()
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Schedule
        Self::apply_env_list("RC_SCHEDULE_RESTART_TIMES", &mut self.schedule.restart_times);
        Self::apply_env_string("RC_SCHEDULE_TIMEZONE", &mut self.schedule.timezone);
        Self::apply_env_parse(
            "RC_SCHEDULE_COUNTDOWN_SECS",
            &mut self.schedule.countdown_secs,
        );

        // Warnings
        Self::apply_env_bool("RC_WARNINGS_ENABLED", &mut self.warnings.enabled);
        Self::apply_env_parse_list("RC_WARNINGS_INTERVALS", &mut self.warnings.intervals);
        Self::apply_env_parse(
            "RC_WARNINGS_MIN_DELAY_SECS",
            &mut self.warnings.min_delay_secs,
        );

        // Monitoring
        Self::apply_env_bool("RC_MONITORING_ENABLED", &mut self.monitoring.enabled);
        Self::apply_env_parse(
            "RC_MONITORING_CHECK_INTERVAL_SECS",
            &mut self.monitoring.check_interval_secs,
        );
        Self::apply_env_parse(
            "RC_MONITORING_THROUGHPUT_THRESHOLD",
            &mut self.monitoring.throughput_threshold,
        );
        Self::apply_env_parse(
            "RC_MONITORING_MEMORY_THRESHOLD",
            &mut self.monitoring.memory_threshold,
        );
        Self::apply_env_option_string(
            "RC_MONITORING_THROUGHPUT_FILE",
            &mut self.monitoring.throughput_file,
        );

        // Emergency
        Self::apply_env_bool("RC_EMERGENCY_ENABLED", &mut self.emergency.enabled);
        Self::apply_env_parse("RC_EMERGENCY_DELAY_SECS", &mut self.emergency.delay_secs);
        Self::apply_env_parse(
            "RC_EMERGENCY_THROUGHPUT_THRESHOLD",
            &mut self.emergency.throughput_threshold,
        );
        Self::apply_env_parse(
            "RC_EMERGENCY_MEMORY_THRESHOLD",
            &mut self.emergency.memory_threshold,
        );

        // Halt
        Self::apply_env_parse(
            "RC_HALT_GRACE_PERIOD_SECS",
            &mut self.halt.grace_period_secs,
        );

        // Admin
        Self::apply_env_bool("RC_ADMIN_ENABLED", &mut self.admin.enabled);
        Self::apply_env_string("RC_ADMIN_HOST", &mut self.admin.host);
        Self::apply_env_parse("RC_ADMIN_PORT", &mut self.admin.port);

        // Logging
        Self::apply_env_parse("RC_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("RC_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("RC_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Comma-separated list of strings
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }

    /// Helper: Comma-separated list of parseable values; ignored if any entry fails
    fn apply_env_parse_list<T: std::str::FromStr>(var_name: &str, target: &mut Vec<T>) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::parse)
                .collect::<Result<Vec<T>, _>>()
        {
            *target = parsed;
        }
    }
}
