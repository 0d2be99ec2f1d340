use crate::{ConfigError, ConfigErrorResult, DEFAULT_ADMIN_HOST, DEFAULT_ADMIN_PORT};

use serde::Deserialize;

/// Local HTTP surface for status queries and restart requests.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub enabled: bool,
    pub host: String,
    pub port: u16,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            host: String::from(DEFAULT_ADMIN_HOST),
            port: DEFAULT_ADMIN_PORT,
        }
    }
}

impl AdminConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.enabled && self.host.trim().is_empty() {
            return Err(ConfigError::admin("admin.host must not be empty"));
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
