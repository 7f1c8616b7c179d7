//! User service configuration.

use std::env;
use std::path::PathBuf;

use common::ServiceConfig;

/// Default service name used in logs
pub const SERVICE_NAME: &str = "user-service";

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Shared service settings (name, log level)
    pub service: ServiceConfig,
    /// JSON file holding the initial users
    pub seed_file: Option<PathBuf>,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut service = ServiceConfig::named(SERVICE_NAME);
        if let Some(level) = lookup("USER_SERVICE_LOG_LEVEL").or_else(|| lookup("LOG_LEVEL")) {
            service.log_level = level;
        }

        Self {
            service,
            seed_file: lookup("USER_SERVICE_SEED_FILE")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::named(SERVICE_NAME),
            seed_file: None,
        }
    }
}
