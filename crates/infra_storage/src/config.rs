//! Storage configuration

use serde::Deserialize;

use crate::error::StorageError;
use crate::policy::{LoadPolicy, OnDuplicate, OnInvalid};

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Handling of persons whose required fields are invalid
    pub on_invalid: OnInvalid,
    /// Handling of persons whose identity is already loaded
    pub on_duplicate: OnDuplicate,
    /// Log level
    pub log_level: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let policy = LoadPolicy::strict();
        Self {
            on_invalid: policy.on_invalid,
            on_duplicate: policy.on_duplicate,
            log_level: "info".to_string(),
        }
    }
}

impl StorageConfig {
    /// Loads configuration from environment
    ///
    /// Reads a `.env` file first if one exists, then `ADDRESSBOOK_*` variables
    /// such as `ADDRESSBOOK_ON_INVALID=drop`.
    pub fn from_env() -> Result<Self, StorageError> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("ADDRESSBOOK"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Loads configuration from a TOML snippet
    pub fn from_toml_str(source: &str) -> Result<Self, StorageError> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Installs the global tracing subscriber at the configured level
    ///
    /// Returns `false` if a subscriber was already installed.
    pub fn init_tracing(&self) -> bool {
        core_kernel::init_tracing(&self.log_level)
    }

    /// Returns the load policy these settings describe
    pub fn load_policy(&self) -> LoadPolicy {
        LoadPolicy {
            on_invalid: self.on_invalid,
            on_duplicate: self.on_duplicate,
        }
    }
}
