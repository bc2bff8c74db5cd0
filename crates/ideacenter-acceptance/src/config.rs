//! Configuration for scenario runs
//!
//! Values are layered with the `config` crate: an optional file
//! (`conf/acceptance.{toml,yml,json}`) first, then `IDEACENTER__*`
//! environment variables, e.g. `IDEACENTER__BASE_URL`,
//! `IDEACENTER__EMAIL` and `IDEACENTER__PASSWORD`.

use ::config::{Config, ConfigError, Environment, File};
use ideacenter_client::IdeaCenterClientConfig;
use serde::Deserialize;

use crate::error::Result;

pub const ENV_PREFIX: &str = "IDEACENTER";
pub const ENV_SEPARATOR: &str = "__";
pub const DEFAULT_CONFIG_FILE: &str = "conf/acceptance";
pub const DEFAULT_USER_NAME: &str = "testuser";

fn default_user_name() -> String {
    DEFAULT_USER_NAME.to_string()
}

/// `IDEACENTER__*` variables; values stay strings until deserialized
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
}

/// Target service and account used by the scenario
#[derive(Clone, Debug, Deserialize)]
pub struct AcceptanceConfig {
    pub base_url: String,
    pub email: String,
    pub password: String,
    /// Register the account before authenticating
    #[serde(default)]
    pub register_user: bool,
    /// User name sent when registering
    #[serde(default = "default_user_name")]
    pub user_name: String,
    #[serde(default)]
    pub connect_timeout_ms: Option<u64>,
    #[serde(default)]
    pub read_timeout_ms: Option<u64>,
}

impl AcceptanceConfig {
    pub fn new(base_url: &str, email: &str, password: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            register_user: false,
            user_name: default_user_name(),
            connect_timeout_ms: None,
            read_timeout_ms: None,
        }
    }

    /// Load from `conf/acceptance` and the environment
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load from an optional file (extension resolved by `config`) and the environment
    pub fn load_from(file: &str) -> Result<Self> {
        Self::load_with_env(file, environment())
    }

    fn load_with_env(file: &str, env: Environment) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::with_name(file).required(false))
            .add_source(env)
            .build()?;
        Self::from_config(config)
    }

    /// Deserialize and validate an already built configuration
    pub fn from_config(config: Config) -> Result<Self> {
        let loaded: Self = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject blank connection settings
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("base_url", &self.base_url),
            ("email", &self.email),
            ("password", &self.password),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Message(format!("{} must not be blank", key)).into());
            }
        }
        Ok(())
    }

    pub fn client_config(&self) -> IdeaCenterClientConfig {
        IdeaCenterClientConfig {
            base_url: self.base_url.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            connect_timeout_ms: self.connect_timeout_ms,
            read_timeout_ms: self.read_timeout_ms,
        }
    }
}
