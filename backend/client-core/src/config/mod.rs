//! Client configuration: credentials, target environment and transport overrides.
//!
//! Non-secret settings can live in a `creditsafe.toml`; credentials come from
//! the caller or from `CREDITSAFE_*` environment variables (optionally via a
//! `.env` file).

use crate::error::config::ConfigError;

use common::{ErrorLocation, RedactedSecret};

use std::env;
use std::fmt;
use std::panic::Location;
use std::path::Path;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use url::Url;

pub const CONFIG_FILE_NAME: &str = "creditsafe.toml";

const SERVICE_HOST: &str = "webservices.creditsafe.com";
const SERVICE_PATH: &str = "/GlobalData/1.3/MainServiceBasic.svc";
pub const LIVE_ENDPOINT: &str = const_format::concatcp!("https://", SERVICE_HOST, SERVICE_PATH);
pub const TEST_ENDPOINT: &str =
    const_format::concatcp!("https://test", SERVICE_HOST, SERVICE_PATH);

pub const USERNAME_ENV: &str = "CREDITSAFE_USERNAME";
pub const PASSWORD_ENV: &str = "CREDITSAFE_PASSWORD";
pub const ENVIRONMENT_ENV: &str = "CREDITSAFE_ENVIRONMENT";
pub const ENDPOINT_ENV: &str = "CREDITSAFE_ENDPOINT";
pub const TIMEOUT_ENV: &str = "CREDITSAFE_TIMEOUT_SECS";

// ============================================
// ENVIRONMENT
// ============================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Live,
    Test,
}

impl Environment {
    pub const ALL: [Environment; 2] = [Environment::Live, Environment::Test];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Live => "live",
            Environment::Test => "test",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            Environment::Live => LIVE_ENDPOINT,
            Environment::Test => TEST_ENDPOINT,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Environment::ALL
            .into_iter()
            .find(|environment| environment.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| {
                ConfigError::validation(format!(
                    "Environment needs to be one of live/test, got '{value}'"
                ))
            })
    }
}

// ============================================
// SETTINGS
// ============================================

/// Passthrough overrides for the HTTP transport.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransportOptions {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Replaces the environment's endpoint, e.g. to point at a proxy or a stub.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            endpoint: None,
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientSettings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub transport: TransportOptions,
}

fn default_timeout_secs() -> u64 {
    30
}
fn default_user_agent() -> String {
    format!("creditsafe-core/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientSettings {
    /// Load settings from `{config_dir}/creditsafe.toml`.
    ///
    /// A missing file yields defaults; a present but invalid file is an error.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let settings: ClientSettings = toml::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config TOML: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        settings.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(settings)
    }

    /// Apply `CREDITSAFE_ENVIRONMENT`, `CREDITSAFE_ENDPOINT` and
    /// `CREDITSAFE_TIMEOUT_SECS` on top of these settings.
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(environment) = read_env(ENVIRONMENT_ENV)? {
            self.environment = environment.parse()?;
        }

        if let Some(endpoint) = read_env(ENDPOINT_ENV)? {
            self.transport.endpoint = Some(endpoint);
        }

        if let Some(timeout) = read_env(TIMEOUT_ENV)? {
            self.transport.timeout_secs = timeout.trim().parse().map_err(|e| {
                ConfigError::environment(TIMEOUT_ENV, format!("not a number of seconds: {e}"))
            })?;
        }

        self.validate()?;
        Ok(self)
    }

    /// The URL requests are posted to.
    pub fn endpoint(&self) -> Result<Url, ConfigError> {
        let raw = self
            .transport
            .endpoint
            .as_deref()
            .unwrap_or_else(|| self.environment.endpoint());

        let url = Url::parse(raw)
            .map_err(|e| ConfigError::validation(format!("Invalid endpoint '{raw}': {e}")))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::validation(format!(
                "Invalid endpoint scheme: {}",
                url.scheme()
            )));
        }

        Ok(url)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.transport.timeout_secs == 0 {
            return Err(ConfigError::validation("timeout_secs must be greater than 0"));
        }

        if self.transport.user_agent.trim().is_empty() {
            return Err(ConfigError::validation("user_agent cannot be empty"));
        }

        self.endpoint()?;
        Ok(())
    }
}

// ============================================
// CREDENTIALS
// ============================================

/// Basic-auth credentials. `Debug` never shows the password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: RedactedSecret,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: RedactedSecret::new(password),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// `Basic base64(username:password)`
    pub fn basic_auth_header(&self) -> String {
        let pair = format!("{}:{}", self.username, self.password.expose());
        format!("Basic {}", BASE64.encode(pair))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.username.trim().is_empty() {
            return Err(ConfigError::validation("Username must be provided"));
        }

        if self.password.is_empty() {
            return Err(ConfigError::validation("Password must be provided"));
        }

        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password)
            .finish()
    }
}

// ============================================
// CLIENT CONFIG
// ============================================

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub credentials: Credentials,
    pub settings: ClientSettings,
}

impl ClientConfig {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(username, password),
            settings: ClientSettings::default(),
        }
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.settings.environment = environment;
        self
    }

    pub fn with_settings(mut self, settings: ClientSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_transport(mut self, transport: TransportOptions) -> Self {
        self.settings.transport = transport;
        self
    }

    /// Credentials from `CREDITSAFE_USERNAME` / `CREDITSAFE_PASSWORD`, with
    /// environment overrides applied to `settings`.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env(settings: ClientSettings) -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded .env from: {:?}", path),
            Err(_) => debug!("No .env file found - using process environment"),
        }

        let username = read_env(USERNAME_ENV)?
            .ok_or_else(|| ConfigError::environment(USERNAME_ENV, "not set"))?;
        let password = read_env(PASSWORD_ENV)?
            .ok_or_else(|| ConfigError::environment(PASSWORD_ENV, "not set"))?;

        let config = Self {
            credentials: Credentials::new(username, password),
            settings: settings.apply_env_overrides()?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.credentials.validate()?;
        self.settings.validate()
    }
}

fn read_env(variable: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(variable) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::environment(
            variable,
            "contains invalid unicode",
        )),
    }
}
