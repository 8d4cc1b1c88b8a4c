use anyhow::Result;
use config::{Config, Environment};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub links: LinksConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origin used when building retrieval URLs, overriding the request's own scheme and host.
    pub public_origin: Option<String>,
    /// Directory holding the browser UI, served for every path the API does not claim.
    pub static_dir: Option<String>,
    /// Honour `X-Forwarded-Proto` and `X-Forwarded-Host` when no public origin is set.
    /// Only enable behind a reverse proxy that overwrites them.
    #[serde(default)]
    pub trust_forwarded_headers: bool,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the address to bind in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// ## Summary
    /// Returns the configured public origin without a trailing slash, if any.
    #[must_use]
    pub fn public_origin(&self) -> Option<&str> {
        self.public_origin
            .as_deref()
            .map(|origin| origin.trim_end_matches('/'))
            .filter(|origin| !origin.is_empty())
    }

    /// ## Summary
    /// Returns the configured UI directory, treating an empty value as unset.
    #[must_use]
    pub fn static_dir(&self) -> Option<&str> {
        self.static_dir.as_deref().filter(|dir| !dir.trim().is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinksConfig {
    /// Digits prefixed to phone numbers entered without a leading `+`.
    /// Empty or absent means such numbers are rejected.
    pub default_country_code: Option<String>,
}

impl LinksConfig {
    /// ## Summary
    /// Returns the default country code reduced to its digits, or `None` when disabled.
    #[must_use]
    pub fn country_code(&self) -> Option<String> {
        let digits: String = self
            .default_country_code
            .as_deref()
            .unwrap_or_default()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();

        (!digits.is_empty()).then_some(digits)
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            default_country_code: Some(DEFAULT_COUNTRY_CODE.to_string()),
        }
    }
}

/// Country code assumed for phone numbers without a leading `+` unless configured otherwise.
pub const DEFAULT_COUNTRY_CODE: &str = "1";

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `config.toml` values.
    ///
    /// Nested keys are separated by a double underscore in the environment,
    /// e.g. `LINKS__DEFAULT_COUNTRY_CODE=44`.
    ///
    /// Empty variables are kept, so `LINKS__DEFAULT_COUNTRY_CODE=` turns prefixing off.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::load_with(environment())
    }

    /// ## Summary
    /// Loads configuration with the given environment source layered over the
    /// defaults and `config.toml`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load_with(env: Environment) -> Result<Self> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.trust_forwarded_headers", false)?
            .set_default("logging.level", "info")?
            .set_default("links.default_country_code", DEFAULT_COUNTRY_CODE)?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env file
            .add_source(env)
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Environment source for settings: `SECTION__KEY` names, values parsed where possible.
#[must_use]
pub fn environment() -> Environment {
    Environment::default().separator("__").try_parsing(true)
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
