use google_sheets4::oauth2::ServiceAccountKey;

use crate::server::error::config::ConfigError;

pub const DISCORD_BOT_TOKEN: &str = "DISCORD_BOT_TOKEN";
pub const SPREADSHEET_NAME: &str = "SPREADSHEET_NAME";
pub const GCP_SA_KEY: &str = "GCP_SA_KEY";

pub struct Config {
    pub discord_bot_token: String,
    pub spreadsheet_name: String,
    pub service_account_key: ServiceAccountKey,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Every variable is checked for presence before the service-account key is
    /// parsed, so a missing value is always reported as `MissingEnvVar` even when
    /// the key is also malformed. Empty values count as missing.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All values present and the key parsed
    /// - `Err(ConfigError)` - A value is missing or the key is not valid JSON
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let discord_bot_token = require(DISCORD_BOT_TOKEN)?;
        let spreadsheet_name = require(SPREADSHEET_NAME)?;
        let raw_key = require(GCP_SA_KEY)?;

        let service_account_key = serde_json::from_str(&raw_key)
            .map_err(|source| ConfigError::InvalidServiceAccountKey { source })?;

        Ok(Self {
            discord_bot_token,
            spreadsheet_name,
            service_account_key,
        })
    }
}
