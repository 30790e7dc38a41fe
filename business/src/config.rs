use serde::Deserialize;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Base URL every endpoint path is joined to, e.g. `https://admin.example.com/api`.
    pub api_base_url: String,
    /// Exposes the user deletion action. Off unless explicitly enabled.
    pub enable_delete: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration from the environment: {0}")]
    Env(String),

    #[error("ROSTER_API_BASE_URL must not be empty")]
    EmptyBaseUrl,
}

/// Environment variables recognised by [`BusinessConfig::from_env`].
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    roster_api_base_url: Option<String>,
    roster_enable_delete: Option<bool>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            enable_delete: false,
        }
    }

    #[must_use]
    pub fn with_delete_enabled(mut self, enabled: bool) -> Self {
        self.enable_delete = enabled;
        self
    }

    /// Reads `ROSTER_API_BASE_URL` and `ROSTER_ENABLE_DELETE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Same as [`BusinessConfig::from_env`] over an explicit variable list.
    pub fn from_vars<I, S>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig =
            serde_env::from_iter(vars).map_err(|e| ConfigError::Env(e.to_string()))?;

        let api_base_url = match raw.roster_api_base_url {
            Some(url) => {
                log::info!("Using ROSTER_API_BASE_URL={url}");
                url
            }
            None => {
                log::info!("ROSTER_API_BASE_URL not set, defaulting to {DEFAULT_API_BASE_URL}");
                DEFAULT_API_BASE_URL.to_owned()
            }
        };

        let config = Self {
            api_base_url,
            enable_delete: raw.roster_enable_delete.unwrap_or(false),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        Ok(())
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
