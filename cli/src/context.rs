//! Configuration and API client shared by every command.

use std::io::IsTerminal as _;

use anyhow::{Context as _, Result, bail};
use inquire::Confirm;
use roster_business::{ApiClient, BusinessConfig};

pub struct CliContext {
    pub client: ApiClient,
    pub config: BusinessConfig,
    assume_yes: bool,
}

impl CliContext {
    pub fn new(config: BusinessConfig, assume_yes: bool) -> Self {
        Self {
            client: ApiClient::from_config(&config),
            config,
            assume_yes,
        }
    }

    /// Asks before a mutation. `--yes` skips the prompt; without a terminal it
    /// is required.
    pub fn confirm(&self, prompt: &str) -> Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        if !std::io::stdin().is_terminal() {
            bail!("Confirmation required; pass --yes to run non-interactively");
        }
        Confirm::new(prompt)
            .with_default(false)
            .prompt()
            .context("Failed to confirm")
    }
}

/// Environment configuration with the `--base-url` flag applied on top.
pub fn load_config(base_url: Option<String>) -> Result<BusinessConfig> {
    let config = BusinessConfig::from_env().context("Failed to read configuration")?;
    with_base_url(config, base_url)
}

fn with_base_url(config: BusinessConfig, base_url: Option<String>) -> Result<BusinessConfig> {
    let config = match base_url {
        Some(api_base_url) => BusinessConfig {
            api_base_url,
            ..config
        },
        None => config,
    };
    config.validate().context("Invalid --base-url")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_environment_url() {
        let env = BusinessConfig::new("http://env.example.com").with_delete_enabled(true);
        let config = with_base_url(env, Some("https://flag.example.com/api".to_owned())).unwrap();
        assert_eq!(config.api_base_url, "https://flag.example.com/api");
        assert!(config.enable_delete);
    }

    #[test]
    fn missing_flag_keeps_environment_url() {
        let config = with_base_url(BusinessConfig::default(), None).unwrap();
        assert_eq!(config, BusinessConfig::default());
    }

    #[test]
    fn blank_flag_is_rejected() {
        assert!(with_base_url(BusinessConfig::default(), Some("  ".to_owned())).is_err());
    }

    #[test]
    fn assume_yes_skips_the_prompt() {
        let ctx = CliContext::new(BusinessConfig::default(), true);
        assert!(ctx.confirm("Delete everything?").unwrap());
        assert_eq!(ctx.client.base_url(), "http://127.0.0.1:8080");
    }
}
