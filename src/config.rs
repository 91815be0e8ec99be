use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub const DEFAULT_CONFIG_URL: &str = "https://www.pinnacle.com/config/app.json";
pub const DEFAULT_API_ROOT: &str = "https://guest.api.arcadia.pinnacle.com";
pub const DEFAULT_API_VERSION: &str = "0.1";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PinnacleConfig {
    /// Seed token used by status queries until an odds fetch refreshes it
    pub api_key: Option<String>,
    pub config_url: String,
    pub api_root: String,
    pub api_version: String,
    pub timeout_secs: Option<u64>,
}

impl Default for PinnacleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            config_url: DEFAULT_CONFIG_URL.to_string(),
            api_root: DEFAULT_API_ROOT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_secs: None,
        }
    }
}

impl PinnacleConfig {
    fn versioned_root(&self) -> String {
        format!(
            "{}/{}",
            self.api_root.trim_end_matches('/'),
            self.api_version.trim_matches('/')
        )
    }

    pub fn status_url(&self) -> String {
        format!("{}/status", self.versioned_root())
    }

    pub fn league_straight_markets_url(&self, league_id: u64) -> String {
        format!(
            "{}/leagues/{league_id}/markets/straight",
            self.versioned_root()
        )
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pinnacle: PinnacleConfig,
}

impl Config {
    /// Load `config.toml` from the working directory
    pub fn new() -> Result<Self> {
        Self::from_path("config.toml")
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&config_str)?;
        info!(
            "Loaded config from {} (api root {})",
            path.as_ref().display(),
            config.pinnacle.api_root
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = PinnacleConfig::default();
        assert_eq!(
            config.status_url(),
            "https://guest.api.arcadia.pinnacle.com/0.1/status"
        );
        assert_eq!(
            config.league_straight_markets_url(487),
            "https://guest.api.arcadia.pinnacle.com/0.1/leagues/487/markets/straight"
        );
    }

    #[test]
    fn test_trailing_slash_on_root() {
        let config = PinnacleConfig {
            api_root: "http://127.0.0.1:8080/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.status_url(), "http://127.0.0.1:8080/0.1/status");
    }

    #[test]
    fn test_timeout() {
        let mut config = PinnacleConfig::default();
        assert!(config.timeout().is_none());
        config.timeout_secs = Some(5);
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }
}
