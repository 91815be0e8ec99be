use crate::config::PinnacleConfig;
use crate::dto::*;
use crate::error::{PinnacleError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, warn};

const API_KEY_HEADER: &str = "X-API-KEY";

/// Process-wide transport used when the caller does not inject one
fn default_http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(Client::new).clone()
}

/// Client for Pinnacle's guest API.
///
/// The guest API has no static credentials. [`fetch_league_straight_odds`]
/// discovers the current key from the public app config before each call
/// and keeps it for later [`fetch_status`] calls.
///
/// Refreshing the key needs `&mut self`, so a client is owned by one task at
/// a time. Share it behind a `tokio::sync::Mutex` if several tasks need it;
/// the transport itself is cheap to clone and safe to share.
///
/// [`fetch_league_straight_odds`]: PinnacleApiClient::fetch_league_straight_odds
/// [`fetch_status`]: PinnacleApiClient::fetch_status
pub struct PinnacleApiClient {
    client: Client,
    config: Arc<PinnacleConfig>,
    authorization_token: String,
}

impl PinnacleApiClient {
    /// Create a client against the production endpoints.
    ///
    /// A missing token starts out empty, a missing transport falls back to a
    /// shared default `reqwest::Client`.
    pub fn new(authorization_token: Option<String>, client: Option<Client>) -> Self {
        let config = PinnacleConfig {
            api_key: authorization_token,
            ..Default::default()
        };
        Self::with_config(config, client)
    }

    /// Create a client with custom endpoints. `config.api_key` seeds the token.
    pub fn with_config(config: PinnacleConfig, client: Option<Client>) -> Self {
        Self {
            client: client.unwrap_or_else(default_http_client),
            authorization_token: config.api_key.clone().unwrap_or_default(),
            config: Arc::new(config),
        }
    }

    /// Token sent as `X-API-KEY` on authenticated requests
    pub fn authorization_token(&self) -> &str {
        &self.authorization_token
    }

    /// Set token (useful for restoring a previously discovered key)
    pub fn set_authorization_token(&mut self, token: String) {
        self.authorization_token = token;
    }

    pub fn config(&self) -> &PinnacleConfig {
        &self.config
    }

    async fn get_json<U>(&self, url: &str, api_key: Option<&str>) -> Result<U>
    where
        U: DeserializeOwned,
    {
        let mut request = self.client.get(url).header("Accept", "application/json");
        if let Some(api_key) = api_key {
            request = request.header(API_KEY_HEADER, api_key);
        }

        debug!("API request: GET {}", url);
        let response = request.send().await?;

        let status = response.status();
        debug!("API response status: {}", status);

        let response_text = response.text().await?;
        // The unauthenticated config document embeds the API key
        if api_key.is_some() {
            debug!("API response: {}", response_text);
        } else {
            debug!("API response: {} bytes", response_text.len());
        }

        serde_json::from_str(&response_text).map_err(|err| {
            warn!("Failed to decode response from {} ({}): {}", url, status, err);
            PinnacleError::from(err)
        })
    }

    /// Fetch the public application config that embeds the guest API key.
    ///
    /// The request is unauthenticated and hits the network on every call.
    /// The client's token is left untouched.
    pub async fn fetch_application_details(&self) -> Result<ApplicationDetails> {
        self.get_json(&self.config.config_url, None).await
    }

    /// Fetch service status using the currently held token.
    ///
    /// No key discovery happens here. With an empty or stale token the
    /// upstream rejects the call; its error body decodes to an empty status.
    pub async fn fetch_status(&self) -> Result<StatusDetails> {
        let url = self.config.status_url();
        self.get_json(&url, Some(self.authorization_token.as_str())).await
    }

    /// Fetch straight markets for a league.
    ///
    /// Discovers a fresh API key first and stores it on the client. If
    /// discovery fails the odds endpoint is never called and the token keeps
    /// its previous value.
    pub async fn fetch_league_straight_odds(
        &mut self,
        league_id: u64,
    ) -> Result<Vec<MatchupOdds>> {
        let details = self.fetch_application_details().await?;
        self.authorization_token = details.into_api_key();
        info!(
            "Refreshed API key ({} chars) for league {}",
            self.authorization_token.len(),
            league_id
        );

        let url = self.config.league_straight_markets_url(league_id);
        self.get_json(&url, Some(self.authorization_token.as_str())).await
    }
}

impl Default for PinnacleApiClient {
    fn default() -> Self {
        Self::new(None, None)
    }
}
