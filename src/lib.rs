//! # pinnacle-rs
//!
//! A small async client for Pinnacle's guest API: service status and straight
//! market odds per league.
//!
//! The guest API has no static credentials. The client reads the public
//! application config (`https://www.pinnacle.com/config/app.json`), takes the
//! API key embedded under `api.haywire.apiKey` and sends it as `X-API-KEY`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pinnacle_rs::PinnacleApiClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut client = PinnacleApiClient::new(None, None);
//!
//! // Discovers a fresh key, then fetches the markets (487 = NBA)
//! let odds = client.fetch_league_straight_odds(487).await?;
//! for matchup in &odds {
//!     println!("{} {} v{}", matchup.matchup_id, matchup.key, matchup.version);
//! }
//!
//! // Reuses the key discovered above
//! let status = client.fetch_status().await?;
//! println!("{}: {}", status.code, status.description);
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! The `pinnacle` binary reads an optional `config.toml`; every key falls
//! back to the production default:
//!
//! ```toml
//! [pinnacle]
//! api_key = "previously discovered key"
//! config_url = "https://www.pinnacle.com/config/app.json"
//! api_root = "https://guest.api.arcadia.pinnacle.com"
//! api_version = "0.1"
//! timeout_secs = 10
//! ```
//!
//! Each call is a single request/response. There is no retry, rate limiting
//! or key caching: every odds fetch re-discovers the key.

pub mod api_client;
pub mod config;
pub mod dto;
pub mod error;

// Re-export commonly used types at the crate root
pub use api_client::PinnacleApiClient;
pub use config::{Config, PinnacleConfig};
pub use dto::*;
pub use error::{PinnacleError, Result};
