use super::null_default;
use serde::{Deserialize, Serialize};

/// Straight (non-parlay) market for a single matchup.
///
/// `version` is the upstream revision counter; consumers compare it to
/// detect stale snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchupOdds {
    #[serde(deserialize_with = "null_default::deserialize")]
    pub matchup_id: u64,
    #[serde(deserialize_with = "null_default::deserialize")]
    pub key: String,
    #[serde(rename = "type", deserialize_with = "null_default::deserialize")]
    pub market_type: String,
    #[serde(deserialize_with = "null_default::deserialize")]
    pub version: u64,
    #[serde(deserialize_with = "null_default::deserialize")]
    pub prices: Vec<MatchupOddsPrice>,
}

/// One side of a market. `price` is in American notation, `points` is the
/// line or handicap.
///
/// Moneyline prices come without `points` and `participantId`. Missing or
/// null fields default to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchupOddsPrice {
    #[serde(deserialize_with = "null_default::deserialize")]
    pub participant_id: u64,
    #[serde(deserialize_with = "null_default::deserialize")]
    pub points: f64,
    #[serde(deserialize_with = "null_default::deserialize")]
    pub price: f64,
}

impl MatchupOddsPrice {
    /// Decimal odds equivalent of the American price.
    ///
    /// Returns `None` for a zero price, which has no decimal equivalent.
    pub fn decimal_odds(&self) -> Option<f64> {
        if self.price > 0.0 {
            Some(1.0 + self.price / 100.0)
        } else if self.price < 0.0 {
            Some(1.0 + 100.0 / -self.price)
        } else {
            None
        }
    }
}
