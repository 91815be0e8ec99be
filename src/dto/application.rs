use serde::{Deserialize, Serialize};

// Only the API gateway key is modelled. The upstream app.json also carries
// feature flags, polling intervals, vendor settings etc. which serde skips.

/// Public application configuration served at `config/app.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDetails {
    pub api: ApiDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDetails {
    pub haywire: HaywireDetails,
}

/// The "haywire" block is the provider's API gateway configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HaywireDetails {
    pub api_key: String,
}

impl ApplicationDetails {
    /// The guest API key embedded in the document
    pub fn api_key(&self) -> &str {
        &self.api.haywire.api_key
    }

    pub fn into_api_key(self) -> String {
        self.api.haywire.api_key
    }
}
