use super::null_default;
use serde::{Deserialize, Serialize};

/*
{"code":"ONLINE","description":"System is operating correctly, no known issues.",
 "services":[{"name":"api","status":"ONLINE"}],
 "upstream":[{"health":"ONLINE","name":"betting","status":"ENABLED"}]}
*/
// Missing or null fields decode to empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusDetails {
    #[serde(deserialize_with = "null_default::deserialize")]
    pub code: String,
    #[serde(deserialize_with = "null_default::deserialize")]
    pub description: String,
    #[serde(deserialize_with = "null_default::deserialize")]
    pub services: Vec<ServiceStatus>,
    #[serde(rename = "upstream", deserialize_with = "null_default::deserialize")]
    pub upstream_services: Vec<UpstreamServiceStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceStatus {
    #[serde(deserialize_with = "null_default::deserialize")]
    pub name: String,
    #[serde(deserialize_with = "null_default::deserialize")]
    pub status: String,
}

/// Health of a dependency behind the gateway. `status` is frequently an
/// empty string upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamServiceStatus {
    #[serde(deserialize_with = "null_default::deserialize")]
    pub name: String,
    #[serde(deserialize_with = "null_default::deserialize")]
    pub status: String,
    #[serde(deserialize_with = "null_default::deserialize")]
    pub health: String,
}

impl StatusDetails {
    pub fn is_online(&self) -> bool {
        self.code == "ONLINE"
    }

    /// Services whose status is anything other than `ONLINE`
    pub fn degraded_services(&self) -> impl Iterator<Item = &ServiceStatus> {
        self.services.iter().filter(|s| s.status != "ONLINE")
    }
}
