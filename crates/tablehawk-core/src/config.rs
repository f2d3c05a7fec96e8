use serde::Deserialize;

use crate::api::DEFAULT_BASE_URL;
use crate::http_client::ApiCredentials;

/// Account credentials and payment profile, loaded from a JSON file by the
/// caller before orchestration begins.
#[derive(Debug, Clone, Deserialize)]
pub struct ResyConfig {
    pub api_key: String,
    pub auth_token: String,
    /// Payment profile committed with every booking.
    pub payment_method_id: u64,
    /// Override for the upstream base URL; tests point this at a stub.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl ResyConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn credentials(&self) -> ApiCredentials {
        ApiCredentials::new(&self.api_key, &self.auth_token)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}
