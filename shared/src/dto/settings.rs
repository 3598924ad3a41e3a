use serde::{Deserialize, Serialize};

/// Security settings for the current user/tenant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    #[serde(default)]
    pub two_factor_enabled: bool,
    #[serde(default)]
    pub login_alerts_enabled: bool,
    #[serde(default)]
    pub block_threshold: Option<f64>,
    #[serde(default)]
    pub review_threshold: Option<f64>,
    #[serde(default)]
    pub allowed_countries: Vec<String>,
}
