// web_app/model/mod.rs - Shared data models for client and server
//
// These structs travel between the admin API, the server functions and
// the browser. Field names follow the admin API's camelCase JSON.

pub mod endpoint_certificate;

pub use endpoint_certificate::{
    CertificateDetails, CertificateListing, CertificateMetadata, CertificateUpload,
    CertificateUsage, CertificateValidity, EndpointCertificate, UploadError,
};

use serde::{Deserialize, Serialize};

use crate::web_app::certificate::CertificateValue;

/// Row of the key manager list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyManagerSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl KeyManagerSummary {
    /// Display name when set, otherwise the unique name
    pub fn title(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.name)
    }

    /// Case-insensitive match on name, display name, type and description
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        [
            Some(self.name.as_str()),
            self.display_name.as_deref(),
            Some(self.kind.as_str()),
            self.description.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&term))
    }
}

/// Full key manager as returned by the admin API.
///
/// Only the fields this console edits or shows are typed; everything else
/// is kept in `extra` so an update sends the object back unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyManager {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub well_known_endpoint: Option<String>,
    #[serde(default)]
    pub certificates: Option<CertificateValue>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl KeyManager {
    pub fn summary(&self) -> KeyManagerSummary {
        KeyManagerSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            display_name: self.display_name.clone(),
            kind: self.kind.clone(),
            description: self.description.clone(),
            enabled: self.enabled,
        }
    }

    /// JWKS endpoints are only offered for key managers other than the built-in one
    pub fn supports_jwks(&self) -> bool {
        self.kind != RESIDENT_KEY_MANAGER_TYPE
    }
}

/// Type name of the platform's built-in key manager
pub const RESIDENT_KEY_MANAGER_TYPE: &str = "default";

/// Collection envelope of the admin API: `{ count, list }`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeyManagerList {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub list: Vec<KeyManagerSummary>,
}

/// Subscription throttling tier
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionTier {
    pub name: String,
    pub description: String,
    /// Requests allowed per unit time; `None` means unlimited
    pub request_count: Option<i64>,
    pub unit_time: u32,
    pub time_unit: String,
    pub stop_on_quota_reach: bool,
}

impl SubscriptionTier {
    /// Quota used for ordering; unlimited sorts above every finite quota
    pub fn quota_rank(&self) -> i64 {
        self.request_count.unwrap_or(i64::MAX)
    }

    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.name.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }

    pub fn quota_label(&self) -> String {
        match self.request_count {
            Some(count) => format!("{} requests/{} {}", count, self.unit_time, self.time_unit),
            None => "Unlimited".to_string(),
        }
    }
}

/// Tiers every deployment ships with
pub fn builtin_tiers() -> Vec<SubscriptionTier> {
    let tier = |name: &str, description: &str, count: Option<i64>| SubscriptionTier {
        name: name.to_string(),
        description: description.to_string(),
        request_count: count,
        unit_time: 1,
        time_unit: "min".to_string(),
        stop_on_quota_reach: true,
    };

    vec![
        tier("Gold", "Allows 5000 requests per minute", Some(5000)),
        tier("Silver", "Allows 2000 requests per minute", Some(2000)),
        tier("Bronze", "Allows 1000 requests per minute", Some(1000)),
        tier("Unauthenticated", "Allows 500 requests per minute", Some(500)),
        tier("Unlimited", "Allows unlimited requests", None),
        tier("AsyncGold", "Allows 5000 events per minute", Some(5000)),
        tier("AsyncSilver", "Allows 2000 events per minute", Some(2000)),
        tier("AsyncBronze", "Allows 1000 events per minute", Some(1000)),
    ]
}
