// web_app/api/client.rs - Admin REST API client
//
// A thin reqwest wrapper: base URL, bearer token, timeout, and mapping of
// non-success responses to typed errors. One client is shared by all
// server functions. Endpoint certificates live on the publisher API, which
// `publisher()` points the same client at.

use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_ADMIN_API_URL: &str = "https://localhost:9443/api/am/admin/v4";
pub const DEFAULT_PUBLISHER_API_URL: &str = "https://localhost:9443/api/am/publisher/v4";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

static CLIENT: OnceLock<AdminApiClient> = OnceLock::new();
static TEST_CLIENT_OVERRIDE: Mutex<Option<AdminApiClient>> = Mutex::new(None);

#[derive(Debug, Error)]
pub enum AdminApiError {
    /// Missing or invalid configuration
    #[error("admin API config error: {0}")]
    Config(String),

    /// The admin API answered with a non-success status
    #[error("admin API error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("admin API network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("admin API json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error body of the admin API: `{ code, message, description }`
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Connection settings, normally read from the environment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminApiConfig {
    pub base_url: String,
    pub publisher_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl Default for AdminApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ADMIN_API_URL.to_string(),
            publisher_url: DEFAULT_PUBLISHER_API_URL.to_string(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AdminApiConfig {
    /// Reads ADMIN_API_URL, PUBLISHER_API_URL, ADMIN_API_TOKEN and
    /// ADMIN_API_TIMEOUT_SECS
    pub fn from_env() -> Result<Self, AdminApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AdminApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let url = |key: &str, default: &str| {
            non_empty(key)
                .unwrap_or_else(|| default.to_string())
                .trim_end_matches('/')
                .to_string()
        };
        let base_url = url("ADMIN_API_URL", DEFAULT_ADMIN_API_URL);
        let publisher_url = url("PUBLISHER_API_URL", DEFAULT_PUBLISHER_API_URL);

        let timeout = match non_empty("ADMIN_API_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    AdminApiError::Config(format!("ADMIN_API_TIMEOUT_SECS is not a number: {}", raw))
                })?;
                if secs == 0 {
                    return Err(AdminApiError::Config(
                        "ADMIN_API_TIMEOUT_SECS must be greater than zero".to_string(),
                    ));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            base_url,
            publisher_url,
            token: non_empty("ADMIN_API_TOKEN"),
            timeout,
        })
    }
}

#[derive(Clone, Debug)]
pub struct AdminApiClient {
    base_url: String,
    publisher_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl AdminApiClient {
    pub fn new(config: AdminApiConfig) -> Result<Self, AdminApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("admin-console/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: config.base_url,
            publisher_url: config.publisher_url,
            token: config.token,
            http,
        })
    }

    /// The same client, addressing the publisher API
    pub fn publisher(&self) -> Self {
        Self {
            base_url: self.publisher_url.clone(),
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AdminApiError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        decode(response).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, AdminApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.http.put(self.url(path)).json(body)).await?;
        decode(response).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, AdminApiError> {
        let response = self.send(self.http.post(self.url(path)).multipart(form)).await?;
        decode(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), AdminApiError> {
        self.send(self.http.delete(self.url(path))).await?;
        Ok(())
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, AdminApiError> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body)
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| "request failed".to_string());

        tracing::warn!("Admin API returned {}: {}", status.as_u16(), message);
        Err(AdminApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AdminApiError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Pull a readable message out of an admin API error body
pub fn error_message(body: &str) -> Option<String> {
    let parsed: ApiErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .description
        .filter(|d| !d.is_empty())
        .or(parsed.message)
        .filter(|m| !m.is_empty())
}

/// Initialize the global admin API client
pub fn init_client(client: AdminApiClient) {
    tracing::info!("Initializing admin API client for {}", client.base_url());
    if CLIENT.set(client).is_err() {
        tracing::warn!("Admin API client already initialized");
    }
}

/// Set a client override for testing
pub fn set_test_client(client: AdminApiClient) {
    match TEST_CLIENT_OVERRIDE.lock() {
        Ok(mut guard) => *guard = Some(client),
        Err(poisoned) => *poisoned.into_inner() = Some(client),
    }
}

/// Get the global admin API client
pub fn get_client() -> Option<AdminApiClient> {
    if let Ok(guard) = TEST_CLIENT_OVERRIDE.lock() {
        if let Some(client) = guard.as_ref() {
            return Some(client.clone());
        }
    }

    let client = CLIENT.get().cloned();
    if client.is_none() {
        tracing::warn!("Admin API client is not initialized");
    }
    client
}
