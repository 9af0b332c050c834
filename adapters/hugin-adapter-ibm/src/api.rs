//! IBM Quantum Platform API client.
//!
//! Implements the read-only slice of the IBM Quantum Cloud REST API
//! that status reporting needs:
//! - Authentication via IAM token exchange (see [`crate::auth`])
//! - Listing devices
//! - Fetching per-device configuration (qubit count) and status
//!   (operational flag, queue length)
//!
//! Configuration and status are separate endpoints on the service;
//! [`IbmClient::get_backend`] fetches both and merges them into a
//! single [`BackendInfo`].

use reqwest::{Client, header};
use serde::Deserialize;
use std::fmt;

use crate::auth::{Credentials, IamAuth};
use crate::error::{IbmError, IbmResult};

/// Default IBM Quantum Cloud API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://quantum.cloud.ibm.com/api";

/// IBM API version header value.
const IBM_API_VERSION: &str = "2026-02-01";

/// User-Agent sent with requests (Cloudflare blocks default reqwest UA).
const USER_AGENT: &str = "hugin/0.4 (quantum-status; +https://github.com/hugin-qc/hugin)";

/// IBM Quantum API client.
///
/// The bearer token lives only in the HTTP client's default headers;
/// it is never stored or printed elsewhere.
pub struct IbmClient {
    /// HTTP client with auth headers installed.
    client: Client,
    /// API endpoint URL.
    endpoint: String,
}

impl fmt::Debug for IbmClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IbmClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl IbmClient {
    /// Create a client from an already-obtained bearer token.
    ///
    /// Most callers want [`IbmClient::connect`], which reads credentials
    /// from the environment and performs the IAM exchange.
    pub fn new(
        endpoint: impl Into<String>,
        bearer_token: impl Into<String>,
        service_crn: &str,
    ) -> IbmResult<Self> {
        let token = bearer_token.into();

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| IbmError::InvalidToken)?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        // Service-CRN header — required on every request
        headers.insert(
            header::HeaderName::from_static("service-crn"),
            header::HeaderValue::from_str(service_crn)
                .map_err(|_| IbmError::InvalidParameter("invalid Service-CRN value".into()))?,
        );
        headers.insert(
            header::HeaderName::from_static("ibm-api-version"),
            header::HeaderValue::from_static(IBM_API_VERSION),
        );

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(60))
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Connect using `IBM_API_KEY` + `IBM_SERVICE_CRN` from the
    /// environment, exchanging the key for an IAM bearer token (cached
    /// on disk between runs).
    pub async fn connect() -> IbmResult<Self> {
        let credentials = Credentials::from_env()?;
        let auth = IamAuth::new()?;
        let bearer = auth.bearer_token(&credentials.api_key).await?;
        Self::new(DEFAULT_ENDPOINT, bearer, &credentials.service_crn)
    }

    /// Get available backends.
    ///
    /// Fetches the device list and then retrieves configuration and
    /// status for each backend individually. A device whose detail
    /// fetch fails is skipped with a warning; a failure of the listing
    /// itself is fatal.
    pub async fn list_backends(&self) -> IbmResult<Vec<BackendInfo>> {
        let names = self.list_device_names().await?;
        let mut backends = Vec::with_capacity(names.len());

        for device_name in &names {
            match self.get_backend(device_name).await {
                Ok(info) => backends.push(info),
                Err(e) => {
                    tracing::warn!("skipping backend {device_name}: {e}");
                }
            }
        }

        Ok(backends)
    }

    /// Names of the available devices, without per-device detail.
    pub async fn list_device_names(&self) -> IbmResult<Vec<String>> {
        let url = format!("{}/v1/backends", self.endpoint);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "no body".to_string());
            return Err(IbmError::ApiError {
                code: None,
                message: format!("list backends failed: {body}"),
            });
        }

        let devices: DevicesResponse = response.json().await?;
        Ok(devices.devices.into_iter().map(|d| d.name).collect())
    }

    /// Get details for a specific backend.
    ///
    /// Fetches `/configuration` and `/status` separately and merges
    /// them into a single [`BackendInfo`].
    pub async fn get_backend(&self, name: &str) -> IbmResult<BackendInfo> {
        let config_url = format!("{}/v1/backends/{}/configuration", self.endpoint, name);
        let config_response = self.client.get(&config_url).send().await?;

        if !config_response.status().is_success() {
            if config_response.status() == reqwest::StatusCode::NOT_FOUND {
                return Err(IbmError::BackendUnavailable(name.to_string()));
            }
            let body = config_response
                .text()
                .await
                .unwrap_or_else(|_| "no body".to_string());
            return Err(IbmError::ApiError {
                code: None,
                message: format!("backend configuration failed for {name}: {body}"),
            });
        }

        let config: BackendConfigResponse = config_response.json().await?;

        let status_url = format!("{}/v1/backends/{}/status", self.endpoint, name);
        let status_response = self.client.get(&status_url).send().await?;

        let status = if status_response.status().is_success() {
            let s: BackendStatusResponse = status_response.json().await?;
            BackendStatus {
                operational: s.state,
                status_msg: Some(s.status),
                pending_jobs: Some(u32::try_from(s.length_queue).unwrap_or(u32::MAX)),
            }
        } else {
            // If status fetch fails, assume operational (config succeeded)
            BackendStatus {
                operational: true,
                status_msg: None,
                pending_jobs: None,
            }
        };

        Ok(BackendInfo {
            name: config.backend_name,
            num_qubits: config.n_qubits,
            status,
            simulator: config.simulator.unwrap_or(false),
            max_shots: config.max_shots,
        })
    }
}

// ============================================================================
// Response types
// ============================================================================

/// Device list response (`{"devices": [...]}`).
#[derive(Debug, Deserialize)]
struct DevicesResponse {
    /// List of devices (objects with name + metadata).
    devices: Vec<DeviceEntry>,
}

/// A device entry in the listing.
#[derive(Debug, Deserialize)]
struct DeviceEntry {
    /// Device name (e.g. "ibm_torino").
    name: String,
}

/// Backend configuration response from `/backends/{name}/configuration`.
#[derive(Debug, Deserialize)]
struct BackendConfigResponse {
    /// Backend name.
    backend_name: String,
    /// Number of qubits.
    n_qubits: usize,
    /// Whether this is a simulator.
    #[serde(default)]
    simulator: Option<bool>,
    /// Maximum number of shots.
    #[serde(default)]
    max_shots: Option<u32>,
}

/// Backend status response from `/backends/{name}/status`.
#[derive(Debug, Deserialize)]
struct BackendStatusResponse {
    /// Whether the backend is operational.
    state: bool,
    /// Status string (e.g., "active").
    #[serde(default)]
    status: String,
    /// Queue length.
    #[serde(default)]
    length_queue: u64,
}

/// Backend information merged from configuration and status.
#[derive(Debug, Clone)]
pub struct BackendInfo {
    /// Backend name.
    pub name: String,
    /// Number of qubits.
    pub num_qubits: usize,
    /// Backend status.
    pub status: BackendStatus,
    /// Whether this is a simulator.
    pub simulator: bool,
    /// Maximum number of shots.
    pub max_shots: Option<u32>,
}

/// Backend status.
#[derive(Debug, Clone)]
pub struct BackendStatus {
    /// Whether the backend is operational.
    pub operational: bool,
    /// Status message.
    pub status_msg: Option<String>,
    /// Number of pending jobs.
    pub pending_jobs: Option<u32>,
}
