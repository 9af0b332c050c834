//! IBM Cloud IAM authentication.
//!
//! The IBM Quantum cloud API authenticates with a bearer token obtained
//! by exchanging an IBM Cloud API key at the IAM token endpoint. Tokens
//! are cached on disk under the user cache directory so repeated
//! invocations reuse the session instead of re-authenticating.

use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use reqwest::{Client, header};
use serde::{Deserialize, Serialize};

use crate::error::{IbmError, IbmResult};

/// IBM Cloud IAM token endpoint.
const IAM_TOKEN_URL: &str = "https://iam.cloud.ibm.com/identity/token";

/// Refresh tokens this long before they actually expire.
const REFRESH_BUFFER_SECS: i64 = 300;

/// API credentials read from the environment.
#[derive(Clone)]
pub struct Credentials {
    /// IBM Cloud API key.
    pub api_key: String,
    /// Service CRN identifying the Quantum service instance.
    pub service_crn: String,
}

impl Credentials {
    /// Read credentials from `IBM_API_KEY` and `IBM_SERVICE_CRN`.
    pub fn from_env() -> IbmResult<Self> {
        let api_key = std::env::var("IBM_API_KEY").map_err(|_| IbmError::MissingCredentials)?;
        let service_crn =
            std::env::var("IBM_SERVICE_CRN").map_err(|_| IbmError::MissingServiceCrn)?;
        Ok(Self {
            api_key,
            service_crn,
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("service_crn", &self.service_crn)
            .finish()
    }
}

/// Cached bearer token with its expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedToken {
    /// Access token.
    pub access_token: String,
    /// Token type (usually "Bearer").
    pub token_type: String,
    /// Expiration time.
    pub expires_at: DateTime<Utc>,
}

impl CachedToken {
    /// Check if the token is expired.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Check if the token will expire within the refresh buffer.
    pub fn expires_soon(&self) -> bool {
        Utc::now() + Duration::seconds(REFRESH_BUFFER_SECS) >= self.expires_at
    }
}

/// IAM token response from `iam.cloud.ibm.com`.
#[derive(Debug, Deserialize)]
struct IamTokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
}

/// IAM authentication handler with on-disk token caching.
pub struct IamAuth {
    client: Client,
    cache_path: Option<PathBuf>,
}

impl IamAuth {
    /// Create a handler with the default cache location
    /// (`<cache dir>/hugin/ibm_token.json`).
    pub fn new() -> IbmResult<Self> {
        let cache_path = dirs::cache_dir().map(|d| d.join("hugin/ibm_token.json"));
        Self::with_cache_path(cache_path)
    }

    /// Create a handler with an explicit cache location (`None` disables
    /// caching).
    pub fn with_cache_path(cache_path: Option<PathBuf>) -> IbmResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self { client, cache_path })
    }

    /// Get a valid bearer token, reusing the cached session when possible.
    pub async fn bearer_token(&self, api_key: &str) -> IbmResult<String> {
        if let Some(token) = self.load_cached_token() {
            if !token.expires_soon() {
                tracing::debug!("using cached IAM token (expires {})", token.expires_at);
                return Ok(token.access_token);
            }
        }

        let token = self.exchange(api_key).await?;
        if let Err(e) = self.save_token(&token) {
            // A cache write failure only costs the next run a re-exchange.
            tracing::warn!("failed to cache IAM token: {e}");
        }
        Ok(token.access_token)
    }

    /// Exchange the API key for a fresh bearer token.
    async fn exchange(&self, api_key: &str) -> IbmResult<CachedToken> {
        tracing::info!("exchanging IBM Cloud API key for IAM bearer token");

        let response = self
            .client
            .post(IAM_TOKEN_URL)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(format!(
                "grant_type=urn:ibm:params:oauth:grant-type:apikey&apikey={api_key}"
            ))
            .send()
            .await
            .map_err(|e| IbmError::IamTokenExchange(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "no body".to_string());
            return Err(IbmError::IamTokenExchange(format!(
                "IAM returned {status}: {body}"
            )));
        }

        let iam: IamTokenResponse = response.json().await.map_err(|e| {
            IbmError::IamTokenExchange(format!("failed to parse IAM response: {e}"))
        })?;

        Ok(CachedToken {
            access_token: iam.access_token,
            token_type: iam.token_type.unwrap_or_else(|| "Bearer".to_string()),
            expires_at: Utc::now() + Duration::seconds(iam.expires_in.unwrap_or(3600)),
        })
    }

    /// Load the cached token from disk, dropping it if expired.
    fn load_cached_token(&self) -> Option<CachedToken> {
        let path = self.cache_path.as_ref()?;
        let content = std::fs::read_to_string(path).ok()?;
        let token: CachedToken = serde_json::from_str(&content).ok()?;
        if token.is_expired() {
            return None;
        }
        Some(token)
    }

    /// Save the token to the cache file with restrictive permissions.
    fn save_token(&self, token: &CachedToken) -> IbmResult<()> {
        let Some(path) = &self.cache_path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| IbmError::TokenCache(format!("create cache directory: {e}")))?;
        }

        let json = serde_json::to_string_pretty(token)?;
        std::fs::write(path, json)
            .map_err(|e| IbmError::TokenCache(format!("write token cache: {e}")))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)
                .map_err(|e| IbmError::TokenCache(format!("read cache metadata: {e}")))?
                .permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)
                .map_err(|e| IbmError::TokenCache(format!("set cache permissions: {e}")))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_token_expiry() {
        let expired = CachedToken {
            access_token: "token".to_string(),
            token_type: "Bearer".to_string(),
            expires_at: Utc::now() - Duration::seconds(100),
        };
        assert!(expired.is_expired());
        assert!(expired.expires_soon());

        let valid = CachedToken {
            access_token: "token".to_string(),
            token_type: "Bearer".to_string(),
            expires_at: Utc::now() + Duration::seconds(3600),
        };
        assert!(!valid.is_expired());
        assert!(!valid.expires_soon());

        let expiring = CachedToken {
            access_token: "token".to_string(),
            token_type: "Bearer".to_string(),
            expires_at: Utc::now() + Duration::seconds(60),
        };
        assert!(!expiring.is_expired());
        assert!(expiring.expires_soon());
    }

    #[test]
    fn test_credentials_debug_redacts_key() {
        let creds = Credentials {
            api_key: "super-secret".to_string(),
            service_crn: "crn:v1:test".to_string(),
        };
        let debug = format!("{creds:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("crn:v1:test"));
    }

    #[test]
    fn test_cached_token_round_trip() {
        let token = CachedToken {
            access_token: "abc".to_string(),
            token_type: "Bearer".to_string(),
            expires_at: Utc::now() + Duration::seconds(600),
        };
        let json = serde_json::to_string(&token).unwrap();
        let back: CachedToken = serde_json::from_str(&json).unwrap();
        assert_eq!(back.access_token, "abc");
        assert_eq!(back.token_type, "Bearer");
    }

    #[test]
    fn test_no_cache_path_is_silent() {
        let auth = IamAuth::with_cache_path(None).unwrap();
        assert!(auth.load_cached_token().is_none());
        let token = CachedToken {
            access_token: "abc".to_string(),
            token_type: "Bearer".to_string(),
            expires_at: Utc::now(),
        };
        assert!(auth.save_token(&token).is_ok());
    }
}
