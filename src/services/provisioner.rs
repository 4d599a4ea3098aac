use crate::config::ServerConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Mutex;
use thiserror::Error;
use uuid::Uuid;

/// Default REST endpoint of the Google Identity Toolkit sign-up operation.
const IDENTITY_TOOLKIT_SIGNUP_URL: &str =
    "https://identitytoolkit.googleapis.com/v1/accounts:signUp";

#[derive(Error, Debug)]
pub enum ProvisionError {
    /// The provider refused the account. The message is the provider's own
    /// wording and is surfaced to the caller verbatim.
    #[error("{0}")]
    Rejected(String),

    /// The provider could not be reached or answered unintelligibly.
    #[error("identity provider request failed: {0}")]
    Transport(String),
}

/// Boundary to the external identity provider. One operation: create an
/// account and return the provider-issued identifier. No session or token
/// issuance happens here; authenticating later requests is the client's
/// credential's job.
#[async_trait::async_trait]
pub trait AccountProvisioner: Send + Sync {
    async fn create_account(&self, email: &str, password: &str) -> Result<String, ProvisionError>;
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(rename = "returnSecureToken")]
    return_secure_token: bool,
}

#[derive(Deserialize)]
struct SignUpReply {
    #[serde(rename = "localId")]
    local_id: String,
}

#[derive(Deserialize)]
struct ProviderErrorReply {
    error: ProviderErrorBody,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// Provisioner backed by the Google Identity Toolkit REST API.
///
/// Single-shot request/response: no retry, no timeout beyond the client
/// defaults, no dedup of concurrent calls for the same email. The second
/// of two racing sign-ups gets the provider's duplicate rejection.
pub struct IdentityToolkitProvisioner {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl IdentityToolkitProvisioner {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, IDENTITY_TOOLKIT_SIGNUP_URL.to_string())
    }

    /// Endpoint override for emulators and tests.
    pub fn with_endpoint(api_key: String, endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key,
        }
    }
}

#[async_trait::async_trait]
impl AccountProvisioner for IdentityToolkitProvisioner {
    async fn create_account(&self, email: &str, password: &str) -> Result<String, ProvisionError> {
        let body = SignUpBody {
            email,
            password,
            return_secure_token: false,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| ProvisionError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let reply: SignUpReply = response
                .json()
                .await
                .map_err(|e| ProvisionError::Transport(e.to_string()))?;
            return Ok(reply.local_id);
        }

        // 4xx carries a structured error whose message we pass through
        // untouched, e.g. "EMAIL_EXISTS".
        match response.json::<ProviderErrorReply>().await {
            Ok(reply) => Err(ProvisionError::Rejected(reply.error.message)),
            Err(_) => Err(ProvisionError::Transport(format!(
                "provider returned {} with an unreadable body",
                status
            ))),
        }
    }
}

/// In-memory provisioner for development and tests. Mimics the provider's
/// rejection wording so callers exercise the same surfaced messages.
#[derive(Default)]
pub struct StubProvisioner {
    known_emails: Mutex<HashSet<String>>,
}

impl StubProvisioner {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl AccountProvisioner for StubProvisioner {
    async fn create_account(&self, email: &str, password: &str) -> Result<String, ProvisionError> {
        if !email.contains('@') {
            return Err(ProvisionError::Rejected("INVALID_EMAIL".to_string()));
        }
        if password.len() < 6 {
            return Err(ProvisionError::Rejected(
                "WEAK_PASSWORD : Password should be at least 6 characters".to_string(),
            ));
        }

        let mut known = self
            .known_emails
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if !known.insert(email.to_lowercase()) {
            return Err(ProvisionError::Rejected("EMAIL_EXISTS".to_string()));
        }

        Ok(Uuid::new_v4().simple().to_string())
    }
}

/// Factory function to create the appropriate provisioner based on config
pub fn create_provisioner(config: &ServerConfig) -> Box<dyn AccountProvisioner> {
    match config.provisioner_type.to_lowercase().as_str() {
        "identitytoolkit" => {
            let Some(api_key) = config.identity_api_key.clone() else {
                tracing::warn!(
                    "IDENTITY_API_KEY not set, falling back to the stub provisioner"
                );
                return Box::new(StubProvisioner::new());
            };
            match config.identity_endpoint.clone() {
                Some(endpoint) => {
                    Box::new(IdentityToolkitProvisioner::with_endpoint(api_key, endpoint))
                }
                None => Box::new(IdentityToolkitProvisioner::new(api_key)),
            }
        }
        "stub" | "none" | "disabled" => Box::new(StubProvisioner::new()),
        other => {
            tracing::warn!("Unknown provisioner type '{}', using StubProvisioner", other);
            Box::new(StubProvisioner::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_issues_unique_ids() {
        let provisioner = StubProvisioner::new();
        let first = provisioner
            .create_account("a@example.com", "password123")
            .await
            .unwrap();
        let second = provisioner
            .create_account("b@example.com", "password123")
            .await
            .unwrap();
        assert!(!first.is_empty());
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_stub_rejects_duplicate_email() {
        let provisioner = StubProvisioner::new();
        provisioner
            .create_account("dup@example.com", "password123")
            .await
            .unwrap();

        let err = provisioner
            .create_account("dup@example.com", "password123")
            .await
            .unwrap_err();
        assert!(matches!(err, ProvisionError::Rejected(ref m) if m == "EMAIL_EXISTS"));
    }

    #[tokio::test]
    async fn test_stub_rejects_weak_password() {
        let provisioner = StubProvisioner::new();
        let err = provisioner
            .create_account("weak@example.com", "short")
            .await
            .unwrap_err();
        assert!(matches!(err, ProvisionError::Rejected(ref m) if m.starts_with("WEAK_PASSWORD")));
    }

    #[tokio::test]
    async fn test_create_provisioner_falls_back_to_stub() {
        let mut config = ServerConfig::development();
        config.provisioner_type = "something-else".to_string();

        let provisioner = create_provisioner(&config);
        let id = provisioner
            .create_account("fallback@example.com", "password123")
            .await
            .unwrap();
        assert!(!id.is_empty());
    }

    #[tokio::test]
    async fn test_create_provisioner_without_api_key_uses_stub() {
        let mut config = ServerConfig::development();
        config.provisioner_type = "identitytoolkit".to_string();
        config.identity_api_key = None;

        let provisioner = create_provisioner(&config);
        let id = provisioner
            .create_account("nokey@example.com", "password123")
            .await
            .unwrap();
        assert!(!id.is_empty());
    }
}
