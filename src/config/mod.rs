use std::env;

/// Runtime configuration for the signup service
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the HTTP server binds to (default: 5000)
    pub port: u16,

    /// Provisioner backend: "identitytoolkit" or "stub" (default: "identitytoolkit")
    pub provisioner_type: String,

    /// API key for the Identity Toolkit REST endpoint
    pub identity_api_key: Option<String>,

    /// Endpoint override, e.g. for the local auth emulator
    pub identity_endpoint: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            provisioner_type: "identitytoolkit".to_string(),
            identity_api_key: None,
            identity_endpoint: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.port),

            provisioner_type: env::var("PROVISIONER_TYPE").unwrap_or(default.provisioner_type),

            identity_api_key: env::var("IDENTITY_API_KEY").ok(),

            identity_endpoint: env::var("IDENTITY_ENDPOINT").ok(),
        }
    }

    /// Create config for development (stub provisioner, no external calls)
    pub fn development() -> Self {
        Self {
            port: 5000,
            provisioner_type: "stub".to_string(),
            identity_api_key: None,
            identity_endpoint: None,
        }
    }
}
