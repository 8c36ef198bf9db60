use std::collections::HashMap;

use crate::models::CredentialPayload;

/// Error type for sign-in operations
#[derive(Debug)]
pub enum AuthError {
    ConfigError(String),
    NetworkError(String),
    JsonError(String),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AuthError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            AuthError::JsonError(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

/// Credential exchange service for a caller-owned backend endpoint.
///
/// Performs the second half of the one-tap flow: the opaque credential
/// token handed out by the identity provider is POSTed to the backend,
/// which validates it and answers with its own JSON payload. The payload
/// is returned as-is; this service attaches no meaning to it.
pub struct OneTapService {
    auth_url: String,
    headers: HashMap<String, String>,
}

impl OneTapService {
    /// Create a new service. Missing headers default to the JSON content type.
    pub fn new(auth_url: String, headers: Option<HashMap<String, String>>) -> Self {
        let headers = headers.unwrap_or_else(default_headers);
        Self { auth_url, headers }
    }

    /// Check that both required configuration values are present
    pub fn validate_config(client_id: &str, auth_url: &str) -> Result<(), AuthError> {
        if client_id.is_empty() {
            return Err(AuthError::ConfigError("client_id is required".to_string()));
        }
        if auth_url.is_empty() {
            return Err(AuthError::ConfigError("auth_url is required".to_string()));
        }
        Ok(())
    }

    /// POST the credential to the backend and parse the response as JSON.
    ///
    /// The response body is parsed regardless of the status code; the
    /// backend's answer is passed through without interpretation.
    pub async fn exchange_credential(
        &self,
        credential: &str,
    ) -> Result<serde_json::Value, AuthError> {
        let body = serde_json::to_string(&CredentialPayload {
            credential: credential.to_string(),
        })
        .map_err(|e| AuthError::JsonError(format!("Failed to encode request: {}", e)))?;

        let client = build_client()
            .map_err(|e| AuthError::NetworkError(format!("Client build failed: {}", e)))?;

        let mut request = client.post(&self.auth_url).body(body);
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| AuthError::NetworkError(format!("Request failed: {}", e)))?;

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| AuthError::JsonError(format!("Failed to parse response: {}", e)))
    }
}

fn default_headers() -> HashMap<String, String> {
    HashMap::from([("Content-Type".to_string(), "application/json".to_string())])
}

/// Cross-origin cookies travel with the exchange request on the web target
fn build_client() -> Result<reqwest::Client, reqwest::Error> {
    let builder = reqwest::Client::builder();
    #[cfg(target_arch = "wasm32")]
    let builder = builder.fetch_credentials_include();
    builder.build()
}
