//! Access token acquisition.
//!
//! The Authorization Extension API is authenticated with a bearer token
//! obtained through the OAuth client-credentials grant against the tenant's
//! `/oauth/token` endpoint. The token is fetched once at process start and
//! reused for the whole run; there is no refresh logic.

use serde::Deserialize;
use std::time::Duration;

use crate::error::ApiError;

/// Default audience of the Authorization Extension API.
pub const DEFAULT_AUDIENCE: &str = "urn:auth0-authz-api";

/// Credentials for the client-credentials grant.
#[derive(Debug, Clone)]
pub struct TokenCredentials {
    /// Tenant domain, e.g. `example.auth0.com`. A bare domain is turned
    /// into `https://{domain}/oauth/token`; a full URL is used as-is.
    pub domain: String,

    pub client_id: String,

    pub client_secret: String,

    /// API audience the token is requested for.
    pub audience: String,
}

impl TokenCredentials {
    pub fn new(
        domain: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            audience: DEFAULT_AUDIENCE.to_string(),
        }
    }

    #[must_use]
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }

    /// The token endpoint URL for these credentials.
    pub fn token_url(&self) -> String {
        if self.domain.starts_with("http://") || self.domain.starts_with("https://") {
            self.domain.clone()
        } else {
            format!("https://{}/oauth/token", self.domain)
        }
    }
}

/// Fetches bearer tokens for the Authorization Extension API.
pub struct TokenProvider {
    http: reqwest::Client,
    credentials: TokenCredentials,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl TokenProvider {
    pub fn new(credentials: TokenCredentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials,
        }
    }

    /// Creates a provider with a request timeout on the token call.
    pub fn with_timeout(credentials: TokenCredentials, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::transport(credentials.token_url(), e))?;

        Ok(Self { http, credentials })
    }

    /// Performs the client-credentials grant and returns the access token.
    pub async fn fetch_token(&self) -> Result<String, ApiError> {
        let url = self.credentials.token_url();

        let params = [
            ("audience", self.credentials.audience.as_str()),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("grant_type", "client_credentials"),
        ];

        tracing::info!(audience = %self.credentials.audience, "requesting access token");

        let response = self
            .http
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(|e| ApiError::transport(&url, e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Auth { url, status, body });
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| ApiError::transport(&url, e))?;

        Ok(token.access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_url_from_bare_domain() {
        let creds = TokenCredentials::new("example.auth0.com", "id", "secret");
        assert_eq!(creds.token_url(), "https://example.auth0.com/oauth/token");
    }

    #[test]
    fn test_token_url_passthrough() {
        let creds = TokenCredentials::new("http://127.0.0.1:8080/oauth/token", "id", "secret");
        assert_eq!(creds.token_url(), "http://127.0.0.1:8080/oauth/token");
    }

    #[test]
    fn test_default_audience() {
        let creds = TokenCredentials::new("example.auth0.com", "id", "secret");
        assert_eq!(creds.audience, DEFAULT_AUDIENCE);

        let creds = creds.with_audience("urn:other-api");
        assert_eq!(creds.audience, "urn:other-api");
    }
}
