//! DataForSEO API client.
//!
//! Thin wrapper around `reqwest` implementing the upstream conventions: a
//! Basic authorization header computed once at construction, versioned
//! endpoint paths under a configurable base URL, and request bodies that are
//! a one-element array containing the parameter object.
//!
//! Each call is attempted exactly once; there is no retry or backoff, and a
//! slow upstream call blocks only the task that issued it.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::config::CredentialsConfig;
use super::error::Error;

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.dataforseo.com";

/// HTTP methods used by the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Errors from a single upstream HTTP call.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response body could not be read.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream returned a non-success HTTP status.
    #[error("HTTP error! status: {0}")]
    Status(u16),
}

/// Client for the DataForSEO REST API.
pub struct DataForSeoClient {
    http: reqwest::Client,
    base_url: String,
    auth_header: String,
}

impl DataForSeoClient {
    /// Build a client from credentials configuration.
    ///
    /// Fails when the username or password is missing; the authorization
    /// header is computed here and reused for every request.
    pub fn new(credentials: &CredentialsConfig) -> Result<Self, Error> {
        let (Some(username), Some(password)) = (&credentials.username, &credentials.password)
        else {
            return Err(Error::config(
                "DataForSEO username and password are required",
            ));
        };

        let token = BASE64.encode(format!("{username}:{password}"));
        let http = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| Error::internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: credentials
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            auth_header: format!("Basic {token}"),
        })
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request to a versioned endpoint path and decode the JSON
    /// envelope. The body, when given, is sent as-is.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?method, "upstream request");

        let mut request = match method {
            HttpMethod::Get => self.http.get(&url),
            HttpMethod::Post => self.http.post(&url),
        };
        request = request.header(AUTHORIZATION, &self.auth_header);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        Ok(response.json().await?)
    }

    /// POST a single parameter object, wrapped in the upstream's one-element
    /// array convention.
    pub async fn post(&self, path: &str, params: Value) -> Result<Value, ClientError> {
        self.request(HttpMethod::Post, path, Some(&Value::Array(vec![params])))
            .await
    }

    /// GET an endpoint with no body.
    pub async fn get(&self, path: &str) -> Result<Value, ClientError> {
        self.request(HttpMethod::Get, path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn credentials(base_url: &str) -> CredentialsConfig {
        CredentialsConfig {
            username: Some("login".to_string()),
            password: Some("secret".to_string()),
            base_url: Some(base_url.to_string()),
        }
    }

    #[test]
    fn test_missing_credentials_rejected() {
        let config = CredentialsConfig {
            username: Some("login".to_string()),
            password: None,
            base_url: None,
        };
        assert!(DataForSeoClient::new(&config).is_err());
    }

    #[test]
    fn test_default_base_url() {
        let config = CredentialsConfig {
            username: Some("login".to_string()),
            password: Some("secret".to_string()),
            base_url: None,
        };
        let client = DataForSeoClient::new(&config).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn test_post_sends_basic_auth_and_array_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v3/serp/google/locations")
            // "login:secret" base64-encoded
            .match_header("authorization", "Basic bG9naW46c2VjcmV0")
            .match_body(mockito::Matcher::Json(json!([{ "location_name": "london" }])))
            .with_body(r#"{"status_code":20000,"tasks":[]}"#)
            .create_async()
            .await;

        let client = DataForSeoClient::new(&credentials(&server.url())).unwrap();
        let response = client
            .post("/v3/serp/google/locations", json!({ "location_name": "london" }))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response["status_code"], 20000);
    }

    #[tokio::test]
    async fn test_http_error_status_surfaces() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v3/keywords_data/google_trends/locations")
            .with_status(500)
            .create_async()
            .await;

        let client = DataForSeoClient::new(&credentials(&server.url())).unwrap();
        let err = client
            .get("/v3/keywords_data/google_trends/locations")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Status(500)));
    }
}
