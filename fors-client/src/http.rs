//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// HTTP client for making network requests to the commerce backend
///
/// Authentication is a server session cookie; `reqwest`'s cookie store keeps
/// it across requests, so every call after login carries credentials.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .cookie_store(true)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body plus extra headers
    pub async fn post_with_headers<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        headers: &[(&str, &str)],
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request expecting no response body (2xx with empty or
    /// non-JSON content)
    pub async fn post_unit<B: serde::Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::check_status(response).await.map(|_| ())
    }

    /// Make a bodyless POST request expecting no response body
    pub async fn post_empty_unit(&self, path: &str) -> ClientResult<()> {
        let response = self.client.post(self.url(path)).send().await?;
        Self::check_status(response).await.map(|_| ())
    }

    /// Make a bodyless POST request expecting a JSON response
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Map a non-2xx response to an error, surfacing the body text as detail
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        tracing::debug!(%status, detail = %text, "request failed");
        Err(match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(text),
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT => ClientError::Validation(text),
            _ => ClientError::Internal(text),
        })
    }

    /// Handle the HTTP response, decoding a JSON body
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        response.json().await.map_err(Into::into)
    }
}
