//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - Optional bearer-token authentication
//! - Uniform status mapping for the version-source adapters
//!
//! There is deliberately no retry or backoff: a failed call aborts the run,
//! and any transport error not given a name here passes through unmodified.

use crate::error::RemoteError;
use reqwest::{header, Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default timeout for HTTP requests (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("vercheck/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper for the remote adapters
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RemoteError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Perform a GET request and decode the JSON response
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        accept: Option<&str>,
        coordinate: &str,
        source: &'static str,
        token: Option<&str>,
    ) -> Result<T, RemoteError> {
        let mut request = self.client.get(url);
        if let Some(accept) = accept {
            request = request.header(header::ACCEPT, accept);
        }
        self.execute(request, coordinate, source, token).await
    }

    /// Perform a POST request with a JSON body and decode the JSON response
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        url: &str,
        body: &serde_json::Value,
        coordinate: &str,
        source: &'static str,
        token: Option<&str>,
    ) -> Result<T, RemoteError> {
        self.execute(self.client.post(url).json(body), coordinate, source, token)
            .await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        coordinate: &str,
        source: &'static str,
        token: Option<&str>,
    ) -> Result<T, RemoteError> {
        let request = match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;

        match response.status() {
            StatusCode::UNAUTHORIZED => {
                return Err(RemoteError::AuthenticationFailed {
                    source_name: source,
                    token_supplied: token.is_some(),
                });
            }
            StatusCode::NOT_FOUND => {
                return Err(RemoteError::package_not_found(coordinate, source));
            }
            _ => {}
        }

        let response = response.error_for_status()?;

        response
            .json::<T>()
            .await
            .map_err(|e| RemoteError::invalid_response(coordinate, source, e.to_string()))
    }
}
