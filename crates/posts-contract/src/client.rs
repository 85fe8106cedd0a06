// crates/posts-contract/src/client.rs
// ============================================================================
// Module: Posts HTTP Client
// Description: Issues GET requests against the posts collection endpoint.
// Purpose: Capture status, content type, and body, then release the response.
// Dependencies: reqwest, url, tracing
// ============================================================================

//! ## Overview
//! [`PostsClient::fetch`] reads the entire response into an owned
//! [`HttpResponse`]. The `reqwest` response is consumed while reading the
//! body, so its connection is returned to the pool before any assertion runs,
//! whether the fetch succeeds or fails partway.
//! Requests are never retried.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use url::Url;

use crate::config::ContractConfig;
use crate::error::ContractError;
use crate::request::PostsRequest;

/// Owned snapshot of one HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpResponse {
    /// Numeric status code.
    pub status: u16,
    /// Last `content-type` header value, if present.
    pub content_type: Option<String>,
    /// Decoded body text.
    pub body: String,
}

/// HTTP client bound to one posts collection URL.
#[derive(Debug, Clone)]
pub struct PostsClient {
    /// Collection URL that requests resolve against.
    base_url: Url,
    /// Underlying HTTP client.
    client: Client,
}

impl PostsClient {
    /// Creates a client for the collection URL with an optional timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Transport`] when the HTTP client cannot be built.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, ContractError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ContractError::Transport(format!("failed to build http client: {err}")))?;
        Ok(Self {
            base_url,
            client,
        })
    }

    /// Creates a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Transport`] when the HTTP client cannot be built.
    pub fn from_config(config: &ContractConfig) -> Result<Self, ContractError> {
        Self::new(config.base_url.clone(), config.timeout)
    }

    /// Returns the collection URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends a GET request and reads the full response.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidUrl`] when the request URL cannot be
    /// built, or [`ContractError::Transport`] when sending the request or
    /// reading the body fails.
    pub async fn fetch(&self, request: &PostsRequest) -> Result<HttpResponse, ContractError> {
        let url = request.url(&self.base_url)?;
        tracing::debug!(%url, "sending request");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| ContractError::Transport(format!("GET {url}: {err}")))?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get_all(CONTENT_TYPE)
            .iter()
            .last()
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());
        let body = response
            .text()
            .await
            .map_err(|err| ContractError::Transport(format!("GET {url}: reading body: {err}")))?;
        tracing::debug!(%url, status, content_type = content_type.as_deref(), bytes = body.len(), "received response");
        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}
