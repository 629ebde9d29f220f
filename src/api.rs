//! Typed client for the shortener REST API.
//!
//! Wraps an injected [`HttpClient`] and turns raw responses into
//! [`ShortLinkResult`] / [`LinkStats`] or a [`RequestError`]. Nothing past
//! this module handles untyped JSON.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ApiOperation, RequestError};
use crate::models::{ApiErrorBody, LinkStats, ShortLinkResult, ShortenRequest};
use crate::traits::{json_headers, HttpClient, Response};

/// Endpoint wrapper over the injected transport.
#[derive(Clone)]
pub struct ShortenerApi {
    http: Arc<dyn HttpClient>,
    config: ClientConfig,
}

impl ShortenerApi {
    pub fn new(http: Arc<dyn HttpClient>, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `POST /shorten` with `{"url": url}`.
    pub async fn create_short_link(&self, url: &str) -> Result<ShortLinkResult, RequestError> {
        let operation = ApiOperation::Shorten;
        let endpoint = self.config.shorten_endpoint();
        let body = serde_json::to_string(&ShortenRequest::new(url)).map_err(|e| {
            RequestError::InvalidResponse {
                operation,
                message: format!("could not encode request: {}", e),
            }
        })?;

        tracing::debug!("POST {}", endpoint);
        let response = self
            .http
            .post(&endpoint, &body, &json_headers())
            .await
            .map_err(|source| RequestError::Transport { operation, source })?;

        decode(operation, response)
    }

    /// `GET /stats/{short_code}`.
    pub async fn link_stats(&self, short_code: &str) -> Result<LinkStats, RequestError> {
        let operation = ApiOperation::Stats;
        let endpoint = self.config.stats_endpoint(short_code);

        tracing::debug!("GET {}", endpoint);
        let response = self
            .http
            .get(&endpoint, &json_headers())
            .await
            .map_err(|source| RequestError::Transport { operation, source })?;

        decode(operation, response)
    }
}

/// Decode a success body as `T`, or turn a failure status into `Rejected`
/// carrying the service's `detail`.
fn decode<T: DeserializeOwned>(
    operation: ApiOperation,
    response: Response,
) -> Result<T, RequestError> {
    if !response.is_success() {
        let detail = response
            .json::<ApiErrorBody>()
            .ok()
            .and_then(|body| body.message());
        tracing::warn!(
            operation = operation.as_str(),
            status = response.status,
            "Request rejected: {}",
            detail.as_deref().unwrap_or("<no detail>")
        );
        return Err(RequestError::Rejected {
            operation,
            status: response.status,
            detail,
        });
    }

    response.json::<T>().map_err(|e| {
        tracing::warn!(operation = operation.as_str(), "Malformed success body: {}", e);
        RequestError::InvalidResponse {
            operation,
            message: e.to_string(),
        }
    })
}
