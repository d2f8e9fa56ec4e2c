//! Request/response glue between a list view and its server.

use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::filters::FilterError;
use crate::pagination::PagePayload;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Ways a round trip can fail. None of them are fatal to the view.
pub enum RoundTripError {
    #[error(transparent)]
    Filters(#[from] FilterError),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("request task stopped: {0}")]
    Aborted(String),
}

impl From<reqwest::Error> for RoundTripError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            RoundTripError::Status(status.as_u16())
        } else if err.is_decode() {
            RoundTripError::Decode(err.to_string())
        } else if err.is_timeout() {
            RoundTripError::Transport(format!("timed out: {err}"))
        } else {
            RoundTripError::Transport(err.to_string())
        }
    }
}

/// Performs one request for an already encoded filter query.
#[async_trait]
pub trait RoundTrip<F, T>: Send + Sync {
    /// `query` holds only the non-empty filter keys, without a leading `?`.
    async fn fetch(&self, query: String) -> Result<PagePayload<F, T>, RoundTripError>;
}

/// [`RoundTrip`] against one of the JSON list endpoints.
pub struct HttpRoundTrip<F, T> {
    client: reqwest::Client,
    endpoint: String,
    _payload: PhantomData<fn() -> (F, T)>,
}

impl<F, T> HttpRoundTrip<F, T> {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            _payload: PhantomData,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url_for(&self, query: &str) -> String {
        if query.is_empty() {
            self.endpoint.clone()
        } else {
            format!("{}?{query}", self.endpoint)
        }
    }
}

#[async_trait]
impl<F, T> RoundTrip<F, T> for HttpRoundTrip<F, T>
where
    F: DeserializeOwned + Send + 'static,
    T: DeserializeOwned + Send + 'static,
{
    async fn fetch(&self, query: String) -> Result<PagePayload<F, T>, RoundTripError> {
        let url = self.url_for(&query);
        log::debug!("Fetching {url}");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RoundTripError::Status(status.as_u16()));
        }

        response
            .json::<PagePayload<F, T>>()
            .await
            .map_err(|err| RoundTripError::Decode(err.to_string()))
    }
}
