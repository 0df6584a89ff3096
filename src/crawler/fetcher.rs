//! HTTP fetcher implementation
//!
//! This module handles the network side of the pipeline:
//! - Building the HTTP client with a user agent and timeouts
//! - A single GET per URL, with no retries
//! - Classifying transport errors
//! - Handing the body back as a stream for the extractor

use crate::config::FetchConfig;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use reqwest::Client;
use std::fmt;
use std::pin::Pin;
use thiserror::Error;
use tokio::io::AsyncRead;
use tokio_util::io::StreamReader;

/// Response body as a byte stream
pub type BodyStream = Pin<Box<dyn AsyncRead + Send>>;

/// A response whose status line has arrived; the body is still unread
pub struct FetchResponse {
    /// HTTP status code
    pub status: u16,

    /// Response body, released when dropped
    pub body: BodyStream,
}

impl FetchResponse {
    /// Builds a response around an in-memory body
    pub fn from_bytes(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: Box::pin(std::io::Cursor::new(body.into())),
        }
    }

    /// Whether the status is exactly `200 OK`
    pub fn status_ok(&self) -> bool {
        self.status == 200
    }
}

impl fmt::Debug for FetchResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Broad class of a transport failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// Connect or read timed out
    Timeout,
    /// DNS failure, refused connection, TLS handshake failure
    Connect,
    /// Anything else reqwest reports
    Other,
}

/// Network failure reaching a URL
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        let kind = if e.is_timeout() {
            TransportErrorKind::Timeout
        } else if e.is_connect() {
            TransportErrorKind::Connect
        } else {
            TransportErrorKind::Other
        };
        Self::new(kind, e.to_string())
    }
}

/// Retrieves a URL's status and body
///
/// Implementations must not retry; each call is one attempt.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, TransportError>;
}

/// Builds an HTTP client from the fetch configuration
///
/// # Example
///
/// ```
/// use title_scout::config::FetchConfig;
/// use title_scout::crawler::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.request_timeout)
        .connect_timeout(config.connect_timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// [`Fetcher`] backed by a shared reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(build_http_client(config)?))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, TransportError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();

        let stream = response
            .bytes_stream()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e));

        Ok(FetchResponse {
            status,
            body: Box::pin(StreamReader::new(stream)),
        })
    }
}
