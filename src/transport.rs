//! The HTTP capability the SDK dispatches through.
//!
//! [`Transport`] is the only place where socket I/O happens. The SDK ships [`ReqwestTransport`]
//! behind the `http-client` feature; tests and embedding applications can supply their own.

use std::time::Duration;

use http::{HeaderMap, Method, StatusCode};
use url::Url;

/// A fully built request, ready to be sent.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    /// Serialized JSON body, `None` for requests carrying their params in the query string.
    pub body: Option<Vec<u8>>,
    pub timeout: Duration,
}

/// Raw status and body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// The exchange could not be completed: connection refused, timeout, TLS failure, unreadable
/// response...
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
    /// HTTP status, when the failure happened after one was received.
    pub status: Option<u16>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        TransportError {
            message: message.into(),
            status: None,
        }
    }
}

/// Performs one HTTP round trip.
///
/// Implementations must not retry: every call maps to exactly one exchange with the gateway.
pub trait Transport {
    fn send(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}

/// A [`Transport`] backed by a shared [`reqwest::Client`].
#[cfg(feature = "http-client")]
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    pub client: reqwest::Client,
}

#[cfg(feature = "http-client")]
impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        ReqwestTransport { client }
    }
}

#[cfg(feature = "http-client")]
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError {
            message: err.to_string(),
            status: err.status().map(|status| status.as_u16()),
        }
    }
}

#[cfg(feature = "http-client")]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .timeout(request.timeout);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        Ok(TransportResponse { status, body })
    }
}
