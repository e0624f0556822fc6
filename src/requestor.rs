//! HTTP execution core shared by every resource.

use std::{sync::Arc, time::Duration};

use http::{
    HeaderMap, HeaderName, HeaderValue, Method, StatusCode,
    header::{ACCEPT, CONTENT_TYPE},
};
use url::Url;

use crate::{
    auth::AuthToken,
    config::{API_VERSION, AUTH_HEADER},
    errors::{Error, Result},
    transport::{Transport, TransportRequest, TransportResponse},
    types::AnyJson,
};

/// Where and how a resolved resource talks to the gateway.
///
/// Built once per resolution and never shared between resources.
#[derive(Debug, Clone)]
pub struct ResourceBinding {
    pub base_url: Url,
    pub auth_token: AuthToken,
    pub timeout: Duration,
}

/// Result of [`Requestor::execute`].
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The request was built but not sent.
    Prepared(TransportRequest),
    /// The gateway answered, with any status.
    Completed(TransportResponse),
}

/// Builds authenticated requests for one [`ResourceBinding`] and sends them through a
/// [`Transport`].
#[derive(Debug)]
pub struct Requestor<T> {
    binding: ResourceBinding,
    transport: Arc<T>,
}

impl<T: Transport> Requestor<T> {
    pub fn new(binding: ResourceBinding, transport: Arc<T>) -> Self {
        Requestor { binding, transport }
    }

    pub fn binding(&self) -> &ResourceBinding {
        &self.binding
    }

    /// Absolute URL of an endpoint path, e.g. `transaction/debit/`.
    pub fn endpoint_url(&self, path: &str) -> Result<Url> {
        let url = self.binding.base_url.join(&format!("{API_VERSION}/{path}"))?;
        Ok(url)
    }

    /// Build the request for `path` without sending it.
    ///
    /// `GET` requests carry the entries of `body` in the query string, every other method sends
    /// `body` as JSON.
    pub fn prepare(
        &self,
        method: Method,
        path: &str,
        body: Option<&AnyJson>,
    ) -> Result<TransportRequest> {
        let mut url = self.endpoint_url(path)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let token = HeaderValue::from_str(&self.binding.auth_token.0).map_err(|err| {
            Error::GatewayTransport {
                message: format!("Auth token is not a valid header value: {err}"),
                status: None,
            }
        })?;
        headers.insert(HeaderName::from_static(AUTH_HEADER), token);

        let body = match (method == Method::GET, body) {
            (_, None) => None,
            (true, Some(params)) => {
                if let Some(params) = params.as_object().filter(|params| !params.is_empty()) {
                    let mut query = url.query_pairs_mut();
                    for (key, value) in params {
                        match value {
                            AnyJson::String(s) => query.append_pair(key, s),
                            other => query.append_pair(key, &other.to_string()),
                        };
                    }
                }
                None
            }
            (false, Some(body)) => Some(serde_json::to_vec(body).map_err(|err| {
                Error::GatewayTransport {
                    message: format!("Failed to encode request body: {err}"),
                    status: None,
                }
            })?),
        };

        Ok(TransportRequest {
            method,
            url,
            headers,
            body,
            timeout: self.binding.timeout,
        })
    }

    /// Build the request and, unless `validate_only` is set, send it.
    ///
    /// The response status is not interpreted here. Callers decide how a non-success status
    /// is reported, see [`TransportResponse::into_result`].
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&AnyJson>,
        validate_only: bool,
    ) -> Result<Outcome> {
        let request = self.prepare(method, path, body)?;
        if validate_only {
            return Ok(Outcome::Prepared(request));
        }

        self.dispatch(request).await.map(Outcome::Completed)
    }

    /// Build and send the request.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&AnyJson>,
    ) -> Result<TransportResponse> {
        let request = self.prepare(method, path, body)?;
        self.dispatch(request).await
    }

    /// Send the request and decode a successful response, reporting any other status as
    /// [`Error::PaymentOperation`] with `failure` as its message.
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        body: &AnyJson,
        failure: &'static str,
    ) -> Result<AnyJson> {
        self.send(method, path, Some(body))
            .await?
            .into_result(failure)
    }

    async fn dispatch(&self, request: TransportRequest) -> Result<TransportResponse> {
        #[cfg(feature = "tracing")]
        tracing::debug!("Dispatching gateway request: {} {}", request.method, request.url);

        let response = self.transport.send(request).await.inspect_err(|_err| {
            #[cfg(feature = "tracing")]
            tracing::warn!("Gateway request failed at the transport: {_err}");
        })?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Gateway responded: status={}", response.status);

        Ok(response)
    }
}

impl TransportResponse {
    /// Decode the body as JSON.
    ///
    /// A body that is not valid JSON is reported as [`Error::GatewayTransport`].
    pub fn decode(&self) -> Result<AnyJson> {
        let decoded = serde_json::from_slice(&self.body)?;
        Ok(decoded)
    }

    /// Classify the response: `200 OK` is decoded, any other status becomes
    /// [`Error::PaymentOperation`] carrying `failure`.
    ///
    /// The gateway's own error body is not forwarded.
    pub fn into_result(self, failure: &'static str) -> Result<AnyJson> {
        if self.status == StatusCode::OK {
            return self.decode().map_err(|err| match err {
                Error::GatewayTransport { message, .. } => Error::GatewayTransport {
                    message,
                    status: Some(self.status.as_u16()),
                },
                other => other,
            });
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(
            "Gateway operation rejected: status={} message='{}'",
            self.status,
            failure
        );

        Err(Error::PaymentOperation(failure))
    }
}
