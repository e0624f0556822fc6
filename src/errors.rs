use crate::{transport::TransportError, types::FieldType};

/// Error types for gateway operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Credentials were never configured, or the application code / API key is empty.
    #[error("Missing gateway API key or application code, configure credentials first.")]
    Configuration,

    /// A resource name with no registry entry was requested.
    #[error("Undefined resource {0} to access.")]
    UnknownResource(String),

    /// A field group failed its schema check before any request was sent.
    #[error("Invalid request param `{group}.{field}`, expected {expected}.")]
    RequestValidation {
        group: &'static str,
        field: &'static str,
        expected: FieldType,
    },

    /// The exchange could not be completed, or a successful response could not be decoded.
    #[error("Gateway transport error: {message}")]
    GatewayTransport {
        message: String,
        status: Option<u16>,
    },

    /// A base URL or endpoint path could not be joined into a request URL.
    #[error("URL parse error: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The system clock reads earlier than the unix epoch, so no auth token can be generated.
    #[error("System clock error: {0}")]
    SystemClock(#[from] std::time::SystemTimeError),

    /// The gateway answered with a non-success status.
    #[error("{0}")]
    PaymentOperation(&'static str),
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        Error::GatewayTransport {
            message: err.message,
            status: err.status,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::GatewayTransport {
            message: format!("Malformed response body: {err}"),
            status: None,
        }
    }
}

/// A specialized `Result` type for gateway operations.
pub type Result<T> = std::result::Result<T, Error>;
