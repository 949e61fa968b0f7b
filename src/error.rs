//! Error types for backend calls.
//!
//! Every failure the client can produce is a variant of [`Error`]. Transport
//! failures are carried unchanged, HTTP failures are normalized into a single
//! variant with a human-readable message, and decode failures keep the raw
//! body around for debugging.

use http::{HeaderMap, StatusCode};
use serde_json::Value;

/// The main error type for backend calls.
///
/// # Examples
///
/// ```no_run
/// use mlbridge::{ApiConfig, Client, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::new(&ApiConfig::new("http://localhost:5000/api"))?;
///
/// match client.check_health().await {
///     Ok(health) => println!("Backend says: {}", health),
///     Err(Error::Http { status, message, .. }) => {
///         eprintln!("Backend rejected the call ({}): {}", status, message);
///     }
///     Err(Error::Network(e)) => eprintln!("Backend unreachable: {}", e),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The transport failed before a response arrived (connection refused,
    /// DNS failure, transport-level timeout, etc.).
    ///
    /// The underlying `reqwest::Error` is passed through untouched, including
    /// its `Display` output.
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status code.
    ///
    /// `message` is the backend's `error` field when the body carried one,
    /// otherwise `HTTP <status>: <reason>`. The error displays as `message`
    /// and nothing else.
    #[error("{message}")]
    Http {
        /// The HTTP status code
        status: StatusCode,
        /// The message surfaced to callers
        message: String,
        /// The raw response body
        raw_response: String,
        /// The response headers
        headers: HeaderMap,
    },

    /// A 2xx response body was not valid JSON for the expected type.
    #[error("Failed to deserialize response (status {status}): {serde_error}")]
    DeserializationFailed {
        /// The raw response body that failed to deserialize
        raw_response: String,
        /// The serde error message
        serde_error: String,
        /// The HTTP status code
        status: StatusCode,
    },

    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize request: {0}")]
    SerializationFailed(String),

    /// The client or a request was misconfigured (missing base URL, invalid
    /// header name or value, unknown environment name).
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The endpoint passed to the client was unusable.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The base URL, or the base URL joined with an endpoint, did not parse.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Builds the error for a non-2xx response from its status and raw body.
    ///
    /// The body is decoded on a best-effort basis: anything that is not a JSON
    /// object with a non-empty string `error` field falls back to the generic
    /// `HTTP <status>: <reason>` message.
    pub(crate) fn from_status(
        status: StatusCode,
        raw_response: String,
        headers: HeaderMap,
    ) -> Self {
        let message = ErrorBody::decode(&raw_response)
            .error
            .filter(|msg| !msg.is_empty())
            .unwrap_or_else(|| generic_message(status));

        Error::Http {
            status,
            message,
            raw_response,
            headers,
        }
    }

    /// Returns the HTTP status code if this error has one.
    ///
    /// Returns `Some(status)` for `Http` and `DeserializationFailed` errors,
    /// `None` for other error types.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Http { status, .. } => Some(*status),
            Error::DeserializationFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body if this error has one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::Http { raw_response, .. } => Some(raw_response),
            Error::DeserializationFailed { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }

    /// Returns `true` if no response was received at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Network(_))
    }
}

/// The error payload a non-2xx response may carry.
///
/// Decoding never fails: a body that is missing, not JSON, not an object, or
/// has a non-string `error` decodes to the empty default.
#[derive(Debug, Default)]
struct ErrorBody {
    error: Option<String>,
}

impl ErrorBody {
    fn decode(raw: &str) -> Self {
        let error = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(mut fields)) => match fields.remove("error") {
                Some(Value::String(message)) => Some(message),
                _ => None,
            },
            _ => None,
        };
        Self { error }
    }
}

fn generic_message(status: StatusCode) -> String {
    format!(
        "HTTP {}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("")
    )
}

/// A specialized `Result` type for backend calls.
///
/// This is a convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
