//! Per-request options.

use crate::{Error, Result};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;

/// A request body.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Text the caller has already serialized; sent byte for byte.
    Raw(String),
    /// A structured value the client serializes to JSON before sending.
    Json(serde_json::Value),
}

impl Body {
    pub(crate) fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            Body::Raw(text) => Ok(text.into_bytes()),
            Body::Json(value) => {
                serde_json::to_vec(&value).map_err(|e| Error::SerializationFailed(e.to_string()))
            }
        }
    }
}

/// Options for a single call to [`Client::request`](crate::Client::request).
///
/// Everything is optional. The default is a `GET` with no extra headers and
/// no body. Headers set here replace the client's defaults of the same name;
/// defaults not named here are still sent.
///
/// # Examples
///
/// ```
/// use mlbridge::RequestOptions;
/// use http::Method;
///
/// # fn example() -> Result<(), mlbridge::Error> {
/// let options = RequestOptions::new()
///     .method(Method::POST)
///     .header("X-Request-Id", "abc-123")?
///     .json(&serde_json::json!({ "numbers": [1, 2, 3] }))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// The HTTP method. Defaults to `GET`.
    pub method: Method,

    /// Headers merged over the client's defaults.
    pub headers: HeaderMap,

    /// The request body, if any.
    pub body: Option<Body>,
}

impl RequestOptions {
    /// Creates options for a plain `GET`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for a `POST` carrying `body` as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if `body` cannot be serialized.
    pub fn post_json<T: Serialize + ?Sized>(body: &T) -> Result<Self> {
        Self::new().method(Method::POST).json(body)
    }

    /// Sets the HTTP method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Sets a header, replacing any earlier value for the same name.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header value: {}", e)))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Sets a structured JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if `body` cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let value =
            serde_json::to_value(body).map_err(|e| Error::SerializationFailed(e.to_string()))?;
        self.body = Some(Body::Json(value));
        Ok(self)
    }

    /// Sets a body the caller has already serialized.
    pub fn raw_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(Body::Raw(body.into()));
        self
    }
}

/// Lays `overrides` on top of `defaults`.
///
/// Every name present in `overrides` loses all of its default values, so a
/// caller header always wins; names only in `defaults` pass through.
pub(crate) fn merge_headers(defaults: &HeaderMap, overrides: &HeaderMap) -> HeaderMap {
    let mut merged = defaults.clone();
    for name in overrides.keys() {
        merged.remove(name);
    }
    for (name, value) in overrides {
        merged.append(name, value.clone());
    }
    merged
}
