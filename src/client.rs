//! The request pipeline shared by every backend call.
//!
//! [`Client`] is the entry point for making requests. Use [`ClientBuilder`]
//! or [`Client::new`] to configure and create one.

use crate::{
    config::ApiConfig,
    options::{merge_headers, RequestOptions},
    Error, Response, Result,
};
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use url::Url;

/// An async client for the data/ML backend.
///
/// Cloning is cheap and clones share one connection pool, so construct a
/// client once at startup and pass it to whatever needs it.
///
/// # Examples
///
/// ```no_run
/// use mlbridge::{ApiConfig, Client, RequestOptions};
/// use http::Method;
///
/// # async fn example() -> Result<(), mlbridge::Error> {
/// let client = Client::new(&ApiConfig::from_env()?)?;
///
/// // Convenience method
/// let health = client.check_health().await?;
/// println!("Health: {}", health);
///
/// // Generic request
/// let options = RequestOptions::new()
///     .method(Method::POST)
///     .json(&serde_json::json!({ "text": "hello world" }))?;
/// let result = client.request("/process", options).await?;
/// println!("Result: {}", result["result"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    base_url: Url,
    default_headers: HeaderMap,
}

impl Client {
    /// Creates a client for the backend described by `config`, with the
    /// default JSON headers.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL is invalid.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Self::builder().base_url(&config.base_url)?.build()
    }

    /// Creates a new `ClientBuilder` for configuring a client.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use mlbridge::Client;
    ///
    /// # fn example() -> Result<(), mlbridge::Error> {
    /// let client = Client::builder()
    ///     .base_url("http://localhost:5000/api")?
    ///     .default_header("User-Agent", "my-app/1.0")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The base URL endpoints are appended to.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Sends a request and returns the parsed JSON body.
    ///
    /// The URL is the base URL followed by `endpoint`. Headers from `options`
    /// replace the client's defaults of the same name.
    ///
    /// # Errors
    ///
    /// * [`Error::Network`] if no response was received
    /// * [`Error::Http`] for a non-2xx status; its message is the backend's
    ///   `error` field, or `HTTP <status>: <reason>` when there is none
    /// * [`Error::DeserializationFailed`] if a 2xx body is not valid JSON
    ///
    /// Every error is logged with the endpoint before being returned.
    pub async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<serde_json::Value> {
        self.call::<serde_json::Value>(endpoint, options)
            .await
            .map(Response::into_data)
    }

    /// Sends a request and decodes the body into `Res`, keeping the response
    /// metadata.
    ///
    /// Behaves exactly like [`Client::request`] apart from the target type.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use mlbridge::{models::UserList, ApiConfig, Client, RequestOptions};
    ///
    /// # async fn example() -> Result<(), mlbridge::Error> {
    /// let client = Client::new(&ApiConfig::default())?;
    ///
    /// let response = client.call::<UserList>("/users", RequestOptions::new()).await?;
    /// for user in &response.users {
    ///     println!("{} <{}>", user.name, user.email);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn call<Res>(&self, endpoint: &str, options: RequestOptions) -> Result<Response<Res>>
    where
        Res: DeserializeOwned,
    {
        let method = options.method.clone();

        let result = self.execute_request(endpoint, options).await;

        if let Err(e) = &result {
            tracing::error!(
                endpoint = %endpoint,
                method = %method,
                error = %e,
                "API request failed"
            );
        }

        result
    }

    /// Executes a single request.
    async fn execute_request<Res>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Response<Res>>
    where
        Res: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint)?;
        let RequestOptions {
            method,
            headers,
            body,
        } = options;
        let headers = merge_headers(&self.inner.default_headers, &headers);

        tracing::debug!(
            method = %method,
            url = %url,
            "Executing HTTP request"
        );

        let mut request = self
            .inner
            .http_client
            .request(method, url)
            .headers(headers);

        if let Some(body) = body {
            request = request.body(body.into_bytes()?);
        }

        let start_time = Instant::now();
        let response = request.send().await?;

        self.parse_response(response, start_time).await
    }

    /// Turns a received response into data or an error.
    async fn parse_response<Res>(
        &self,
        response: reqwest::Response,
        start_time: Instant,
    ) -> Result<Response<Res>>
    where
        Res: DeserializeOwned,
    {
        let status = response.status();
        let headers = response.headers().clone();

        if !status.is_success() {
            let raw_response = response.text().await.unwrap_or_default();
            tracing::info!(
                status = status.as_u16(),
                latency_ms = start_time.elapsed().as_millis(),
                "Received HTTP error response"
            );
            return Err(Error::from_status(status, raw_response, headers));
        }

        let raw_body = response.text().await?;
        let latency = start_time.elapsed();

        tracing::info!(
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            "Received HTTP response"
        );

        match serde_json::from_str::<Res>(&raw_body) {
            Ok(data) => Ok(Response::new(data, raw_body, status, headers, latency)),
            Err(e) => Err(Error::DeserializationFailed {
                raw_response: raw_body,
                serde_error: e.to_string(),
                status,
            }),
        }
    }

    /// Appends `endpoint` to the base URL, keeping the base path.
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        if endpoint.is_empty() {
            return Err(Error::InvalidEndpoint(
                "endpoint must not be empty".to_string(),
            ));
        }

        let base = self.inner.base_url.as_str().trim_end_matches('/');
        let joined = if endpoint.starts_with('/') {
            format!("{}{}", base, endpoint)
        } else {
            format!("{}/{}", base, endpoint)
        };

        Ok(Url::parse(&joined)?)
    }
}

/// Builder for configuring and creating a [`Client`].
///
/// A fresh builder already carries `Content-Type: application/json` and
/// `Accept: application/json` as default headers.
///
/// # Examples
///
/// ```no_run
/// use mlbridge::ClientBuilder;
///
/// # fn example() -> Result<(), mlbridge::Error> {
/// let client = ClientBuilder::new()
///     .base_url("https://your-production-server.com/api")?
///     .default_header("User-Agent", "my-app/1.0")?
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    base_url: Option<Url>,
    default_headers: HeaderMap,
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with the default JSON headers.
    pub fn new() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Self {
            base_url: None,
            default_headers,
            http_client: None,
        }
    }

    /// Sets the base URL for all requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or cannot have a path appended.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        let url = Url::parse(url.as_ref())?;
        if url.cannot_be_a_base() {
            return Err(Error::ConfigurationError(format!(
                "Base URL cannot take a path: {}",
                url
            )));
        }
        self.base_url = Some(url);
        Ok(self)
    }

    /// Adds a default header that will be included in all requests, replacing
    /// an existing default of the same name.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Uses an existing `reqwest::Client` as the transport instead of
    /// building a new one.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if no base URL was provided or if the transport
    /// cannot be created.
    pub fn build(self) -> Result<Client> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::ConfigurationError("Base URL is required".to_string()))?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder().build().map_err(|e| {
                Error::ConfigurationError(format!("Failed to build HTTP client: {}", e))
            })?,
        };

        Ok(Client {
            inner: Arc::new(ClientInner {
                http_client,
                base_url,
                default_headers: self.default_headers,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_at(base: &str) -> Client {
        Client::builder().base_url(base).unwrap().build().unwrap()
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = client_at("http://localhost:5000/api");
        assert_eq!(
            client.endpoint_url("/health").unwrap().as_str(),
            "http://localhost:5000/api/health"
        );
    }

    #[test]
    fn test_endpoint_with_trailing_slash_base() {
        let client = client_at("http://localhost:5000/api/");
        assert_eq!(
            client.endpoint_url("/users").unwrap().as_str(),
            "http://localhost:5000/api/users"
        );

        let client = client_at("http://localhost:5000");
        assert_eq!(
            client.endpoint_url("/users").unwrap().as_str(),
            "http://localhost:5000/users"
        );
    }

    #[test]
    fn test_endpoint_without_leading_slash() {
        let client = client_at("http://localhost:5000/api");
        assert_eq!(
            client.endpoint_url("predict").unwrap().as_str(),
            "http://localhost:5000/api/predict"
        );
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let client = client_at("http://localhost:5000/api");
        assert!(matches!(
            client.endpoint_url(""),
            Err(Error::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_builder_requires_base_url() {
        assert!(matches!(
            Client::builder().build(),
            Err(Error::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_builder_rejects_bad_urls() {
        assert!(matches!(
            Client::builder().base_url("not a url"),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(
            Client::builder().base_url("mailto:dev@example.com"),
            Err(Error::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_builder_default_headers() {
        let builder = ClientBuilder::new()
            .default_header("accept", "application/vnd.api+json")
            .unwrap();
        assert_eq!(
            builder.default_headers.get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            builder.default_headers.get(ACCEPT).unwrap(),
            "application/vnd.api+json"
        );
    }

    #[test]
    fn test_new_from_config() {
        let client = Client::new(&ApiConfig::default()).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:5000/api");
    }
}
