//! HTTP transport for provider queries.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::query::{BASE_URL, Query};

/// Connection and credential settings for the provider.
#[derive(Clone)]
pub struct ClientConfig {
    /// Provider endpoint.
    pub base_url: String,
    /// Account user name.
    pub username: String,
    /// Account password.
    pub password: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl ClientConfig {
    /// Creates a configuration for the default endpoint with the given
    /// credentials.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            username: String::new(),
            password: String::new(),
            timeout: Duration::from_secs(30),
            user_agent: format!("morningstar-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Errors raised while talking to the provider over the network.
#[derive(Error, Debug)]
pub enum TransportError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error status.
    #[error("Server error: {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
}

/// Performs raw provider round trips.
///
/// Implementations return the response body untouched; mapping it to
/// normalized values is the caller's job.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one query and returns the raw response body.
    async fn fetch(&self, query: &Query) -> Result<String, TransportError>;
}

/// Provider transport over HTTPS.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: ClientConfig,
}

impl HttpTransport {
    /// Creates a new transport with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Returns the transport configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds the GET request for a query: credentials, the `json` flag,
    /// then the query's own parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL is invalid.
    pub fn build_request(&self, query: &Query) -> Result<reqwest::Request, TransportError> {
        Ok(self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("username", self.config.username.as_str()),
                ("password", self.config.password.as_str()),
                ("json", ""),
            ])
            .query(&query.to_params())
            .build()?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, query: &Query) -> Result<String, TransportError> {
        debug!(
            command = query.command(),
            subject = %query.subject(),
            "sending provider request"
        );

        let request = self.build_request(query)?;
        let response = self.client.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
