//! Configurable introspection client.

use std::time::Duration;

use crate::error::{IntrospectionError, Result};
use crate::response::ResponseEnvelope;
use crate::types::SchemaDescription;
use crate::INTROSPECTION_QUERY;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// A client for executing the introspection query against an endpoint.
///
/// Supports custom HTTP headers (e.g. for authentication pass-through),
/// request and connection timeouts, and opt-in retries. By default no retry
/// is performed: a failed fetch is fatal for the run.
///
/// # Examples
///
/// ```no_run
/// use opgen_introspect::IntrospectionClient;
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let schema = IntrospectionClient::new()
///     .with_header("Authorization", "Bearer my-token")
///     .with_timeout(Duration::from_secs(60))
///     .execute("https://api.example.com/graphql")
///     .await?;
/// println!("{} types", schema.types.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IntrospectionClient {
    headers: Vec<(String, String)>,
    request_timeout: Duration,
    connect_timeout: Duration,
    retry_attempts: u32,
}

impl Default for IntrospectionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl IntrospectionClient {
    /// Creates a client with default settings: 30s request timeout, 10s
    /// connect timeout, no custom headers, no retries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            headers: Vec::new(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            retry_attempts: 0,
        }
    }

    /// Adds an HTTP header to send with the request. A later header with the
    /// same name (case-insensitive) replaces an earlier one.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    /// Adds multiple headers from an iterator of name/value pairs.
    #[must_use]
    pub fn with_headers<I, K, V>(self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        headers
            .into_iter()
            .fold(self, |client, (name, value)| client.with_header(name, value))
    }

    /// Sets the total request timeout. Default is 30 seconds.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the connection timeout. Default is 10 seconds.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Enables up to `attempts` additional attempts with exponential
    /// backoff. Default is 0: transport failures abort immediately.
    #[must_use]
    pub fn with_retries(mut self, attempts: u32) -> Self {
        self.retry_attempts = attempts;
        self
    }

    /// Executes the introspection query and returns the schema description.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails after all attempts, the server
    /// responds with a non-success status, the body cannot be decoded, or
    /// the response carries a GraphQL `errors` array.
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, url: &str) -> Result<SchemaDescription> {
        let mut attempt = 0;
        loop {
            match self.execute_once(url).await {
                Ok(schema) => return Ok(schema),
                Err(e) if attempt < self.retry_attempts && Self::should_retry(&e) => {
                    let backoff = backoff_delay(attempt);
                    tracing::warn!(
                        attempt,
                        backoff_secs = backoff.as_secs(),
                        error = %e,
                        "Introspection request failed, retrying"
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn execute_once(&self, url: &str) -> Result<SchemaDescription> {
        let body = serde_json::json!({ "query": INTROSPECTION_QUERY });

        tracing::debug!("Sending introspection query");
        let response = self
            .headers
            .iter()
            .fold(
                self.http_client()?
                    .post(url)
                    .header("Content-Type", "application/json"),
                |request, (name, value)| request.header(name, value),
            )
            .json(&body)
            .send()
            .await
            .map_err(|e| IntrospectionError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            tracing::error!(status, "Introspection rejected");
            let body = response.text().await.unwrap_or_default();
            return Err(IntrospectionError::Http(status, body));
        }

        let envelope: ResponseEnvelope = response
            .json()
            .await
            .map_err(|e| IntrospectionError::Parse(e.to_string()))?;

        let schema = envelope.into_schema()?;
        tracing::info!(types = schema.types.len(), "Introspection successful");
        Ok(schema)
    }

    fn http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.request_timeout)
            .connect_timeout(self.connect_timeout)
            .build()
            .map_err(|e| IntrospectionError::Network(format!("failed to build HTTP client: {e}")))
    }

    /// Network failures and 5xx responses are worth retrying; client errors,
    /// parse failures, and introspection errors are not.
    fn should_retry(error: &IntrospectionError) -> bool {
        match error {
            IntrospectionError::Network(_) => true,
            IntrospectionError::Http(status, _) => *status >= 500,
            IntrospectionError::Parse(_)
            | IntrospectionError::Introspection(_)
            | IntrospectionError::Invalid(_)
            | IntrospectionError::Io(_) => false,
        }
    }
}

/// Exponential backoff, capped at 64 seconds so large retry counts neither
/// overflow the shift nor stall a run for hours.
fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(1u64 << attempt.min(6))
}
