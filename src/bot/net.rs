//! Network module
use crate::api::types::*;
use crate::config::CONFIG;
use crate::error::{BotError, Result};
use reqwest::{Client, ClientBuilder, StatusCode, Url};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, trace, warn};

/// Connection pool for managing HTTP connections
#[derive(Debug, Clone)]
pub struct ConnectionPool {
    client: Client,
    retries: usize,
    max_backoff: Duration,
}

impl Default for ConnectionPool {
    fn default() -> Self {
        let cfg = &CONFIG.network;
        Self::new(
            Client::new(),
            cfg.retries,
            Duration::from_millis(cfg.max_backoff_ms),
        )
    }
}

impl ConnectionPool {
    /// Create a new connection pool with custom settings
    pub fn new(client: Client, retries: usize, max_backoff: Duration) -> Self {
        Self {
            client,
            retries,
            max_backoff,
        }
    }

    /// Create a connection pool with optimized settings for the Bot API
    pub fn optimized() -> Self {
        let cfg = &CONFIG.network;
        let client = build_optimized_client().unwrap_or_else(|e| {
            warn!(
                "Failed to build optimized client. Use default instead: {}",
                e
            );
            Client::new()
        });
        let retries = cfg.retries;
        let max_backoff = Duration::from_millis(cfg.max_backoff_ms);

        Self {
            client,
            retries,
            max_backoff,
        }
    }

    /// Execute a request with exponential backoff retry strategy
    pub async fn execute_with_retry<F, Fut, T>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut + Send + Sync,
        Fut: std::future::Future<Output = Result<T>> + Send,
        T: Send,
    {
        let mut retries = 0;
        let mut backoff_ms = 100;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    if let BotError::Network(ref req_err) = e {
                        if !should_retry(req_err) || retries >= self.retries {
                            return Err(e);
                        }

                        retries += 1;
                        let jitter = rand::random::<u64>() % 100;
                        let delay = Duration::from_millis(backoff_ms + jitter);

                        warn!(
                            "Request failed, retrying ({}/{}): {} after {:?}",
                            retries, self.retries, req_err, delay
                        );

                        sleep(delay).await;
                        backoff_ms =
                            std::cmp::min(backoff_ms * 2, self.max_backoff.as_millis() as u64);
                    } else {
                        return Err(e);
                    }
                }
            }
        }
    }

    /// Get text response from API with retry capability
    #[tracing::instrument(skip(self))]
    pub async fn get_text(&self, url: Url) -> Result<String> {
        debug!("Getting response from API at path {}...", url.path());

        self.execute_with_retry(|| {
            let client = self.client.clone();
            let url = url.clone();

            async move {
                let response = client.get(url.as_str()).send().await?;
                trace!("Response status: {}", response.status());

                validate_response(&response.status())?;

                let text = response.text().await?;
                trace!("Response body length: {} bytes", text.len());
                Ok(text)
            }
        })
        .await
    }
}

/// Validate HTTP response status
///
/// The Bot API answers client errors with a JSON body carrying the error
/// description, so 4xx is passed through for envelope parsing.
fn validate_response(status: &StatusCode) -> Result<()> {
    if status.is_success() || status.is_client_error() {
        Ok(())
    } else if status.is_server_error() {
        warn!("Server error: {}", status);
        Err(BotError::System(format!("Server error: HTTP {}", status)))
    } else {
        warn!("Unexpected status code: {}", status);
        Err(BotError::System(format!(
            "Unexpected HTTP status code: {}",
            status
        )))
    }
}

/// Determine if the request should be retried based on the error
fn should_retry(err: &reqwest::Error) -> bool {
    err.is_timeout()
        || err.is_connect()
        || err.is_request()
        || (err.status().is_some_and(|s| s.is_server_error()))
}

/// Build a client with optimized settings for the API
fn build_optimized_client() -> Result<Client> {
    let cfg = &CONFIG.network;
    let builder = ClientBuilder::new()
        .timeout(Duration::from_secs(cfg.request_timeout_secs))
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .pool_idle_timeout(Duration::from_secs(cfg.pool_idle_timeout_secs))
        .tcp_nodelay(true)
        .pool_max_idle_per_host(cfg.max_idle_connections)
        .use_rustls_tls();

    builder.build().map_err(BotError::Network)
}

/// Get bot token from the environment
///
/// ## Errors
/// - `BotError::Config` - variable not set
pub fn get_env_token() -> Result<String> {
    let token = std::env::var(TELEGRAM_BOT_TOKEN)?;
    if token.is_empty() {
        error!("Empty token in environment variable {}", TELEGRAM_BOT_TOKEN);
        return Err(BotError::Config(format!(
            "{TELEGRAM_BOT_TOKEN} is empty"
        )));
    }
    Ok(token)
}

/// Get API base URL from the environment, falling back to [`DEFAULT_API_URL`]
///
/// ## Errors
/// - `BotError::Url` - URL parsing error
pub fn get_env_url() -> Result<Url> {
    let raw = std::env::var(TELEGRAM_BOT_API_URL).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    Url::parse(&raw).map_err(BotError::Url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use std::time::Duration;

    #[tokio::test]
    async fn test_connection_pool_new_and_default() {
        let client = reqwest::Client::new();
        let pool = ConnectionPool::new(client.clone(), 2, Duration::from_millis(100));
        assert_eq!(pool.retries, 2);
        assert_eq!(pool.max_backoff, Duration::from_millis(100));

        let pool = ConnectionPool::default();
        assert_eq!(pool.retries, CONFIG.network.retries);
    }

    #[tokio::test]
    async fn test_execute_with_retry_passes_through_non_network_errors() {
        let pool = ConnectionPool::new(reqwest::Client::new(), 3, Duration::from_millis(10));
        let result: Result<()> = pool
            .execute_with_retry(|| async {
                Err(BotError::Validation("no retry for this".to_string()))
            })
            .await;
        match result {
            Err(BotError::Validation(msg)) => assert_eq!(msg, "no retry for this"),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_execute_with_retry_returns_ok() {
        let pool = ConnectionPool::new(reqwest::Client::new(), 3, Duration::from_millis(10));
        let result: Result<u32> = pool.execute_with_retry(|| async { Ok(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn test_validate_response() {
        assert!(validate_response(&StatusCode::OK).is_ok());
        // 4xx carries an API error envelope in the body
        assert!(validate_response(&StatusCode::BAD_REQUEST).is_ok());
        assert!(validate_response(&StatusCode::INTERNAL_SERVER_ERROR).is_err());
    }

    #[test]
    fn test_get_env_url_default() {
        // Variable unset in test environment: default URL applies
        if std::env::var(TELEGRAM_BOT_API_URL).is_err() {
            let url = get_env_url().unwrap();
            assert_eq!(url.as_str(), "https://api.telegram.org/");
        }
    }
}
