pub mod net;

use crate::api::get_me::RequestGetMe;
use crate::api::messages::send_location::RequestSendLocation;
use crate::api::messages::send_message::RequestSendMessage;
use crate::api::messages::send_venue::RequestSendVenue;
use crate::api::types::*;
use crate::error::{BotError, Result};
use net::ConnectionPool;
use net::*;
use once_cell::sync::OnceCell;
use reqwest::Url;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
/// Bot class with attributes
/// - `connection_pool`: [`ConnectionPool`] - Pool of HTTP connections for API requests
/// - `token`: [`String`] - Bot API token
/// - `base_api_url`: [`reqwest::Url`] - Base API URL
///
/// [`reqwest::Url`]: https://docs.rs/reqwest/latest/reqwest/struct.Url.html
pub struct Bot {
    pub(crate) connection_pool: OnceCell<ConnectionPool>,
    pub(crate) token: Arc<str>,
    pub(crate) base_api_url: Url,
}

impl Bot {
    /// Creates a new `Bot` from the environment
    ///
    /// Get token from variable `TELEGRAM_BOT_TOKEN`
    ///
    /// Get base url from variable `TELEGRAM_BOT_API_URL`, falling back to
    /// `https://api.telegram.org`
    ///
    /// Uses ConnectionPool with optimized settings for HTTP requests.
    ///
    /// ## Panics
    /// - Unable to find token in the environment
    /// - Unable to parse the base URL
    pub fn new() -> Self {
        let token = get_env_token().expect("Failed to get token from environment");
        debug!("Token successfully obtained from environment");

        let base_api_url = get_env_url().expect("Failed to get API URL from environment");
        debug!("API URL successfully obtained from environment");

        Self::with_params(token.as_str(), base_api_url.as_str()).expect("Failed to create bot")
    }

    /// Creates a new `Bot` with direct parameters instead of environment variables
    ///
    /// ## Parameters
    /// - `token`: [`String`] - Bot API token
    /// - `api_url`: [`String`] - Base API URL
    ///
    /// ## Errors
    /// - `BotError::Url` - URL parsing error
    /// - `BotError::Validation` - empty token
    ///
    /// ## Example
    /// ```no_run
    /// use telegram_bot_api::prelude::*;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<()> {
    ///     let bot = Bot::with_params("123456:your_bot_token", "https://api.telegram.org")?;
    ///
    ///     // Now use the bot...
    ///
    ///     Ok(())
    /// }
    /// ```
    pub fn with_params(token: &str, api_url: &str) -> Result<Self> {
        debug!("Creating new bot with provided token and API URL");

        if token.is_empty() {
            return Err(BotError::Validation("Bot token is empty".to_string()));
        }

        let base_api_url = Url::parse(api_url).map_err(BotError::Url)?;
        debug!("API URL successfully parsed");

        Ok(Self {
            connection_pool: OnceCell::new(),
            token: Arc::<str>::from(token),
            base_api_url,
        })
    }

    /// Build the method path `/bot<token>/<method>`
    /// - `method`: [`String`] - API method name
    pub fn set_path(&self, method: &str) -> String {
        let mut full_path = String::from("/bot");
        full_path.push_str(&self.token);
        full_path.push('/');
        full_path.push_str(method);
        full_path
    }

    /// Build full URL with query parameters
    /// - `path`: [`String`] - method path
    /// - `query`: [`String`] - serialized request parameters
    ///
    /// ## Errors
    /// - `BotError::Url` - URL parsing error
    ///
    /// Parse with [`Url::parse`]
    pub fn get_parsed_url(&self, path: String, query: String) -> Result<Url> {
        let mut url = self.base_api_url.clone();
        url.set_path(&path);
        url.set_query(Some(&query));
        Ok(url)
    }

    /// Send request, get response
    /// Serialize request generic type `Rq` with [`serde_url_params::to_string`] into query string
    /// Get response body using connection pool
    /// Deserialize response with [`serde_json::from_str`]
    /// - `message`: generic type `Rq` - request type
    ///
    /// ## Errors
    /// - `BotError::UrlParams` - URL parameters serialization error
    /// - `BotError::Url` - URL parsing error
    /// - `BotError::Network` - network error when sending request
    /// - `BotError::Serialization` - response deserialization error
    /// - `BotError::Api` - API error when processing request
    #[tracing::instrument(skip(self, message))]
    pub async fn send_api_request<Rq>(&self, message: Rq) -> Result<<Rq>::ResponseType>
    where
        Rq: BotRequest + Serialize + std::fmt::Debug,
    {
        debug!("Starting send_api_request");

        let query = serde_url_params::to_string(&message)?;
        let url = self.get_parsed_url(self.set_path(<Rq>::METHOD), query)?;

        debug!("Request method: {}", <Rq>::METHOD);

        let body = self
            .connection_pool
            .get_or_init(ConnectionPool::optimized)
            .get_text(url)
            .await?;

        let response: ApiResponseWrapper<<Rq>::ResponseType> = serde_json::from_str(&body)?;
        response.into()
    }
}

impl Default for Bot {
    fn default() -> Self {
        Self::new()
    }
}

impl Bot {
    /// Send a prebuilt [`Venue`] to a chat with `sendVenue`
    ///
    /// The venue returned inside the resulting [`Message`] compares equal
    /// to the one sent.
    pub async fn send_venue(&self, chat_id: ChatId, venue: &Venue) -> Result<Message> {
        self.send_api_request(RequestSendVenue::from_venue(chat_id, venue))
            .await
    }

    /// Send a text message to a chat with `sendMessage`
    pub async fn send_message(&self, chat_id: ChatId, text: impl Into<String>) -> Result<Message> {
        self.send_api_request(RequestSendMessage::new((chat_id, text.into())))
            .await
    }

    /// Send a [`Location`] to a chat with `sendLocation`
    pub async fn send_location(&self, chat_id: ChatId, location: Location) -> Result<Message> {
        self.send_api_request(RequestSendLocation::from_location(chat_id, location))
            .await
    }

    /// Get the bot's own [`User`] with `getMe`
    pub async fn get_me(&self) -> Result<User> {
        self.send_api_request(RequestGetMe::new(())).await
    }
}
