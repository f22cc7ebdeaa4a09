//! API types
use crate::error::{ApiError, BotError, Result};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::fmt::*;
use std::hash::{Hash, Hasher};
use tracing::debug;

/// Environment variable name for bot API URL
pub const TELEGRAM_BOT_API_URL: &str = "TELEGRAM_BOT_API_URL";
/// Environment variable name for bot API token
pub const TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
/// Default bot API URL used when [`TELEGRAM_BOT_API_URL`] is not set
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Bot request trait
///
/// Implemented by every request struct generated with [`bot_api_method!`].
/// `METHOD` is the Bot API method name appended to the `/bot<token>/` path.
///
/// [`bot_api_method!`]: crate::bot_api_method
pub trait BotRequest {
    type Args;

    const METHOD: &'static str;
    type RequestType: Serialize + Debug + Default;
    type ResponseType: Serialize + DeserializeOwned + Debug + Default;
    fn new(args: Self::Args) -> Self;
}

/// Chat identifier: a numeric id or a `@channelusername`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChatId(pub String);

impl From<&str> for ChatId {
    fn from(id: &str) -> Self {
        ChatId(id.to_string())
    }
}

impl From<String> for ChatId {
    fn from(id: String) -> Self {
        ChatId(id)
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        ChatId(id.to_string())
    }
}

/// Display trait for [`ChatId`]
impl Display for ChatId {
    /// Format [`ChatId`] to string
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique message identifier inside a chat
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MessageId(pub i64);

/// Display trait for [`MessageId`]
impl Display for MessageId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message text format parse mode
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default)]
pub enum ParseMode {
    Markdown,
    #[default]
    HTML,
}

/// A point on the map
///
/// Equality and hash cover the exact bit patterns of both coordinates, so
/// equal locations always hash equally and `Location` can serve as an
/// identifying field of other entities.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default)]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
}

impl Location {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.longitude.to_bits() == other.longitude.to_bits()
            && self.latitude.to_bits() == other.latitude.to_bits()
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.longitude.to_bits().hash(state);
        self.latitude.to_bits().hash(state);
    }
}

/// A venue: a named place attached to a message
///
/// `foursquare_id` is omitted from the serialized mapping when absent, so a
/// deserialized venue serializes back to the exact source mapping.
///
/// Equality and hash cover `location` and `title` only; `address` and
/// `foursquare_id` do not identify a venue.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Venue {
    pub location: Location,
    pub title: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foursquare_id: Option<String>,
}

impl Venue {
    pub fn new(location: Location, title: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            location,
            title: title.into(),
            address: address.into(),
            foursquare_id: None,
        }
    }

    /// Sets the field `foursquare_id`
    pub fn with_foursquare_id(mut self, id: impl Into<String>) -> Self {
        self.foursquare_id = Some(id.into());
        self
    }
}

impl PartialEq for Venue {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location && self.title == other.title
    }
}

impl Eq for Venue {}

impl Hash for Venue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.location.hash(state);
        self.title.hash(state);
    }
}

/// Chat type discriminator
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
    #[default]
    Private,
    Group,
    Supergroup,
    Channel,
}

/// A Telegram user or bot
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// A chat: private conversation, group, supergroup or channel
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ChatType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// A message sent to a chat
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Message {
    pub message_id: MessageId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    pub date: i64,
    pub chat: Chat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<Venue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message: Option<Box<Message>>,
}

impl Message {
    /// Chat the message belongs to, as a request parameter
    pub fn chat_id(&self) -> ChatId {
        ChatId::from(self.chat.id)
    }
}

/// Bot API response envelope
///
/// Every method returns `{"ok": true, "result": ...}` on success or
/// `{"ok": false, "description": ..., "error_code": ...}` on failure.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum ApiResponseWrapper<T> {
    Payload {
        ok: bool,
        result: T,
    },
    Error {
        ok: bool,
        description: String,
        error_code: Option<i64>,
    },
}

// Implementation of From for automatic conversion from ApiResponseWrapper to Result
impl<T> std::convert::From<ApiResponseWrapper<T>> for Result<T>
where
    T: Default + Serialize + DeserializeOwned,
{
    fn from(wrapper: ApiResponseWrapper<T>) -> Self {
        match wrapper {
            ApiResponseWrapper::Payload { ok, result } => {
                if ok {
                    debug!("Answer is ok, result received");
                    Ok(result)
                } else {
                    debug!("Answer is not ok, but description is not provided");
                    Err(BotError::Api(ApiError {
                        description: "Unspecified error".to_string(),
                        error_code: None,
                    }))
                }
            }
            ApiResponseWrapper::Error {
                ok,
                description,
                error_code,
            } => {
                if ok {
                    debug!("Answer is ok, BUT error description is provided");
                } else {
                    debug!("Answer is NOT ok and error description is provided");
                }
                Err(BotError::Api(ApiError {
                    description,
                    error_code,
                }))
            }
        }
    }
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    fn finite_f64() -> impl Strategy<Value = f64> {
        (-180.0f64..180.0f64).prop_filter("finite", |v| v.is_finite())
    }

    proptest! {
        #[test]
        fn prop_roundtrip_venue(
            longitude in finite_f64(),
            latitude in finite_f64(),
            title in "[a-zA-Z0-9 ]{0,32}",
            address in "[a-zA-Z0-9 ]{0,64}",
            foursquare_id in proptest::option::of("[a-zA-Z0-9]{0,24}")
        ) {
            let venue = Venue {
                location: Location::new(longitude, latitude),
                title: title.clone(),
                address: address.clone(),
                foursquare_id: foursquare_id.clone(),
            };
            let ser = serde_json::to_string(&venue).unwrap();
            let de: Venue = serde_json::from_str(&ser).unwrap();
            prop_assert_eq!(de.location, venue.location);
            prop_assert_eq!(de.title, title);
            prop_assert_eq!(de.address, address);
            prop_assert_eq!(de.foursquare_id, foursquare_id);
        }

        #[test]
        fn prop_equal_venues_hash_equal(
            longitude in finite_f64(),
            latitude in finite_f64(),
            title in "[a-zA-Z0-9 ]{0,32}",
            address_a in "[a-zA-Z0-9 ]{0,64}",
            address_b in "[a-zA-Z0-9 ]{0,64}"
        ) {
            use std::collections::hash_map::DefaultHasher;
            use std::hash::Hasher;
            let a = Venue::new(Location::new(longitude, latitude), title.clone(), address_a);
            let b = Venue::new(Location::new(longitude, latitude), title, address_b);
            prop_assert_eq!(&a, &b);
            let mut ha = DefaultHasher::new();
            let mut hb = DefaultHasher::new();
            a.hash(&mut ha);
            b.hash(&mut hb);
            prop_assert_eq!(ha.finish(), hb.finish());
        }
    }
}
