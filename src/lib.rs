#![forbid(unsafe_code)]
//! # Telegram Bot API client
//! This crate provides a typed client for the [Telegram Bot API].
//! Asynchronous requests are based on [`reqwest`] and [`tokio`].
//! JSON serialization and deserialization use [`serde_json`].
//! Query string serialization uses [`serde_url_params`].
//!
//! Every API entity (`Location`, `Venue`, `Message`, ...) is a plain value
//! object: it deserializes from the raw API mapping, serializes back to the
//! exact same mapping (absent optional fields stay absent, they are never
//! emitted as `null`), and compares by value over its identifying fields
//! rather than by object identity.
//!
//! ```toml
//! [dependencies]
//! telegram-bot-api = "0.1"
//! ```
//!
//! [Telegram Bot API]: https://core.telegram.org/bots/api
//! [`reqwest`]: https://docs.rs/reqwest
//! [`tokio`]: https://docs.rs/tokio
//! [`serde_json`]: https://docs.rs/serde_json
//! [`serde_url_params`]: https://docs.rs/serde_url_params

#[macro_export]
macro_rules! bot_api_method {
    (
        $(#[$req_attr:meta])*
        method = $method:literal,
        request = $Req:ident {
            required {
                $( $req_f:ident : $ReqT:ty ),* $(,)?
            },
            optional {
                $( $(#[$opt_attr:meta])* $opt_f:ident : $OptT:ty ),* $(,)?
            }
        },
        response = $Res:ty,
    ) => {
        use serde::{Deserialize, Serialize};
        #[derive(Serialize, Deserialize, Clone, Debug, Default)]
        #[non_exhaustive]
        $(#[$req_attr])*
        pub struct $Req {
            $( pub $req_f : $ReqT, )*
            $( $(#[$opt_attr])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $opt_f : Option<$OptT>, )*
        }

        impl $crate::api::types::BotRequest for $Req {
            type Args = ($($ReqT),*);
            const METHOD: &'static str = $method;
            type RequestType = Self;
            type ResponseType = $Res;

            fn new(($($req_f),*): ($($ReqT),*)) -> Self {
                Self {
                    $( $req_f, )*
                    $( $opt_f: None, )*
                }
            }
        }

        impl $Req {
            paste::paste! {
                $(
                    #[doc = concat!("Sets the field `", stringify!($opt_f), "`")]
                    pub fn [<with_ $opt_f>](mut self, value: $OptT) -> Self {
                        self.$opt_f = Some(value);
                        self
                    }
                )*
            }
        }
    };
}

pub mod bot;
pub mod config;
pub mod error;
pub mod prelude;
/// API methods
mod api {
    /// API `getMe` method
    pub mod get_me;
    /// API `send*` message methods
    pub mod messages;
    pub mod types;
}

pub use self::bot::Bot;
