//! Commonly used imports and re-exports.
pub use crate::api::get_me::*;
pub use crate::api::messages::send_location::*;
pub use crate::api::messages::send_message::*;
pub use crate::api::messages::send_venue::*;
pub use crate::api::types::*;
pub use crate::bot::net::ConnectionPool;
pub use crate::bot::*;
pub use crate::bot_api_method;
pub use crate::error::*;
