#![allow(unused_parens)]
//! Send a point on the map method `sendLocation`
//! [More info](https://core.telegram.org/bots/api#sendlocation)
use crate::prelude::*;
bot_api_method! {
    method = "sendLocation",
    request = RequestSendLocation {
        required {
            chat_id: ChatId,
            latitude: f64,
            longitude: f64,
        },
        optional {
            disable_notification: bool,
            reply_to_message_id: MessageId,
        }
    },
    response = Message,
}

impl RequestSendLocation {
    /// Build the request from a prebuilt [`Location`]
    pub fn from_location(chat_id: ChatId, location: Location) -> Self {
        Self::new((chat_id, location.latitude, location.longitude))
    }
}
