#![allow(unused_parens)]
//! Send text messages method `sendMessage`
//! [More info](https://core.telegram.org/bots/api#sendmessage)
use crate::prelude::*;
bot_api_method! {
    method = "sendMessage",
    request = RequestSendMessage {
        required {
            chat_id: ChatId,
            text: String,
        },
        optional {
            parse_mode: ParseMode,
            disable_web_page_preview: bool,
            disable_notification: bool,
            reply_to_message_id: MessageId,
        }
    },
    response = Message,
}

impl Message {
    /// Build a `sendMessage` request replying to this message in its chat
    pub fn reply_text(&self, text: impl Into<String>) -> RequestSendMessage {
        RequestSendMessage::new((self.chat_id(), text.into()))
            .with_reply_to_message_id(self.message_id)
    }
}
