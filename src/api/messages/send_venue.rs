#![allow(unused_parens)]
//! Send information about a venue method `sendVenue`
//! [More info](https://core.telegram.org/bots/api#sendvenue)
use crate::prelude::*;
bot_api_method! {
    method = "sendVenue",
    request = RequestSendVenue {
        required {
            chat_id: ChatId,
            latitude: f64,
            longitude: f64,
            title: String,
            address: String,
        },
        optional {
            foursquare_id: String,
            disable_notification: bool,
            reply_to_message_id: MessageId,
        }
    },
    response = Message,
}

impl RequestSendVenue {
    /// Build the request from a prebuilt [`Venue`]
    ///
    /// Flattens the venue fields into request parameters; `foursquare_id`
    /// is carried over only when present on the venue.
    pub fn from_venue(chat_id: ChatId, venue: &Venue) -> Self {
        let req = Self::new((
            chat_id,
            venue.location.latitude,
            venue.location.longitude,
            venue.title.clone(),
            venue.address.clone(),
        ));
        match &venue.foursquare_id {
            Some(id) => req.with_foursquare_id(id.clone()),
            None => req,
        }
    }
}

impl Message {
    /// Build a `sendVenue` request replying to this message in its chat
    pub fn reply_venue(
        &self,
        latitude: f64,
        longitude: f64,
        title: impl Into<String>,
        address: impl Into<String>,
    ) -> RequestSendVenue {
        RequestSendVenue::new((
            self.chat_id(),
            latitude,
            longitude,
            title.into(),
            address.into(),
        ))
        .with_reply_to_message_id(self.message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn venue_fixture() -> Venue {
        Venue::new(
            Location::new(-46.788279, -23.691288),
            "title",
            "_address",
        )
        .with_foursquare_id("foursquare id")
    }

    #[test]
    fn test_from_venue_flattens_fields() {
        let req = RequestSendVenue::from_venue(ChatId::from("c1"), &venue_fixture());
        assert_eq!(req.chat_id.0, "c1");
        assert_eq!(req.latitude, -23.691288);
        assert_eq!(req.longitude, -46.788279);
        assert_eq!(req.title, "title");
        assert_eq!(req.address, "_address");
        assert_eq!(req.foursquare_id.as_deref(), Some("foursquare id"));
    }

    #[test]
    fn test_from_venue_without_foursquare_id() {
        let venue = Venue::new(Location::new(1.0, 2.0), "t", "a");
        let req = RequestSendVenue::from_venue(ChatId::from(7), &venue);
        assert!(req.foursquare_id.is_none());
    }

    #[test]
    fn test_reply_venue_targets_message_chat() {
        let message: Message = serde_json::from_value(json!({
            "message_id": 42,
            "date": 1500000000,
            "chat": {"id": 7, "type": "private"}
        }))
        .unwrap();
        let req = message.reply_venue(-23.691288, -46.788279, "title", "_address");
        assert_eq!(req.chat_id.0, "7");
        assert_eq!(req.reply_to_message_id, Some(MessageId(42)));
        assert_eq!(req.latitude, -23.691288);
        assert_eq!(req.longitude, -46.788279);
    }

    #[test]
    fn test_query_string_omits_unset_optionals() {
        let req = RequestSendVenue::new((
            ChatId::from("c1"),
            0.0,
            0.0,
            "t".to_string(),
            "a".to_string(),
        ));
        let query = serde_url_params::to_string(&req).unwrap();
        assert!(query.contains("chat_id=c1"));
        assert!(query.contains("title=t"));
        assert!(query.contains("address=a"));
        assert!(!query.contains("foursquare_id"));
        assert!(!query.contains("reply_to_message_id"));
    }

    #[test]
    fn test_query_string_includes_set_optionals() {
        let req = RequestSendVenue::from_venue(ChatId::from("c1"), &venue_fixture())
            .with_disable_notification(true)
            .with_reply_to_message_id(MessageId(5));
        let query = serde_url_params::to_string(&req).unwrap();
        assert!(query.contains("disable_notification=true"));
        assert!(query.contains("reply_to_message_id=5"));
        assert!(query.contains("foursquare_id=foursquare"));
    }

    #[test]
    fn test_sent_venue_round_trips_through_response() {
        let sent = venue_fixture();
        // Response envelope as the API returns it for sendVenue
        let val = json!({
            "ok": true,
            "result": {
                "message_id": 1,
                "date": 1500000000,
                "chat": {"id": 7, "type": "private"},
                "venue": {
                    "location": {"longitude": -46.788279, "latitude": -23.691288},
                    "title": "title",
                    "address": "_address",
                    "foursquare_id": "foursquare id"
                }
            }
        });
        let wrapper: ApiResponseWrapper<Message> = serde_json::from_value(val).unwrap();
        let message: Result<Message> = wrapper.into();
        let received = message.unwrap().venue.unwrap();
        assert_eq!(received, sent);
    }

    #[test]
    fn test_request_missing_required_field() {
        let val = json!({"chat_id": "c1", "title": "t"});
        assert!(serde_json::from_value::<RequestSendVenue>(val).is_err());
    }

    #[test]
    fn test_serialize_deserialize_request() {
        let req = RequestSendVenue::from_venue(ChatId::from("c1"), &venue_fixture());
        let val = serde_json::to_value(&req).unwrap();
        assert_eq!(val["chat_id"], "c1");
        let req2: RequestSendVenue = serde_json::from_value(val).unwrap();
        assert_eq!(req2.title, "title");
        assert_eq!(req2.foursquare_id.as_deref(), Some("foursquare id"));
    }
}
