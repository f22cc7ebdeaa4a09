//! Message sending methods `sendMessage`, `sendVenue`, `sendLocation`
pub mod send_location;
pub mod send_message;
pub mod send_venue;
