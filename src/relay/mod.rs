//! Real-time chat relay.
//!
//! Clients submit `send_message` events over a WebSocket; each message is
//! translated and the result is broadcast to every connected client.

mod events;
mod hub;
mod socket;

pub use events::{
    ClientFrame, ErrorPayload, RelayError, SendMessage, ServerEvent, TranslatedMessage,
    SEND_MESSAGE,
};
pub use hub::ChatHub;
pub use socket::{handle_send_message, process_frame, ws_handler};
