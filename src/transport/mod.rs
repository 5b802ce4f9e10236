//! Transport layer: request shapes and wire-format details (serialization/deserialization).

mod balance;
mod message;
mod request;
mod scalar;
mod send;

pub use balance::{BALANCE_PATH, decode_balance_json_response};
pub use message::{decode_message_details_json_response, message_path};
pub use request::{HttpMethod, HttpRequest, HttpResponse, new_request};
pub use send::{SEND_PATH, decode_send_message_json_response, encode_send_message_body};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}
