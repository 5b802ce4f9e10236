//! Typed Rust client for the Reach Interactive SMS REST API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for the wire
//! format (header layout, JSON field names such as `"Sent Date"`), and a small client layer
//! orchestrating requests.
//!
//! Reach signals application failures inside HTTP 200 responses, so every response type
//! carries a success flag. [`ReachSmsClient::get_balance`] turns `success: false` into
//! [`ReachSmsError::Api`]; message queries and sends return every entry and leave the
//! per-entry flag to the caller.
//!
//! ```rust,no_run
//! use reachsms::ReachSmsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), reachsms::ReachSmsError> {
//!     let client = ReachSmsClient::new("username", "password")?;
//!     let message = ReachSmsClient::construct_message("+64211234567", "TEST", "hello");
//!     for result in client.send_message(&message).await? {
//!         if !result.is_success() {
//!             eprintln!("send failed: {}", result.description);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Auth, AuthProvider, DEFAULT_ENDPOINT, DEFAULT_USER_AGENT, ReachSmsClient,
    ReachSmsClientBuilder, ReachSmsError,
};
pub use domain::{
    Balance, CallbackUrl, Coding, MessageDetails, MessageId, MessageOptions, MessageText,
    Originator, OutgoingMessage, Password, Recipient, SendResult, Username,
    ValidationError, ValidityMinutes,
};
