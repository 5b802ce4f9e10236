//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{MessageOptions, OutgoingMessage};
pub use response::{Balance, MessageDetails, SendResult};
pub use validation::ValidationError;
pub use value::{
    CallbackUrl, Coding, MessageId, MessageText, Originator, Password, Recipient, Username,
    ValidityMinutes,
};
