use crate::domain::value::{
    CallbackUrl, Coding, MessageText, Originator, Recipient, ValidityMinutes,
};

/// Optional settings for an [`OutgoingMessage`].
///
/// Defaults: `valid` is 72 minutes, `coding` is `"1"` (standard GSM), everything else unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageOptions {
    pub valid: ValidityMinutes,
    /// Free-form client reference echoed back in delivery details.
    pub reference: Option<String>,
    pub callback_url: Option<CallbackUrl>,
    /// Scheduled send time, passed through in the format Reach expects.
    pub scheduled: Option<String>,
    pub coding: Coding,
    /// User data header for binary or concatenated messages.
    pub udh: Option<String>,
}

/// A message ready to be posted to `POST /sms/message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    to: Recipient,
    from: Originator,
    message: MessageText,
    options: MessageOptions,
}

impl OutgoingMessage {
    /// Build a message with [`MessageOptions::default`].
    pub fn new(to: Recipient, from: Originator, message: MessageText) -> Self {
        Self::with_options(to, from, message, MessageOptions::default())
    }

    pub fn with_options(
        to: Recipient,
        from: Originator,
        message: MessageText,
        options: MessageOptions,
    ) -> Self {
        Self {
            to,
            from,
            message,
            options,
        }
    }

    pub fn to(&self) -> &Recipient {
        &self.to
    }

    pub fn from(&self) -> &Originator {
        &self.from
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn options(&self) -> &MessageOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut MessageOptions {
        &mut self.options
    }
}
