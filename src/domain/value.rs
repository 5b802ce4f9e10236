use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Reach account username, sent as the `username` header.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    /// Header name used by Reach (`username`).
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Reach account password, sent as the `password` header.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
/// The `Debug` output never contains the value.
pub struct Password(String);

impl Password {
    /// Header name used by Reach (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Message id returned by `POST /sms/message`, used to query `GET /sms/message/{id}`.
///
/// Invariant: non-empty after trimming, free of path/query delimiters and `%`, and not a
/// dot segment, so `/sms/message/{id}` resolves to exactly that path.
pub struct MessageId(String);

impl MessageId {
    pub const FIELD: &'static str = "id";

    /// Create a validated [`MessageId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if trimmed.contains(['/', '\\', '?', '#', '%']) || matches!(trimmed, "." | "..") {
            return Err(ValidationError::InvalidMessageId {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated message id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient number as sent to Reach (`to`).
///
/// The value is passed through unchanged; Reach decides what it accepts.
pub struct Recipient(String);

impl Recipient {
    /// JSON field name used by Reach (`to`).
    pub const FIELD: &'static str = "to";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Value as sent to Reach.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Originator (`from`): the sender name or number shown to the recipient.
pub struct Originator(String);

impl Originator {
    /// JSON field name used by Reach (`from`).
    pub const FIELD: &'static str = "from";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS body text (`message`), kept exactly as provided.
pub struct MessageText(String);

impl MessageText {
    /// JSON field name used by Reach (`message`).
    pub const FIELD: &'static str = "message";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Validity period in minutes (`valid`): how long the carrier keeps attempting delivery.
///
/// Invariant: at least one minute. Defaults to 72.
pub struct ValidityMinutes(u32);

impl ValidityMinutes {
    /// JSON field name used by Reach (`valid`).
    pub const FIELD: &'static str = "valid";

    pub const MIN: u32 = 1;
    pub const DEFAULT: u32 = 72;

    /// Create a validated validity period.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value < Self::MIN {
            return Err(ValidationError::ValidityOutOfRange {
                min: Self::MIN,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying number of minutes.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for ValidityMinutes {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message encoding scheme (`coding`).
///
/// The value is passed through to Reach as-is; [`Coding::GSM`] (`"1"`) is the default.
pub struct Coding(String);

impl Coding {
    /// JSON field name used by Reach (`coding`).
    pub const FIELD: &'static str = "coding";

    /// Standard GSM 7-bit alphabet.
    pub const GSM: &'static str = "1";

    /// Create a validated [`Coding`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Coding {
    fn default() -> Self {
        Self(Self::GSM.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Delivery-report callback URL (`callbackUrl`).
///
/// Invariant: parses as an absolute URL.
pub struct CallbackUrl(url::Url);

impl CallbackUrl {
    /// JSON field name used by Reach (`callbackUrl`).
    pub const FIELD: &'static str = "callbackUrl";

    /// Create a validated [`CallbackUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let parsed = url::Url::parse(trimmed).map_err(|_| ValidationError::InvalidCallbackUrl {
            input: trimmed.to_owned(),
        })?;
        Ok(Self(parsed))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
