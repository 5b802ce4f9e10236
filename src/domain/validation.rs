use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidMessageId { input: String },
    InvalidCallbackUrl { input: String },
    ValidityOutOfRange { min: u32, actual: u32 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidMessageId { input } => {
                write!(f, "message id must be a single path segment: {input}")
            }
            Self::InvalidCallbackUrl { input } => write!(f, "invalid callback url: {input}"),
            Self::ValidityOutOfRange { min, actual } => {
                write!(f, "validity minutes out of range: {actual} (expected >= {min})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
