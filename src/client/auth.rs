use std::fmt;

use crate::domain::{Password, Username, ValidationError};

/// Something that can authenticate a Reach request by adding headers to it.
///
/// The client calls [`AuthProvider::apply`] once per request, after the JSON and
/// `User-Agent` headers are in place. Implement this to swap the header-credential scheme
/// for another one without changing call sites.
pub trait AuthProvider: Send + Sync + fmt::Debug {
    fn apply(&self, headers: &mut Vec<(String, String)>);
}

#[derive(Debug, Clone)]
#[non_exhaustive]
/// Built-in authentication schemes for the Reach API.
pub enum Auth {
    /// Account username and password, sent in cleartext as the `username` and `password`
    /// headers on every call.
    Credentials { username: Username, password: Password },
}

impl Auth {
    /// Create [`Auth::Credentials`] and validate that both parts are non-empty.
    pub fn credentials(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::Credentials {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }
}

impl AuthProvider for Auth {
    fn apply(&self, headers: &mut Vec<(String, String)>) {
        match self {
            Self::Credentials { username, password } => {
                headers.push((Username::FIELD.to_owned(), username.as_str().to_owned()));
                headers.push((Password::FIELD.to_owned(), password.as_str().to_owned()));
            }
        }
    }
}
