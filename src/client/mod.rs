//! Client layer: builds authenticated requests, drives the HTTP seam, and maps wire ↔ domain.

mod auth;
mod http;

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    Balance, MessageDetails, MessageId, MessageText, Originator, OutgoingMessage, Recipient,
    SendResult, ValidationError,
};
use crate::transport::{
    BALANCE_PATH, HttpMethod, HttpRequest, SEND_PATH, TransportError,
    decode_balance_json_response, decode_message_details_json_response,
    decode_send_message_json_response, encode_send_message_body, message_path, new_request,
};

pub use auth::{Auth, AuthProvider};
use http::{HttpTransport, ReqwestTransport};

/// Base endpoint of the Reach Interactive REST API.
pub const DEFAULT_ENDPOINT: &str = "http://api.reach-interactive.com";

/// `User-Agent` sent with every request unless overridden.
pub const DEFAULT_USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    " (",
    env!("CARGO_PKG_VERSION"),
    ") - ",
    env!("CARGO_PKG_REPOSITORY")
);

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`ReachSmsClient`].
///
/// Reach reports application failures inside a successful HTTP response, so HTTP status
/// codes are not mapped to errors on their own:
/// - a body that is not the expected JSON becomes [`ReachSmsError::Parse`] (the status is
///   kept for diagnostics),
/// - `success: false` on a balance query becomes [`ReachSmsError::Api`].
pub enum ReachSmsError {
    /// The configured endpoint is not a usable base URL.
    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),

    /// HTTP client / transport failure (DNS, connection, timeouts, invalid header values).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Response body could not be decoded into the expected shape.
    #[error("parse error (HTTP {status}): {source}")]
    Parse {
        status: u16,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// Reach answered with `success: false`; the message is its description verbatim.
    #[error("{description}")]
    Api { description: String },

    /// The outgoing message could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`ReachSmsClient`].
///
/// Use this when you need to point the client at another endpoint (a staging host or a
/// mock server), bound request latency with a timeout, or change the `User-Agent`.
pub struct ReachSmsClientBuilder {
    auth: Arc<dyn AuthProvider>,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl ReachSmsClientBuilder {
    /// Create a builder with the default endpoint, no timeout, and the default user-agent.
    pub fn new(auth: impl AuthProvider + 'static) -> Self {
        Self {
            auth: Arc::new(auth),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Override the base endpoint. Resource paths are resolved against it.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build a [`ReachSmsClient`].
    ///
    /// Fails with [`ReachSmsError::Url`] when the endpoint does not parse as a base URL.
    pub fn build(self) -> Result<ReachSmsClient, ReachSmsError> {
        let base_url = parse_base_url(&self.endpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ReachSmsError::Transport(Box::new(err)))?;

        Ok(ReachSmsClient {
            base_url,
            user_agent: self.user_agent,
            auth: self.auth,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn parse_base_url(endpoint: &str) -> Result<Url, url::ParseError> {
    let url = Url::parse(endpoint.trim())?;
    if url.cannot_be_a_base() {
        return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase);
    }
    Ok(url)
}

#[derive(Clone)]
/// High-level Reach SMS client.
///
/// Every call is a single request carrying `Accept: application/json`, the configured
/// `User-Agent`, and the headers of the auth provider. The client holds no per-call state
/// and can be cloned and shared across tasks.
pub struct ReachSmsClient {
    base_url: Url,
    user_agent: String,
    auth: Arc<dyn AuthProvider>,
    http: Arc<dyn HttpTransport>,
}

impl ReachSmsClient {
    /// Create a client for `http://api.reach-interactive.com` with header credentials.
    ///
    /// For more customization, use [`ReachSmsClient::builder`].
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ReachSmsError> {
        Self::builder(Auth::credentials(username, password)?).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: impl AuthProvider + 'static) -> ReachSmsClientBuilder {
        ReachSmsClientBuilder::new(auth)
    }

    /// The base URL every resource path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The `User-Agent` header value sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Fetch the account balance (`GET /sms/balance`).
    ///
    /// Errors:
    /// - [`ReachSmsError::Parse`] when the body is not a balance object,
    /// - [`ReachSmsError::Api`] when Reach reports `success: false`.
    pub async fn get_balance(&self) -> Result<Balance, ReachSmsError> {
        let request = self.build_request(HttpMethod::Get, BALANCE_PATH, None)?;
        let balance = self
            .execute_and_decode(request, decode_balance_json_response)
            .await?;

        if !balance.success {
            return Err(ReachSmsError::Api {
                description: balance.description,
            });
        }
        Ok(balance)
    }

    /// Fetch delivery details for a sent message (`GET /sms/message/{id}`).
    ///
    /// The entries are returned as-is; inspect each entry's `success` flag.
    pub async fn get_message(
        &self,
        id: &MessageId,
    ) -> Result<Vec<MessageDetails>, ReachSmsError> {
        let request = self.build_request(HttpMethod::Get, &message_path(id), None)?;
        self.execute_and_decode(request, decode_message_details_json_response)
            .await
    }

    /// Build an [`OutgoingMessage`] with default options (valid for 72 minutes, GSM coding).
    ///
    /// `to`, `from` and `message` are taken as-is. This performs no I/O and cannot fail.
    pub fn construct_message(
        to: impl Into<String>,
        from: impl Into<String>,
        message: impl Into<String>,
    ) -> OutgoingMessage {
        OutgoingMessage::new(
            Recipient::new(to),
            Originator::new(from),
            MessageText::new(message),
        )
    }

    /// Send a message (`POST /sms/message`).
    ///
    /// Reach answers with one result per recipient or segment. A failed entry does not turn
    /// the call into an error: the results are returned in order and callers must check each
    /// entry's `success` flag.
    pub async fn send_message(
        &self,
        message: &OutgoingMessage,
    ) -> Result<Vec<SendResult>, ReachSmsError> {
        let body = encode_send_message_body(message).map_err(ReachSmsError::Encode)?;
        let request = self.build_request(HttpMethod::Post, SEND_PATH, Some(body))?;
        self.execute_and_decode(request, decode_send_message_json_response)
            .await
    }

    fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> Result<HttpRequest, ReachSmsError> {
        let mut request = new_request(&self.base_url, method, path, body, &self.user_agent)?;
        self.auth.apply(&mut request.headers);
        Ok(request)
    }

    async fn execute_and_decode<T>(
        &self,
        request: HttpRequest,
        decode: fn(&[u8]) -> Result<T, TransportError>,
    ) -> Result<T, ReachSmsError> {
        tracing::debug!(
            method = request.method.as_str(),
            url = %request.url,
            has_body = request.body.is_some(),
            "sending reach request"
        );

        let response = self
            .http
            .execute(request)
            .await
            .map_err(ReachSmsError::Transport)?;

        tracing::debug!(
            status = response.status,
            bytes = response.body.len(),
            "received reach response"
        );

        decode(&response.body).map_err(|err| ReachSmsError::Parse {
            status: response.status,
            source: Box::new(err),
        })
    }
}
