use bytes::Bytes;
use url::Url;

pub const ACCEPT: &str = "Accept";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const USER_AGENT: &str = "User-Agent";
pub const APPLICATION_JSON: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Fully-formed request handed to the HTTP seam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    #[cfg(test)]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Response as read off the wire. The body is an owned buffer, released when dropped.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

/// Resolve `path` against `base_url` and attach the JSON headers.
///
/// `Content-Type` is only set when a body is present. Authentication headers are not added
/// here; the client applies its auth provider on top.
pub fn new_request(
    base_url: &Url,
    method: HttpMethod,
    path: &str,
    body: Option<String>,
    user_agent: &str,
) -> Result<HttpRequest, url::ParseError> {
    let url = base_url.join(path)?;

    let mut headers = Vec::<(String, String)>::new();
    if body.is_some() {
        headers.push((CONTENT_TYPE.to_owned(), APPLICATION_JSON.to_owned()));
    }
    headers.push((ACCEPT.to_owned(), APPLICATION_JSON.to_owned()));
    headers.push((USER_AGENT.to_owned(), user_agent.to_owned()));

    Ok(HttpRequest {
        method,
        url,
        headers,
        body,
    })
}
