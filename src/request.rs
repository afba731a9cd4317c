//! The request descriptor and its URL conversions.
//!
//! Only scheme, host, path and query travel through a URL. Everything else on
//! a [`Request`] is carried untouched for the code that executes it.

use crate::{error::RequiredField, Error, Query, Result};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use std::str::FromStr;
use url::Url;

/// A structured description of an HTTP request's address and payloads.
///
/// `Request` maps scheme, host, path and query to and from a [`Url`]. The
/// method, headers, bodies and transport client ride along for whoever
/// executes the request; nothing here sends anything.
///
/// The body types are opaque: `Req` is whatever the caller intends to send,
/// `Res` whatever it expects back.
///
/// # Examples
///
/// ```
/// use requrl::Request;
///
/// # fn example() -> Result<(), requrl::Error> {
/// let mut request: Request = Request::new();
/// request.from_url_str("http://www.test.com/api/v1/path?foo=bar")?;
///
/// assert_eq!(request.scheme, "http");
/// assert_eq!(request.host, "www.test.com");
/// assert_eq!(request.path, "/api/v1/path");
/// assert_eq!(request.query.get("foo"), Some("bar"));
///
/// request.query.add("page", "2");
/// assert_eq!(
///     request.url()?.as_str(),
///     "http://www.test.com/api/v1/path?foo=bar&page=2"
/// );
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Request<Req = (), Res = ()> {
    /// The transport that will eventually execute this request.
    pub client: Option<reqwest::Client>,

    /// The HTTP method. Defaults to `GET`.
    pub method: Method,

    /// The URL scheme, e.g. `https`.
    pub scheme: String,

    /// The host, with a `:port` suffix when the port is not the scheme default.
    pub host: String,

    /// The percent-encoded request path.
    pub path: String,

    /// Query parameters.
    pub query: Query,

    /// Request headers.
    pub header: HeaderMap,

    /// The payload to send.
    pub request_body: Option<Req>,

    /// Where the decoded response is expected to land.
    pub response_body: Option<Res>,
}

impl<Req, Res> Request<Req, Res> {
    /// Creates an empty descriptor with method `GET`.
    pub fn new() -> Self {
        Self {
            client: None,
            method: Method::GET,
            scheme: String::new(),
            host: String::new(),
            path: String::new(),
            query: Query::new(),
            header: HeaderMap::new(),
            request_body: None,
            response_body: None,
        }
    }

    /// Overwrites scheme, host, path and query with the components of `url`.
    ///
    /// Never fails. Userinfo and fragment are not part of a descriptor and are
    /// ignored.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_url(&mut self, url: &Url) -> &mut Self {
        self.scheme = url.scheme().to_string();
        self.host = host_with_port(url);
        self.path = url.path().to_string();
        self.query = Query::from_url(url);

        tracing::debug!(
            scheme = %self.scheme,
            host = %self.host,
            path = %self.path,
            "Populated request from URL"
        );

        self
    }

    /// Parses `input` as a URL and populates the descriptor from it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `input` is not a valid absolute URL.
    /// The descriptor is left untouched in that case.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_url_str(&mut self, input: &str) -> Result<&mut Self> {
        let url = Url::parse(input).map_err(|e| {
            tracing::warn!(error = %e, input = %input, "Failed to parse request URL");
            e
        })?;
        Ok(self.from_url(&url))
    }

    /// Renders scheme, host, path and query into a [`Url`].
    ///
    /// The query is encoded with keys sorted; an empty query produces a URL
    /// with no query component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first empty field among
    /// scheme, host and path, in that order. Returns [`Error::InvalidUrl`] if
    /// the fields are present but do not form a valid URL.
    pub fn url(&self) -> Result<Url> {
        if let Some(field) = self.first_missing_field() {
            tracing::debug!(field = %field, "Request is missing a required URL field");
            return Err(Error::Validation { field });
        }

        // the parser reports an unusable scheme as a relative URL
        if !is_valid_scheme(&self.scheme) {
            return Err(url::ParseError::RelativeUrlWithoutBase.into());
        }
        if self.host.contains(['/', '\\', '?', '#', '@']) {
            return Err(url::ParseError::InvalidDomainCharacter.into());
        }

        let mut url = Url::parse(&format!("{}://{}", self.scheme, self.host))?;
        if url.host_str().is_none() {
            return Err(url::ParseError::EmptyHost.into());
        }
        url.set_path(&self.path);
        if !self.query.is_empty() {
            url.set_query(Some(&self.query.encode()));
        }

        tracing::debug!(url = %url, "Rendered request URL");

        Ok(url)
    }

    fn first_missing_field(&self) -> Option<RequiredField> {
        if self.scheme.is_empty() {
            Some(RequiredField::Scheme)
        } else if self.host.is_empty() {
            Some(RequiredField::Host)
        } else if self.path.is_empty() {
            Some(RequiredField::Path)
        } else {
            None
        }
    }

    /// Sets the HTTP method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Attaches the transport client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Appends a header value. Existing values for the same name are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let (name, value) = parse_header(name.as_ref(), value.as_ref())?;
        self.header.append(name, value);
        Ok(self)
    }

    /// Appends a query parameter value.
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.add(key, value);
        self
    }

    /// Sets the request body.
    pub fn with_request_body(mut self, body: Req) -> Self {
        self.request_body = Some(body);
        self
    }

    /// Sets the response body.
    pub fn with_response_body(mut self, body: Res) -> Self {
        self.response_body = Some(body);
        self
    }
}

impl<Req, Res> Default for Request<Req, Res> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Req, Res> From<&Url> for Request<Req, Res> {
    fn from(url: &Url) -> Self {
        let mut request = Self::new();
        request.from_url(url);
        request
    }
}

impl<Req, Res> FromStr for Request<Req, Res> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut request = Self::new();
        request.from_url_str(s)?;
        Ok(request)
    }
}

impl<Req, Res> TryFrom<&Request<Req, Res>> for Url {
    type Error = Error;

    fn try_from(request: &Request<Req, Res>) -> Result<Url> {
        request.url()
    }
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    let name = HeaderName::try_from(name)
        .map_err(|e| Error::ConfigurationError(format!("Invalid header name: {}", e)))?;
    let value = HeaderValue::try_from(value)
        .map_err(|e| Error::ConfigurationError(format!("Invalid header value: {}", e)))?;
    Ok((name, value))
}

/// `host[:port]`, leaving the port off when it is the scheme default.
fn host_with_port(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}
