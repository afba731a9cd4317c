//! # requrl - Structured HTTP request descriptors
//!
//! requrl maps the addressing parts of an HTTP request (scheme, host, path and
//! query) to and from a [`url::Url`], and carries the method, headers, bodies and
//! transport client alongside them for whatever code executes the request.
//!
//! ## Quick Start
//!
//! ```
//! use requrl::{Request, RequiredField};
//!
//! # fn main() -> Result<(), requrl::Error> {
//! // Parse a URL into its parts
//! let mut request: Request = "http://www.test.com/api/v1/path?foo=bar".parse()?;
//! assert_eq!(request.host, "www.test.com");
//! assert_eq!(request.query.get("foo"), Some("bar"));
//!
//! // Edit the parts and render them back
//! request.path = "/api/v2/path".to_string();
//! request.query.set("foo", "baz qux");
//! let url = request.url()?;
//! assert_eq!(url.as_str(), "http://www.test.com/api/v2/path?foo=baz+qux");
//!
//! // Scheme, host and path are required
//! request.host.clear();
//! let err = request.url().unwrap_err();
//! assert_eq!(err.missing_field(), Some(RequiredField::Host));
//! # Ok(())
//! # }
//! ```
//!
//! ## Building a descriptor
//!
//! ```
//! use http::Method;
//! use requrl::Request;
//!
//! # fn main() -> Result<(), requrl::Error> {
//! let mut request: Request<String> = Request::new()
//!     .with_method(Method::POST)
//!     .with_header("content-type", "application/json")?
//!     .with_query_param("dry_run", "true")
//!     .with_request_body(r#"{"name":"alice"}"#.to_string());
//!
//! request.from_url_str("https://api.example.com/users")?;
//!
//! // from_url_str replaces the query with the URL's own
//! assert!(request.query.is_empty());
//! assert_eq!(request.url()?.as_str(), "https://api.example.com/users");
//! assert_eq!(request.method, Method::POST);
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! Conversions emit `tracing` events at `debug` level, and parse failures at
//! `warn`. Install any `tracing` subscriber to see them.

mod error;
mod query;
mod request;

pub use error::{Error, RequiredField, Result};
pub use query::Query;
pub use request::Request;
