//! Integration tests for converting between request descriptors and URLs.

use http::Method;
use requrl::{Error, Query, Request, RequiredField};
use url::Url;

fn descriptor(scheme: &str, host: &str, path: &str) -> Request {
    Request {
        scheme: scheme.to_string(),
        host: host.to_string(),
        path: path.to_string(),
        ..Request::new()
    }
}

fn sorted_pairs(url: &Url) -> Vec<(String, String)> {
    let mut pairs: Vec<_> = url.query_pairs().into_owned().collect();
    pairs.sort();
    pairs
}

#[test]
fn test_from_url_copies_components() {
    let url = Url::parse("http://www.test.com/api/v1/path?foo=bar").unwrap();

    let mut request: Request = Request::new();
    request.from_url(&url);

    assert_eq!(request.scheme, "http");
    assert_eq!(request.host, "www.test.com");
    assert_eq!(request.path, "/api/v1/path");
    assert_eq!(request.query, Query::parse("foo=bar"));
    assert_eq!(request.query.get_all("foo"), ["bar"]);
}

#[test]
fn test_from_url_overwrites_existing_fields() {
    let mut request = descriptor("https", "old.example.com", "/old")
        .with_query_param("stale", "1")
        .with_method(Method::DELETE);

    request.from_url(&Url::parse("http://www.test.com/new").unwrap());

    assert_eq!(request.scheme, "http");
    assert_eq!(request.host, "www.test.com");
    assert_eq!(request.path, "/new");
    assert!(request.query.is_empty());
    // fields outside the URL are left alone
    assert_eq!(request.method, Method::DELETE);
}

#[test]
fn test_from_url_returns_descriptor_for_chaining() {
    let url = Url::parse("http://www.test.com/a?x=1").unwrap();
    let mut request: Request = Request::new();

    let host = request.from_url(&url).host.clone();
    assert_eq!(host, "www.test.com");
}

#[test]
fn test_from_url_str_success() {
    let mut request: Request = Request::new();
    request
        .from_url_str("http://www.test.com/api/v1/path?foo=bar")
        .unwrap();

    assert_eq!(request.scheme, "http");
    assert_eq!(request.host, "www.test.com");
    assert_eq!(request.path, "/api/v1/path");
    assert_eq!(request.query.get("foo"), Some("bar"));
    assert_eq!(request.query.len(), 1);
}

#[test]
fn test_from_url_drops_userinfo_and_fragment() {
    let request: Request = "http://u:p@h.com/x#frag".parse().unwrap();

    assert_eq!(request.host, "h.com");
    assert_eq!(request.path, "/x");
    assert!(request.query.is_empty());
    assert_eq!(request.url().unwrap().as_str(), "http://h.com/x");
}

#[test]
fn test_from_url_str_keeps_port() {
    let request: Request = "http://localhost:8080/health".parse().unwrap();

    assert_eq!(request.host, "localhost:8080");
    assert_eq!(
        request.url().unwrap().as_str(),
        "http://localhost:8080/health"
    );
}

#[test]
fn test_from_url_str_invalid() {
    let mut request = descriptor("http", "www.host.com", "/api/v1/path");

    let result = request.from_url_str("not a url");

    match result {
        Err(Error::InvalidUrl(cause)) => {
            assert_eq!(cause, url::ParseError::RelativeUrlWithoutBase);
        }
        other => panic!("Expected InvalidUrl, got {:?}", other),
    }

    // descriptor untouched on failure
    assert_eq!(request.scheme, "http");
    assert_eq!(request.host, "www.host.com");
    assert_eq!(request.path, "/api/v1/path");
}

#[test]
fn test_url_without_query() {
    let request = descriptor("http", "www.host.com", "/api/v1/path");

    let url = request.url().unwrap();

    assert_eq!(url, Url::parse("http://www.host.com/api/v1/path").unwrap());
    assert_eq!(url.query(), None);
}

#[test]
fn test_url_with_query() {
    let request = descriptor("http", "www.host.com", "/api/v1/path").with_query_param("foo", "bar");

    let url = request.url().unwrap();

    assert_eq!(url.as_str(), "http://www.host.com/api/v1/path?foo=bar");
    assert_eq!(url.query(), Some("foo=bar"));
}

#[test]
fn test_url_query_keys_sorted_and_escaped() {
    let request = descriptor("https", "api.example.com", "/search")
        .with_query_param("q", "a&b c")
        .with_query_param("lang", "en")
        .with_query_param("q", "second");

    let url = request.url().unwrap();

    assert_eq!(url.query(), Some("lang=en&q=a%26b+c&q=second"));
}

#[test]
fn test_url_error_no_scheme() {
    let request = descriptor("", "www.host.com", "/api/v1/path");

    match request.url() {
        Err(Error::Validation { field }) => assert_eq!(field, RequiredField::Scheme),
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[test]
fn test_url_error_no_host() {
    let request = descriptor("http", "", "/api/v1/path");

    let err = request.url().unwrap_err();
    assert!(err.is_validation_error());
    assert_eq!(err.missing_field(), Some(RequiredField::Host));
}

#[test]
fn test_url_error_no_path() {
    let request = descriptor("http", "www.host.com", "");

    let err = request.url().unwrap_err();
    assert_eq!(err.missing_field(), Some(RequiredField::Path));
}

#[test]
fn test_url_reports_first_missing_field() {
    let err = descriptor("", "", "").url().unwrap_err();
    assert_eq!(err.missing_field(), Some(RequiredField::Scheme));

    let err = descriptor("http", "", "").url().unwrap_err();
    assert_eq!(err.missing_field(), Some(RequiredField::Host));
}

#[test]
fn test_url_invalid_host() {
    let request = descriptor("http", "bad host", "/x");

    let err = request.url().unwrap_err();
    assert!(err.is_parse_error());
}

#[test]
fn test_url_host_is_never_truncated() {
    for host in ["www.host.com\\other", "www.host.com/other", "user@www.host.com"] {
        let request = descriptor("http", host, "/api");

        let err = request.url().unwrap_err();
        assert!(err.is_parse_error(), "{}", host);
    }
}

#[test]
fn test_url_scheme_with_colon() {
    let request = descriptor("a:b", "host", "/api");

    match request.url() {
        Err(Error::InvalidUrl(_)) => {}
        other => panic!("Expected InvalidUrl, got {:?}", other),
    }
}

#[test]
fn test_round_trip() {
    let inputs = [
        "http://www.test.com/api/v1/path?foo=bar",
        "https://example.com/",
        "https://example.com:8443/a/b/c",
        "http://127.0.0.1/items?b=2&a=1&a=3",
        "http://[::1]:3000/v1/search?q=rust+lang&empty=",
        "https://example.com/caf%C3%A9/menu?item=cr%C3%AApe",
    ];

    for input in inputs {
        let expected = Url::parse(input).unwrap();

        let request: Request = input.parse().unwrap();
        let rendered = request.url().unwrap();

        assert_eq!(rendered.scheme(), expected.scheme(), "{}", input);
        assert_eq!(rendered.host_str(), expected.host_str(), "{}", input);
        assert_eq!(rendered.port(), expected.port(), "{}", input);
        assert_eq!(rendered.path(), expected.path(), "{}", input);
        assert_eq!(sorted_pairs(&rendered), sorted_pairs(&expected), "{}", input);
    }
}

#[test]
fn test_conversion_traits() {
    let url = Url::parse("https://example.com/a?z=1&y=2").unwrap();

    let request: Request = Request::from(&url);
    let rendered = Url::try_from(&request).unwrap();

    assert_eq!(rendered.as_str(), "https://example.com/a?y=2&z=1");

    let empty: Request = Request::default();
    assert!(Url::try_from(&empty).is_err());
}

#[test]
fn test_opaque_bodies_and_client_ride_along() {
    #[derive(Debug, PartialEq)]
    struct Payload {
        name: &'static str,
    }

    let mut request: Request<Payload, Vec<u8>> = Request::new()
        .with_client(reqwest::Client::new())
        .with_method(Method::PUT)
        .with_header("authorization", "Bearer token")
        .unwrap()
        .with_request_body(Payload { name: "alice" })
        .with_response_body(Vec::new());

    request
        .from_url_str("https://api.example.com/users/1")
        .unwrap();

    assert!(request.client.is_some());
    assert_eq!(request.method, Method::PUT);
    assert_eq!(request.header["authorization"], "Bearer token");
    assert_eq!(request.request_body, Some(Payload { name: "alice" }));
    assert_eq!(request.response_body, Some(Vec::new()));
    assert_eq!(
        request.url().unwrap().as_str(),
        "https://api.example.com/users/1"
    );
}
