//! Demo: break a URL into a request descriptor, edit it, and render it back.
//!
//! This example shows how to:
//! - Parse a URL string into scheme, host, path and query
//! - Adjust the query and path in place
//! - Render the descriptor back to a URL
//! - Handle a descriptor that is missing a required field
//!
//! Run with: `cargo run --example describe_url -- "https://example.com/search?q=rust"`

use requrl::{Error, Request};

fn main() -> Result<(), Error> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("requrl=debug,describe_url=info")
        .init();

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://www.test.com/api/v1/path?foo=bar".to_string());

    println!("=== Parsing ===");
    let mut request: Request = input.parse()?;
    println!("Scheme: {}", request.scheme);
    println!("Host:   {}", request.host);
    println!("Path:   {}", request.path);
    for (key, values) in request.query.iter() {
        println!("Query:  {} = {:?}", key, values);
    }
    println!();

    println!("=== Editing ===");
    request.query.add("page", "2");
    request.query.set("sort", "newest first");
    let url = request.url()?;
    println!("Rendered: {}", url);
    println!();

    println!("=== Validation ===");
    request.path.clear();
    match request.url() {
        Ok(url) => println!("Unexpectedly rendered: {}", url),
        Err(e) => println!("Rejected: {}", e),
    }

    Ok(())
}
