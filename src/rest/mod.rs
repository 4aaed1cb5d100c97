//! REST transport layer
//!
//! The narrow interface commands call through: request composition,
//! streaming payloads, and response normalization.

mod client;
mod options;
mod response;

pub use client::RestClient;
pub use options::{file_stream_factory, Payload, RequestOptions, StreamFactory};
pub use response::ResponseBody;

use reqwest::Url;

/// Base used to resolve operator-supplied request paths; only the path
/// component of the result is ever used.
const PATH_PARSE_BASE: &str = "http://localhost";

/// Validate an operator-supplied request path and extract its path component.
///
/// Accepts both bare paths (`/api/journals/import`) and full URLs; query
/// strings and fragments are dropped. Returns the parse failure message on
/// malformed input so the caller can wrap it in a validation error carrying
/// its own help text.
pub fn parse_request_path(raw: &str) -> std::result::Result<String, String> {
    let base = Url::parse(PATH_PARSE_BASE).expect("static parse base is a valid URL");
    match base.join(raw) {
        Ok(url) => Ok(url.path().to_string()),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_path() {
        assert_eq!(
            parse_request_path("/api/journals/import").unwrap(),
            "/api/journals/import"
        );
    }

    #[test]
    fn test_parse_drops_query_string() {
        assert_eq!(parse_request_path("/api/search?q=x").unwrap(), "/api/search");
    }

    #[test]
    fn test_parse_full_url_extracts_path() {
        assert_eq!(
            parse_request_path("https://tenant.example.com/api/me").unwrap(),
            "/api/me"
        );
    }

    #[test]
    fn test_parse_malformed_url_errors() {
        // Invalid IPv6 literal cannot be parsed as a URL
        let err = parse_request_path("http://[invalid").unwrap_err();
        assert!(!err.is_empty());
    }

    #[test]
    fn test_parse_relative_path_resolves() {
        assert_eq!(parse_request_path("api/me").unwrap(), "/api/me");
    }
}
