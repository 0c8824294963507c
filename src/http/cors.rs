//! CORS header augmentation module
//!
//! Appends the permissive cross-origin header set to a response before it is
//! sent. Every response carries these headers, regardless of method or status.

use hyper::header::{HeaderName, HeaderValue};
use hyper::HeaderMap;

/// The fixed CORS header set, appended in this order.
const CORS_HEADERS: [(&str, &str); 3] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET, POST, OPTIONS"),
    ("access-control-allow-headers", "*"),
];

/// Append the CORS header set to a response header map
pub fn apply_cors_headers(headers: &mut HeaderMap) {
    for (name, value) in CORS_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_appended_with_exact_values() {
        let mut headers = HeaderMap::new();
        apply_cors_headers(&mut headers);

        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(
            headers["access-control-allow-methods"],
            "GET, POST, OPTIONS"
        );
        assert_eq!(headers["access-control-allow-headers"], "*");
    }

    #[test]
    fn test_existing_headers_untouched() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("text/html"));
        apply_cors_headers(&mut headers);

        assert_eq!(headers["content-type"], "text/html");
        assert_eq!(headers.len(), 4);
    }
}
