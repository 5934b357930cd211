use std::sync::LazyLock;

use base64::{Engine, engine::general_purpose::STANDARD};
use regex::Regex;

use crate::{error::AuthError, types::ClientCredentials};

static CODE_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]code=([^&\s]+)").expect("code pattern is valid"));

static ERROR_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]error=([^&\s]+)").expect("error pattern is valid"));

static ACCESS_TOKEN_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""access_token"\s*:\s*"(.*?)""#).expect("access token pattern is valid")
});

/// Percent-encodes `value` for use inside a query string.
///
/// Everything except ASCII alphanumerics and `-_.~` is escaped, so spaces
/// become `%20` and `:`/`/` in URIs become `%3A`/`%2F`.
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Decodes a query-string value. `+` is read as a space.
pub fn percent_decode(value: &str) -> Result<String, AuthError> {
    let spaced = value.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| AuthError::Encoding(format!("cannot decode '{}': {}", value, e)))
}

/// `Authorization` header value for HTTP Basic auth: `Basic base64(id:secret)`.
pub fn basic_auth_header(credentials: &ClientCredentials) -> String {
    let pair = format!(
        "{}:{}",
        credentials.client_id(),
        credentials.client_secret()
    );
    format!("Basic {}", STANDARD.encode(pair))
}

/// Raw (still encoded) `code` query parameter of an HTTP request line.
///
/// ```
/// use spotlibfy::utils::extract_code;
///
/// assert_eq!(extract_code("GET /cb?code=ABC&state=x HTTP/1.1"), Some("ABC"));
/// ```
pub fn extract_code(request_line: &str) -> Option<&str> {
    capture(&CODE_PARAM, request_line)
}

/// Raw `error` query parameter, sent by the provider when the user refuses consent.
pub fn extract_error(request_line: &str) -> Option<&str> {
    capture(&ERROR_PARAM, request_line)
}

/// Pulls `access_token` out of a body that is not valid JSON.
pub fn extract_access_token(body: &str) -> Option<&str> {
    capture(&ACCESS_TOKEN_FIELD, body).filter(|token| !token.is_empty())
}

fn capture<'a>(pattern: &Regex, haystack: &'a str) -> Option<&'a str> {
    pattern
        .captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
