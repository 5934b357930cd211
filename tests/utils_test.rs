use spotlibfy::types::{ClientCredentials, QuotaMode};
use spotlibfy::utils::*;
use spotlibfy::AuthError;

fn credentials(id: &str, secret: &str) -> ClientCredentials {
    ClientCredentials::new(id, secret, QuotaMode::Development).unwrap()
}

#[test]
fn test_percent_encode_reserved_characters() {
    assert_eq!(
        percent_encode("http://localhost:8080/cb"),
        "http%3A%2F%2Flocalhost%3A8080%2Fcb"
    );
    assert_eq!(percent_encode("a b"), "a%20b");
    assert_eq!(percent_encode("abc-_.~"), "abc-_.~");
}

#[test]
fn test_percent_decode_restores_original() {
    let original = "user-read-email playlist-modify-public";
    let decoded = percent_decode(&percent_encode(original)).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_percent_decode_plus_as_space() {
    assert_eq!(percent_decode("a+b%21").unwrap(), "a b!");
}

#[test]
fn test_percent_decode_invalid_utf8() {
    let err = percent_decode("%FF%FE").unwrap_err();
    assert!(matches!(err, AuthError::Encoding(_)));
}

#[test]
fn test_basic_auth_header_is_base64_of_id_and_secret() {
    let header = basic_auth_header(&credentials("abc", "xyz"));
    // base64("abc:xyz")
    assert_eq!(header, "Basic YWJjOnh5eg==");
}

#[test]
fn test_extract_code_from_request_line() {
    assert_eq!(
        extract_code("GET /callback?code=ABC123&state=xyz HTTP/1.1"),
        Some("ABC123")
    );
    assert_eq!(
        extract_code("GET /callback?state=xyz&code=ABC123 HTTP/1.1"),
        Some("ABC123")
    );
}

#[test]
fn test_extract_code_ignores_similar_parameters() {
    assert_eq!(extract_code("GET /callback?error_code=1 HTTP/1.1"), None);
    assert_eq!(extract_code("GET /callback HTTP/1.1"), None);
}

#[test]
fn test_extract_error_from_request_line() {
    assert_eq!(
        extract_error("GET /callback?error=access_denied&state=s HTTP/1.1"),
        Some("access_denied")
    );
}

#[test]
fn test_extract_access_token_from_non_json_body() {
    assert_eq!(
        extract_access_token(r#"junk "access_token" : "tok_9", trailing"#),
        Some("tok_9")
    );
    assert_eq!(extract_access_token(r#""access_token":"""#), None);
    assert_eq!(extract_access_token("nothing here"), None);
}

#[test]
fn test_client_credentials_reject_empty_values() {
    assert!(ClientCredentials::new("", "secret", QuotaMode::Development).is_err());
    assert!(ClientCredentials::new("id", "  ", QuotaMode::Development).is_err());
}

#[test]
fn test_client_credentials_debug_hides_secret() {
    let debug = format!("{:?}", credentials("abc", "very-secret"));
    assert!(debug.contains("abc"));
    assert!(!debug.contains("very-secret"));
}

#[test]
fn test_quota_mode_from_str() {
    assert_eq!("extended".parse::<QuotaMode>().unwrap(), QuotaMode::Extended);
    assert_eq!("Development".parse::<QuotaMode>().unwrap(), QuotaMode::Development);
    assert!("premium".parse::<QuotaMode>().is_err());
}
