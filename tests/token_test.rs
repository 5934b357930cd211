use reqwest::{Client, StatusCode};
use serde_json::json;
use spotlibfy::AuthError;
use spotlibfy::spotify::request;
use spotlibfy::spotify::token::{exchange_code_at, parse_token_body};
use spotlibfy::types::{
    AccessToken, AppRegistration, AuthorizationCode, ClientCredentials, QuotaMode,
};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// base64("abc:xyz")
const BASIC: &str = "Basic YWJjOnh5eg==";

fn registration() -> AppRegistration {
    AppRegistration::new(
        "test app",
        "",
        "",
        vec!["http://localhost:8080/cb".to_string()],
        ClientCredentials::new("abc", "xyz", QuotaMode::Development).unwrap(),
    )
    .unwrap()
}

fn token_url(server: &MockServer) -> String {
    format!("{}/api/token", server.uri())
}

#[tokio::test]
async fn test_exchange_returns_access_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header("authorization", BASIC))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=ABC123"))
        .and(body_string_contains(
            "redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fcb",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok_1",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = exchange_code_at(
        &token_url(&server),
        &registration(),
        &Client::new(),
        AuthorizationCode::new("ABC123"),
    )
    .await
    .unwrap();

    assert_eq!(token.as_str(), "tok_1");
}

#[tokio::test]
async fn test_exchange_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid authorization code"
        })))
        .mount(&server)
        .await;

    let result = exchange_code_at(
        &token_url(&server),
        &registration(),
        &Client::new(),
        AuthorizationCode::new("bad"),
    )
    .await;

    match result {
        Err(AuthError::TokenRequest { status, body }) => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, "invalid_grant (Invalid authorization code)");
        }
        other => panic!("expected TokenRequest, got {:?}", other),
    }
}

#[tokio::test]
async fn test_exchange_success_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token_type": "Bearer" })))
        .mount(&server)
        .await;

    let result = exchange_code_at(
        &token_url(&server),
        &registration(),
        &Client::new(),
        AuthorizationCode::new("ABC123"),
    )
    .await;

    assert!(matches!(
        result,
        Err(AuthError::MissingAccessToken { status, .. }) if status == StatusCode::OK
    ));
}

#[tokio::test]
async fn test_code_is_single_use() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(body_string_contains("code=ONCE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "tok_1" })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Authorization code expired"
        })))
        .mount(&server)
        .await;

    let client = Client::new();
    let reg = registration();

    let first = exchange_code_at(&token_url(&server), &reg, &client, AuthorizationCode::new("ONCE")).await;
    assert_eq!(first.unwrap().as_str(), "tok_1");

    let second = exchange_code_at(&token_url(&server), &reg, &client, AuthorizationCode::new("ONCE")).await;
    assert!(matches!(
        second,
        Err(AuthError::TokenRequest { status, .. }) if status == StatusCode::BAD_REQUEST
    ));
}

#[tokio::test]
async fn test_exchange_unreachable_endpoint() {
    let result = exchange_code_at(
        "http://127.0.0.1:1/api/token",
        &registration(),
        &Client::new(),
        AuthorizationCode::new("ABC123"),
    )
    .await;

    assert!(matches!(result, Err(AuthError::Http(_))));
}

#[test]
fn test_parse_token_body_falls_back_to_pattern() {
    let token = parse_token_body(StatusCode::OK, r#"{"access_token": "tok_2", broken"#).unwrap();
    assert_eq!(token.as_str(), "tok_2");
}

#[test]
fn test_parse_token_body_empty_token() {
    assert!(matches!(
        parse_token_body(StatusCode::OK, r#"{"access_token": ""}"#),
        Err(AuthError::MissingAccessToken { .. })
    ));
}

#[test]
fn test_parse_token_body_truncates_long_error_body() {
    let body = "x".repeat(2000);
    match parse_token_body(StatusCode::INTERNAL_SERVER_ERROR, &body) {
        Err(AuthError::TokenRequest { body, .. }) => {
            assert!(body.len() < 2000);
            assert!(body.starts_with("xxx"));
        }
        other => panic!("expected TokenRequest, got {:?}", other),
    }
}

#[tokio::test]
async fn test_request_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .and(header("authorization", "Bearer tok_1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"user"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let body = request::get(
        &Client::new(),
        &AccessToken::new("tok_1"),
        &format!("{}/v1/me", server.uri()),
    )
    .await
    .unwrap();

    assert_eq!(body, r#"{"id":"user"}"#);
}

#[tokio::test]
async fn test_request_rejected_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("expired"))
        .mount(&server)
        .await;

    let result = request::get(
        &Client::new(),
        &AccessToken::new("old"),
        &format!("{}/v1/me", server.uri()),
    )
    .await;

    assert!(matches!(
        result,
        Err(AuthError::TokenRequest { status, .. }) if status == StatusCode::UNAUTHORIZED
    ));
}
