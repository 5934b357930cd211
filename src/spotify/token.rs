use reqwest::{Client, StatusCode, header};

use crate::{
    config,
    error::AuthError,
    types::{AccessToken, AppRegistration, AuthorizationCode, TokenErrorResponse, TokenResponse},
    utils,
};

/// Exchanges an authorization code for an access token.
///
/// Completes the authorization code flow by posting the code captured from
/// the redirect to the token endpoint configured by
/// [`config::spotify_apitoken_url`].
///
/// # Arguments
///
/// * `registration` - Application whose credentials authenticate the request
/// * `client` - HTTP client used for the single POST
/// * `code` - Code received on the redirect; consumed by this call
///
/// # Errors
///
/// - [`AuthError::Http`] when the endpoint cannot be reached
/// - [`AuthError::TokenRequest`] for a non-success status, e.g. a code that
///   was already used or has expired
/// - [`AuthError::MissingAccessToken`] for a success status without token
///
/// Nothing is retried: a code is single-use, so a failed exchange requires a
/// fresh authorization.
pub async fn exchange_code_for_token(
    registration: &AppRegistration,
    client: &Client,
    code: AuthorizationCode,
) -> Result<AccessToken, AuthError> {
    exchange_code_at(&config::spotify_apitoken_url(), registration, client, code).await
}

/// Same as [`exchange_code_for_token`] against an explicit token endpoint.
pub async fn exchange_code_at(
    token_url: &str,
    registration: &AppRegistration,
    client: &Client,
    code: AuthorizationCode,
) -> Result<AccessToken, AuthError> {
    let res = client
        .post(token_url)
        .header(
            header::AUTHORIZATION,
            utils::basic_auth_header(registration.credentials()),
        )
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code.as_str()),
            ("redirect_uri", registration.redirect_uri()),
        ])
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;

    parse_token_body(status, &body)
}

/// Reads the access token out of a token endpoint response.
///
/// The body is decoded as JSON first. Pattern matching on the raw text is
/// only used when the body is not valid JSON.
pub fn parse_token_body(status: StatusCode, body: &str) -> Result<AccessToken, AuthError> {
    if !status.is_success() {
        return Err(match serde_json::from_str::<TokenErrorResponse>(body) {
            Ok(err) => AuthError::token_request(
                status,
                &match err.error_description {
                    Some(description) => format!("{} ({})", err.error, description),
                    None => err.error,
                },
            ),
            Err(_) => AuthError::token_request(status, body),
        });
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => match serde_json::from_value::<TokenResponse>(json) {
            Ok(token) if !token.access_token.is_empty() => Ok(AccessToken::new(token.access_token)),
            _ => Err(AuthError::missing_access_token(status, body)),
        },
        Err(_) => utils::extract_access_token(body)
            .map(AccessToken::new)
            .ok_or_else(|| AuthError::missing_access_token(status, body)),
    }
}
