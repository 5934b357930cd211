use reqwest::Client;

use crate::{error::AuthError, types::AccessToken};

/// Sends an authenticated GET to a Web API URL and returns the body as text.
///
/// Pair it with the URL builders of [`crate::endpoints`]:
///
/// ```
/// use spotlibfy::{AuthError, endpoints::users, spotify::request::get, types::AccessToken};
///
/// async fn profile(token: &AccessToken) -> Result<String, AuthError> {
///     let client = reqwest::Client::new();
///     get(&client, token, &users::get_current_users_profile()).await
/// }
/// ```
///
/// A non-success status is returned as [`AuthError::TokenRequest`] carrying
/// the status and an excerpt of the body, typically `401` for an expired token.
pub async fn get(client: &Client, token: &AccessToken, url: &str) -> Result<String, AuthError> {
    let res = client.get(url).bearer_auth(token.as_str()).send().await?;

    let status = res.status();
    let body = res.text().await?;
    if !status.is_success() {
        return Err(AuthError::token_request(status, &body));
    }

    Ok(body)
}
