use std::time::Duration;

use reqwest::Client;

use crate::{
    config, error, info,
    management::TokenManager,
    server::{self, CallbackListener, CtrlCCancel, ListenOptions},
    spotify::{authorize, token},
    success,
};

use super::{requested_scopes, spinner};

/// Runs the authorization code flow end to end.
///
/// 1. Binds the redirect listener on the port of the configured redirect URI
/// 2. Opens the authorization URL in the browser, or prints it
/// 3. Waits for the redirect, bounded by `timeout` and Ctrl-C
/// 4. Exchanges the code for an access token
/// 5. Caches the token for later `token` and `request` calls
///
/// The listener is bound before the browser opens so a fast redirect cannot
/// arrive before anything is listening.
///
/// # Arguments
///
/// * `scope_args` - Values of `--scope`; the configured scopes when empty
/// * `timeout` - Seconds to wait for the redirect, overriding `SPOTIFY_CALLBACK_TIMEOUT_SECS`
/// * `open_browser` - Whether to launch the browser or only print the URL
pub async fn auth(scope_args: Vec<String>, timeout: Option<u64>, open_browser: bool) {
    let registration = match config::registration() {
        Ok(r) => r,
        Err(e) => error!("Cannot load app registration. Err: {}", e),
    };

    let scopes = match requested_scopes(&scope_args) {
        Ok(s) => s,
        Err(e) => error!("Invalid scope. Err: {}", e),
    };

    let timeout = match timeout {
        Some(secs) => Some(Duration::from_secs(secs)),
        None => match config::callback_timeout() {
            Ok(t) => t,
            Err(e) => error!("{}", e),
        },
    };

    let port = match server::redirect_port(&registration) {
        Ok(p) => p,
        Err(e) => error!("{}", e),
    };

    let listener = match CallbackListener::bind(port).await {
        Ok(l) => l,
        Err(e) => error!("{}", e),
    };

    let auth_url = match authorize::AuthorizationRequest::new(&registration, &scopes) {
        Ok(request) => request.with_base_url(config::spotify_apiauth_url()).url(),
        Err(e) => error!("Cannot build authorization URL. Err: {}", e),
    };

    if open_browser {
        authorize::open_in_browser(&auth_url);
    } else {
        info!("Open this URL to authorize {}:\n{}", registration.name, auth_url);
    }

    let ctrl_c = CtrlCCancel::spawn();
    let mut options = ListenOptions::default().with_cancel(ctrl_c.token());
    if let Some(limit) = timeout {
        options = options.with_timeout(limit);
    }

    let pb = spinner(format!(
        "Waiting for the authorization redirect on port {}...",
        listener.port()
    ));
    let code = listener.accept_code(options).await;
    ctrl_c.stop().await;
    pb.finish_and_clear();

    let code = match code {
        Ok(c) => c,
        Err(e) => error!("Authorization failed. Err: {}", e),
    };

    let pb = spinner("Exchanging authorization code for an access token...");
    let client = Client::new();
    let access_token = token::exchange_code_for_token(&registration, &client, code).await;
    pb.finish_and_clear();

    let access_token = match access_token {
        Ok(t) => t,
        Err(e) => error!("Token exchange failed. Err: {}", e),
    };

    let token_manager = TokenManager::new(access_token);
    if let Err(e) = token_manager.persist().await {
        error!("Failed to save token to cache: {}", e);
    }

    success!("Authentication successful!");
}

/// Prints the authorization URL without starting the flow.
pub async fn url(scope_args: Vec<String>) {
    let registration = match config::registration() {
        Ok(r) => r,
        Err(e) => error!("Cannot load app registration. Err: {}", e),
    };

    let scopes = match requested_scopes(&scope_args) {
        Ok(s) => s,
        Err(e) => error!("Invalid scope. Err: {}", e),
    };

    match authorize::AuthorizationRequest::new(&registration, &scopes) {
        Ok(request) => println!("{}", request.with_base_url(config::spotify_apiauth_url()).url()),
        Err(e) => error!("Cannot build authorization URL. Err: {}", e),
    }
}
