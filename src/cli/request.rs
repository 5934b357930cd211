use reqwest::Client;

use crate::{endpoints::API_BASE_URL, error, management::TokenManager, spotify};

use super::spinner;

/// Sends an authenticated GET with the cached token and prints the body.
///
/// A URL starting with `/` is taken relative to the Web API base, so
/// `spotlibfy request /me` works as well as a full URL.
pub async fn request(url: String) {
    let token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => error!(
            "Failed to load token. Please run spotlibfy auth\n Error: {}",
            e
        ),
    };

    let url = if url.starts_with('/') {
        format!("{}{}", API_BASE_URL, url)
    } else {
        url
    };

    let pb = spinner(format!("GET {}", url));
    let client = Client::new();
    let body = spotify::request::get(&client, token_mgr.access_token(), &url).await;
    pb.finish_and_clear();

    match body {
        Ok(b) => println!("{}", b),
        Err(e) => error!("Request failed. Err: {}", e),
    }
}
