use chrono::{DateTime, Utc};

use crate::{error, info, management::TokenManager};

/// Prints the cached access token and when it was obtained.
pub async fn token() {
    let token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => error!(
            "Failed to load token. Please run spotlibfy auth\n Error: {}",
            e
        ),
    };

    let stored = token_mgr.current_token();
    if let Some(obtained) = DateTime::<Utc>::from_timestamp(stored.obtained_at, 0) {
        info!(
            "Token obtained at {} (cached in {})",
            obtained.format("%Y-%m-%d %H:%M:%S UTC"),
            token_mgr.path().display()
        );
    }

    println!("{}", stored.access_token.as_str());
}
