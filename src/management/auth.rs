use std::path::PathBuf;

use chrono::Utc;

use crate::types::{AccessToken, StoredToken};

/// Keeps the last access token in the local data directory so other commands
/// can reuse it without running the authorization flow again.
///
/// No expiry is tracked: once Spotify rejects the token, authorize again.
pub struct TokenManager {
    token: StoredToken,
    path: PathBuf,
}

impl TokenManager {
    pub fn new(access_token: AccessToken) -> Self {
        TokenManager {
            token: StoredToken {
                access_token,
                obtained_at: Utc::now().timestamp(),
            },
            path: Self::token_path(),
        }
    }

    /// Stores the token at `path` instead of the default cache location.
    pub fn at_path(mut self, path: PathBuf) -> Self {
        self.path = path;
        self
    }

    pub async fn load() -> Result<Self, String> {
        Self::load_from(Self::token_path()).await
    }

    pub async fn load_from(path: PathBuf) -> Result<Self, String> {
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: StoredToken = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token, path })
    }

    pub async fn persist(&self) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(&self.path, json)
            .await
            .map_err(|e| e.to_string())
    }

    pub fn access_token(&self) -> &AccessToken {
        &self.token.access_token
    }

    pub fn current_token(&self) -> &StoredToken {
        &self.token
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spotlibfy/cache/token.json");
        path
    }
}
