use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::error::AuthError;

/// Quota mode of a registered Spotify application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotaMode {
    /// Restricted mode for testing, limited to allow-listed users.
    #[default]
    Development,
    /// Unrestricted mode granted after Spotify's review.
    Extended,
}

impl std::str::FromStr for QuotaMode {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "development_mode" | "dev" => Ok(QuotaMode::Development),
            "extended" | "extended_quota" | "extended_quota_mode" => Ok(QuotaMode::Extended),
            other => Err(AuthError::Config(format!("unknown quota mode '{}'", other))),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    client_id: String,
    client_secret: String,
    quota_mode: QuotaMode,
}

impl ClientCredentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        quota_mode: QuotaMode,
    ) -> Result<Self, AuthError> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();
        if client_id.trim().is_empty() {
            return Err(AuthError::Config("client id is empty".to_string()));
        }
        if client_secret.trim().is_empty() {
            return Err(AuthError::Config("client secret is empty".to_string()));
        }

        Ok(Self {
            client_id,
            client_secret,
            quota_mode,
        })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn quota_mode(&self) -> QuotaMode {
        self.quota_mode
    }
}

// Keeps the secret out of logs and panic messages.
impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("quota_mode", &self.quota_mode)
            .finish()
    }
}

/// A Spotify application as registered in the developer dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppRegistration {
    pub name: String,
    pub description: String,
    pub website: String,
    redirect_uris: Vec<String>,
    credentials: ClientCredentials,
}

impl AppRegistration {
    /// Fails when `redirect_uris` is empty or only holds blank entries.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        website: impl Into<String>,
        redirect_uris: Vec<String>,
        credentials: ClientCredentials,
    ) -> Result<Self, AuthError> {
        let redirect_uris: Vec<String> = redirect_uris
            .into_iter()
            .map(|uri| uri.trim().to_string())
            .filter(|uri| !uri.is_empty())
            .collect();
        if redirect_uris.is_empty() {
            return Err(AuthError::Config(
                "at least one redirect URI is required".to_string(),
            ));
        }

        Ok(Self {
            name: name.into(),
            description: description.into(),
            website: website.into(),
            redirect_uris,
            credentials,
        })
    }

    /// The redirect URI used by the flow. Only the first registered one is used.
    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uris[0]
    }

    pub fn redirect_uris(&self) -> &[String] {
        &self.redirect_uris
    }

    pub fn credentials(&self) -> &ClientCredentials {
        &self.credentials
    }
}

/// Code captured from the authorization redirect.
///
/// Not `Clone`: exchanging a code moves it, so one value is consumed once.
#[derive(Debug, PartialEq, Eq)]
pub struct AuthorizationCode(String);

impl AuthorizationCode {
    pub fn new(code: impl Into<String>) -> Self {
        AuthorizationCode(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Bearer token returned by the token endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        AccessToken(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessToken(***)")
    }
}

/// Successful body of the token endpoint. Fields other than the token are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Error body of the token endpoint, e.g. `{"error":"invalid_grant", ...}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenErrorResponse {
    pub error: String,
    pub error_description: Option<String>,
}

/// Access token as kept on disk by the token manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredToken {
    pub access_token: AccessToken,
    pub obtained_at: i64,
}

#[derive(Tabled)]
pub struct ScopeTableRow {
    pub scope: String,
    pub description: String,
}
