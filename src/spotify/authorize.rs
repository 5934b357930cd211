use crate::{
    config::DEFAULT_AUTH_URL, error::AuthError, scopes::ScopeSet, types::AppRegistration, utils,
    warning,
};

/// Authorization request for the authorization code flow.
///
/// Built from an [`AppRegistration`] and the requested scopes, it renders the
/// URL the user opens to grant access:
///
/// ```text
/// <authorize-base>?client_id=<id>&redirect_uri=<enc>&scope=<enc>&response_type=code
/// ```
///
/// Only the first redirect URI of the registration is used. Building the URL
/// has no side effects.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    base_url: String,
    client_id: String,
    redirect_uri: String,
    scope: String,
}

impl AuthorizationRequest {
    pub fn new(registration: &AppRegistration, scopes: &ScopeSet) -> Result<Self, AuthError> {
        let client_id = registration.credentials().client_id().trim();
        if client_id.is_empty() {
            return Err(AuthError::Config("client id is empty".to_string()));
        }

        Ok(Self {
            base_url: DEFAULT_AUTH_URL.to_string(),
            client_id: client_id.to_string(),
            redirect_uri: registration.redirect_uri().to_string(),
            scope: scopes.to_query_value(),
        })
    }

    /// Replaces the authorization endpoint, e.g. with `config::spotify_apiauth_url()`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn url(&self) -> String {
        format!(
            "{base}?client_id={client_id}&redirect_uri={redirect_uri}&scope={scope}&response_type=code",
            base = self.base_url.trim_end_matches('?'),
            client_id = utils::percent_encode(&self.client_id),
            redirect_uri = utils::percent_encode(&self.redirect_uri),
            scope = utils::percent_encode(&self.scope),
        )
    }
}

/// Builds the authorization URL for `registration` and `scopes`.
///
/// # Example
///
/// ```
/// use spotlibfy::{
///     AuthError,
///     scopes::{Scope, ScopeSet},
///     spotify::authorize::authorization_url,
///     types::AppRegistration,
/// };
///
/// fn email_url(registration: &AppRegistration) -> Result<String, AuthError> {
///     authorization_url(registration, &ScopeSet::from([Scope::UserReadEmail]))
/// }
/// ```
pub fn authorization_url(
    registration: &AppRegistration,
    scopes: &ScopeSet,
) -> Result<String, AuthError> {
    Ok(AuthorizationRequest::new(registration, scopes)?.url())
}

/// Opens `url` in the default browser.
///
/// Never fails: when no browser can be launched the URL is printed so the
/// user can open it manually. Returns whether a browser was launched.
pub fn open_in_browser(url: &str) -> bool {
    match webbrowser::open(url) {
        Ok(()) => true,
        Err(e) => {
            warning!(
                "Failed to open browser ({}). Please navigate to the following URL manually:\n{}",
                e,
                url
            );
            false
        }
    }
}
