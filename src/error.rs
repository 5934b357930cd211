use std::{io, time::Duration};

use reqwest::StatusCode;
use thiserror::Error;

/// Longest slice of a response body kept inside an error.
pub const BODY_EXCERPT_LEN: usize = 512;

/// Failures of the authorization code flow.
///
/// Every variant is terminal for the current attempt. Authorization codes are
/// single-use, so the caller restarts the whole flow (new listener, new code)
/// instead of retrying a step.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("cannot listen for the authorization redirect on port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: io::Error,
    },

    #[error("redirect connection failed: {0}")]
    CallbackIo(#[from] io::Error),

    #[error("redirect request carried no authorization code: {request_line}")]
    MissingCode { request_line: String },

    #[error("authorization was denied: {error}")]
    AuthorizationDenied { error: String },

    #[error("no authorization redirect arrived within {0:?}")]
    Timeout(Duration),

    #[error("waiting for the authorization redirect was cancelled")]
    Cancelled,

    #[error("token request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("token endpoint answered {status}: {body}")]
    TokenRequest { status: StatusCode, body: String },

    #[error("token endpoint answered {status} without an access token: {body}")]
    MissingAccessToken { status: StatusCode, body: String },
}

impl AuthError {
    /// Builds a [`AuthError::TokenRequest`] keeping only an excerpt of `body`.
    pub fn token_request(status: StatusCode, body: &str) -> Self {
        AuthError::TokenRequest {
            status,
            body: excerpt(body),
        }
    }

    pub fn missing_access_token(status: StatusCode, body: &str) -> Self {
        AuthError::MissingAccessToken {
            status,
            body: excerpt(body),
        }
    }
}

/// First `BODY_EXCERPT_LEN` characters of `body`, marked with `...` when cut.
pub(crate) fn excerpt(body: &str) -> String {
    match body.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
