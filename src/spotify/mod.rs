//! # Spotify Integration Module
//!
//! Client side of the OAuth 2.0 authorization code flow plus a bearer
//! authenticated GET for calling the Web API with the obtained token.
//!
//! ## Flow
//!
//! ```text
//! authorize::AuthorizationRequest ──url──▶ browser ──redirect──▶ server::CallbackListener
//!                                                                       │ AuthorizationCode
//!                                                                       ▼
//!                                                    token::exchange_code_for_token ──▶ AccessToken
//! ```
//!
//! The steps are run in sequence by the caller. Nothing here ties them into a
//! state machine, and nothing is retried: authorization codes are single-use
//! and short-lived, so any failure restarts the flow from the first step.
//!
//! ## Modules
//!
//! - [`authorize`] - Authorization URL builder and best-effort browser launch
//! - [`token`] - Code-for-token exchange against `POST /api/token`
//! - [`request`] - `GET` with `Authorization: Bearer <token>`
//!
//! The redirect listener lives in [`crate::server`].

pub mod authorize;
pub mod request;
pub mod token;
