//! # CLI Module
//!
//! Command implementations of the `spotlibfy` binary. Each command loads what
//! it needs from [`crate::config`], drives the library, and reports through
//! the `info!`/`success!`/`warning!`/`error!` macros. A failing command ends
//! the process through `error!`.
//!
//! ## Commands
//!
//! - [`auth`] - Full authorization code flow, token cached on success
//! - [`url`] - Print the authorization URL only
//! - [`scopes`] - Table of every known scope
//! - [`token`] - Print the cached access token
//! - [`request`] - Authenticated GET against a Web API URL
//!
//! ## Usage
//!
//! ```bash
//! spotlibfy auth --scope user-read-email --scope playlist-modify-public
//! spotlibfy request /me
//! ```

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{config, error::AuthError, scopes::ScopeSet};

mod auth;
mod request;
mod scopes;
mod token;

pub use auth::auth;
pub use auth::url;
pub use request::request;
pub use scopes::scopes;
pub use token::token;

/// Scopes passed with `--scope`, or the configured defaults when none were given.
///
/// Each `--scope` value may itself hold several scopes separated by spaces or commas.
fn requested_scopes(args: &[String]) -> Result<ScopeSet, AuthError> {
    if args.is_empty() {
        return config::scopes();
    }

    let mut set = ScopeSet::new();
    for arg in args {
        for scope in ScopeSet::parse(arg)?.iter() {
            set.insert(scope);
        }
    }
    Ok(set)
}

fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
