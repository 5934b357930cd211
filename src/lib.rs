//! Spotify Web API helper library
//!
//! This library bundles the pieces a client needs before it can talk to the
//! Spotify Web API: URL builders for every documented resource endpoint, the
//! catalog of OAuth scopes, and a small authorization code flow made of three
//! steps the caller runs in sequence.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `endpoints` - URL builders for the Web API resources
//! - `error` - Error taxonomy of the authorization flow
//! - `management` - Local persistence of the obtained access token
//! - `scopes` - OAuth scope catalog and ordered scope sets
//! - `server` - One-shot local listener capturing the OAuth redirect
//! - `spotify` - Authorization URL, token exchange and authenticated requests
//! - `types` - Data structures and type definitions
//! - `utils` - Encoding and parsing helpers
//!
//! # Example
//!
//! ```
//! use spotlibfy::{config, scopes::ScopeSet, server, spotify};
//!
//! #[tokio::main]
//! async fn main() -> spotlibfy::Res<()> {
//!     config::load_env().await?;
//!     let registration = config::registration()?;
//!     let scopes = config::scopes()?;
//!
//!     let request = spotify::authorize::AuthorizationRequest::new(&registration, &scopes)?;
//!     spotify::authorize::open_in_browser(&request.url());
//!
//!     let port = server::redirect_port(&registration)?;
//!     let code = server::await_authorization_code(port, Default::default()).await?;
//!
//!     let client = reqwest::Client::new();
//!     let token = spotify::token::exchange_code_for_token(&registration, &client, code).await?;
//!     println!("{}", token.as_str());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod management;
pub mod scopes;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::AuthError;

/// A convenient Result type alias for operations that may fail.
///
/// Used at the application layer where errors of different kinds meet. Library
/// functions of the authorization flow return [`AuthError`] instead.
///
/// # Example
///
/// ```
/// use spotlibfy::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Waiting for the authorization redirect on port {}", 8080);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Authentication completed successfully");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only the command-line layer uses this macro. Library code returns errors
/// to its caller instead of terminating the process.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Failed to open browser. Open this URL manually:\n{}", url);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
