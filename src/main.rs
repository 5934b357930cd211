use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotlibfy::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API and cache the access token
    Auth(AuthOptions),

    /// Print the authorization URL
    Url(UrlOptions),

    /// List every OAuth scope
    Scopes,

    /// Print the cached access token
    Token,

    /// Send an authenticated GET to a Web API URL
    Request(RequestOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Scope to request; can be repeated. Defaults to SPOTIFY_API_AUTH_SCOPE
    #[clap(long = "scope", action = ArgAction::Append, num_args = 1)]
    pub scopes: Vec<String>,

    /// Seconds to wait for the authorization redirect
    #[clap(long)]
    pub timeout: Option<u64>,

    /// Print the authorization URL instead of opening a browser
    #[clap(long)]
    pub no_browser: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct UrlOptions {
    /// Scope to request; can be repeated. Defaults to SPOTIFY_API_AUTH_SCOPE
    #[clap(long = "scope", action = ArgAction::Append, num_args = 1)]
    pub scopes: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct RequestOptions {
    /// Full URL, or a path such as /me relative to the Web API
    pub url: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth(opt) => cli::auth(opt.scopes, opt.timeout, !opt.no_browser).await,
        Command::Url(opt) => cli::url(opt.scopes).await,
        Command::Scopes => cli::scopes().await,
        Command::Token => cli::token().await,
        Command::Request(opt) => cli::request(opt.url).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
