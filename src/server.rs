//! One-shot listener for the OAuth redirect.
//!
//! The provider redirects the user's browser to the registered redirect URI
//! with `?code=<value>` appended. [`CallbackListener`] accepts exactly that one
//! connection, reads the request line, answers with a fixed HTML page and
//! closes both the connection and the listening socket. It is not an HTTP
//! server: it never loops and never serves a second request.

use std::{
    future::Future,
    io,
    net::Ipv4Addr,
    time::Duration,
};

use reqwest::Url;
use tokio::{
    io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader},
    net::{TcpListener, TcpStream},
    task::JoinHandle,
    time::Instant,
};
use tokio_util::sync::CancellationToken;

use crate::{
    error::{self, AuthError},
    types::{AppRegistration, AuthorizationCode},
    utils, warning,
};

/// Longest request line read from the redirect connection.
pub const MAX_REQUEST_LINE: usize = 8 * 1024;

const LINGER_BYTES: u64 = 1024 * 1024;
const LINGER_TIMEOUT: Duration = Duration::from_millis(250);

const CALLBACK_HTML: &str = "<html><body><h2>Authorization received.</h2><p>You can close this window.</p></body></html>";

/// Bounds on the wait for the redirect.
///
/// The default waits without limit and cannot be cancelled.
#[derive(Debug, Clone, Default)]
pub struct ListenOptions {
    pub timeout: Option<Duration>,
    pub cancel: Option<CancellationToken>,
}

impl ListenOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

/// Cancels a token when the process receives Ctrl-C.
///
/// The watcher is a spawned task; call [`CtrlCCancel::stop`] once the wait is
/// over so it does not outlive the listen phase.
#[derive(Debug)]
pub struct CtrlCCancel {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl CtrlCCancel {
    pub fn spawn() -> Self {
        let token = CancellationToken::new();
        let trigger = token.clone();
        let task = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                trigger.cancel();
            }
        });

        Self { token, task }
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn is_watching(&self) -> bool {
        !self.task.is_finished()
    }

    /// Aborts the watcher and waits for it to end. Returns whether Ctrl-C
    /// had been received.
    pub async fn stop(self) -> bool {
        self.task.abort();
        let _ = self.task.await;
        self.token.is_cancelled()
    }
}

/// A bound, not yet used redirect listener.
#[derive(Debug)]
pub struct CallbackListener {
    listener: TcpListener,
    port: u16,
}

impl CallbackListener {
    /// Binds `127.0.0.1:<port>`. Port `0` picks a free ephemeral port.
    ///
    /// # Errors
    ///
    /// [`AuthError::Bind`] when the port is taken or cannot be bound.
    pub async fn bind(port: u16) -> Result<Self, AuthError> {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, port))
            .await
            .map_err(|source| AuthError::Bind { port, source })?;
        let port = listener
            .local_addr()
            .map_err(|source| AuthError::Bind { port, source })?
            .port();

        Ok(Self { listener, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Waits for the redirect and returns the decoded authorization code.
    ///
    /// Consumes the listener. The listening socket is closed as soon as the
    /// first connection is accepted, and the accepted connection is always
    /// answered and closed, whether or not a code was found. The timeout and
    /// the cancellation token bound both the accept and the read of the
    /// request line; once a connection is accepted the page is written even
    /// when the wait is cut short.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Timeout`] / [`AuthError::Cancelled`] when the wait is cut short
    /// - [`AuthError::MissingCode`] when the request carries no `code` or its
    ///   request line is longer than 8 KiB
    /// - [`AuthError::AuthorizationDenied`] when it carries `error=` instead
    /// - [`AuthError::CallbackIo`] when accepting or reading fails
    pub async fn accept_code(self, options: ListenOptions) -> Result<AuthorizationCode, AuthError> {
        let Self { listener, .. } = self;
        let deadline = options
            .timeout
            .map(|limit| (Instant::now() + limit, limit));
        let cancel = options.cancel.unwrap_or_else(CancellationToken::new);

        let (mut stream, _) = bounded(listener.accept(), deadline, &cancel).await?;
        drop(listener);

        let outcome = match bounded(read_request_line(&mut stream), deadline, &cancel).await {
            Ok(line) if line.len() >= MAX_REQUEST_LINE => Err(AuthError::MissingCode {
                request_line: error::excerpt(&line),
            }),
            Ok(line) => parse_callback_request_line(line.trim_end()),
            Err(e) => Err(e),
        };

        if let Err(e) = respond(&mut stream).await {
            if outcome.is_ok() {
                warning!("Could not answer the authorization redirect: {}", e);
            }
        }
        linger(&mut stream).await;

        outcome
    }
}

/// Binds `port` and waits for one redirect. See [`CallbackListener::accept_code`].
pub async fn await_authorization_code(
    port: u16,
    options: ListenOptions,
) -> Result<AuthorizationCode, AuthError> {
    CallbackListener::bind(port).await?.accept_code(options).await
}

/// Port of the registration's redirect URI, used to bind the listener.
///
/// # Errors
///
/// [`AuthError::Config`] if the URI does not parse or is not plain `http`,
/// since the listener does not speak TLS.
pub fn redirect_port(registration: &AppRegistration) -> Result<u16, AuthError> {
    let uri = registration.redirect_uri();
    let url = Url::parse(uri)
        .map_err(|e| AuthError::Config(format!("invalid redirect URI '{}': {}", uri, e)))?;
    if url.scheme() != "http" {
        return Err(AuthError::Config(format!(
            "redirect URI '{}' must use http to be captured locally",
            uri
        )));
    }

    url.port_or_known_default()
        .ok_or_else(|| AuthError::Config(format!("redirect URI '{}' has no port", uri)))
}

/// Extracts the authorization code from an HTTP request line such as
/// `GET /callback?code=ABC123&state=xyz HTTP/1.1`.
pub fn parse_callback_request_line(line: &str) -> Result<AuthorizationCode, AuthError> {
    if let Some(raw) = utils::extract_code(line) {
        return Ok(AuthorizationCode::new(utils::percent_decode(raw)?));
    }
    if let Some(raw) = utils::extract_error(line) {
        return Err(AuthError::AuthorizationDenied {
            error: utils::percent_decode(raw)?,
        });
    }

    Err(AuthError::MissingCode {
        request_line: error::excerpt(line),
    })
}

async fn bounded<T, F>(
    step: F,
    deadline: Option<(Instant, Duration)>,
    cancel: &CancellationToken,
) -> Result<T, AuthError>
where
    F: Future<Output = io::Result<T>>,
{
    let timed = async {
        match deadline {
            Some((at, limit)) => tokio::time::timeout_at(at, step)
                .await
                .map_err(|_| AuthError::Timeout(limit))?
                .map_err(AuthError::from),
            None => step.await.map_err(AuthError::from),
        }
    };

    tokio::select! {
        _ = cancel.cancelled() => Err(AuthError::Cancelled),
        result = timed => result,
    }
}

// Reads at most MAX_REQUEST_LINE bytes; a longer line comes back cut at the cap.
async fn read_request_line(stream: &mut TcpStream) -> io::Result<String> {
    let mut reader = BufReader::new((&mut *stream).take(MAX_REQUEST_LINE as u64));
    let mut line = String::new();
    reader.read_line(&mut line).await?;
    Ok(line)
}

async fn respond(stream: &mut TcpStream) -> io::Result<()> {
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        CALLBACK_HTML.len(),
        CALLBACK_HTML
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}

// Discards what the peer still sends so closing does not reset the
// connection before the page is read.
async fn linger(stream: &mut TcpStream) {
    let mut rest = (&mut *stream).take(LINGER_BYTES);
    let mut sink = tokio::io::sink();
    let drain = tokio::io::copy(&mut rest, &mut sink);
    let _ = tokio::time::timeout(LINGER_TIMEOUT, drain).await;
}
