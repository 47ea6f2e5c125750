//! AOC input client implementation

use crate::error::FetchError;
use crate::puzzle::PuzzleId;
use reqwest::StatusCode;
use reqwest::header::{COOKIE, HeaderValue};
use std::io::{self, Read, Write};
use std::time::Duration;
use zeroize::Zeroize;

/// Timeout applied to the whole request unless the builder overrides it
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Classification of the status code returned for an input request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputStatus {
    /// 200, the body is the puzzle input
    Ok,
    /// 400, the session cookie is no longer accepted
    SessionExpired,
    /// 404, the puzzle has not unlocked yet
    NotFound,
    /// Anything else
    Unexpected(StatusCode),
}

impl From<StatusCode> for InputStatus {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::OK => InputStatus::Ok,
            StatusCode::BAD_REQUEST => InputStatus::SessionExpired,
            StatusCode::NOT_FOUND => InputStatus::NotFound,
            other => InputStatus::Unexpected(other),
        }
    }
}

/// A successful input response whose body has not been read yet
///
/// The body is pulled from the connection as it is read, so copying it to a
/// file never holds the whole input in memory.
#[derive(Debug)]
pub struct InputResponse {
    inner: reqwest::blocking::Response,
}

impl InputResponse {
    /// Body length announced by the server, if any
    pub fn content_length(&self) -> Option<u64> {
        self.inner.content_length()
    }

    /// Stream the remaining body into `writer`, returning the bytes copied
    pub fn copy_to<W: Write + ?Sized>(&mut self, writer: &mut W) -> io::Result<u64> {
        io::copy(&mut self.inner, writer)
    }
}

impl Read for InputResponse {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

/// Blocking client for puzzle input downloads
///
/// # Example
///
/// ```no_run
/// use aoc_input_client::{InputClient, PuzzleId};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = InputClient::new()?;
/// let mut response = client.fetch_input(PuzzleId::new(2024, 1)?, "your_session_cookie")?;
/// response.copy_to(&mut std::io::stdout())?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct InputClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
    timeout: Duration,
}

impl InputClient {
    /// Create a client for adventofcode.com with the default 10 second timeout
    ///
    /// # Errors
    ///
    /// Returns `FetchError::ClientInit` if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, FetchError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_input_client::InputClient;
    /// use std::time::Duration;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = InputClient::builder()
    ///     .base_url("http://localhost:1234")?
    ///     .timeout(Duration::from_secs(2))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> InputClientBuilder {
        InputClientBuilder::new()
    }

    /// Timeout bounding each request
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Create a secure cookie header value from a session string
    ///
    /// The header is flagged sensitive and the temporary string is zeroized.
    fn create_cookie_header(session: &str) -> Result<HeaderValue, FetchError> {
        if session.is_empty() {
            return Err(FetchError::InvalidSession);
        }

        let mut cookie_string = format!("session={}", session);
        let header_value = HeaderValue::from_bytes(cookie_string.as_bytes());
        cookie_string.zeroize();

        let mut sensitive_header = header_value.map_err(|_| FetchError::InvalidSession)?;
        sensitive_header.set_sensitive(true);
        Ok(sensitive_header)
    }

    /// URL of the input resource for `puzzle`
    pub fn input_url(&self, puzzle: PuzzleId) -> Result<reqwest::Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(&[
                &puzzle.year().to_string(),
                "day",
                &puzzle.day().to_string(),
                "input",
            ]);
        Ok(url)
    }

    /// Request the input for `puzzle`
    ///
    /// Sends exactly one GET. On a 200 the returned response still holds the
    /// unread body; every other outcome is an error and nothing is read.
    ///
    /// # Errors
    ///
    /// * `FetchError::Timeout` - no response within the client timeout
    /// * `FetchError::Request` - any other transport failure
    /// * `FetchError::SessionExpired` - HTTP 400
    /// * `FetchError::NotFound` - HTTP 404
    /// * `FetchError::UnexpectedStatus` - any other non-200 status
    /// * `FetchError::InvalidSession` - session is empty or not header-safe
    pub fn fetch_input(&self, puzzle: PuzzleId, session: &str) -> Result<InputResponse, FetchError> {
        let cookie_header = Self::create_cookie_header(session)?;
        let url = self.input_url(puzzle)?;

        tracing::debug!(%url, timeout = ?self.timeout, "requesting puzzle input");

        let response = self
            .client
            .get(url)
            .header(COOKIE, cookie_header)
            .send()
            .map_err(|e| self.classify_send_error(e))?;

        let status = response.status();
        tracing::debug!(%status, content_length = ?response.content_length(), "received response");

        match InputStatus::from(status) {
            InputStatus::Ok => Ok(InputResponse { inner: response }),
            InputStatus::SessionExpired => Err(FetchError::SessionExpired),
            InputStatus::NotFound => Err(FetchError::NotFound),
            InputStatus::Unexpected(status) => Err(FetchError::UnexpectedStatus { status }),
        }
    }

    fn classify_send_error(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout {
                timeout: self.timeout,
            }
        } else {
            FetchError::Request(error)
        }
    }
}

/// Builder for configuring an input client
///
/// The timeout and redirect policy are always applied on top of any custom
/// reqwest builder, so `FetchError::Timeout` reports the value actually used.
#[derive(Debug)]
pub struct InputClientBuilder {
    base_url: Option<reqwest::Url>,
    timeout: Duration,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl InputClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            client_builder: None,
        }
    }

    /// Set a custom base URL, mostly for pointing at mock servers
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, FetchError> {
        let url = url
            .into_url()
            .map_err(|e| FetchError::ClientInit(format!("Invalid base URL: {}", e)))?;
        self.base_url = Some(url);
        Ok(self)
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom HTTP client builder (proxies, extra TLS roots, ...)
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the client with the configured settings
    ///
    /// # Errors
    ///
    /// Returns `FetchError::ClientInit` if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<InputClient, FetchError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| FetchError::ClientInit(e.to_string()))?,
        };

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        // A redirect here means the login page, never the input
        let client = builder
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| FetchError::ClientInit(e.to_string()))?;

        Ok(InputClient {
            client,
            base_url,
            timeout: self.timeout,
        })
    }
}

impl Default for InputClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
