//! X (Twitter) API error types.

/// X-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum XErrorKind {
    /// One of the five X credentials was not found in the environment
    #[display("{} environment variable not set", _0)]
    MissingCredential(String),
    /// Request could not be sent (DNS, TLS, connection refused)
    #[display("X API request failed: {}", _0)]
    Network(String),
    /// The API rejected the request
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error body returned by the API
        message: String,
    },
    /// Response body failed to deserialize
    #[display("Failed to parse X response: {}", _0)]
    Parse(String),
}

impl XErrorKind {
    /// True for the 429 rate-limit rejection.
    ///
    /// The bot does not retry within a tick, but rate limits are logged at a
    /// distinct level since they resolve on their own by the next tick.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, XErrorKind::HttpError { status_code: 429, .. })
    }
}

/// X error with source location tracking.
///
/// # Examples
///
/// ```
/// use magpie_error::{XError, XErrorKind};
///
/// let err = XError::new(XErrorKind::HttpError {
///     status_code: 403,
///     message: "Forbidden".to_string(),
/// });
/// assert!(format!("{}", err).contains("403"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("X Error: {} at line {} in {}", kind, line, file)]
pub struct XError {
    /// The kind of error that occurred
    pub kind: XErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl XError {
    /// Create a new XError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: XErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
