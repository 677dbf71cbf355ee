//! Configuration error types.

/// Configuration error with source location.
///
/// Configuration errors are fatal: the bot refuses to start scheduling work
/// when a required credential or tunable is missing or malformed.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use magpie_error::ConfigError;
    ///
    /// let err = ConfigError::new("TWITTER_API_KEY not set");
    /// assert!(err.message.contains("TWITTER_API_KEY"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
