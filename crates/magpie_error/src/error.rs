//! Top-level error wrapper types.

use crate::{ConfigError, GeminiError, XError};

/// This is the foundation error enum for the Magpie workspace.
///
/// # Examples
///
/// ```
/// use magpie_error::{MagpieError, ConfigError};
///
/// let config_err = ConfigError::new("missing credential");
/// let err: MagpieError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MagpieErrorKind {
    /// Configuration error (fatal at startup)
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini backend error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// X API error
    #[from(XError)]
    X(XError),
}

/// Magpie error with kind discrimination.
///
/// # Examples
///
/// ```
/// use magpie_error::{MagpieResult, ConfigError};
///
/// fn might_fail() -> MagpieResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Magpie Error: {}", _0)]
pub struct MagpieError(Box<MagpieErrorKind>);

impl MagpieError {
    /// Create a new error from a kind.
    pub fn new(kind: MagpieErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MagpieErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to MagpieErrorKind
impl<T> From<T> for MagpieError
where
    T: Into<MagpieErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Magpie operations.
///
/// # Examples
///
/// ```
/// use magpie_error::{MagpieResult, ConfigError};
///
/// fn refresh_time() -> MagpieResult<String> {
///     Err(ConfigError::new("REFRESH_TIME is not HH:MM"))?
/// }
/// ```
pub type MagpieResult<T> = std::result::Result<T, MagpieError>;
