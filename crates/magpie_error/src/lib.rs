//! Error types for the Magpie posting bot.
//!
//! This crate provides the foundation error types used throughout the Magpie
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use magpie_error::{MagpieResult, ConfigError};
//!
//! fn load_setting() -> MagpieResult<String> {
//!     Err(ConfigError::new("POSTS_PER_DAY is not a number"))?
//! }
//!
//! match load_setting() {
//!     Ok(value) => println!("Got: {}", value),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod social;

pub use config::ConfigError;
pub use error::{MagpieError, MagpieErrorKind, MagpieResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use social::{XError, XErrorKind};
