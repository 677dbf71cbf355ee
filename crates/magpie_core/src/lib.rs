//! Core data types for the Magpie posting bot.
//!
//! This crate provides the foundation data types shared by the generation
//! and publishing sides of the bot, plus the two driver traits that define
//! the seams to external services.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod draft;
mod request;
mod topic;
mod traits;

pub use draft::{Draft, MAX_POST_CHARS};
pub use request::{GenerateRequest, GenerateResponse, PostReceipt};
pub use topic::Topic;
pub use traits::{ContentDriver, SocialPublisher};
