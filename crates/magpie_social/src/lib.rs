//! X (Twitter) API v2 publishing client for the Magpie posting bot.
//!
//! Provides [`XClient`], which signs `POST /2/tweets` requests with
//! OAuth 1.0a user context and implements the
//! [`magpie_core::SocialPublisher`] seam.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod dto;
mod oauth;

pub use client::{XClient, XCredentials};
pub use dto::{CreatePostRequest, CreatePostResponse, PostData};
pub use oauth::OauthToken;
