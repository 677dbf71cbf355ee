//! Gemini backend integration for the Magpie posting bot.
//!
//! Provides [`GeminiClient`], a REST client for the Gemini `generateContent`
//! endpoint with Google Search grounding, implementing the
//! [`magpie_core::ContentDriver`] seam.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{
    DEFAULT_GEMINI_MODEL, GeminiCandidate, GeminiClient, GeminiContent, GeminiGenerationConfig,
    GeminiPart, GeminiRequest, GeminiRequestBuilder, GeminiResponse, GeminiTool, GoogleSearch,
};
