//! Google Gemini REST API implementation.

mod client;
mod dto;

pub use client::{DEFAULT_GEMINI_MODEL, GeminiClient};
pub use dto::{
    GeminiCandidate, GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiRequest,
    GeminiRequestBuilder, GeminiResponse, GeminiTool, GoogleSearch,
};
