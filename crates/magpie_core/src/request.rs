//! Request and response types for content generation and publishing.

use serde::{Deserialize, Serialize};

/// A generation request sent to the AI backend.
///
/// # Examples
///
/// ```
/// use magpie_core::GenerateRequest;
///
/// let request = GenerateRequest {
///     prompt: "Find the top 5 trending topics today".to_string(),
///     temperature: Some(0.7),
///     grounded: true,
///     model: None,
/// };
///
/// assert!(request.grounded);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GenerateRequest {
    /// The prompt text to send
    pub prompt: String,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f32>,
    /// Whether to augment generation with live web search
    pub grounded: bool,
    /// Model identifier to use (backend default when None)
    pub model: Option<String>,
}

/// The text produced by the AI backend for a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated text, as returned by the model
    pub text: String,
}

/// Confirmation returned by the platform after a successful publish.
///
/// # Examples
///
/// ```
/// use magpie_core::PostReceipt;
///
/// let receipt = PostReceipt {
///     id: "1849000000000000000".to_string(),
///     text: "Posted!".to_string(),
/// };
/// assert!(!receipt.id.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostReceipt {
    /// Platform-assigned identifier of the created post
    pub id: String,
    /// Text of the post as stored by the platform
    pub text: String,
}
