//! Trait definitions for the AI backend and the publishing platform.

use crate::{GenerateRequest, GenerateResponse, PostReceipt};
use async_trait::async_trait;
use magpie_error::MagpieResult;

/// Core trait that AI backends must implement.
///
/// This is the bot's only view of the generative model: prompt in, text out.
/// Backends that support search grounding honor `GenerateRequest::grounded`.
#[async_trait]
pub trait ContentDriver: Send + Sync {
    /// Generate model output for a prompt.
    async fn generate(&self, req: &GenerateRequest) -> MagpieResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;
}

/// Trait for platforms that can publish a finished post.
#[async_trait]
pub trait SocialPublisher: Send + Sync {
    /// Submit text to the platform's creation endpoint.
    ///
    /// Returns the platform-assigned receipt on success. Failures (auth,
    /// rate limit, network) surface as errors; callers decide whether the
    /// failure is fatal or a skipped slot.
    async fn publish(&self, text: &str) -> MagpieResult<PostReceipt>;

    /// Platform name (e.g., "x").
    fn platform_name(&self) -> &'static str;
}
