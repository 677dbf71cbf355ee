//! Draft type: length-bounded candidate post text.

use serde::{Deserialize, Serialize};

/// Maximum post length accepted by the platform, in characters.
pub const MAX_POST_CHARS: usize = 280;

/// Characters kept when a long draft is truncated; the remaining three are
/// the ellipsis marker.
const TRUNCATED_PREFIX_CHARS: usize = 277;

/// Generated candidate post text prior to publishing.
///
/// A `Draft` is always within the platform length cap. Construction from raw
/// model output applies the post-processing rules:
/// - surrounding whitespace is trimmed,
/// - wrapping quotation marks the model tends to add are stripped,
/// - text longer than 280 characters is cut to its first 277 characters with
///   `"..."` appended, for a total of exactly 280.
///
/// # Examples
///
/// ```
/// use magpie_core::Draft;
///
/// let draft = Draft::from_model_output("\"Rust 1.80 is out! #rustlang\"\n");
/// assert_eq!(draft.as_str(), "Rust 1.80 is out! #rustlang");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub struct Draft(String);

impl Draft {
    /// Build a draft from raw model output, applying trimming, quote
    /// stripping, and the truncation rule.
    pub fn from_model_output(raw: &str) -> Self {
        let text = raw.trim().trim_matches('"').trim_matches('\'').trim();

        let char_count = text.chars().count();
        if char_count <= MAX_POST_CHARS {
            return Self(text.to_string());
        }

        let mut truncated: String = text.chars().take(TRUNCATED_PREFIX_CHARS).collect();
        truncated.push_str("...");
        Self(truncated)
    }

    /// The post text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the post in characters (not bytes).
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}
