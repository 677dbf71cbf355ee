//! Topic type for daily post subjects.

use serde::{Deserialize, Serialize};

/// A short subject string used as the seed for generating a social post.
///
/// Topics are ephemeral: the orchestrator holds at most one day's worth in
/// memory and replaces them wholesale on refresh.
///
/// # Examples
///
/// ```
/// use magpie_core::Topic;
///
/// let topic = Topic::new("Latest AI developments");
/// assert_eq!(topic.as_str(), "Latest AI developments");
/// assert_eq!(format!("{}", topic), "Latest AI developments");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
pub struct Topic(String);

impl Topic {
    /// Create a new topic from a subject string.
    pub fn new(subject: impl Into<String>) -> Self {
        Self(subject.into())
    }

    /// The subject text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Topic {
    fn from(subject: &str) -> Self {
        Self(subject.to_string())
    }
}
