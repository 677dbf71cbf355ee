//! X API v2 tweet-creation data transfer objects.

use serde::{Deserialize, Serialize};

/// Request body for `POST /2/tweets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    /// Post text, at most 280 characters
    pub text: String,
}

/// Payload of a successful `POST /2/tweets` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostData {
    /// Platform-assigned post identifier
    pub id: String,
    /// Post text as stored
    pub text: String,
}

/// Response body for `POST /2/tweets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostResponse {
    /// Created post
    pub data: PostData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_response_parses() {
        let body = r#"{"data": {"id": "1849000000000000000", "text": "hello", "edit_history_tweet_ids": ["1849000000000000000"]}}"#;
        let response: CreatePostResponse = serde_json::from_str(body).expect("should parse");
        assert_eq!(response.data.id, "1849000000000000000");
        assert_eq!(response.data.text, "hello");
    }

    #[test]
    fn request_serializes_text_only() {
        let request = CreatePostRequest {
            text: "A post".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&request).expect("should serialize"),
            r#"{"text":"A post"}"#
        );
    }
}
