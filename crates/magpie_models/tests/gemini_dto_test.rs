// Tests for the Gemini request/response wire format.
//
// These validate the JSON shapes sent to and parsed from the
// `generateContent` endpoint without making network calls.

use magpie_models::{
    GeminiContent, GeminiGenerationConfig, GeminiRequest, GeminiResponse, GeminiTool,
};

/// A grounded request serializes the search tool and camelCase config key.
#[test]
fn grounded_request_wire_shape() {
    let request = GeminiRequest::builder()
        .contents(vec![GeminiContent::user("Find trending topics")])
        .tools(Some(vec![GeminiTool::default()]))
        .generation_config(Some(GeminiGenerationConfig {
            temperature: Some(0.7),
            max_output_tokens: None,
        }))
        .build()
        .expect("request should build");

    let json = serde_json::to_value(&request).expect("request should serialize");

    assert_eq!(json["contents"][0]["role"], "user");
    assert_eq!(json["contents"][0]["parts"][0]["text"], "Find trending topics");
    assert!(json["tools"][0]["google_search"].is_object());
    assert!((json["generationConfig"]["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    assert!(json["generationConfig"].get("maxOutputTokens").is_none());
}

/// An ungrounded request omits the tools array entirely.
#[test]
fn ungrounded_request_omits_tools() {
    let request = GeminiRequest::builder()
        .contents(vec![GeminiContent::user("Say 'ok'")])
        .build()
        .expect("request should build");

    let json = serde_json::to_value(&request).expect("request should serialize");
    assert!(json.get("tools").is_none());
    assert!(json.get("generationConfig").is_none());
}

/// Response text concatenates the parts of the first candidate.
#[test]
fn response_text_joins_first_candidate_parts() {
    let body = r##"{
        "candidates": [
            {
                "content": {
                    "role": "model",
                    "parts": [
                        {"text": "Rust 1.80 released "},
                        {"text": "#rustlang"}
                    ]
                },
                "finishReason": "STOP"
            }
        ]
    }"##;

    let response: GeminiResponse = serde_json::from_str(body).expect("response should parse");
    assert_eq!(response.text(), "Rust 1.80 released #rustlang");
}

/// A response with no candidates yields empty text rather than a panic.
#[test]
fn empty_response_yields_empty_text() {
    let response: GeminiResponse = serde_json::from_str("{}").expect("response should parse");
    assert_eq!(response.text(), "");
}

/// Unknown response fields (grounding metadata, usage) are tolerated.
#[test]
fn extra_response_fields_are_ignored() {
    let body = r#"{
        "candidates": [
            {
                "content": {"role": "model", "parts": [{"text": "ok"}]},
                "finishReason": "STOP",
                "groundingMetadata": {"webSearchQueries": ["query"]}
            }
        ],
        "usageMetadata": {"promptTokenCount": 12}
    }"#;

    let response: GeminiResponse = serde_json::from_str(body).expect("response should parse");
    assert_eq!(response.text(), "ok");
}
