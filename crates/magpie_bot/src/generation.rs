//! Content generation: topic discovery and post drafting.
//!
//! Both operations are best-effort. Backend failures degrade to a fallback
//! topic list or an absent draft so the schedule keeps running across days.

use crate::config::Persona;
use magpie_core::{ContentDriver, Draft, GenerateRequest, Topic};
use tracing::{debug, info, instrument, warn};

/// How many topics one daily refresh asks for.
const TOPIC_COUNT: usize = 5;

/// Sampling temperature for topic discovery.
const TOPIC_TEMPERATURE: f32 = 0.7;

/// Sampling temperature for post drafting.
const POST_TEMPERATURE: f32 = 0.8;

/// Fallback used by the single-topic path when the backend is unavailable.
pub const FALLBACK_SINGLE_TOPIC: &str = "Latest developments in AI technology";

/// The fixed topic list used when topic discovery fails.
pub fn fallback_topics() -> Vec<Topic> {
    [
        "Latest AI developments",
        "Tech industry news",
        "Space exploration updates",
        "Cryptocurrency trends",
        "Healthcare innovation",
    ]
    .into_iter()
    .map(Topic::from)
    .collect()
}

/// Wraps the AI backend and turns prompts into topics and drafts.
pub struct ContentGenerator<D: ContentDriver> {
    driver: D,
    persona: Persona,
}

impl<D: ContentDriver> ContentGenerator<D> {
    /// Creates a new generator over a backend driver.
    pub fn new(driver: D, persona: Persona) -> Self {
        Self { driver, persona }
    }

    /// Find today's trending topics with a search-grounded request.
    ///
    /// Never fails: backend errors and unparsable responses degrade to the
    /// fixed fallback list.
    #[instrument(skip(self))]
    pub async fn find_trending_topics(&self) -> Vec<Topic> {
        let request = GenerateRequest {
            prompt: topics_prompt(),
            temperature: Some(TOPIC_TEMPERATURE),
            grounded: true,
            model: None,
        };

        let raw = match self.driver.generate(&request).await {
            Ok(response) => response.text,
            Err(e) => {
                warn!(error = %e, "Topic discovery failed, using fallback topics");
                return fallback_topics();
            }
        };

        match parse_topic_list(&raw) {
            Some(topics) => {
                info!(count = topics.len(), "Found trending topics");
                for (i, topic) in topics.iter().enumerate() {
                    debug!(index = i + 1, topic = %topic, "Trending topic");
                }
                topics
            }
            None => {
                warn!(response = %raw, "Could not parse topic list, using fallback topics");
                fallback_topics()
            }
        }
    }

    /// Find one trending topic as plain text (single-run mode).
    #[instrument(skip(self))]
    pub async fn find_trending_topic(&self) -> Topic {
        let request = GenerateRequest {
            prompt: single_topic_prompt(),
            temperature: Some(TOPIC_TEMPERATURE),
            grounded: true,
            model: None,
        };

        match self.driver.generate(&request).await {
            Ok(response) => Topic::new(response.text.trim()),
            Err(e) => {
                warn!(error = %e, "Topic discovery failed, using fallback topic");
                Topic::new(FALLBACK_SINGLE_TOPIC)
            }
        }
    }

    /// Draft a post about a topic with a search-grounded request.
    ///
    /// Returns `None` on backend failure so the caller can skip this cycle.
    #[instrument(skip(self), fields(topic = %topic))]
    pub async fn generate_post(&self, topic: &Topic) -> Option<Draft> {
        let request = GenerateRequest {
            prompt: post_prompt(topic, self.persona),
            temperature: Some(POST_TEMPERATURE),
            grounded: true,
            model: None,
        };

        match self.driver.generate(&request).await {
            Ok(response) => {
                let draft = Draft::from_model_output(&response.text);
                info!(chars = draft.char_count(), "Generated post draft");
                Some(draft)
            }
            Err(e) => {
                warn!(error = %e, "Post generation failed, skipping this cycle");
                None
            }
        }
    }
}

/// Parse a model response as a JSON array of topic strings.
///
/// Tolerates responses wrapped in markdown code fences. Returns `None` for
/// anything that is not a non-empty array of strings.
fn parse_topic_list(raw: &str) -> Option<Vec<Topic>> {
    let cleaned = strip_code_fences(raw);
    let subjects: Vec<String> = serde_json::from_str(&cleaned).ok()?;
    if subjects.is_empty() {
        return None;
    }
    Some(subjects.into_iter().map(Topic::new).collect())
}

/// Remove markdown code fences the model tends to wrap JSON in.
fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

fn topics_prompt() -> String {
    format!(
        "Search the web and find the {count} MOST trending topics RIGHT NOW (today) across:\n\
         - Technology & AI\n\
         - Business & Economy\n\
         - Entertainment & Pop Culture\n\
         - Science & Innovation\n\
         - Breaking News\n\n\
         Focus on topics that are currently trending TODAY, have high engagement \
         potential, are newsworthy and timely, and suit professional social posts.\n\n\
         Return ONLY a JSON array with {count} topics in this exact format:\n\
         [\"topic1\", \"topic2\", \"topic3\", \"topic4\", \"topic5\"]\n\n\
         Make each topic specific and timely (e.g., \"OpenAI's new GPT-5 announcement\" \
         instead of just \"AI\").",
        count = TOPIC_COUNT
    )
}

fn single_topic_prompt() -> String {
    "Search the web and find ONE highly trending topic RIGHT NOW (today) that would make \
     an engaging social post. It should be currently trending, newsworthy, and suitable \
     for a professional account.\n\n\
     Return ONLY the topic as plain text, nothing else. Make it specific and timely."
        .to_string()
}

fn post_prompt(topic: &Topic, persona: Persona) -> String {
    let style = match persona {
        Persona::Engaging => {
            "- Open with a hook, follow with 2-3 supporting points, close with a call to action\n\
             - Professional yet conversational tone"
        }
        Persona::Informative => {
            "- Plain, informative tone; lead with the single most important fact\n\
             - No rhetorical questions or calls to action"
        }
    };

    format!(
        "Search the web for current information about: {topic}\n\n\
         Then create an engaging, accurate social post based on the LATEST information \
         you find.\n\n\
         Requirements:\n\
         - Maximum 280 characters\n\
         - Use CURRENT, ACCURATE information from your search\n\
         - Include 2-3 relevant hashtags\n\
         {style}\n\
         - Make it timely and newsworthy\n\
         - No emojis unless very appropriate\n\n\
         Return ONLY the post text, nothing else. No explanations."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_json_array_parses() {
        let raw = "```json\n[\"a\", \"b\", \"c\", \"d\", \"e\"]\n```";
        let topics = parse_topic_list(raw).expect("should parse");
        assert_eq!(topics.len(), 5);
        assert_eq!(topics[0].as_str(), "a");
    }

    #[test]
    fn bare_json_array_parses() {
        let topics = parse_topic_list("[\"one\", \"two\"]").expect("should parse");
        assert_eq!(topics.len(), 2);
    }

    #[test]
    fn prose_response_is_rejected() {
        assert!(parse_topic_list("Here are some topics: AI, space").is_none());
    }

    #[test]
    fn empty_array_is_rejected() {
        assert!(parse_topic_list("[]").is_none());
    }

    #[test]
    fn fallback_list_has_five_topics() {
        assert_eq!(fallback_topics().len(), 5);
    }

    #[test]
    fn fence_stripping_preserves_content() {
        assert_eq!(strip_code_fences("```json\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fences("plain text"), "plain text");
    }

    #[test]
    fn post_prompt_mentions_topic_and_persona_style() {
        let topic = Topic::new("Mars rover findings");
        let engaging = post_prompt(&topic, Persona::Engaging);
        assert!(engaging.contains("Mars rover findings"));
        assert!(engaging.contains("call to action"));

        let informative = post_prompt(&topic, Persona::Informative);
        assert!(informative.contains("No rhetorical questions"));
    }
}
