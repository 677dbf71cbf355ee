// Orchestrator behavior: quota, round-robin, and failure idempotence.
//
// All tests run against scripted doubles; no network calls.

mod test_utils;

use magpie_bot::{BotConfig, ContentGenerator, FALLBACK_SINGLE_TOPIC, Orchestrator, Persona, fallback_topics};
use test_utils::{RecordingPublisher, ScriptedDriver};

fn orchestrator(
    posts_per_day: u32,
    driver: &ScriptedDriver,
    publisher: &RecordingPublisher,
) -> Orchestrator<ScriptedDriver, RecordingPublisher> {
    let config = BotConfig {
        posts_per_day,
        ..BotConfig::default()
    };
    let generator = ContentGenerator::new(driver.clone(), Persona::Engaging);
    Orchestrator::new(config, generator, publisher.clone())
}

/// The counter never exceeds the daily quota, however many ticks arrive.
#[tokio::test]
async fn counter_never_exceeds_daily_limit() {
    let driver = ScriptedDriver::new();
    let publisher = RecordingPublisher::new();
    driver.push_ok(r#"["A", "B"]"#);
    for _ in 0..3 {
        driver.push_ok("post text");
    }

    let mut bot = orchestrator(3, &driver, &publisher);
    for _ in 0..6 {
        bot.create_and_post().await;
    }

    assert_eq!(bot.posts_today(), 3);
    assert_eq!(publisher.calls(), 3);
}

/// topics = ["A", "B"], quota 3: selection order is A, B, A.
#[tokio::test]
async fn round_robin_revisits_topics_in_order() {
    let driver = ScriptedDriver::new();
    let publisher = RecordingPublisher::new();
    driver.push_ok(r#"["A", "B"]"#);
    for _ in 0..3 {
        driver.push_ok("post text");
    }

    let mut bot = orchestrator(3, &driver, &publisher);
    for _ in 0..3 {
        bot.create_and_post().await;
    }

    let prompts = driver.prompts();
    // prompts[0] is the topic-discovery request; the rest are post drafts.
    assert_eq!(prompts.len(), 4);
    assert!(prompts[1].contains("about: A"));
    assert!(prompts[2].contains("about: B"));
    assert!(prompts[3].contains("about: A"));
}

/// A failed publish leaves the counter unchanged and is not retried within
/// the tick.
#[tokio::test]
async fn failed_publish_leaves_counter_unchanged() {
    let driver = ScriptedDriver::new();
    let publisher = RecordingPublisher::new();
    publisher.set_fail(true);
    driver.push_ok(r#"["A"]"#);
    driver.push_ok("post text");

    let mut bot = orchestrator(3, &driver, &publisher);
    bot.create_and_post().await;

    assert_eq!(bot.posts_today(), 0);
    assert_eq!(publisher.calls(), 1);
    assert!(publisher.posted().is_empty());
}

/// An absent draft skips the slot without touching the publisher.
#[tokio::test]
async fn absent_draft_skips_publisher() {
    let driver = ScriptedDriver::new();
    let publisher = RecordingPublisher::new();
    driver.push_ok(r#"["A"]"#);
    driver.push_err(); // post generation fails

    let mut bot = orchestrator(3, &driver, &publisher);
    bot.create_and_post().await;

    assert_eq!(bot.posts_today(), 0);
    assert_eq!(publisher.calls(), 0);
}

/// A failing backend yields the fixed five-topic fallback set.
#[tokio::test]
async fn topic_discovery_failure_uses_fallback_set() {
    let driver = ScriptedDriver::new();
    let publisher = RecordingPublisher::new();
    driver.push_err();

    let mut bot = orchestrator(5, &driver, &publisher);
    bot.refresh_daily_topics().await;

    assert_eq!(bot.daily_topics(), fallback_topics().as_slice());
}

/// Refresh always resets the counter, whatever its prior value.
#[tokio::test]
async fn refresh_resets_counter() {
    let driver = ScriptedDriver::new();
    let publisher = RecordingPublisher::new();
    driver.push_ok(r#"["A"]"#);
    driver.push_ok("post text");
    driver.push_ok(r#"["B"]"#); // second refresh

    let mut bot = orchestrator(5, &driver, &publisher);
    bot.create_and_post().await;
    assert_eq!(bot.posts_today(), 1);

    bot.refresh_daily_topics().await;
    assert_eq!(bot.posts_today(), 0);
    assert_eq!(bot.daily_topics().len(), 1);
}

/// The first post tick lazily refreshes an empty topic set.
#[tokio::test]
async fn empty_topic_set_refreshes_before_posting() {
    let driver = ScriptedDriver::new();
    let publisher = RecordingPublisher::new();
    driver.push_ok(r#"["Only topic"]"#);
    driver.push_ok("post text");

    let mut bot = orchestrator(5, &driver, &publisher);
    assert!(bot.daily_topics().is_empty());

    bot.create_and_post().await;
    assert_eq!(bot.daily_topics().len(), 1);
    assert_eq!(bot.posts_today(), 1);
}

/// A long draft reaches the publisher already truncated to the cap.
#[tokio::test]
async fn published_text_respects_length_cap() {
    let driver = ScriptedDriver::new();
    let publisher = RecordingPublisher::new();
    driver.push_ok(r#"["A"]"#);
    driver.push_ok(&"x".repeat(300));

    let mut bot = orchestrator(5, &driver, &publisher);
    bot.create_and_post().await;

    let posted = publisher.posted();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].chars().count(), 280);
    assert!(posted[0].ends_with("..."));
}

/// Single-run mode posts once and falls back to the fixed topic on error.
#[tokio::test]
async fn single_run_posts_once_with_fallback_topic() {
    let driver = ScriptedDriver::new();
    let publisher = RecordingPublisher::new();
    driver.push_err(); // topic discovery fails
    driver.push_ok("single post text");

    let mut bot = orchestrator(5, &driver, &publisher);
    bot.run_single().await;

    assert_eq!(publisher.calls(), 1);
    let prompts = driver.prompts();
    assert!(prompts[1].contains(FALLBACK_SINGLE_TOPIC));
}
