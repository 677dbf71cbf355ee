//! The orchestrator: daily topic state, post quota, and the publish cycle.

use crate::config::BotConfig;
use crate::generation::ContentGenerator;
use magpie_core::{ContentDriver, SocialPublisher, Topic};
use tracing::{error, info, instrument, warn};

/// Owns the daily topic set and post counter and ties the generator and
/// publisher together.
///
/// One day's cycle: refresh replaces the topic set and zeroes the counter;
/// each successful publish increments it; once the counter reaches the daily
/// quota, post ticks are no-ops until the next refresh. Failed generation or
/// publish attempts leave the state unchanged, so the next scheduled tick
/// retries the same slot.
pub struct Orchestrator<D: ContentDriver, P: SocialPublisher> {
    config: BotConfig,
    generator: ContentGenerator<D>,
    publisher: P,
    daily_topics: Vec<Topic>,
    posts_today: u32,
}

impl<D: ContentDriver, P: SocialPublisher> Orchestrator<D, P> {
    /// Creates a new orchestrator with an empty topic set.
    pub fn new(config: BotConfig, generator: ContentGenerator<D>, publisher: P) -> Self {
        Self {
            config,
            generator,
            publisher,
            daily_topics: Vec::new(),
            posts_today: 0,
        }
    }

    /// Replace the topic set with a fresh one and reset the counter.
    #[instrument(skip(self))]
    pub async fn refresh_daily_topics(&mut self) {
        info!("Refreshing daily topics");
        self.daily_topics = self.generator.find_trending_topics().await;
        self.posts_today = 0;
    }

    /// Generate and publish one post, honoring the daily quota.
    ///
    /// Round-robin selection (`counter % topics.len()`) may revisit a topic
    /// when the quota exceeds the topic-set size.
    #[instrument(skip(self), fields(posts_today = self.posts_today))]
    pub async fn create_and_post(&mut self) {
        if self.posts_today >= self.config.posts_per_day {
            info!(
                limit = self.config.posts_per_day,
                "Daily post limit reached, waiting for next refresh"
            );
            return;
        }

        if self.daily_topics.is_empty() {
            self.refresh_daily_topics().await;
        }
        if self.daily_topics.is_empty() {
            warn!("No topics available, skipping this cycle");
            return;
        }

        let index = self.posts_today as usize % self.daily_topics.len();
        let topic = self.daily_topics[index].clone();
        info!(
            post = self.posts_today + 1,
            limit = self.config.posts_per_day,
            topic = %topic,
            "Creating post"
        );

        let Some(draft) = self.generator.generate_post(&topic).await else {
            // Slot skipped; the next tick retries with unchanged state.
            return;
        };

        match self.publisher.publish(draft.as_str()).await {
            Ok(receipt) => {
                self.posts_today += 1;
                info!(
                    id = %receipt.id,
                    progress = format!("{}/{}", self.posts_today, self.config.posts_per_day),
                    "Post published"
                );
            }
            Err(e) => {
                error!(error = %e, "Publish failed, slot skipped");
            }
        }
    }

    /// Single-run mode: one topic, one post, no schedule.
    #[instrument(skip(self))]
    pub async fn run_single(&mut self) {
        let topic = self.generator.find_trending_topic().await;
        info!(topic = %topic, "Single-run topic selected");

        let Some(draft) = self.generator.generate_post(&topic).await else {
            warn!("Failed to generate a post, nothing published");
            return;
        };

        match self.publisher.publish(draft.as_str()).await {
            Ok(receipt) => info!(id = %receipt.id, "Single-run post published"),
            Err(e) => error!(error = %e, "Single-run publish failed"),
        }
    }

    /// Number of successful publishes since the last refresh.
    pub fn posts_today(&self) -> u32 {
        self.posts_today
    }

    /// The current daily topic set.
    pub fn daily_topics(&self) -> &[Topic] {
        &self.daily_topics
    }

    /// The bot configuration.
    pub fn config(&self) -> &BotConfig {
        &self.config
    }
}
