//! Scheduling loop: periodic jobs feeding a single sequential consumer.

use crate::orchestrator::Orchestrator;
use chrono::{Local, NaiveDateTime, NaiveTime, TimeDelta};
use magpie_core::{ContentDriver, SocialPublisher};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval, sleep};
use tracing::{error, info, instrument};

/// Jobs delivered to the orchestrator loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotMessage {
    /// Replace the daily topic set and reset the counter
    Refresh,
    /// Generate and publish the next post
    PostNext,
    /// Stop the loop cleanly
    Shutdown,
}

/// Drives the orchestrator on a schedule.
///
/// Two producer tasks (a daily wall-clock refresh and a fixed post interval)
/// and a ctrl-c watcher send [`BotMessage`]s over an mpsc channel. A single
/// consumer executes jobs sequentially, so the refresh and post-creation
/// never overlap and the orchestrator's state needs no locking.
pub struct BotServer<D: ContentDriver, P: SocialPublisher> {
    orchestrator: Orchestrator<D, P>,
}

impl<D, P> BotServer<D, P>
where
    D: ContentDriver + 'static,
    P: SocialPublisher + 'static,
{
    /// Creates a new bot server around an orchestrator.
    pub fn new(orchestrator: Orchestrator<D, P>) -> Self {
        Self { orchestrator }
    }

    /// Run the bot until ctrl-c.
    ///
    /// Performs one immediate refresh and one immediate post so the first
    /// post is not delayed by the full interval, then processes scheduled
    /// jobs indefinitely.
    #[instrument(skip(self))]
    pub async fn run(mut self) {
        info!("Starting bot server");

        self.orchestrator.refresh_daily_topics().await;
        self.orchestrator.create_and_post().await;

        let (tx, mut rx) = mpsc::channel(32);

        Self::spawn_refresh_scheduler(self.orchestrator.config().refresh_time, tx.clone());
        Self::spawn_posting_scheduler(self.orchestrator.config().post_interval(), tx.clone());
        Self::spawn_shutdown_watcher(tx);

        info!(
            interval_hours = self.orchestrator.config().post_interval_hours,
            posts_per_day = self.orchestrator.config().posts_per_day,
            "Schedule registered, press ctrl-c to stop"
        );

        while let Some(msg) = rx.recv().await {
            match msg {
                BotMessage::Refresh => self.orchestrator.refresh_daily_topics().await,
                BotMessage::PostNext => self.orchestrator.create_and_post().await,
                BotMessage::Shutdown => {
                    info!("Bot stopped by user");
                    break;
                }
            }
        }
    }

    /// Fires a refresh at the configured wall-clock time each day.
    fn spawn_refresh_scheduler(at: NaiveTime, tx: mpsc::Sender<BotMessage>) {
        tokio::spawn(async move {
            loop {
                let delay = delay_until_next(Local::now().naive_local(), at);
                info!(delay_secs = delay.as_secs(), "Next topic refresh scheduled");
                sleep(delay).await;
                if tx.send(BotMessage::Refresh).await.is_err() {
                    error!("Bot channel closed, refresh scheduler exiting");
                    break;
                }
            }
        });
    }

    /// Fires a post-creation tick every interval.
    fn spawn_posting_scheduler(every: Duration, tx: mpsc::Sender<BotMessage>) {
        tokio::spawn(async move {
            let mut ticker = interval(every);
            // The first tick completes immediately; the immediate post
            // already happened in run(), so skip it.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(BotMessage::PostNext).await.is_err() {
                    error!("Bot channel closed, posting scheduler exiting");
                    break;
                }
            }
        });
    }

    /// Translates ctrl-c into a clean shutdown message.
    fn spawn_shutdown_watcher(tx: mpsc::Sender<BotMessage>) {
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = tx.send(BotMessage::Shutdown).await;
            }
        });
    }
}

/// Time until the next occurrence of `at`, from `now`.
///
/// If today's occurrence has already passed (or is this instant), the next
/// one is tomorrow.
fn delay_until_next(now: NaiveDateTime, at: NaiveTime) -> Duration {
    let today = now.date().and_time(at);
    let next = if today > now {
        today
    } else {
        today + TimeDelta::days(1)
    };
    (next - now).to_std().unwrap_or(Duration::ZERO)
}
