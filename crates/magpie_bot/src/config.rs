//! Bot configuration, read once from the environment at startup.

use chrono::NaiveTime;
use magpie_error::{ConfigError, MagpieResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Writing style the generator asks the model for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    /// Hook, two or three supporting points, call to action
    #[default]
    Engaging,
    /// Plainer, strictly informative tone
    Informative,
}

impl FromStr for Persona {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "engaging" => Ok(Persona::Engaging),
            "informative" => Ok(Persona::Informative),
            other => Err(ConfigError::new(format!(
                "Unknown persona '{}' (expected 'engaging' or 'informative')",
                other
            ))),
        }
    }
}

/// Runtime-fixed bot parameters.
///
/// Built once from the environment, then moved into the orchestrator;
/// immutable for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    /// Daily publish quota
    pub posts_per_day: u32,
    /// Hours between post-creation ticks
    pub post_interval_hours: u64,
    /// Wall-clock time of the daily topic refresh
    pub refresh_time: NaiveTime,
    /// Writing style for generated posts
    pub persona: Persona,
    /// Gemini model override (backend default when None)
    pub model: Option<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            posts_per_day: 5,
            post_interval_hours: 3,
            refresh_time: NaiveTime::from_hms_opt(6, 0, 0).expect("06:00 is a valid time"),
            persona: Persona::default(),
            model: None,
        }
    }
}

impl BotConfig {
    /// Load configuration from the environment, applying defaults for unset
    /// tunables and failing fast on malformed values.
    ///
    /// Variables: `POSTS_PER_DAY` (default 5), `POST_INTERVAL_HOURS`
    /// (default 3, minimum 1), `REFRESH_TIME` as HH:MM (default 06:00),
    /// `MAGPIE_PERSONA` (default engaging), `MAGPIE_MODEL`.
    pub fn from_env() -> MagpieResult<Self> {
        let defaults = Self::default();
        Ok(Self {
            posts_per_day: parse_or(env_opt("POSTS_PER_DAY"), defaults.posts_per_day)?,
            post_interval_hours: nonzero(
                parse_or(env_opt("POST_INTERVAL_HOURS"), defaults.post_interval_hours)?,
                "POST_INTERVAL_HOURS",
            )?,
            refresh_time: parse_refresh_time(env_opt("REFRESH_TIME"), defaults.refresh_time)?,
            persona: match env_opt("MAGPIE_PERSONA") {
                Some(raw) => raw.parse()?,
                None => defaults.persona,
            },
            model: env_opt("MAGPIE_MODEL"),
        })
    }

    /// Interval between post-creation ticks.
    pub fn post_interval(&self) -> Duration {
        Duration::from_secs(self.post_interval_hours * 3600)
    }
}

fn env_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_or<T>(raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e| ConfigError::new(format!("Invalid numeric setting '{}': {}", value, e))),
        None => Ok(default),
    }
}

// A zero interval would stall the posting scheduler; treat it as malformed.
fn nonzero(value: u64, name: &str) -> Result<u64, ConfigError> {
    if value == 0 {
        return Err(ConfigError::new(format!("{} must be at least 1", name)));
    }
    Ok(value)
}

fn parse_refresh_time(raw: Option<String>, default: NaiveTime) -> Result<NaiveTime, ConfigError> {
    match raw {
        Some(value) => NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|e| {
            ConfigError::new(format!(
                "Invalid REFRESH_TIME '{}' (expected HH:MM): {}",
                value, e
            ))
        }),
        None => Ok(default),
    }
}
