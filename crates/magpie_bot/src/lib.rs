//! Orchestration and scheduling for the Magpie posting bot.
//!
//! This crate ties the generation and publishing seams together:
//! - **ContentGenerator**: turns prompts into topic lists and post drafts,
//!   degrading to fallbacks instead of failing
//! - **Orchestrator**: owns the daily topic set and post counter and decides
//!   what to generate and when
//! - **BotServer**: drives the periodic schedule and clean shutdown

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod generation;
mod orchestrator;
mod server;

pub use config::{BotConfig, Persona};
pub use generation::{ContentGenerator, FALLBACK_SINGLE_TOPIC, fallback_topics};
pub use orchestrator::Orchestrator;
pub use server::{BotMessage, BotServer};
