//! Football companion data core: live scores, schedules, news, and match
//! reminder logic over football-data.org and NewsAPI.
//!
//! The clients ([`FootballDataClient`], [`NewsClient`]) fetch raw match and
//! news feeds. The pure modules turn raw matches into renderable view data
//! with no I/O and no ambient state: [`classify`](classify::classify)
//! resolves the authoritative score for a match's status,
//! [`estimate_minute`] approximates a live match's clock,
//! [`group_by_competition`] sections a match list for display, and
//! [`schedule_reminder`] decides when a favorite's reminder fires.

pub use classify::{classify, MatchSummary, ScoreValue};
pub use client::{FootballDataClient, NewsClient};
pub use error::{GoalflowError, Result};
pub use grouping::{group_by_competition, CompetitionGroup, CompetitionKey};
pub use minute::{estimate_minute, live_minute, LiveMinute};
pub use reminder::{
    is_expired, schedule_reminder, QuietHours, ReminderError, ReminderSchedule,
    DEFAULT_REMINDER_MINUTES,
};

pub mod classify;
pub mod client;
pub mod error;
mod football_data;
pub mod grouping;
pub(crate) mod http;
pub mod minute;
pub mod model;
mod news_api;
pub mod poll;
pub mod reminder;
