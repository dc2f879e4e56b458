use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Match, MatchStatus, TeamRef};
use crate::reminder::{ReminderSchedule, FAVORITE_TTL_HOURS};

/// Upper bound on simultaneously scheduled favorites per user. Enforced by
/// the persistence layer, published here so every caller agrees on it.
pub const MAX_FAVORITES: usize = 10;

/// A user's subscription to an upcoming match, as persisted by the
/// favorites store.
///
/// Team and competition fields are denormalized snapshots taken at creation
/// time so the favorites screen renders without re-fetching the match. There
/// is at most one entry per (user, match) pair, keyed by
/// [`document_key`](FavoriteEntry::document_key).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    pub user_id: String,
    pub match_id: u64,
    pub competition_name: String,
    pub competition_emblem: Option<String>,
    pub home_team: TeamRef,
    pub away_team: TeamRef,
    pub kickoff: DateTime<Utc>,
    pub venue: Option<String>,
    pub match_status: MatchStatus,
    pub reminder_minutes: i64,
    pub fire_at: DateTime<Utc>,
    pub added_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl FavoriteEntry {
    /// Build an entry from a match and an already-accepted reminder
    /// schedule (see [`schedule_reminder`](crate::reminder::schedule_reminder)).
    pub fn new(
        user_id: impl Into<String>,
        m: &Match,
        schedule: &ReminderSchedule,
        now: DateTime<Utc>,
    ) -> Self {
        let competition = m.competition.as_ref();
        Self {
            user_id: user_id.into(),
            match_id: m.id,
            competition_name: competition
                .and_then(|c| c.name.clone())
                .unwrap_or_else(|| "Football".to_string()),
            competition_emblem: competition.and_then(|c| c.emblem.clone()),
            home_team: m.home_team.clone(),
            away_team: m.away_team.clone(),
            kickoff: schedule.kickoff,
            venue: m.venue.clone(),
            match_status: m.status.clone(),
            reminder_minutes: schedule.lead_minutes,
            fire_at: schedule.fire_at,
            added_at: now,
            expires_at: schedule.kickoff + Duration::hours(FAVORITE_TTL_HOURS),
        }
    }

    /// Unique store key: at most one favorite per (user, match) pair.
    pub fn document_key(&self) -> String {
        format!("{}_{}", self.user_id, self.match_id)
    }

    /// Whether this entry is past its TTL and eligible for cleanup. A pure
    /// predicate; the scheduled cleanup job does the actual deletion.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
