//! Reminder timing for favorited matches.
//!
//! Pure policy only: given a kickoff, a lead time, the current instant, and
//! an explicit local timezone, decide when (or whether) a reminder fires.
//! Persisting the favorite and delivering the notification are the
//! collaborators' jobs.

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc};

/// Default lead time before kickoff, in minutes.
pub const DEFAULT_REMINDER_MINUTES: i64 = 15;

/// How long after kickoff a favorite stays around before cleanup may
/// remove it.
pub const FAVORITE_TTL_HOURS: i64 = 24;

/// Why a reminder could not be scheduled. Surfaced to the user as an
/// actionable message, never retried automatically.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderError {
    #[error("the match has already started")]
    MatchAlreadyStarted,
    #[error("the reminder time has already passed")]
    ReminderInPast,
}

/// Local-time window during which reminders are deferred to the morning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuietHours {
    /// First quiet hour of the evening (inclusive).
    pub start_hour: u32,
    /// Hour at which mornings begin (exclusive end of the window).
    pub end_hour: u32,
    /// Hour a deferred reminder snaps to.
    pub snap_hour: u32,
}

impl Default for QuietHours {
    /// The fixed 23:00-07:00 window with an 08:00 snap.
    fn default() -> Self {
        Self {
            start_hour: 23,
            end_hour: 7,
            snap_hour: 8,
        }
    }
}

impl QuietHours {
    fn covers(&self, hour: u32) -> bool {
        if self.start_hour <= self.end_hour {
            (self.start_hour..self.end_hour).contains(&hour)
        } else {
            hour >= self.start_hour || hour < self.end_hour
        }
    }
}

/// An accepted reminder: when it fires, and the inputs it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderSchedule {
    pub kickoff: DateTime<Utc>,
    pub lead_minutes: i64,
    pub fire_at: DateTime<Utc>,
}

/// Compute when a reminder for a match kicking off at `kickoff` should fire.
///
/// Rejects matches that have already started and lead times that land in
/// the past. A fire time whose local hour falls inside `quiet` is snapped to
/// `snap_hour:00` local time on the same local calendar day; the lead time
/// is deliberately not preserved across the snap.
pub fn schedule_reminder<Tz: TimeZone>(
    kickoff: DateTime<Utc>,
    lead_minutes: i64,
    now: DateTime<Utc>,
    tz: &Tz,
    quiet: QuietHours,
) -> Result<ReminderSchedule, ReminderError> {
    if kickoff <= now {
        return Err(ReminderError::MatchAlreadyStarted);
    }

    let mut fire_at = kickoff - Duration::minutes(lead_minutes);
    if fire_at <= now {
        return Err(ReminderError::ReminderInPast);
    }

    let local = fire_at.with_timezone(tz);
    if quiet.covers(local.hour()) {
        let date = local.date_naive();
        // earliest() resolves DST gaps/folds; a snap hour that does not
        // exist locally leaves the fire time unadjusted.
        if let Some(snapped) = tz
            .with_ymd_and_hms(date.year(), date.month(), date.day(), quiet.snap_hour, 0, 0)
            .earliest()
        {
            fire_at = snapped.with_timezone(&Utc);
        }
    }

    Ok(ReminderSchedule {
        kickoff,
        lead_minutes,
        fire_at,
    })
}

/// Whether a favorite for a match kicking off at `kickoff` is stale and
/// eligible for cleanup.
pub fn is_expired(kickoff: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now > kickoff + Duration::hours(FAVORITE_TTL_HOURS)
}
