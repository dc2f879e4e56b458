//! Wall-clock approximation of a live match's elapsed minute.
//!
//! The upstream free plan carries no live clock feed, so screens derive an
//! approximate minute from the kickoff timestamp and the current time,
//! re-evaluating on their refresh tick. The estimator itself is stateless.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::model::Match;

/// Length of the half-time interval assumed to have passed once the second
/// half is under way.
const HALF_TIME_BREAK_MIN: i64 = 15;

/// An estimated match minute for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveMinute {
    Minute(i64),
    /// First-half stoppage window, displayed as `45+`.
    FirstHalfStoppage,
    /// Beyond regulation, displayed as `90+`.
    SecondHalfStoppage,
}

impl fmt::Display for LiveMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiveMinute::Minute(n) => write!(f, "{n}"),
            LiveMinute::FirstHalfStoppage => write!(f, "45+"),
            LiveMinute::SecondHalfStoppage => write!(f, "90+"),
        }
    }
}

/// Estimate the elapsed minute of a match from its kickoff instant.
///
/// Minute-for-minute through the first half, a `45+` window while the
/// interval is assumed to be running, second-half minutes shifted down by
/// the 15-minute break so the display continues 46..90, and `90+` past the
/// 105-minute mark. A kickoff in the future (clock skew) yields `None`
/// rather than a negative minute.
///
/// This is a heuristic with no stoppage-time awareness; it tolerates any
/// finite input and never fails.
pub fn estimate_minute(kickoff: DateTime<Utc>, now: DateTime<Utc>) -> Option<LiveMinute> {
    if now < kickoff {
        return None;
    }
    let elapsed = (now - kickoff).num_minutes();
    match elapsed {
        0..=45 => Some(LiveMinute::Minute(elapsed)),
        46..=60 => Some(LiveMinute::FirstHalfStoppage),
        61..=105 => Some(LiveMinute::Minute(elapsed - HALF_TIME_BREAK_MIN)),
        _ => Some(LiveMinute::SecondHalfStoppage),
    }
}

/// Minute for a match row. Only live matches get a running clock, and an
/// absent or malformed kickoff timestamp yields no minute at all.
pub fn live_minute(m: &Match, now: DateTime<Utc>) -> Option<LiveMinute> {
    if !m.status.is_live() {
        return None;
    }
    estimate_minute(m.utc_date?, now)
}
