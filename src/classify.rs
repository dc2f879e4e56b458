//! Status-aware score selection for rendering a match row.

use std::fmt;

use crate::model::{Match, MatchStatus, Score};

/// A score cell: either a reported goal count or "unknown".
///
/// Finished matches with no reported full-time score must show a
/// placeholder rather than `0`, since `0` is a legitimate final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreValue {
    Known(i64),
    Unknown,
}

impl fmt::Display for ScoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreValue::Known(n) => write!(f, "{n}"),
            ScoreValue::Unknown => write!(f, "-"),
        }
    }
}

/// Everything a match row needs: resolved scores, a display label, and
/// whether the match is currently being played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub home_score: ScoreValue,
    pub away_score: ScoreValue,
    pub status_label: String,
    pub is_live: bool,
}

/// Select the authoritative score fields for a match based on its lifecycle
/// status.
///
/// Finished matches read `fullTime` only (`regularTime` can be null or 0-0
/// for a finished match, so it must not be consulted). Live matches prefer
/// `regularTime`, then `fullTime`, then the flat shape, and assume 0-0 when
/// nothing is reported at all. Every other status shows placeholders.
///
/// Pure and total: never fails, any missing field degrades to its
/// documented fallback.
pub fn classify(m: &Match) -> MatchSummary {
    let (home_score, away_score) = if m.status.is_live() {
        live_score(&m.score)
    } else {
        // FINISHED and all pre/abandoned states share the placeholder policy.
        reported_final_score(&m.score)
    };

    MatchSummary {
        home_score,
        away_score,
        status_label: status_label(&m.status),
        is_live: m.status.is_live(),
    }
}

fn reported_final_score(score: &Score) -> (ScoreValue, ScoreValue) {
    let home = score
        .full_time
        .and_then(|p| p.home_goals())
        .map_or(ScoreValue::Unknown, ScoreValue::Known);
    let away = score
        .full_time
        .and_then(|p| p.away_goals())
        .map_or(ScoreValue::Unknown, ScoreValue::Known);
    (home, away)
}

fn live_score(score: &Score) -> (ScoreValue, ScoreValue) {
    let home = score
        .regular_time
        .and_then(|p| p.home_goals())
        .or_else(|| score.full_time.and_then(|p| p.home_goals()))
        .or(score.home)
        .unwrap_or(0);
    let away = score
        .regular_time
        .and_then(|p| p.away_goals())
        .or_else(|| score.full_time.and_then(|p| p.away_goals()))
        .or(score.away)
        .unwrap_or(0);
    (ScoreValue::Known(home), ScoreValue::Known(away))
}

/// Fixed status-to-label table. Unmapped statuses echo their raw value so a
/// new upstream status never breaks rendering.
fn status_label(status: &MatchStatus) -> String {
    match status {
        MatchStatus::Live => "LIVE",
        MatchStatus::InPlay => "IN PLAY",
        MatchStatus::Paused => "HALF-TIME",
        MatchStatus::Finished => "FULL-TIME",
        MatchStatus::Scheduled | MatchStatus::Timed => "UPCOMING",
        MatchStatus::Postponed => "POSTPONED",
        MatchStatus::Cancelled => "CANCELLED",
        MatchStatus::Suspended => "SUSPENDED",
        MatchStatus::Other(raw) => return raw.clone(),
    }
    .to_string()
}
