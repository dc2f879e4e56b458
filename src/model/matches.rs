use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::lenient_instant;

/// Response wrapper for every endpoint that returns a list of matches.
/// A missing `matches` array decodes as empty rather than failing.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchesResponse {
    #[serde(default)]
    pub matches: Vec<Match>,
}

/// A single football match as delivered by the football-data.org v4 API.
///
/// Every field beyond the id is optional on the wire in practice, so the
/// model defaults aggressively: a sparse record still decodes, and the
/// view-model layer resolves fallbacks once instead of every screen
/// null-checking ad hoc.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: u64,
    /// Kickoff instant. Malformed timestamps decode as `None`.
    #[serde(default, deserialize_with = "lenient_instant")]
    pub utc_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: MatchStatus,
    pub matchday: Option<u32>,
    pub stage: Option<String>,
    pub venue: Option<String>,
    #[serde(default)]
    pub home_team: TeamRef,
    #[serde(default)]
    pub away_team: TeamRef,
    pub competition: Option<Competition>,
    #[serde(default)]
    pub score: Score,
}

/// Lifecycle status of a match.
///
/// The wire form is SCREAMING_SNAKE_CASE (`IN_PLAY`, `FINISHED`, ...).
/// Values outside the known vocabulary are preserved verbatim in [`Other`]
/// so a new upstream status degrades to its raw label instead of an error.
///
/// [`Other`]: MatchStatus::Other
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, strum_macros::EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Scheduled,
    #[default]
    Timed,
    InPlay,
    Paused,
    Live,
    Finished,
    Postponed,
    Cancelled,
    Suspended,
    #[strum(default)]
    Other(String),
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::Scheduled => write!(f, "SCHEDULED"),
            MatchStatus::Timed => write!(f, "TIMED"),
            MatchStatus::InPlay => write!(f, "IN_PLAY"),
            MatchStatus::Paused => write!(f, "PAUSED"),
            MatchStatus::Live => write!(f, "LIVE"),
            MatchStatus::Finished => write!(f, "FINISHED"),
            MatchStatus::Postponed => write!(f, "POSTPONED"),
            MatchStatus::Cancelled => write!(f, "CANCELLED"),
            MatchStatus::Suspended => write!(f, "SUSPENDED"),
            MatchStatus::Other(raw) => write!(f, "{raw}"),
        }
    }
}

impl MatchStatus {
    /// True while the ball is (nominally) rolling: in play, live, or paused
    /// for half-time.
    pub fn is_live(&self) -> bool {
        matches!(
            self,
            MatchStatus::InPlay | MatchStatus::Live | MatchStatus::Paused
        )
    }

    /// True for matches that have not kicked off yet.
    pub fn is_scheduled(&self) -> bool {
        matches!(self, MatchStatus::Scheduled | MatchStatus::Timed)
    }
}

impl<'de> Deserialize<'de> for MatchStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(MatchStatus::from_str(&raw).unwrap_or(MatchStatus::Other(raw)))
    }
}

impl Serialize for MatchStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Team information as embedded in a match record. All fields optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRef {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub tla: Option<String>,
    pub crest: Option<String>,
}

/// The competition (league or cup) a match belongs to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub id: Option<CompetitionId>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub emblem: Option<String>,
}

/// Opaque competition identity. Numeric on the football-data.org wire, but
/// callers may also key on string codes (`"PL"`, `"CL"`), so both decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompetitionId {
    Number(u64),
    Code(String),
}

impl fmt::Display for CompetitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompetitionId::Number(n) => write!(f, "{n}"),
            CompetitionId::Code(c) => write!(f, "{c}"),
        }
    }
}

/// Scoring data for a match: up to three independently populated periods
/// plus the flat `home`/`away` shape some responses use. Which period is
/// authoritative depends on the match status, resolved by
/// [`classify`](crate::classify::classify).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub winner: Option<String>,
    pub full_time: Option<ScorePair>,
    pub half_time: Option<ScorePair>,
    pub regular_time: Option<ScorePair>,
    pub home: Option<i64>,
    pub away: Option<i64>,
}

/// A home/away goal pair for one scoring period. `None` means "not
/// reported", which is distinct from zero goals.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorePair {
    pub home: Option<i64>,
    pub away: Option<i64>,
    /// Legacy key spelling seen in some responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_team: Option<i64>,
    /// Legacy key spelling seen in some responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub away_team: Option<i64>,
}

impl ScorePair {
    /// Home goals, trying the current key first, then the legacy spelling.
    pub fn home_goals(&self) -> Option<i64> {
        self.home.or(self.home_team)
    }

    /// Away goals, trying the current key first, then the legacy spelling.
    pub fn away_goals(&self) -> Option<i64> {
        self.away.or(self.away_team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": 436109,
        "utcDate": "2026-01-03T15:00:00Z",
        "status": "FINISHED",
        "matchday": 20,
        "stage": "REGULAR_SEASON",
        "homeTeam": {
            "id": 57,
            "name": "Arsenal FC",
            "shortName": "Arsenal",
            "tla": "ARS",
            "crest": "https://crests.football-data.org/57.png"
        },
        "awayTeam": {
            "id": 65,
            "name": "Manchester City FC",
            "shortName": "Man City",
            "tla": "MCI",
            "crest": "https://crests.football-data.org/65.png"
        },
        "score": {
            "winner": "HOME_TEAM",
            "fullTime": { "home": 2, "away": 1 },
            "halfTime": { "home": 1, "away": 0 },
            "regularTime": { "home": 2, "away": 1 }
        },
        "competition": {
            "id": 2021,
            "name": "Premier League",
            "code": "PL",
            "emblem": "https://crests.football-data.org/PL.png"
        },
        "venue": "Emirates Stadium"
    }"#;

    #[test]
    fn decodes_full_record() {
        let m: Match = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(m.id, 436109);
        assert_eq!(m.status, MatchStatus::Finished);
        assert_eq!(m.matchday, Some(20));
        assert_eq!(m.home_team.short_name.as_deref(), Some("Arsenal"));
        assert_eq!(m.score.full_time.unwrap().home_goals(), Some(2));
        assert_eq!(m.score.full_time.unwrap().away_goals(), Some(1));

        let comp = m.competition.unwrap();
        assert_eq!(comp.id, Some(CompetitionId::Number(2021)));
        assert_eq!(comp.name.as_deref(), Some("Premier League"));
    }

    #[test]
    fn decodes_sparse_record() {
        let m: Match = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(m.status, MatchStatus::Timed);
        assert!(m.utc_date.is_none());
        assert!(m.competition.is_none());
        assert!(m.score.full_time.is_none());
        assert!(m.home_team.name.is_none());
    }

    #[test]
    fn malformed_timestamp_decodes_as_none() {
        let m: Match =
            serde_json::from_str(r#"{"id": 1, "utcDate": "not-a-date"}"#).unwrap();
        assert!(m.utc_date.is_none());
    }

    #[test]
    fn unknown_status_is_echoed_verbatim() {
        let m: Match =
            serde_json::from_str(r#"{"id": 1, "status": "WEIRD_NEW_STATE"}"#).unwrap();
        assert_eq!(m.status, MatchStatus::Other("WEIRD_NEW_STATE".into()));
        assert_eq!(m.status.to_string(), "WEIRD_NEW_STATE");
        assert!(!m.status.is_live());
    }

    #[test]
    fn status_round_trips_through_wire_form() {
        assert_eq!(MatchStatus::InPlay.to_string(), "IN_PLAY");
        assert_eq!(
            MatchStatus::from_str("IN_PLAY").unwrap(),
            MatchStatus::InPlay
        );
        assert_eq!(MatchStatus::Paused.to_string(), "PAUSED");
        assert!(MatchStatus::Paused.is_live());
        assert!(MatchStatus::Scheduled.is_scheduled());
    }

    #[test]
    fn legacy_score_keys_are_honored() {
        let pair: ScorePair =
            serde_json::from_str(r#"{"homeTeam": 3, "awayTeam": 2}"#).unwrap();
        assert_eq!(pair.home_goals(), Some(3));
        assert_eq!(pair.away_goals(), Some(2));
    }

    #[test]
    fn missing_matches_array_decodes_as_empty() {
        let response: MatchesResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(response.matches.is_empty());
    }

    #[test]
    fn competition_id_accepts_codes() {
        let comp: Competition = serde_json::from_str(r#"{"id": "PL"}"#).unwrap();
        assert_eq!(comp.id, Some(CompetitionId::Code("PL".into())));
        assert_eq!(comp.id.unwrap().to_string(), "PL");
    }
}
