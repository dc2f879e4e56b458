//! Partition a flat match list into per-competition groups for sectioned
//! rendering.

use std::collections::HashMap;

use crate::model::{CompetitionId, Match};

/// Display name for the bucket of matches without a competition record.
const UNCATEGORIZED_NAME: &str = "Other";

/// Grouping key: a competition identity, or the bucket for matches whose
/// record carries no competition at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CompetitionKey {
    Competition(CompetitionId),
    Uncategorized,
}

/// An ordered bucket of matches from one competition. Borrows from the
/// input list; built fresh on every call and dropped after rendering.
#[derive(Debug)]
pub struct CompetitionGroup<'a> {
    pub key: CompetitionKey,
    pub name: String,
    pub emblem: Option<String>,
    pub matches: Vec<&'a Match>,
}

/// Group matches by competition.
///
/// Group order follows the first occurrence of each competition in the
/// input, and matches keep their relative order within a group. The group's
/// name and emblem come from the first match seen for it. Pure and total:
/// empty input yields no groups.
pub fn group_by_competition(matches: &[Match]) -> Vec<CompetitionGroup<'_>> {
    let mut groups: Vec<CompetitionGroup<'_>> = Vec::new();
    let mut index: HashMap<CompetitionKey, usize> = HashMap::new();

    for m in matches {
        let key = m
            .competition
            .as_ref()
            .and_then(|c| c.id.clone())
            .map_or(CompetitionKey::Uncategorized, CompetitionKey::Competition);

        let slot = *index.entry(key.clone()).or_insert_with(|| {
            let competition = m.competition.as_ref();
            groups.push(CompetitionGroup {
                key,
                name: competition
                    .and_then(|c| c.name.clone())
                    .unwrap_or_else(|| UNCATEGORIZED_NAME.to_string()),
                emblem: competition.and_then(|c| c.emblem.clone()),
                matches: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].matches.push(m);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Competition, MatchStatus};

    fn match_in(id: u64, competition: Option<Competition>) -> Match {
        Match {
            id,
            utc_date: None,
            status: MatchStatus::Timed,
            matchday: None,
            stage: None,
            venue: None,
            home_team: Default::default(),
            away_team: Default::default(),
            competition,
            score: Default::default(),
        }
    }

    fn competition(code: &str, name: &str) -> Competition {
        Competition {
            id: Some(CompetitionId::Code(code.to_string())),
            name: Some(name.to_string()),
            code: Some(code.to_string()),
            emblem: Some(format!("https://crests.example/{code}.png")),
        }
    }

    #[test]
    fn groups_follow_first_seen_order() {
        let matches = vec![
            match_in(1, Some(competition("PL", "Premier League"))),
            match_in(2, Some(competition("CL", "Champions League"))),
            match_in(3, Some(competition("PL", "Premier League"))),
        ];

        let groups = group_by_competition(&matches);
        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups[0].key,
            CompetitionKey::Competition(CompetitionId::Code("PL".into()))
        );
        assert_eq!(
            groups[1].key,
            CompetitionKey::Competition(CompetitionId::Code("CL".into()))
        );

        let pl_ids: Vec<u64> = groups[0].matches.iter().map(|m| m.id).collect();
        assert_eq!(pl_ids, vec![1, 3]);
        assert_eq!(groups[0].name, "Premier League");
        assert!(groups[0].emblem.is_some());
    }

    #[test]
    fn missing_competition_goes_to_the_uncategorized_bucket() {
        let matches = vec![
            match_in(1, None),
            match_in(2, Some(competition("PL", "Premier League"))),
            match_in(3, Some(Competition::default())),
        ];

        let groups = group_by_competition(&matches);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, CompetitionKey::Uncategorized);
        assert_eq!(groups[0].name, "Other");
        // id 3 has a competition object but no id, which is the same bucket
        let ids: Vec<u64> = groups[0].matches.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_competition(&[]).is_empty());
    }

    #[test]
    fn numeric_and_code_ids_are_distinct_keys() {
        let mut by_number = competition("PL", "Premier League");
        by_number.id = Some(CompetitionId::Number(2021));
        let matches = vec![
            match_in(1, Some(by_number)),
            match_in(2, Some(competition("PL", "Premier League"))),
        ];
        assert_eq!(group_by_competition(&matches).len(), 2);
    }
}
