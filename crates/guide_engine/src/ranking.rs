//! Výběr relevantních eventů podle externího rankingu popisů.
//!
//! Ranking samotný dodá někdo jiný (LLM služba); tady jen připravíme
//! kandidáty a ranking namapujeme zpátky na zápasy guide.

use crate::model::{Event, Guide};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedSelection {
    pub relevant_events: Vec<Event>,
}

/// Unikátní neprázdné popisy zápasů v pořadí prvního výskytu
pub fn candidate_descriptions(guide: &Guide) -> Vec<String> {
    let mut seen = HashSet::new();
    guide
        .events
        .iter()
        .flat_map(|e| e.matches.iter())
        .map(|m| m.description.trim())
        .filter(|d| !d.is_empty() && seen.insert(*d))
        .map(str::to_string)
        .collect()
}

/// Pro každý ranked popis první zápas se shodným popisem, zabalený do kopie
/// eventu jen s tímto zápasem. Neznámé popisy se přeskočí.
pub fn select_ranked(guide: &Guide, ranking: &[String]) -> RankedSelection {
    let relevant_events = ranking
        .iter()
        .map(|d| d.trim())
        .filter(|d| !d.is_empty())
        .filter_map(|wanted| {
            let found = guide.events.iter().find_map(|ev| {
                ev.matches
                    .iter()
                    .find(|m| m.description == wanted)
                    .map(|m| Event {
                        heading: ev.heading.clone(),
                        detail: ev.detail.clone(),
                        matches: vec![m.clone()],
                    })
            });
            if found.is_none() {
                debug!("ranked description not in guide: {}", wanted);
            }
            found
        })
        .collect();

    RankedSelection { relevant_events }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Match;
    use chrono::Utc;

    fn m(desc: &str) -> Match {
        Match { description: desc.to_string(), ..Match::default() }
    }

    fn guide() -> Guide {
        Guide {
            generated_at: Utc::now(),
            title: None,
            events: vec![
                Event {
                    heading: "⚽ Liga MX".to_string(),
                    detail: "Jornada 5".to_string(),
                    matches: vec![m("América vs Chivas"), m("Tigres vs Rayados"), m("")],
                },
                Event {
                    heading: "🏀 NBA".to_string(),
                    detail: String::new(),
                    matches: vec![m("Lakers vs Celtics"), m("América vs Chivas")],
                },
            ],
        }
    }

    #[test]
    fn candidates_are_unique_and_ordered() {
        assert_eq!(
            candidate_descriptions(&guide()),
            vec!["América vs Chivas", "Tigres vs Rayados", "Lakers vs Celtics"]
        );
    }

    #[test]
    fn selection_follows_ranking_order() {
        let ranking = vec![
            "Lakers vs Celtics".to_string(),
            "Unknown Match".to_string(),
            " América vs Chivas ".to_string(),
        ];
        let sel = select_ranked(&guide(), &ranking);
        assert_eq!(sel.relevant_events.len(), 2);
        assert_eq!(sel.relevant_events[0].heading, "🏀 NBA");
        assert_eq!(sel.relevant_events[1].heading, "⚽ Liga MX");
        assert_eq!(sel.relevant_events[1].detail, "Jornada 5");
        assert_eq!(sel.relevant_events[1].matches, vec![m("América vs Chivas")]);
    }
}
