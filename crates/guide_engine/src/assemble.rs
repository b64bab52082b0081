//! Guide assembler — banner, zapečetěné eventy, drop prázdných.

use crate::accumulate::fold_block;
use crate::match_parser::MatchParser;
use crate::model::Guide;
use crate::segment::Segmentation;
use chrono::{DateTime, Utc};
use tracing::debug;

pub fn assemble(segmentation: Segmentation, parser: &MatchParser<'_>, generated_at: DateTime<Utc>) -> Guide {
    let mut events = Vec::with_capacity(segmentation.blocks.len());

    for block in &segmentation.blocks {
        let event = fold_block(block, parser);
        // titulek bez zápasů se na výstupu neobjeví
        if event.matches.is_empty() {
            debug!("event without matches dropped: {}", event.heading);
            continue;
        }
        events.push(event);
    }

    Guide {
        generated_at,
        title: segmentation.banner,
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{ClassifiedLine, LineKind};
    use crate::segment::EventBlock;
    use crate::vocabulary::{Matchers, Vocabulary};

    #[test]
    fn drops_events_without_matches_and_keeps_banner() {
        let matchers = Matchers::compile(&Vocabulary::default()).unwrap();
        let parser = MatchParser::new(&matchers);
        let seg = Segmentation {
            banner: Some("Martes 29 de Julio".to_string()),
            blocks: vec![
                EventBlock {
                    heading: "🎾 Tenis".to_string(),
                    body: vec![ClassifiedLine { text: "Cancelado".to_string(), kind: LineKind::Detail }],
                },
                EventBlock {
                    heading: "🏀 NBA".to_string(),
                    body: vec![ClassifiedLine {
                        text: "Lakers vs Celtics 7 pm Este".to_string(),
                        kind: LineKind::Schedule,
                    }],
                },
            ],
            unattributed: vec![],
        };
        let now = Utc::now();
        let guide = assemble(seg, &parser, now);
        assert_eq!(guide.generated_at, now);
        assert_eq!(guide.title.as_deref(), Some("Martes 29 de Julio"));
        assert_eq!(guide.events.len(), 1);
        assert_eq!(guide.events[0].heading, "🏀 NBA");
    }
}
