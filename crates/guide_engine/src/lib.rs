/// SportsGuide — Guide Engine
///
/// Z volného textu denního přehledu přenosů (scrapnutý blok stránky) staví
/// strukturovaný guide: datum → eventy → zápasy (čas, kanály, soupeři).
///
/// Pipeline, jeden průchod, zleva doprava:
///   normalize → classify → segment → parse matches + accumulate detail → assemble
///
/// Engine nedělá I/O a nemůže selhat — nejhorší výsledek je prázdný `events`.

pub mod accumulate;
pub mod assemble;
pub mod classify;
pub mod freshness;
pub mod match_parser;
pub mod model;
pub mod normalize;
pub mod ranking;
pub mod segment;
pub mod vocabulary;

pub use classify::{ClassifiedLine, LineKind};
pub use model::{Event, Guide, Match};
pub use vocabulary::{Matchers, Vocabulary};

use anyhow::Result;
use chrono::{DateTime, Utc};
use classify::Classifier;
use match_parser::MatchParser;
use tracing::info;

pub struct GuideEngine {
    vocab: Vocabulary,
    matchers: Matchers,
}

impl GuideEngine {
    pub fn new(vocab: Vocabulary) -> Result<Self> {
        let matchers = Matchers::compile(&vocab)?;
        Ok(Self { vocab, matchers })
    }

    pub fn classifier(&self) -> Classifier<'_> {
        Classifier::new(&self.vocab, &self.matchers)
    }

    pub fn match_parser(&self) -> MatchParser<'_> {
        MatchParser::new(&self.matchers)
    }

    pub fn parse(&self, text: &str) -> Guide {
        self.parse_at(text, Utc::now())
    }

    /// Deterministická varianta — čas jde jen do `generated_at`
    pub fn parse_at(&self, text: &str, generated_at: DateTime<Utc>) -> Guide {
        let lines = normalize::normalize_lines(text, &self.vocab);
        let classified = self.classifier().classify_all(lines);
        let segmentation = segment::segment(classified, &self.vocab.banner_prefix);
        let unattributed = segmentation.unattributed.len();
        let blocks = segmentation.blocks.len();

        let guide = assemble::assemble(segmentation, &self.match_parser(), generated_at);

        info!(
            blocks,
            events = guide.events.len(),
            matches = guide.match_count(),
            unattributed,
            "guide parsed: {}",
            guide.title.as_deref().unwrap_or("<no banner>")
        );
        guide
    }
}
