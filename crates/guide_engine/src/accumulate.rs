//! Detail accumulator — stavový automat jednoho event bloku.
//!
//! AwaitingContent → (titulek) → AccumulatingDetail ⇄ (schedule → Match)
//!                 → (další titulek / EOF) → Sealed
//!
//! Detail řádky se sbírají do bufferu; schedule řádka si ho vezme jako
//! `detail` zápasu. Co zbyde při zapečetění, jde do detailu eventu.

use crate::classify::{ClassifiedLine, LineKind};
use crate::match_parser::MatchParser;
use crate::model::Event;
use crate::segment::EventBlock;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    AwaitingContent,
    AccumulatingDetail,
    Sealed,
}

pub struct EventAccumulator<'p> {
    parser: &'p MatchParser<'p>,
    state: BlockState,
    event: Event,
    pending: Vec<String>,
}

impl<'p> EventAccumulator<'p> {
    pub fn new(parser: &'p MatchParser<'p>) -> Self {
        Self {
            parser,
            state: BlockState::AwaitingContent,
            event: Event::default(),
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> BlockState {
        self.state
    }

    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    pub fn open(&mut self, heading: &str) {
        if self.state != BlockState::AwaitingContent {
            debug!("open() ignored in state {:?}", self.state);
            return;
        }
        self.event = Event::new(heading);
        self.state = BlockState::AccumulatingDetail;
    }

    pub fn push(&mut self, line: &ClassifiedLine) {
        if self.state != BlockState::AccumulatingDetail {
            debug!("line outside open block ignored: {}", line.text);
            return;
        }
        match line.kind {
            LineKind::Schedule => self.emit_match(&line.text),
            // titulek v těle bloku nenastane, segmenter ho nepustí
            LineKind::Detail | LineKind::Title => self.pending.push(line.text.clone()),
        }
    }

    /// Zapečetí blok; vrací None, pokud se nikdy neotevřel
    pub fn seal(&mut self) -> Option<Event> {
        if self.state != BlockState::AccumulatingDetail {
            return None;
        }
        let rest = self.pending.join(" ");
        self.event.append_detail(&rest);
        self.pending.clear();
        self.state = BlockState::Sealed;
        Some(std::mem::take(&mut self.event))
    }

    fn emit_match(&mut self, line: &str) {
        let mut m = self.parser.parse(line);
        m.detail = self.pending.join(" ");

        // schedule bez popisu: popisem je poslední detail řádka
        if m.description.is_empty() {
            if let Some(last) = self.pending.last() {
                m.description = last.clone();
                m.competitors = self.parser.competitors(last);
            }
        }

        self.pending.clear();
        self.event.matches.push(m);
    }
}

/// Celý blok naráz: open → push… → seal
pub fn fold_block(block: &EventBlock, parser: &MatchParser<'_>) -> Event {
    let mut acc = EventAccumulator::new(parser);
    acc.open(&block.heading);
    for line in &block.body {
        acc.push(line);
    }
    acc.seal().unwrap_or_else(|| Event::new(block.heading.as_str()))
}
