//! Line classifier — Title / Schedule / Detail.
//!
//! Schedule má přednost: řádka se dvěma týmy a emoji je zápas, ne nový event.

use crate::vocabulary::{Matchers, Vocabulary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Title,
    Schedule,
    Detail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub text: String,
    pub kind: LineKind,
}

pub struct Classifier<'a> {
    vocab: &'a Vocabulary,
    matchers: &'a Matchers,
}

impl<'a> Classifier<'a> {
    pub fn new(vocab: &'a Vocabulary, matchers: &'a Matchers) -> Self {
        Self { vocab, matchers }
    }

    pub fn classify(&self, line: &str) -> LineKind {
        if self.looks_like_schedule(line) {
            LineKind::Schedule
        } else if self.looks_like_title(line) {
            LineKind::Title
        } else {
            LineKind::Detail
        }
    }

    pub fn classify_all(&self, lines: impl IntoIterator<Item = String>) -> Vec<ClassifiedLine> {
        lines
            .into_iter()
            .map(|text| {
                let kind = self.classify(&text);
                ClassifiedLine { text, kind }
            })
            .collect()
    }

    pub fn looks_like_schedule(&self, line: &str) -> bool {
        let m = self.matchers;
        m.time_phrase.as_ref().is_some_and(|re| re.is_match(line))
            || m.zone_label.as_ref().is_some_and(|re| re.is_match(line))
            || m.am_pm.is_match(line)
    }

    /// Marker emoji nebo známý literál kategorie (bez ohledu na schedule)
    pub fn looks_like_title(&self, line: &str) -> bool {
        line.chars().any(|c| self.vocab.is_marker(c))
            || self
                .vocab
                .title_literals
                .iter()
                .any(|lit| !lit.is_empty() && line.contains(lit.as_str()))
    }
}
