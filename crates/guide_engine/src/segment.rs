//! Block segmenter — titulkové řádky otevírají nový blok.
//!
//! Řádky před prvním titulkem jsou preambule: banner s datem se z nich
//! vytáhne, zbytek se zahodí (nejde je k ničemu přiřadit).

use crate::classify::{ClassifiedLine, LineKind};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBlock {
    pub heading: String,
    pub body: Vec<ClassifiedLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    /// Text banneru bez prefixu
    pub banner: Option<String>,
    pub blocks: Vec<EventBlock>,
    /// Preambule, která nebyla banner
    pub unattributed: Vec<String>,
}

enum SegmenterState {
    Preamble,
    InBlock(EventBlock),
}

pub struct Segmenter<'a> {
    banner_prefix: &'a str,
    state: SegmenterState,
    out: Segmentation,
}

impl<'a> Segmenter<'a> {
    pub fn new(banner_prefix: &'a str) -> Self {
        Self {
            banner_prefix,
            state: SegmenterState::Preamble,
            out: Segmentation::default(),
        }
    }

    pub fn push(&mut self, line: ClassifiedLine) {
        // banner může nést emoji (🏆) a pak by vypadal jako titulek
        if self.take_banner(&line.text) {
            return;
        }

        if line.kind == LineKind::Title {
            let next = SegmenterState::InBlock(EventBlock {
                heading: line.text,
                body: Vec::new(),
            });
            if let SegmenterState::InBlock(done) = std::mem::replace(&mut self.state, next) {
                self.out.blocks.push(done);
            }
            return;
        }

        match &mut self.state {
            SegmenterState::InBlock(block) => block.body.push(line),
            SegmenterState::Preamble => {
                debug!("unattributed preamble line: {}", line.text);
                self.out.unattributed.push(line.text);
            }
        }
    }

    pub fn finish(mut self) -> Segmentation {
        if let SegmenterState::InBlock(done) = self.state {
            self.out.blocks.push(done);
        }
        self.out
    }

    /// Banner řádka se spotřebuje vždy; datum si pamatujeme jen z první
    fn take_banner(&mut self, text: &str) -> bool {
        if self.banner_prefix.is_empty() {
            return false;
        }
        let bare = text.trim_start_matches(|c: char| !c.is_alphanumeric());
        let Some(rest) = bare.strip_prefix(self.banner_prefix) else {
            return false;
        };
        let rest = rest.trim();
        if self.out.banner.is_none() && !rest.is_empty() {
            self.out.banner = Some(rest.to_string());
        }
        true
    }
}

pub fn segment(lines: impl IntoIterator<Item = ClassifiedLine>, banner_prefix: &str) -> Segmentation {
    let mut segmenter = Segmenter::new(banner_prefix);
    for line in lines {
        segmenter.push(line);
    }
    segmenter.finish()
}
