//! Pevné slovníky zdroje (emoji markery, fráze, zóny, šum).
//!
//! Všechno, co se mění, když zdroj začne psát jinak, žije tady — classifier
//! ani parser nemají vlastní literály. Testy si můžou podstrčit vlastní sadu.

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Inkluzivní rozsah Unicode znaků považovaných za marker kategorie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerRange {
    pub start: char,
    pub end: char,
}

impl MarkerRange {
    pub const fn new(start: char, end: char) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub marker_ranges: Vec<MarkerRange>,
    /// Názvy kategorií, které jsou titulkem i bez emoji
    pub title_literals: Vec<String>,
    /// "a las", "a partir de las" — uvozují čas
    pub time_phrases: Vec<String>,
    /// Zóny psané za časem: Este / Centro / Pacífico
    pub zone_labels: Vec<String>,
    pub noise_markers: Vec<String>,
    pub banner_prefix: String,
    /// Spojka před seznamem kanálů ("por")
    pub channel_connector: String,
    /// Spojka uvnitř seznamu kanálů ("y")
    pub channel_joiner: String,
    /// Spojky mezi soupeři, v pořadí priority
    pub competitor_connectors: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            marker_ranges: vec![
                MarkerRange::new('\u{1F300}', '\u{1F5FF}'),
                MarkerRange::new('\u{1F600}', '\u{1F64F}'),
                MarkerRange::new('\u{1F680}', '\u{1F6FF}'),
                MarkerRange::new('\u{2600}', '\u{26FF}'),
                MarkerRange::new('\u{2700}', '\u{27BF}'),
                // 🥊 🤼 🥅 a spol.
                MarkerRange::new('\u{1F900}', '\u{1F9FF}'),
                // regionální písmena vlajek
                MarkerRange::new('\u{1F1E6}', '\u{1F1FF}'),
            ],
            title_literals: strings(&["WWE Wrestling", "Evento BOX"]),
            time_phrases: strings(&["a partir de las", "a las"]),
            zone_labels: strings(&["Este", "Centro", "Pacífico"]),
            noise_markers: strings(&["Kaelus Soporte", "⚽️🏈🏀⚾️🏐🎾🥊🏒⛳️🎳"]),
            banner_prefix: "Eventos Deportivos".to_string(),
            channel_connector: "por".to_string(),
            channel_joiner: "y".to_string(),
            competitor_connectors: strings(&["vs", "va"]),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Vocabulary {
    /// Načte slovník z JSON souboru; chybějící pole berou výchozí hodnoty
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read vocabulary {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parse vocabulary {}", path.display()))
    }

    pub fn is_marker(&self, c: char) -> bool {
        self.marker_ranges.iter().any(|r| r.contains(c))
    }
}

// ── Zkompilované matchery ───────────────────────────────────────────────────

/// Regexy odvozené ze slovníku. Staví se jednou na engine, pak jen čtou.
#[derive(Debug, Clone)]
pub struct Matchers {
    /// Časová fráze jako samostatná slova, case-insensitive
    pub time_phrase: Option<Regex>,
    pub zone_label: Option<Regex>,
    /// Číslo hned následované am/pm ("7 pm", "9:00pm", "8 p.m.")
    pub am_pm: Regex,
    pub channel_connector: Option<Regex>,
    pub channel_joiner: Option<Regex>,
    pub competitor_connectors: Vec<Regex>,
}

impl Matchers {
    pub fn compile(vocab: &Vocabulary) -> Result<Self> {
        // delší fráze první, aby "a partir de las" nepřebilo kratší alternativa
        let mut phrases: Vec<&String> = vocab.time_phrases.iter().filter(|p| !p.trim().is_empty()).collect();
        phrases.sort_by(|a, b| b.len().cmp(&a.len()));

        let time_phrase = alternation(&phrases)
            .map(|alt| case_insensitive(&format!(r"(?:^|\s)(?:{alt})(?:\s|$)")))
            .transpose()
            .context("compile time phrases")?;

        let zones: Vec<&String> = vocab.zone_labels.iter().filter(|z| !z.trim().is_empty()).collect();
        let zone_label = alternation(&zones)
            .map(|alt| Regex::new(&format!(r"\b(?:{alt})\b")))
            .transpose()
            .context("compile zone labels")?;

        let am_pm = case_insensitive(r"\d\s?[ap]\.?\s?m(?:\.|\b)").context("compile am/pm")?;

        Ok(Self {
            time_phrase,
            zone_label,
            am_pm,
            channel_connector: connector(&vocab.channel_connector).context("compile channel connector")?,
            channel_joiner: connector(&vocab.channel_joiner).context("compile channel joiner")?,
            competitor_connectors: vocab
                .competitor_connectors
                .iter()
                .filter_map(|c| connector(c).transpose())
                .collect::<Result<Vec<_>>>()
                .context("compile competitor connectors")?,
        })
    }
}

fn alternation(items: &[&String]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    Some(
        items
            .iter()
            .map(|p| words_pattern(p))
            .collect::<Vec<_>>()
            .join("|"),
    )
}

/// Escapuje slova a mezery mezi nimi povolí jako libovolný whitespace
fn words_pattern(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}

/// Spojka obklopená mezerami: " por ", " y ", " vs "
fn connector(word: &str) -> Result<Option<Regex>> {
    if word.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(case_insensitive(&format!(r"\s+{}\s+", words_pattern(word)))?))
}

fn case_insensitive(pattern: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}
