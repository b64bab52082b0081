//! Výstupní záznamy guide — tvar events.json.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub generated_at: DateTime<Utc>,
    /// Datum z banneru ("Martes 29 de Julio"), bez prefixu
    pub title: Option<String>,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Event {
    /// Titulková řádka tak, jak přišla (včetně emoji)
    pub heading: String,
    pub detail: String,
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Match {
    pub description: String,
    pub detail: String,
    /// Surový text časového okna, např. "7:00 pm Centro"
    pub schedule: String,
    pub channels: Vec<String>,
    /// Buď prázdné, nebo přesně dva soupeři
    pub competitors: Vec<String>,
}

impl Event {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            ..Self::default()
        }
    }

    /// Přidá text k detailu eventu (append, nikdy nepřepisuje)
    pub fn append_detail(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        if !self.detail.is_empty() {
            self.detail.push(' ');
        }
        self.detail.push_str(text);
    }
}

impl Guide {
    pub fn match_count(&self) -> usize {
        self.events.iter().map(|e| e.matches.len()).sum()
    }
}
