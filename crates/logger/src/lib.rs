/// SportsGuide — Logger
/// JSONL audit stream, jeden soubor na UTC den

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

pub struct EventLogger {
    log_dir: PathBuf,
}

impl EventLogger {
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        let dir = log_dir.into();
        if let Err(e) = fs::create_dir_all(&dir) {
            tracing::warn!("log dir {} not created: {}", dir.display(), e);
        }
        Self { log_dir: dir }
    }

    pub fn current_file(&self) -> PathBuf {
        let date = Utc::now().format("%Y-%m-%d").to_string();
        self.log_dir.join(format!("{date}.jsonl"))
    }

    pub fn log<T: Serialize>(&self, event: &T) -> Result<()> {
        let path  = self.current_file();
        let line  = serde_json::to_string(event)?;
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("open {}", path.display()))?;
        writeln!(f, "{line}")?;
        Ok(())
    }
}

pub fn now_iso() -> String {
    Utc::now().to_rfc3339()
}

// ── Event typy ────────────────────────────────────────────────────────────────

#[derive(Serialize, Debug)]
pub struct GuideBuiltEvent {
    pub ts:            String,
    pub event:         &'static str,   // "GUIDE_BUILT"
    pub input:         String,         // cesta nebo "stdin"
    pub output:        String,
    pub input_lines:   usize,
    pub title:         Option<String>,
    pub events:        usize,
    pub matches:       usize,
}

#[derive(Serialize, Debug)]
pub struct GuideCheckEvent {
    pub ts:            String,
    pub event:         &'static str,   // "GUIDE_CHECK"
    pub path:          String,
    pub generated_on:  String,         // YYYY-MM-DD v offsetu vysílání
    pub today:         String,
    pub current:       bool,
}

#[derive(Serialize, Debug)]
pub struct RankSelectEvent {
    pub ts:            String,
    pub event:         &'static str,   // "RANK_SELECT"
    pub ranked:        usize,
    pub selected:      usize,
    pub output:        String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_one_json_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let logger = EventLogger::new(dir.path().join("logs"));

        for n in [1usize, 2] {
            logger
                .log(&RankSelectEvent {
                    ts: now_iso(),
                    event: "RANK_SELECT",
                    ranked: 3,
                    selected: n,
                    output: "relevant-events.json".to_string(),
                })
                .unwrap();
        }

        let raw = fs::read_to_string(logger.current_file()).unwrap();
        let lines: Vec<serde_json::Value> = raw
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], "RANK_SELECT");
        assert_eq!(lines[1]["selected"], 2);
    }

    #[test]
    fn file_is_named_by_utc_date() {
        let dir = tempfile::tempdir().unwrap();
        let logger = EventLogger::new(dir.path());
        let name = logger.current_file().file_name().unwrap().to_string_lossy().to_string();
        assert!(name.ends_with(".jsonl"));
        assert_eq!(name.len(), "2025-07-29.jsonl".len());
    }
}
