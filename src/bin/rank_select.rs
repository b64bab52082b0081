//! rank-select — kandidáti pro ranking a výběr relevantních eventů
//!
//!   cargo run --bin rank-select -- candidates   # popisy zápasů na stdout
//!   cargo run --bin rank-select                 # ranking.txt → relevant-events.json

use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use guide_engine::ranking::{candidate_descriptions, select_ranked};
use guide_engine::Guide;
use logger::{EventLogger, RankSelectEvent, now_iso};
use std::env;
use tracing::{info, warn};

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let guide_path   = env::var("GUIDE_OUTPUT_PATH").unwrap_or_else(|_| "events.json".to_string());
    let ranking_path = env::var("GUIDE_RANKING_PATH").unwrap_or_else(|_| "ranking.txt".to_string());
    let output_path  = env::var("GUIDE_RELEVANT_OUTPUT_PATH").unwrap_or_else(|_| "relevant-events.json".to_string());
    let log_dir      = env::var("GUIDE_LOG_DIR").unwrap_or_else(|_| "logs".to_string());
    let limit = env::var("GUIDE_RANK_LIMIT")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(3);

    let raw = std::fs::read_to_string(&guide_path).with_context(|| format!("read guide at {guide_path}"))?;
    let guide: Guide = serde_json::from_str(&raw).with_context(|| format!("parse guide at {guide_path}"))?;

    match env::args().nth(1).as_deref() {
        Some("candidates") => {
            for desc in candidate_descriptions(&guide) {
                println!("{desc}");
            }
            return Ok(());
        }
        None | Some("select") => {}
        Some(other) => bail!("unknown mode: {other} (expected 'candidates' or 'select')"),
    }

    let ranking_raw = std::fs::read_to_string(&ranking_path)
        .with_context(|| format!("read ranking at {ranking_path}"))?;
    let mut ranking: Vec<String> = ranking_raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();
    ranking.truncate(limit);

    if ranking.is_empty() {
        warn!("Ranking {} is empty — relevant events not updated", ranking_path);
        return Ok(());
    }

    let selection = select_ranked(&guide, &ranking);
    let json = serde_json::to_string_pretty(&selection)?;
    std::fs::write(&output_path, json).with_context(|| format!("write {output_path}"))?;

    info!(
        "Selected {}/{} ranked events → {}",
        selection.relevant_events.len(),
        ranking.len(),
        output_path
    );

    let _ = EventLogger::new(&log_dir).log(&RankSelectEvent {
        ts:       now_iso(),
        event:    "RANK_SELECT",
        ranked:   ranking.len(),
        selected: selection.relevant_events.len(),
        output:   output_path,
    });

    Ok(())
}
