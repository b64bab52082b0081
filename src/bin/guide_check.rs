//! guide-check — je events.json z dneška?
//!
//! Exit 0 = aktuální, 2 = starý (odesílání zpráv se má zastavit).
//! Spustit: GUIDE_OUTPUT_PATH=events.json cargo run --bin guide-check

use anyhow::{Context, Result};
use dotenv::dotenv;
use guide_engine::freshness::{self, DEFAULT_UTC_OFFSET_HOURS};
use guide_engine::Guide;
use logger::{EventLogger, GuideCheckEvent, now_iso};
use std::env;
use tracing::{info, warn};

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let path = env::var("GUIDE_OUTPUT_PATH").unwrap_or_else(|_| "events.json".to_string());
    let log_dir = env::var("GUIDE_LOG_DIR").unwrap_or_else(|_| "logs".to_string());
    let offset_hours = env::var("GUIDE_UTC_OFFSET_HOURS")
        .ok()
        .and_then(|v| v.parse::<i32>().ok())
        .unwrap_or(DEFAULT_UTC_OFFSET_HOURS);

    let offset = freshness::offset_from_hours(offset_hours)?;
    let raw = std::fs::read_to_string(&path).with_context(|| format!("read guide at {path}"))?;
    let guide: Guide = serde_json::from_str(&raw).with_context(|| format!("parse guide at {path}"))?;

    let today = freshness::local_today(offset);
    let generated_on = freshness::generated_on(&guide, offset);
    let current = freshness::is_current(&guide, today, offset);

    let _ = EventLogger::new(&log_dir).log(&GuideCheckEvent {
        ts:           now_iso(),
        event:        "GUIDE_CHECK",
        path:         path.clone(),
        generated_on: generated_on.to_string(),
        today:        today.to_string(),
        current,
    });

    if current {
        info!("Guide {} is current ({}), {} events", path, generated_on, guide.events.len());
        Ok(())
    } else {
        warn!("Guide {} is stale: generated {} | today {}", path, generated_on, today);
        std::process::exit(2);
    }
}
