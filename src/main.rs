/// SportsGuide — Guide Builder
///
/// Co dělá:
///   1. Načte surový textový blok denního přehledu (soubor nebo stdin)
///   2. Prožene ho enginem → Guide (datum, eventy, zápasy)
///   3. Zapíše events.json + audit řádku do ./logs/
///
/// Co NEDĚLÁ: stahování stránky, rendering HTML/WhatsApp, upload.
///
/// Spuštění:
///   GUIDE_INPUT_PATH=raw.txt cargo run --bin guide-builder

use anyhow::{Context, Result};
use dotenv::dotenv;
use guide_engine::{GuideEngine, Vocabulary};
use logger::{EventLogger, GuideBuiltEvent, now_iso};
use std::env;
use std::fs::File;
use tokio::io::AsyncReadExt;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    info!("=== SportsGuide Builder ===");

    // Single instance lock — dva běhy nesmí psát events.json zároveň
    let lock_file_path = env::temp_dir().join("sports_guide_builder.lock");
    let lock_file = match File::create(&lock_file_path) {
        Ok(f) => f,
        Err(e) => {
            warn!("Failed to create lock file at {:?}: {}", lock_file_path, e);
            return Ok(());
        }
    };

    let mut lock = fd_lock::RwLock::new(lock_file);
    let _write_guard = match lock.try_write() {
        Ok(guard) => guard,
        Err(_) => {
            warn!("Another guide-builder run is in progress! Exiting.");
            return Ok(());
        }
    };

    let input_path  = env::var("GUIDE_INPUT_PATH").ok();
    let output_path = env::var("GUIDE_OUTPUT_PATH").unwrap_or_else(|_| "events.json".to_string());
    let log_dir     = env::var("GUIDE_LOG_DIR").unwrap_or_else(|_| "logs".to_string());

    let vocab = match env::var("GUIDE_VOCABULARY_PATH") {
        Ok(path) => {
            info!("Vocabulary: {}", path);
            Vocabulary::from_json_file(&path)?
        }
        Err(_) => Vocabulary::default(),
    };

    let raw = match &input_path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("read input {path}"))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("read stdin")?;
            buf
        }
    };

    let engine = GuideEngine::new(vocab)?;
    let guide = engine.parse(&raw);

    if guide.events.is_empty() {
        warn!("No events with matches found — writing empty guide anyway");
    }

    let json = serde_json::to_string_pretty(&guide)?;
    tokio::fs::write(&output_path, json)
        .await
        .with_context(|| format!("write {output_path}"))?;

    info!(
        "✅ {} written: {} events, {} matches ({})",
        output_path,
        guide.events.len(),
        guide.match_count(),
        guide.title.as_deref().unwrap_or("no date banner")
    );

    let audit = EventLogger::new(&log_dir);
    if let Err(e) = audit.log(&GuideBuiltEvent {
        ts:          now_iso(),
        event:       "GUIDE_BUILT",
        input:       input_path.unwrap_or_else(|| "stdin".to_string()),
        output:      output_path,
        input_lines: raw.lines().count(),
        title:       guide.title.clone(),
        events:      guide.events.len(),
        matches:     guide.match_count(),
    }) {
        warn!("Audit log failed: {}", e);
    }

    Ok(())
}
