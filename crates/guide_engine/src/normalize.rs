//! Line normalizer — ořez, prázdné řádky, šumové bannery.

use crate::vocabulary::Vocabulary;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Rozdělí surový text na neprázdné, nešumové řádky (NFC, trimmed)
pub fn normalize_lines(raw: &str, vocab: &Vocabulary) -> Vec<String> {
    let noise: Vec<String> = vocab
        .noise_markers
        .iter()
        .map(|n| strip_variation(n))
        .filter(|n| !n.is_empty())
        .collect();

    raw.lines()
        .map(|line| line.nfc().collect::<String>().trim().to_string())
        .filter(|line| !line.is_empty())
        .filter(|line| {
            let bare = strip_variation(line);
            let is_noise = noise.iter().any(|n| bare.contains(n.as_str()));
            if is_noise {
                debug!("noise line dropped: {}", line);
            }
            !is_noise
        })
        .collect()
}

// Zdroj píše ⚽️ jednou s FE0F, jindy bez
fn strip_variation(s: &str) -> String {
    s.chars().filter(|c| *c != VARIATION_SELECTOR).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_blank_lines() {
        let vocab = Vocabulary::default();
        let lines = normalize_lines("  ⚽ Liga MX  \n\n   \r\n\tAmérica vs Chivas\n", &vocab);
        assert_eq!(lines, vec!["⚽ Liga MX", "América vs Chivas"]);
    }

    #[test]
    fn drops_noise_banner_with_or_without_variation_selectors() {
        let vocab = Vocabulary::default();
        let raw = "⚽️🏈🏀⚾️🏐🎾🥊🏒⛳️🎳\n⚽🏈🏀⚾🏐🎾🥊🏒⛳🎳\nKaelus Soporte 24/7\n🏀 NBA";
        assert_eq!(normalize_lines(raw, &vocab), vec!["🏀 NBA"]);
    }

    #[test]
    fn composes_decomposed_accents() {
        let vocab = Vocabulary::default();
        let lines = normalize_lines("8 pm Paci\u{0301}fico", &vocab);
        assert_eq!(lines, vec!["8 pm Pacífico"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(normalize_lines("", &Vocabulary::default()).is_empty());
    }
}
