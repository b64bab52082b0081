//! Match parser — z jedné schedule řádky popis, čas, kanály a soupeři.
//!
//! Priorita rozdělení:
//!   1. první časová fráze ("a las", "a partir de las")
//!   2. první číslice
//!   3. nic → celá řádka je popis
//! Napravo pak " por " odděluje čas od kanálů, " y " uvnitř kanálů = čárka.

use crate::model::Match;
use crate::vocabulary::Matchers;
use regex::Regex;

pub struct MatchParser<'a> {
    matchers: &'a Matchers,
}

impl<'a> MatchParser<'a> {
    pub fn new(matchers: &'a Matchers) -> Self {
        Self { matchers }
    }

    pub fn parse(&self, line: &str) -> Match {
        let line = line.trim();
        let (description, tail) = self.split_description(line);
        let (schedule, channels) = self.split_channels(tail);

        Match {
            competitors: self.competitors(description),
            description: description.to_string(),
            detail: String::new(),
            schedule: schedule.to_string(),
            channels,
        }
    }

    /// Popis vlevo, čas+kanály vpravo
    fn split_description<'l>(&self, line: &'l str) -> (&'l str, &'l str) {
        if let Some(m) = self.matchers.time_phrase.as_ref().and_then(|re| re.find(line)) {
            return (line[..m.start()].trim(), line[m.end()..].trim());
        }
        match line.find(|c: char| c.is_ascii_digit()) {
            Some(pos) => (line[..pos].trim(), line[pos..].trim()),
            None => (line, ""),
        }
    }

    fn split_channels<'l>(&self, tail: &'l str) -> (&'l str, Vec<String>) {
        let Some(m) = self.matchers.channel_connector.as_ref().and_then(|re| re.find(tail)) else {
            return (tail, Vec::new());
        };
        let schedule = tail[..m.start()].trim();
        let raw_channels = &tail[m.end()..];

        let joined = match &self.matchers.channel_joiner {
            Some(re) => re.replace_all(raw_channels, ",").into_owned(),
            None => raw_channels.to_string(),
        };
        let channels = joined
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();

        (schedule, channels)
    }

    /// Dva soupeři podle první spojky, která v popisu je; jinak nic
    pub fn competitors(&self, description: &str) -> Vec<String> {
        self.matchers
            .competitor_connectors
            .iter()
            .find_map(|re| split_pair(re, description))
            .unwrap_or_default()
    }
}

fn split_pair(re: &Regex, text: &str) -> Option<Vec<String>> {
    let m = re.find(text)?;
    Some(vec![
        text[..m.start()].trim().to_string(),
        text[m.end()..].trim().to_string(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::Vocabulary;

    fn parse(line: &str) -> Match {
        let matchers = Matchers::compile(&Vocabulary::default()).unwrap();
        MatchParser::new(&matchers).parse(line)
    }

    #[test]
    fn full_line_with_phrase_and_channels() {
        let m = parse("Real Madrid vs Barcelona a las 7 pm Centro por ESPN, Fox Sports");
        assert_eq!(m.description, "Real Madrid vs Barcelona");
        assert_eq!(m.schedule, "7 pm Centro");
        assert_eq!(m.channels, vec!["ESPN", "Fox Sports"]);
        assert_eq!(m.competitors, vec!["Real Madrid", "Barcelona"]);
        assert!(m.detail.is_empty());
    }

    #[test]
    fn a_partir_de_las_is_a_split_phrase() {
        let m = parse("Función estelar a partir de las 8 pm Este por DAZN");
        assert_eq!(m.description, "Función estelar");
        assert_eq!(m.schedule, "8 pm Este");
        assert_eq!(m.channels, vec!["DAZN"]);
        assert!(m.competitors.is_empty());
    }

    #[test]
    fn phrase_matching_is_case_insensitive_and_case_preserving() {
        let m = parse("Tigres VS Rayados A LAS 9 PM Centro POR TUDN Y Canal 5");
        assert_eq!(m.description, "Tigres VS Rayados");
        assert_eq!(m.schedule, "9 PM Centro");
        assert_eq!(m.channels, vec!["TUDN", "Canal 5"]);
        assert_eq!(m.competitors, vec!["Tigres", "Rayados"]);
    }

    #[test]
    fn falls_back_to_first_digit() {
        let m = parse("Fighter A va Fighter B 9:00 pm Centro");
        assert_eq!(m.description, "Fighter A va Fighter B");
        assert_eq!(m.schedule, "9:00 pm Centro");
        assert!(m.channels.is_empty());
        assert_eq!(m.competitors, vec!["Fighter A", "Fighter B"]);
    }

    #[test]
    fn no_digit_means_description_only() {
        let m = parse("Partido por definir Centro");
        assert_eq!(m.description, "Partido por definir Centro");
        assert!(m.schedule.is_empty());
        assert!(m.channels.is_empty());
    }

    #[test]
    fn y_connector_becomes_channel_boundary() {
        let m = parse("Final a las 6 pm Pacífico por ESPN y Star+ y Fox, , TUDN");
        assert_eq!(m.channels, vec!["ESPN", "Star+", "Fox", "TUDN"]);
    }

    #[test]
    fn trailing_joiner_stays_in_last_channel() {
        // " y " potřebuje mezeru z obou stran
        let m = parse("Juego a las 7 pm Este por ESPN y Fox y");
        assert_eq!(m.channels, vec!["ESPN", "Fox y"]);
    }

    #[test]
    fn duplicate_channels_are_kept_in_order() {
        let m = parse("Juego a las 7 pm Este por ESPN, ESPN");
        assert_eq!(m.channels, vec!["ESPN", "ESPN"]);
    }

    #[test]
    fn vs_takes_priority_over_va() {
        let m = parse("Toluca va vs León 5 pm Centro");
        assert_eq!(m.competitors, vec!["Toluca va", "León"]);
    }

    #[test]
    fn competitors_split_on_first_connector_only() {
        let m = parse("A vs B vs C 5 pm Centro");
        assert_eq!(m.competitors, vec!["A", "B vs C"]);
    }
}
