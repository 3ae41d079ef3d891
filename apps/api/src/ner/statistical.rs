//! Lexicon-driven statistical tagger.
//!
//! Candidate spans are runs of title-case words on one line. Each run is
//! trimmed of common résumé vocabulary, then classified:
//!
//! 1. any organization marker ("University", "Ltd", …) → `Organization`
//! 2. every word a known place → `Location`
//! 3. otherwise a small linear model scores it as a person name:
//!    span-length prior + given-name gazetteer + preceding cue ("Name:", "Mr.")
//!    + the span standing alone on its line
//!
//! No model download; the gazetteer can be extended from a plain text file.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::ner::lexicon::{self, COMMON, ORGANIZATION, PERSON_CUES, PLACE};
use crate::ner::{EntityLabel, EntityTagger, TaggedEntity};

static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{L}[\p{L}\p{M}'’\-]*").expect("word pattern is valid"));

const PERSON_THRESHOLD: f32 = 1.5;
const MAX_PERSON_TOKENS: usize = 4;
/// Characters of preceding context inspected for a cue.
const CUE_WINDOW: usize = 16;

const WEIGHT_GIVEN_FIRST: f32 = 1.0;
const WEIGHT_GIVEN_OTHER: f32 = 0.5;
const WEIGHT_CUE: f32 = 1.5;
const WEIGHT_PLACE: f32 = -1.0;
/// Enough for an unknown two or three word name on a line of its own.
const WEIGHT_OWN_LINE: f32 = 0.7;

#[derive(Debug)]
struct Token {
    start: usize,
    end: usize,
    lower: String,
}

#[derive(Debug, Clone)]
pub struct StatisticalTagger {
    given_names: HashSet<String>,
}

impl Default for StatisticalTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl StatisticalTagger {
    /// Tagger with the built-in gazetteers.
    pub fn new() -> Self {
        Self {
            given_names: lexicon::builtin_given_names().map(String::from).collect(),
        }
    }

    /// Adds given names to the gazetteer. Matching is case-insensitive.
    pub fn with_given_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.given_names.extend(
            names
                .into_iter()
                .map(|n| n.as_ref().trim().to_lowercase())
                .filter(|n| !n.is_empty()),
        );
        self
    }

    /// Built-in gazetteer extended with one given name per line of `path`.
    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_given_names_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read given names from {}", path.display()))?;
        let names = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));
        Ok(Self::new().with_given_names(names))
    }

    pub fn given_name_count(&self) -> usize {
        self.given_names.len()
    }

    fn classify(&self, text: &str, run: &[Token]) -> Option<TaggedEntity> {
        let first = run.iter().position(|t| !COMMON.contains(t.lower.as_str()))?;
        let last = run.iter().rposition(|t| !COMMON.contains(t.lower.as_str()))?;
        let run = &run[first..=last];
        let span = run[0].start..run[run.len() - 1].end;

        if run.iter().any(|t| ORGANIZATION.contains(t.lower.as_str())) {
            return Some(TaggedEntity {
                span,
                label: EntityLabel::Organization,
            });
        }
        if run.iter().any(|t| COMMON.contains(t.lower.as_str())) {
            return None;
        }
        if run.iter().all(|t| PLACE.contains(t.lower.as_str())) {
            return Some(TaggedEntity {
                span,
                label: EntityLabel::Location,
            });
        }
        if run.len() > MAX_PERSON_TOKENS {
            return None;
        }

        let score = self.person_score(text, run);
        debug!(
            candidate = &text[span.clone()],
            score, "Scored person candidate"
        );
        (score >= PERSON_THRESHOLD).then_some(TaggedEntity {
            span,
            label: EntityLabel::Person,
        })
    }

    fn person_score(&self, text: &str, run: &[Token]) -> f32 {
        let mut score = match run.len() {
            1 => -0.5,
            2 => 1.0,
            3 => 0.8,
            _ => 0.3,
        };

        if self.given_names.contains(&run[0].lower) {
            score += WEIGHT_GIVEN_FIRST;
        } else if run[1..].iter().any(|t| self.given_names.contains(&t.lower)) {
            score += WEIGHT_GIVEN_OTHER;
        }
        if has_person_cue(&text[..run[0].start]) {
            score += WEIGHT_CUE;
        }
        if run.iter().any(|t| PLACE.contains(t.lower.as_str())) {
            score += WEIGHT_PLACE;
        }
        if alone_on_line(text, run[0].start, run[run.len() - 1].end) {
            score += WEIGHT_OWN_LINE;
        }
        score
    }
}

impl EntityTagger for StatisticalTagger {
    fn tag_entities(&self, text: &str) -> Vec<TaggedEntity> {
        title_case_runs(text)
            .iter()
            .filter_map(|run| self.classify(text, run))
            .collect()
    }
}

/// Groups consecutive title-case words separated only by spaces or tabs.
fn title_case_runs(text: &str) -> Vec<Vec<Token>> {
    let mut runs = Vec::new();
    let mut current: Vec<Token> = Vec::new();

    for m in WORD.find_iter(text) {
        let word = m.as_str();
        if !is_title_case(word) {
            if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(prev) = current.last() {
            let gap = &text[prev.end..m.start()];
            if !gap.chars().all(|c| c == ' ' || c == '\t') {
                runs.push(std::mem::take(&mut current));
            }
        }
        current.push(Token {
            start: m.start(),
            end: m.end(),
            lower: word.to_lowercase(),
        });
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn is_title_case(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(chars.next(), Some(c) if c.is_uppercase()) && chars.any(char::is_lowercase)
}

/// Nothing but whitespace between the span and the surrounding line breaks.
fn alone_on_line(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].rsplit(is_line_break).next().unwrap_or_default();
    let after = text[end..].split(is_line_break).next().unwrap_or_default();
    before.trim().is_empty() && after.trim().is_empty()
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

fn has_person_cue(preceding: &str) -> bool {
    let trimmed = preceding.trim_end();
    let window_start = trimmed
        .char_indices()
        .rev()
        .nth(CUE_WINDOW - 1)
        .map_or(0, |(i, _)| i);
    let window = trimmed[window_start..].to_lowercase();

    PERSON_CUES.iter().any(|cue| {
        window.strip_suffix(cue).is_some_and(|before| {
            before
                .chars()
                .next_back()
                .map_or(true, |c| !c.is_alphanumeric())
        })
    })
}
