//! Field cascade — turns plain résumé text into a `CandidateRecord`.
//!
//! Every field is attempted independently and the first rule that produces a
//! non-empty value wins. The name rules run cheapest first: résumés usually
//! open with the candidate's name, so the entity tagger only sees documents
//! whose first line is a heading or otherwise irregular.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::extraction::normalizer::clean_name;
use crate::extraction::patterns::{
    CAPITALIZED_NAME, CNIC, EMAIL, PHONE_CONTACT, RESUME_HEADING, SKILLS,
};
use crate::extraction::record::{CandidateRecord, Field};
use crate::ner::EntityTagger;

/// First line accepted as a name holds at most this many tokens.
const MAX_FIRST_LINE_TOKENS: usize = 6;

/// Document text split into trimmed, non-blank lines. The unfiltered text is
/// kept for the entity tagger, which sees blank lines too.
pub struct DocumentText<'a> {
    raw: &'a str,
    lines: Vec<&'a str>,
}

impl<'a> DocumentText<'a> {
    pub fn new(raw: &'a str) -> Self {
        let lines = raw
            .split(is_line_boundary)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Self { raw, lines }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn first_line(&self) -> Option<&'a str> {
        self.lines.first().copied()
    }
}

/// `\r\n` splits twice; the empty piece between is dropped as blank.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

type NameRule = fn(&DocumentText<'_>, &dyn EntityTagger) -> Option<String>;

/// Name rules in evaluation order.
const NAME_RULES: &[(&str, NameRule)] = &[
    ("first_line", name_from_first_line),
    ("capitalized_words", name_from_capitalized_line),
    ("entity_tagger", name_from_entities),
];

/// A field taken from one capture group of the first match in the text.
struct PatternRule {
    field: Field,
    pattern: &'static Lazy<Regex>,
    group: usize,
}

static PATTERN_RULES: &[PatternRule] = &[
    PatternRule {
        field: Field::Email,
        pattern: &EMAIL,
        group: 0,
    },
    PatternRule {
        field: Field::ContactNo,
        pattern: &PHONE_CONTACT,
        group: 0,
    },
    PatternRule {
        field: Field::Cnic,
        pattern: &CNIC,
        group: 0,
    },
    PatternRule {
        field: Field::Skills,
        pattern: &SKILLS,
        group: 2,
    },
];

/// Extracts every known field from `text`. Never fails: a field that no rule
/// finds is left out of the record.
pub fn extract_candidate_info(text: &str, tagger: &dyn EntityTagger) -> CandidateRecord {
    let document = DocumentText::new(text);
    let mut record = CandidateRecord::default();

    if let Some(name) = run_name_rules(&document, tagger) {
        record.set(Field::FullName, name);
    }

    for rule in PATTERN_RULES {
        let value = rule
            .pattern
            .captures(text)
            .and_then(|caps| caps.get(rule.group))
            .map(|m| m.as_str());
        if let Some(value) = value {
            debug!(field = rule.field.as_str(), "Pattern matched");
            record.set(rule.field, value);
        }
    }

    debug!(
        fields = record.len(),
        missing = ?missing_fields(&record),
        "Extraction finished"
    );
    record
}

fn missing_fields(record: &CandidateRecord) -> Vec<&'static str> {
    Field::ALL
        .into_iter()
        .filter(|field| !record.contains(*field))
        .map(Field::as_str)
        .collect()
}

fn run_name_rules(document: &DocumentText<'_>, tagger: &dyn EntityTagger) -> Option<String> {
    NAME_RULES.iter().find_map(|(rule_name, rule)| {
        let name = rule(document, tagger).filter(|name| !name.is_empty())?;
        debug!(rule = rule_name, "FullName rule matched");
        Some(name)
    })
}

/// The opening line, unless it is a "Resume"/"Curriculum Vitae" heading or
/// too long to be a name.
fn name_from_first_line(document: &DocumentText<'_>, _: &dyn EntityTagger) -> Option<String> {
    let line = document.first_line()?;
    if RESUME_HEADING.is_match(line) {
        return None;
    }
    if line.split_whitespace().count() > MAX_FIRST_LINE_TOKENS {
        return None;
    }
    Some(clean_name(line))
}

/// The opening line when it is exactly two to four capitalized words.
fn name_from_capitalized_line(
    document: &DocumentText<'_>,
    _: &dyn EntityTagger,
) -> Option<String> {
    let line = document.first_line()?;
    let caps = CAPITALIZED_NAME.captures(line)?;
    Some(clean_name(caps.get(1)?.as_str()))
}

/// First person entity anywhere in the unfiltered text.
fn name_from_entities(document: &DocumentText<'_>, tagger: &dyn EntityTagger) -> Option<String> {
    tagger
        .first_person(document.raw())
        .map(|name| clean_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ner::{EntityLabel, StatisticalTagger, TaggedEntity};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls and tags a fixed span as a person.
    struct CountingTagger {
        calls: AtomicUsize,
        person: Option<std::ops::Range<usize>>,
    }

    impl CountingTagger {
        fn new(person: Option<std::ops::Range<usize>>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                person,
            }
        }
    }

    impl EntityTagger for CountingTagger {
        fn tag_entities(&self, _text: &str) -> Vec<TaggedEntity> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.person
                .clone()
                .map(|span| TaggedEntity {
                    span,
                    label: EntityLabel::Person,
                })
                .into_iter()
                .collect()
        }
    }

    fn extract(text: &str) -> CandidateRecord {
        extract_candidate_info(text, &StatisticalTagger::new())
    }

    const FULL_RESUME: &str = "Jane Doe\n\
        Contact: ali.khan@example.com\n\
        Phone: 03001234567\n\
        CNIC: 42101-1234567-1\n\
        \n\
        Technical Skills: Python, SQL, Docker\n\
        Tools: Git\n";

    #[test]
    fn test_first_line_name() {
        let record = extract(FULL_RESUME);
        assert_eq!(record.get(Field::FullName), Some("Jane Doe"));
    }

    #[test]
    fn test_contact_fields() {
        let record = extract(FULL_RESUME);
        assert_eq!(record.get(Field::Email), Some("ali.khan@example.com"));
        assert_eq!(record.get(Field::ContactNo), Some("03001234567"));
        assert_eq!(record.get(Field::Cnic), Some("42101-1234567-1"));
    }

    #[test]
    fn test_skills_single_line_only() {
        let record = extract(FULL_RESUME);
        assert_eq!(record.get(Field::Skills), Some("Python, SQL, Docker"));
    }

    #[test]
    fn test_skills_label_on_its_own_line() {
        // Whitespace after the label may cross one line break; the value
        // is still a single line.
        let record = extract("Jane Doe\nSkills\nRust, Go\nDocker\n");
        assert_eq!(record.get(Field::Skills), Some("Rust, Go"));
    }

    #[test]
    fn test_entity_fallback_after_cv_heading() {
        let text = "CURRICULUM VITAE\n\n\
            Objective\n\
            Seeking a backend role in a product team.\n\n\
            Personal Details\n\
            Ali Khan is a software engineer based in Lahore.\n";
        let record = extract(text);
        assert_eq!(record.get(Field::FullName), Some("Ali Khan"));
    }

    #[test]
    fn test_unlisted_name_on_own_line_after_heading() {
        let record = extract("CURRICULUM VITAE\nOmer Farooq\nSkills: x");
        assert_eq!(record.get(Field::FullName), Some("Omer Farooq"));

        let record = extract("RESUME\n\nZubair Memon\nEmail: z@x.com");
        assert_eq!(record.get(Field::FullName), Some("Zubair Memon"));
        assert_eq!(record.get(Field::Email), Some("z@x.com"));
    }

    #[test]
    fn test_crlf_text_fields_have_no_carriage_return() {
        let record = extract("Jane Doe\r\nTechnical Skills: Python, SQL\r\n");
        assert_eq!(record.get(Field::FullName), Some("Jane Doe"));
        assert_eq!(record.get(Field::Skills), Some("Python, SQL"));
    }

    #[test]
    fn test_tagger_not_called_when_first_line_wins() {
        let tagger = CountingTagger::new(None);
        let record = extract_candidate_info("Jane Doe\nEngineer", &tagger);
        assert_eq!(record.get(Field::FullName), Some("Jane Doe"));
        assert_eq!(tagger.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_long_first_line_falls_back_to_tagger() {
        let text = "Experienced engineer with a decade of backend and data work\nSam Lee";
        let start = text.find("Sam").unwrap();
        let tagger = CountingTagger::new(Some(start..start + 7));
        let record = extract_candidate_info(text, &tagger);
        assert_eq!(record.get(Field::FullName), Some("Sam Lee"));
        assert_eq!(tagger.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_capitalized_tier_accepts_heading_shaped_name() {
        // Rejected by the first tier for containing "resume", but still two
        // capitalized words.
        let tagger = CountingTagger::new(None);
        let record = extract_candidate_info("Resume Jones\nfoo", &tagger);
        assert_eq!(record.get(Field::FullName), Some("Resume Jones"));
        assert_eq!(tagger.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_first_line_name_is_cleaned() {
        let record = extract("Jane Doe jane@x.com 03001234567\nrest");
        assert_eq!(record.get(Field::FullName), Some("Jane Doe"));
        assert_eq!(record.get(Field::Email), Some("jane@x.com"));
    }

    #[test]
    fn test_empty_cleaned_name_falls_through() {
        // The first line is only an email, which cleans to nothing.
        let text = "jane@x.com\nMy name is Jane Doe.";
        let record = extract(text);
        assert_eq!(record.get(Field::FullName), Some("Jane Doe"));
    }

    #[test]
    fn test_blank_lines_and_form_feeds_skipped() {
        let record = extract("\n\n   \x0c  Jane Doe  \r\nDeveloper");
        assert_eq!(record.get(Field::FullName), Some("Jane Doe"));
    }

    #[test]
    fn test_ten_digit_contact_number() {
        let record = extract("CURRICULUM VITAE\nCell +923001234567");
        assert_eq!(record.get(Field::ContactNo), Some("+923001234567"));
    }

    #[test]
    fn test_short_number_is_not_contact() {
        let record = extract("CURRICULUM VITAE\nExt 1234567");
        assert!(!record.contains(Field::ContactNo));
    }

    #[test]
    fn test_empty_text_gives_empty_record() {
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_no_patterns_gives_empty_record() {
        let text = "CURRICULUM VITAE\nobjective: build reliable systems\nreferences available on request";
        let record = extract(text);
        assert!(record.is_empty(), "unexpected fields: {record:?}");
    }

    #[test]
    fn test_document_lines_trimmed_and_filtered() {
        let doc = DocumentText::new("  a \n\n\tb\r\n\u{2028}c");
        assert_eq!(doc.lines, vec!["a", "b", "c"]);
        assert_eq!(doc.first_line(), Some("a"));
        assert_eq!(doc.raw(), "  a \n\n\tb\r\n\u{2028}c");
    }
}
