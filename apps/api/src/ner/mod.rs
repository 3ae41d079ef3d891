//! Named-entity tagging used as the last resort for the candidate name.
//!
//! The cascade only sees the `EntityTagger` trait. `AppState` carries an
//! `Arc<dyn EntityTagger>` built once at startup; `default_tagger()` gives the
//! same compiled-in model to callers without state.

pub mod lexicon;
pub mod statistical;

use std::ops::Range;

use once_cell::sync::Lazy;

pub use statistical::StatisticalTagger;

/// Category assigned to a tagged span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityLabel {
    Person,
    Organization,
    Location,
}

/// A labelled span, as byte offsets into the tagged text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedEntity {
    pub span: Range<usize>,
    pub label: EntityLabel,
}

impl TaggedEntity {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.clone()]
    }
}

/// A tagging backend. Implementations are read-only after construction and
/// may be shared across threads.
pub trait EntityTagger: Send + Sync {
    /// Entities found in `text`, in document order.
    fn tag_entities(&self, text: &str) -> Vec<TaggedEntity>;

    /// Text of the first entity labelled `Person`.
    fn first_person<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.tag_entities(text)
            .into_iter()
            .find(|entity| entity.label == EntityLabel::Person)
            .map(|entity| entity.text(text))
    }
}

static DEFAULT_TAGGER: Lazy<StatisticalTagger> = Lazy::new(StatisticalTagger::new);

/// Process-wide tagger with the built-in lexicons.
pub fn default_tagger() -> &'static StatisticalTagger {
    &DEFAULT_TAGGER
}
