//! Word record data model.
//!
//! A [`WordRecord`] is one line of a full-form word list. Only the `variant`
//! participates in ordering and lookup; every other field is carried as opaque
//! text for the presentation layer.

/// One entry of a full-form word list.
///
/// `homograph` and `id` are kept as text: source lists use both numeric and
/// tagged values, and nothing in lookup interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordRecord {
    variant: String,
    headword: String,
    homograph: String,
    part_of_speech: String,
    id: String,
}

impl WordRecord {
    /// Create a record from its five fields in word-list column order
    pub fn new(
        variant: impl Into<String>,
        headword: impl Into<String>,
        homograph: impl Into<String>,
        part_of_speech: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            variant: variant.into(),
            headword: headword.into(),
            homograph: homograph.into(),
            part_of_speech: part_of_speech.into(),
            id: id.into(),
        }
    }

    /// The inflected surface form; this is the sort and lookup key
    pub fn variant(&self) -> &str {
        &self.variant
    }

    /// The dictionary base form this variant belongs to
    pub fn headword(&self) -> &str {
        &self.headword
    }

    /// Disambiguator between headwords with identical spelling (often empty)
    pub fn homograph(&self) -> &str {
        &self.homograph
    }

    /// Grammatical category tag, e.g. `sb.` or `vb.`
    pub fn part_of_speech(&self) -> &str {
        &self.part_of_speech
    }

    /// Stable external identifier of the entry
    pub fn id(&self) -> &str {
        &self.id
    }
}
