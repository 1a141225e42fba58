//! Suite-declared keyword vocabulary.

use std::collections::HashSet;

/// The set of keywords a test suite declares legal.
///
/// When a vocabulary is supplied to the factory, every keyword referenced in
/// filter text must be a member, so that typos fail at construction instead
/// of silently deselecting tests. Membership is case-insensitive: words are
/// lower-cased on construction and probes are lower-cased on lookup.
///
/// # Examples
/// ```
/// use suite_select_keywords::Vocabulary;
/// let vocabulary = Vocabulary::new(["Interactive", "slow"]);
/// assert!(vocabulary.contains("INTERACTIVE"));
/// assert!(!vocabulary.contains("fast"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Vocabulary {
    words: HashSet<String>,
}

impl Vocabulary {
    /// Build a vocabulary from an iterator of words, lower-casing each one.
    #[must_use]
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Check whether `keyword` is a member, ignoring case.
    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.words.contains(&keyword.to_lowercase())
    }

    /// Number of distinct keywords in the vocabulary.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the vocabulary contains no keywords.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_cases_on_construction_and_lookup() {
        let vocabulary = Vocabulary::new(["Fast", "SLOW"]);
        assert!(vocabulary.contains("fast"));
        assert!(vocabulary.contains("Slow"));
        assert_eq!(vocabulary.len(), 2);
    }

    #[test]
    fn deduplicates_case_variants() {
        let vocabulary: Vocabulary = ["net", "NET", "Net"].into_iter().collect();
        assert_eq!(vocabulary.len(), 1);
    }

    #[test]
    fn empty_vocabulary_rejects_everything() {
        let vocabulary = Vocabulary::default();
        assert!(vocabulary.is_empty());
        assert!(!vocabulary.contains("anything"));
    }
}
