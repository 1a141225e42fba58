//! Cached keyword-selection parameters for a run configuration.

use suite_select_keywords::{ParseOptions, Vocabulary};

use crate::config::KeywordsConfig;
use crate::filter::KeywordFilter;

#[derive(Debug, Default)]
struct Cache {
    config: Option<KeywordsConfig>,
    filter: Option<KeywordFilter>,
    error: Option<String>,
}

/// Mutable holder of the keyword-filter settings of a run.
///
/// Owns the persisted [`KeywordsConfig`] pair plus the suite vocabulary and
/// parse options, and lazily compiles them into a [`KeywordFilter`]. The
/// compiled filter is cached and only rebuilt when the stored pair changes;
/// a pair that fails to compile leaves no filter and records the error text
/// for the configuration UI to report.
///
/// # Examples
/// ```
/// use suite_select::{KeywordsConfig, SelectionParameters};
/// use suite_select_keywords::ParseOptions;
///
/// let mut parameters = SelectionParameters::new(None, ParseOptions::default());
/// parameters.set_keywords(Some(KeywordsConfig::new(Some("expr"), "fast")));
/// assert!(parameters.keywords_filter().is_some());
/// assert!(parameters.keywords_error().is_none());
/// ```
#[derive(Debug, Default)]
pub struct SelectionParameters {
    config: Option<KeywordsConfig>,
    vocabulary: Option<Vocabulary>,
    options: ParseOptions,
    cache: Cache,
}

impl SelectionParameters {
    /// Create parameters for a suite with the given vocabulary and options.
    #[must_use]
    pub fn new(vocabulary: Option<Vocabulary>, options: ParseOptions) -> Self {
        Self {
            config: None,
            vocabulary,
            options,
            cache: Cache::default(),
        }
    }

    /// Replace the stored `(mode, text)` pair; `None` disables filtering.
    pub fn set_keywords(&mut self, config: Option<KeywordsConfig>) {
        self.config = config;
    }

    /// The stored pair, as it would be persisted.
    #[must_use]
    pub fn keywords(&self) -> Option<&KeywordsConfig> {
        self.config.as_ref()
    }

    /// The compiled filter for the stored pair, rebuilding it if the pair
    /// changed since the last call. `None` when filtering is disabled or
    /// the pair does not compile.
    pub fn keywords_filter(&mut self) -> Option<&KeywordFilter> {
        self.update_cache();
        self.cache.filter.as_ref()
    }

    /// Error text from the most recent failed compilation, if any.
    #[must_use]
    pub fn keywords_error(&self) -> Option<&str> {
        self.cache.error.as_deref()
    }

    fn update_cache(&mut self) {
        let Some(config) = &self.config else {
            self.cache = Cache::default();
            return;
        };
        if self.cache.config.as_ref() == Some(config) {
            return;
        }
        self.cache.config = Some(config.clone());
        match config.compile(self.vocabulary.as_ref(), &self.options) {
            Ok(predicate) => {
                self.cache.filter = Some(KeywordFilter::new(predicate));
                self.cache.error = None;
            }
            Err(err) => {
                log::warn!(
                    "keyword filter {:?} ({:?} mode) did not compile: {err}",
                    config.text,
                    config.mode,
                );
                self.cache.filter = None;
                self.cache.error = Some(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_and_caches_the_filter() {
        let mut parameters = SelectionParameters::new(None, ParseOptions::default());
        parameters.set_keywords(Some(KeywordsConfig::new(Some("any of"), "gui net")));
        let first = parameters.keywords_filter().cloned();
        let second = parameters.keywords_filter().cloned();
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn records_the_error_when_the_pair_does_not_compile() {
        let mut parameters = SelectionParameters::new(None, ParseOptions::default());
        parameters.set_keywords(Some(KeywordsConfig::new(Some("expr"), "a &")));
        assert!(parameters.keywords_filter().is_none());
        let error = parameters.keywords_error().map(str::to_string);
        assert!(error.is_some_and(|text| text.contains("unexpected end of expression")));
    }

    #[test]
    fn rebuilds_only_when_the_pair_changes() {
        let mut parameters = SelectionParameters::new(None, ParseOptions::default());
        parameters.set_keywords(Some(KeywordsConfig::new(Some("expr"), "a")));
        let before = parameters.keywords_filter().cloned();
        parameters.set_keywords(Some(KeywordsConfig::new(Some("expr"), "b")));
        let after = parameters.keywords_filter().cloned();
        assert_ne!(before, after);
    }

    #[test]
    fn clearing_the_pair_clears_the_cache() {
        let mut parameters = SelectionParameters::new(None, ParseOptions::default());
        parameters.set_keywords(Some(KeywordsConfig::new(Some("expr"), "a &")));
        assert!(parameters.keywords_filter().is_none());
        assert!(parameters.keywords_error().is_some());
        parameters.set_keywords(None);
        assert!(parameters.keywords_filter().is_none());
        assert!(parameters.keywords_error().is_none());
    }

    #[test]
    fn vocabulary_applies_to_compilation() {
        let vocabulary = Vocabulary::new(["fast"]);
        let mut parameters = SelectionParameters::new(Some(vocabulary), ParseOptions::default());
        parameters.set_keywords(Some(KeywordsConfig::new(Some("expr"), "slow")));
        assert!(parameters.keywords_filter().is_none());
        let error = parameters.keywords_error().map(str::to_string);
        assert!(error.is_some_and(|text| text.contains("slow")));
    }
}
