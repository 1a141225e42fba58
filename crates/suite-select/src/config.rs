//! Persisted form of a keyword filter.

use serde::{Deserialize, Serialize};
use suite_select_keywords::{KeywordPredicate, KeywordsError, ParseOptions, Vocabulary};

/// The `(mode, text)` pair stored in a saved run configuration.
///
/// Only this pair is ever persisted; the compiled predicate is rebuilt from
/// it on load. An absent mode means no filtering.
///
/// # Examples
/// ```
/// use suite_select::KeywordsConfig;
/// use suite_select_keywords::ParseOptions;
///
/// let config = KeywordsConfig::new(Some("expr"), "fast & !net");
/// let predicate = config.compile(None, &ParseOptions::default())?;
/// assert_eq!(predicate.summary(), "(fast & !net)");
/// # Ok::<(), suite_select_keywords::KeywordsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordsConfig {
    /// Persisted mode string: `"ignore"`, `"all of"`, `"any of"`, or
    /// `"expr"`; `None` means no filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// The filter text as the user wrote it.
    #[serde(default)]
    pub text: String,
}

impl KeywordsConfig {
    /// Build a config from a mode string and filter text.
    #[must_use]
    pub fn new(mode: Option<&str>, text: &str) -> Self {
        Self {
            mode: mode.map(str::to_string),
            text: text.to_string(),
        }
    }

    /// Rebuild the predicate this pair describes.
    ///
    /// # Errors
    /// Propagates every construction error of
    /// [`KeywordPredicate::create`]; a saved configuration can carry text
    /// that no longer compiles once the suite vocabulary changes.
    pub fn compile(
        &self,
        vocabulary: Option<&Vocabulary>,
        options: &ParseOptions,
    ) -> Result<KeywordPredicate, KeywordsError> {
        KeywordPredicate::create(self.mode.as_deref(), &self.text, vocabulary, options)
    }
}
