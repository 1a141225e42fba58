//! Test filtering traits and the keyword filter adapter.

use std::collections::HashSet;

use suite_select_keywords::KeywordPredicate;

/// Minimal view of a test that filters can inspect.
///
/// Implemented by the harness's own test metadata types; the keyword set
/// must already be lower-cased, matching the canonical keyword form.
pub trait TestDescription {
    /// Stable, human-readable name of the test.
    fn name(&self) -> &str;
    /// The lower-cased keywords attached to the test.
    fn keywords(&self) -> &HashSet<String>;
}

/// Decides whether a test takes part in a run.
pub trait TestFilter<T: TestDescription> {
    /// Short name for reporting which filter rejected a test.
    fn name(&self) -> &str;
    /// Whether `test` is selected.
    fn accepts(&self, test: &T) -> bool;
}

/// [`TestFilter`] backed by a compiled [`KeywordPredicate`].
///
/// # Examples
/// ```
/// use std::collections::HashSet;
/// use suite_select::{KeywordFilter, TestDescription, TestFilter};
/// use suite_select_keywords::{KeywordPredicate, ParseOptions};
///
/// struct Case {
///     name: String,
///     keywords: HashSet<String>,
/// }
/// impl TestDescription for Case {
///     fn name(&self) -> &str {
///         &self.name
///     }
///     fn keywords(&self) -> &HashSet<String> {
///         &self.keywords
///     }
/// }
///
/// let predicate =
///     KeywordPredicate::create(Some("expr"), "!slow", None, &ParseOptions::default())?;
/// let filter = KeywordFilter::new(predicate);
/// let case = Case {
///     name: "boot".into(),
///     keywords: HashSet::new(),
/// };
/// assert!(filter.accepts(&case));
/// # Ok::<(), suite_select_keywords::KeywordsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordFilter {
    predicate: KeywordPredicate,
}

impl KeywordFilter {
    /// Wrap a compiled predicate as a test filter.
    #[must_use]
    pub const fn new(predicate: KeywordPredicate) -> Self {
        Self { predicate }
    }

    /// The predicate driving this filter.
    #[must_use]
    pub const fn predicate(&self) -> &KeywordPredicate {
        &self.predicate
    }
}

impl<T: TestDescription> TestFilter<T> for KeywordFilter {
    fn name(&self) -> &str {
        "keywords"
    }

    fn accepts(&self, test: &T) -> bool {
        self.predicate.accepts(test.keywords())
    }
}
