//! Keyword filter expression engine for test selection.
//!
//! A saved run configuration stores a `(mode, text)` pair describing which
//! tests to select: `"all of"` / `"any of"` keyword lists, an `"expr"`
//! boolean expression over keywords, or `"ignore"` for no filtering. This
//! crate compiles that pair — optionally validating referenced keywords
//! against a suite-declared [`Vocabulary`] — into an immutable
//! [`KeywordPredicate`] that the selection pipeline evaluates against each
//! test's keyword set.

mod errors;
mod expr;
mod list;
mod mode;
mod options;
mod predicate;
mod vocabulary;

pub use errors::{KeywordsError, SyntaxErrorInfo};
pub use mode::FilterMode;
pub use options::ParseOptions;
pub use predicate::KeywordPredicate;
pub use vocabulary::Vocabulary;
