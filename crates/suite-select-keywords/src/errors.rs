//! Error types shared by the keyword filter modules.

use std::fmt;
use thiserror::Error;

/// Additional context for expression syntax errors.
///
/// # Examples
/// ```
/// use suite_select_keywords::SyntaxErrorInfo;
/// let info = SyntaxErrorInfo::new("unexpected token", 4, Some(")".into()));
/// assert_eq!(info.position, 4);
/// assert_eq!(info.token.as_deref(), Some(")"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrorInfo {
    /// Short description of what the parser expected or rejected.
    pub message: &'static str,
    /// Byte offset into the expression text where the error was detected.
    pub position: usize,
    /// The offending token text, when one was available.
    pub token: Option<String>,
}

impl SyntaxErrorInfo {
    /// Create a new description of an expression syntax failure.
    ///
    /// # Examples
    /// ```
    /// use suite_select_keywords::SyntaxErrorInfo;
    /// let info = SyntaxErrorInfo::new("unexpected token", 0, None);
    /// assert_eq!(info.message, "unexpected token");
    /// ```
    #[must_use]
    pub fn new(message: &'static str, position: usize, token: Option<String>) -> Self {
        Self {
            message,
            position,
            token,
        }
    }
}

impl fmt::Display for SyntaxErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            Some(token) => write!(
                f,
                "{} `{}` at byte {} (zero-based)",
                self.message, token, self.position
            ),
            None => write!(f, "{} at byte {} (zero-based)", self.message, self.position),
        }
    }
}

/// Errors surfaced while compiling keyword filter text into a predicate.
///
/// Construction either fully succeeds or yields one of these; no partially
/// built predicate is ever returned.
///
/// # Examples
/// ```
/// use suite_select_keywords::KeywordsError;
/// let err = KeywordsError::InvalidKeyword { keyword: "slwo".into() };
/// assert_eq!(err.to_string(), "invalid keyword: `slwo`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeywordsError {
    /// The expression text was empty or all whitespace.
    #[error("keyword expression is empty")]
    EmptyExpression,
    /// The keyword list contained no words.
    #[error("keyword list is empty")]
    EmptyList,
    /// A referenced keyword is not in the suite vocabulary. Carries the
    /// keyword as the user wrote it, before lower-casing.
    #[error("invalid keyword: `{keyword}`")]
    InvalidKeyword {
        /// The offending keyword text.
        keyword: String,
    },
    /// The expression text was malformed.
    #[error("{0}")]
    Syntax(SyntaxErrorInfo),
    /// The filter mode string was not one of the recognised modes.
    #[error("unknown keyword filter mode: `{mode}`")]
    UnknownMode {
        /// The unrecognised mode string.
        mode: String,
    },
}

pub(crate) fn syntax_error(
    message: &'static str,
    position: usize,
    token: Option<String>,
) -> KeywordsError {
    KeywordsError::Syntax(SyntaxErrorInfo::new(message, position, token))
}
