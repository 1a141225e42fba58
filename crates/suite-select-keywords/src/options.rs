//! Per-call parser configuration.

/// Options controlling how keyword filter text is parsed.
///
/// Passed explicitly to each factory call; the engine keeps no process-wide
/// parsing state.
///
/// # Examples
/// ```
/// use suite_select_keywords::ParseOptions;
/// let options = ParseOptions {
///     allow_numeric_keywords: true,
/// };
/// assert!(options.allow_numeric_keywords);
/// assert!(!ParseOptions::default().allow_numeric_keywords);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Permit keywords that begin with a decimal digit, such as `3way`.
    /// Some suites tag tests with such keywords; off by default because a
    /// leading digit is usually a typo.
    pub allow_numeric_keywords: bool,
}
