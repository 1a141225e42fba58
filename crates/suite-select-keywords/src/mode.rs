//! Filter mode type and parsing utilities.
//!
//! This module provides the canonical [`FilterMode`] enum used by both the
//! engine and the selection layer, ensuring consistent handling of the mode
//! strings stored in saved run configurations.

use std::fmt;
use std::str::FromStr;

use crate::errors::KeywordsError;

/// How the keyword filter text should be interpreted.
///
/// The persisted run configuration stores the mode as one of the strings
/// `"ignore"`, `"all of"`, `"any of"` or `"expr"`; an absent mode means
/// [`Ignore`](Self::Ignore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMode {
    /// No keyword filtering; every test is accepted.
    Ignore,
    /// The text is a whitespace-separated list; a test must carry every
    /// listed keyword.
    AllOf,
    /// The text is a whitespace-separated list; a test must carry at least
    /// one listed keyword.
    AnyOf,
    /// The text is a boolean expression over keywords.
    Expr,
}

impl FilterMode {
    /// Return the mode as its persisted string form.
    ///
    /// # Examples
    ///
    /// ```
    /// use suite_select_keywords::FilterMode;
    ///
    /// assert_eq!(FilterMode::AllOf.as_str(), "all of");
    /// assert_eq!(FilterMode::Expr.as_str(), "expr");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::AllOf => "all of",
            Self::AnyOf => "any of",
            Self::Expr => "expr",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = KeywordsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ignore" => Ok(Self::Ignore),
            "all of" => Ok(Self::AllOf),
            "any of" => Ok(Self::AnyOf),
            "expr" => Ok(Self::Expr),
            other => Err(KeywordsError::UnknownMode {
                mode: other.to_string(),
            }),
        }
    }
}

impl TryFrom<&str> for FilterMode {
    type Error = KeywordsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ignore", FilterMode::Ignore)]
    #[case("all of", FilterMode::AllOf)]
    #[case("any of", FilterMode::AnyOf)]
    #[case("expr", FilterMode::Expr)]
    fn parses_persisted_strings(#[case] input: &str, #[case] expected: FilterMode) {
        assert_eq!(input.parse::<FilterMode>(), Ok(expected));
    }

    #[rstest]
    #[case("bogus")]
    #[case("ALL OF")]
    #[case(" expr ")]
    #[case("")]
    fn rejects_unrecognised_strings(#[case] input: &str) {
        assert_eq!(
            input.parse::<FilterMode>(),
            Err(KeywordsError::UnknownMode {
                mode: input.to_string(),
            })
        );
    }

    #[test]
    fn round_trips_through_as_str() {
        for mode in [
            FilterMode::Ignore,
            FilterMode::AllOf,
            FilterMode::AnyOf,
            FilterMode::Expr,
        ] {
            assert_eq!(mode.as_str().parse::<FilterMode>(), Ok(mode));
        }
    }
}
