//! List-based "all of" / "any of" matcher construction.

use std::collections::HashSet;

use crate::errors::KeywordsError;
use crate::vocabulary::Vocabulary;

/// Lower-cased, vocabulary-checked keyword list.
///
/// `keys` is the deduplicated set the evaluator matches against; `display`
/// keeps the original word order, without deduplication, for the summary.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct KeywordList {
    pub(crate) keys: HashSet<String>,
    pub(crate) display: String,
}

/// Split `text` on whitespace and build the keyword list.
///
/// # Errors
/// Returns [`KeywordsError::EmptyList`] when the text contains no words and
/// [`KeywordsError::InvalidKeyword`] (naming the word as written, before
/// lower-casing) when a vocabulary is supplied and a word is not a member.
pub(crate) fn build_list(
    text: &str,
    vocabulary: Option<&Vocabulary>,
) -> Result<KeywordList, KeywordsError> {
    let mut keys = HashSet::new();
    let mut words = Vec::new();
    for word in text.split_whitespace() {
        let lowered = word.to_lowercase();
        if let Some(vocabulary) = vocabulary {
            if !vocabulary.contains(&lowered) {
                return Err(KeywordsError::InvalidKeyword {
                    keyword: word.to_string(),
                });
            }
        }
        keys.insert(lowered.clone());
        words.push(lowered);
    }
    if words.is_empty() {
        return Err(KeywordsError::EmptyList);
    }
    Ok(KeywordList {
        keys,
        display: words.join(" "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::unwrap_used, reason = "tests exercise list construction fallibility")]
    fn build_ok(text: &str) -> KeywordList {
        build_list(text, None).unwrap()
    }

    #[test]
    fn lower_cases_and_deduplicates_keys() {
        let list = build_ok("Fast SLOW fast");
        assert_eq!(list.keys, HashSet::from(["fast".into(), "slow".into()]));
    }

    #[test]
    fn display_keeps_order_and_repeats() {
        let list = build_ok("Fast SLOW fast");
        assert_eq!(list.display, "fast slow fast");
    }

    #[test]
    fn rejects_empty_text() {
        assert!(matches!(
            build_list("  \t ", None),
            Err(KeywordsError::EmptyList)
        ));
    }

    #[test]
    fn invalid_keyword_names_the_original_word() {
        let vocabulary = Vocabulary::new(["fast"]);
        assert_eq!(
            build_list("fast SLWO", Some(&vocabulary)),
            Err(KeywordsError::InvalidKeyword {
                keyword: "SLWO".into(),
            })
        );
    }
}
