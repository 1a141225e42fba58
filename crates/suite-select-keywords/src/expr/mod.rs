//! Keyword expression lexing, parsing, and precedence normalisation.

mod lexer;
mod node;
mod parser;

pub(crate) use node::ExprNode;

use crate::errors::KeywordsError;
use crate::options::ParseOptions;
use crate::vocabulary::Vocabulary;
use parser::ExprParser;

/// Parse keyword expression text into a normalised tree.
///
/// # Errors
/// Returns [`KeywordsError::EmptyExpression`] for blank text,
/// [`KeywordsError::InvalidKeyword`] when a vocabulary is supplied and an
/// identifier is not a member, and [`KeywordsError::Syntax`] for malformed
/// expressions.
pub(crate) fn parse_expression(
    text: &str,
    vocabulary: Option<&Vocabulary>,
    options: &ParseOptions,
) -> Result<ExprNode, KeywordsError> {
    if text.trim().is_empty() {
        return Err(KeywordsError::EmptyExpression);
    }
    ExprParser::new(text, vocabulary, options).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_text() {
        assert_eq!(
            parse_expression("", None, &ParseOptions::default()),
            Err(KeywordsError::EmptyExpression)
        );
        assert_eq!(
            parse_expression(" \t ", None, &ParseOptions::default()),
            Err(KeywordsError::EmptyExpression)
        );
    }

    #[test]
    fn parses_non_blank_text() {
        assert!(parse_expression("a & b", None, &ParseOptions::default()).is_ok());
    }
}
