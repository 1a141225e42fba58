//! Recursive-descent parser for keyword expressions.
//!
//! Grammar:
//! ```text
//! expr := term ( ("&" | "|") term )*
//! term := ID | "!" term | "(" expr ")"
//! ```
//! The grammar is deliberately flat; and-over-or grouping is restored by
//! [`ExprNode::reorder`] after each binary node is built.

use super::lexer::{Token, TokenKind, lex_expression};
use super::node::{BinaryOp, ExprNode};
use crate::errors::{KeywordsError, syntax_error};
use crate::options::ParseOptions;
use crate::vocabulary::Vocabulary;

pub(crate) struct ExprParser<'v> {
    tokens: std::vec::IntoIter<Token>,
    current: Token,
    vocabulary: Option<&'v Vocabulary>,
}

impl<'v> ExprParser<'v> {
    pub(crate) fn new(
        text: &str,
        vocabulary: Option<&'v Vocabulary>,
        options: &ParseOptions,
    ) -> Self {
        let mut parser = Self {
            tokens: lex_expression(text, options).into_iter(),
            current: Token {
                kind: TokenKind::End,
                pos: 0,
            },
            vocabulary,
        };
        parser.advance();
        parser
    }

    /// Parse a complete expression; trailing input is a syntax error.
    pub(crate) fn parse(mut self) -> Result<ExprNode, KeywordsError> {
        let node = self.parse_expr()?;
        match self.current.kind {
            TokenKind::End => Ok(node),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_expr(&mut self) -> Result<ExprNode, KeywordsError> {
        let mut node = self.parse_term()?;
        loop {
            let op = match self.current.kind {
                TokenKind::And => BinaryOp::And,
                TokenKind::Or => BinaryOp::Or,
                _ => return Ok(node),
            };
            self.advance();
            let right = self.parse_term()?;
            node = op.apply(node, right).reorder();
        }
    }

    fn parse_term(&mut self) -> Result<ExprNode, KeywordsError> {
        match &self.current.kind {
            TokenKind::Ident(text) => {
                let keyword = text.clone();
                if let Some(vocabulary) = self.vocabulary {
                    if !vocabulary.contains(&keyword) {
                        return Err(KeywordsError::InvalidKeyword { keyword });
                    }
                }
                self.advance();
                Ok(ExprNode::Literal(keyword))
            }
            TokenKind::Not => {
                self.advance();
                Ok(ExprNode::Not(Box::new(self.parse_term()?)))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                match self.current.kind {
                    TokenKind::RParen => self.advance(),
                    _ => return Err(self.unexpected()),
                }
                Ok(ExprNode::Group(Box::new(inner)))
            }
            _ => Err(self.unexpected()),
        }
    }

    fn advance(&mut self) {
        let fallback = Token {
            kind: TokenKind::End,
            pos: self.current.pos,
        };
        self.current = self.tokens.next().unwrap_or(fallback);
    }

    fn unexpected(&self) -> KeywordsError {
        let message = match self.current.kind {
            TokenKind::End => "unexpected end of expression",
            TokenKind::Unexpected(_) => "unexpected character",
            _ => "unexpected token",
        };
        syntax_error(message, self.current.pos, self.current.kind.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SyntaxErrorInfo;
    use rstest::rstest;

    fn parse(text: &str) -> Result<ExprNode, KeywordsError> {
        ExprParser::new(text, None, &ParseOptions::default()).parse()
    }

    fn lit(name: &str) -> ExprNode {
        ExprNode::Literal(name.into())
    }

    #[expect(clippy::unwrap_used, reason = "tests exercise parsing fallibility")]
    fn parse_ok(text: &str) -> ExprNode {
        parse(text).unwrap()
    }

    #[test]
    fn parses_a_single_keyword() {
        assert_eq!(parse_ok("fast"), lit("fast"));
    }

    #[test]
    fn regroups_mixed_operators() {
        assert_eq!(
            parse_ok("a | b & c"),
            BinaryOp::Or.apply(lit("a"), BinaryOp::And.apply(lit("b"), lit("c")))
        );
    }

    #[test]
    fn keeps_written_parenthesisation() {
        assert_eq!(
            parse_ok("(a | b) & c"),
            BinaryOp::And.apply(
                ExprNode::Group(Box::new(BinaryOp::Or.apply(lit("a"), lit("b")))),
                lit("c"),
            )
        );
    }

    #[test]
    fn not_binds_to_the_following_term_only() {
        assert_eq!(
            parse_ok("!a & b"),
            BinaryOp::And.apply(ExprNode::Not(Box::new(lit("a"))), lit("b"))
        );
    }

    #[test]
    fn double_negation_nests() {
        assert_eq!(
            parse_ok("!!a"),
            ExprNode::Not(Box::new(ExprNode::Not(Box::new(lit("a")))))
        );
    }

    #[test]
    fn enforces_the_vocabulary() {
        let vocabulary = Vocabulary::new(["a", "b"]);
        let result =
            ExprParser::new("a & x", Some(&vocabulary), &ParseOptions::default()).parse();
        assert_eq!(
            result,
            Err(KeywordsError::InvalidKeyword {
                keyword: "x".into(),
            })
        );
    }

    #[test]
    fn vocabulary_check_ignores_case() {
        let vocabulary = Vocabulary::new(["Fast"]);
        let result =
            ExprParser::new("FAST", Some(&vocabulary), &ParseOptions::default()).parse();
        assert_eq!(result, Ok(lit("fast")));
    }

    #[rstest]
    #[case("a &", "unexpected end of expression", 3)]
    #[case("& a", "unexpected token", 0)]
    #[case("a b", "unexpected token", 2)]
    #[case("(a | b", "unexpected end of expression", 6)]
    #[case("a % b", "unexpected character", 2)]
    fn reports_syntax_errors_with_positions(
        #[case] text: &str,
        #[case] message: &'static str,
        #[case] position: usize,
    ) {
        match parse(text) {
            Err(KeywordsError::Syntax(SyntaxErrorInfo {
                message: got_message,
                position: got_position,
                ..
            })) => {
                assert_eq!(got_message, message);
                assert_eq!(got_position, position);
            }
            other => panic!("expected syntax error for {text:?}, got {other:?}"),
        }
    }

    #[test]
    fn trailing_close_paren_is_rejected() {
        assert!(matches!(parse("a)"), Err(KeywordsError::Syntax(_))));
    }
}
