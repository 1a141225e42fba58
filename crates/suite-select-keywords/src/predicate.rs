//! Compiled keyword predicates and the factory that builds them.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::errors::KeywordsError;
use crate::expr::{self, ExprNode};
use crate::list;
use crate::mode::FilterMode;
use crate::options::ParseOptions;
use crate::vocabulary::Vocabulary;

/// Evaluable form of a compiled keyword filter.
///
/// A closed union so evaluation is one exhaustive match. `Always` is the
/// no-filter sentinel produced by [`FilterMode::Ignore`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Always,
    Literal(String),
    Not(Box<Node>),
    And(Box<Node>, Box<Node>),
    Or(Box<Node>, Box<Node>),
    AllOf(HashSet<String>),
    AnyOf(HashSet<String>),
}

impl Node {
    fn eval(&self, keywords: &HashSet<String>) -> bool {
        match self {
            Self::Always => true,
            Self::Literal(keyword) => keywords.contains(keyword),
            Self::Not(inner) => !inner.eval(keywords),
            Self::And(left, right) => left.eval(keywords) && right.eval(keywords),
            Self::Or(left, right) => left.eval(keywords) || right.eval(keywords),
            Self::AllOf(keys) => keys.is_subset(keywords),
            Self::AnyOf(keys) => !keys.is_disjoint(keywords),
        }
    }
}

fn lower(expr: ExprNode) -> Node {
    match expr {
        ExprNode::Literal(keyword) => Node::Literal(keyword),
        ExprNode::Not(inner) => Node::Not(Box::new(lower(*inner))),
        ExprNode::And(left, right) => Node::And(Box::new(lower(*left)), Box::new(lower(*right))),
        ExprNode::Or(left, right) => Node::Or(Box::new(lower(*left)), Box::new(lower(*right))),
        // Grouping only matters while the precedence rotation runs.
        ExprNode::Group(inner) => lower(*inner),
    }
}

/// Immutable, evaluable keyword filter built from a `(mode, text)` pair.
///
/// Construction either fully succeeds or fails with a [`KeywordsError`];
/// once built, a predicate is read-only, side-effect-free to evaluate, and
/// safe to share across threads. Only the `(mode, text)` pair is ever
/// persisted; the predicate is rebuilt from it on load.
///
/// # Examples
/// ```
/// use std::collections::HashSet;
/// use suite_select_keywords::{KeywordPredicate, ParseOptions};
///
/// let predicate =
///     KeywordPredicate::create(Some("expr"), "a | b & c", None, &ParseOptions::default())?;
/// let just_a: HashSet<String> = ["a".into()].into();
/// let just_b: HashSet<String> = ["b".into()].into();
/// assert!(predicate.accepts(&just_a));
/// assert!(!predicate.accepts(&just_b));
/// assert_eq!(predicate.summary(), "(a | (b & c))");
/// # Ok::<(), suite_select_keywords::KeywordsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordPredicate {
    mode: FilterMode,
    node: Node,
    summary: String,
}

impl KeywordPredicate {
    /// Build a predicate from the persisted string form of the mode.
    ///
    /// `None` and `"ignore"` yield the no-filter sentinel that accepts
    /// every keyword set. `"all of"` and `"any of"` treat `text` as a
    /// whitespace-separated keyword list; `"expr"` parses it as a boolean
    /// expression. When a vocabulary is supplied, every referenced keyword
    /// must be a member.
    ///
    /// # Errors
    /// [`KeywordsError::UnknownMode`] for any other mode string, plus the
    /// construction errors of the selected mode.
    pub fn create(
        mode: Option<&str>,
        text: &str,
        vocabulary: Option<&Vocabulary>,
        options: &ParseOptions,
    ) -> Result<Self, KeywordsError> {
        let mode = mode
            .map(FilterMode::from_str)
            .transpose()?
            .unwrap_or(FilterMode::Ignore);
        Self::create_with_mode(mode, text, vocabulary, options)
    }

    /// Build a predicate from an already parsed [`FilterMode`].
    ///
    /// # Errors
    /// [`KeywordsError::EmptyList`] or [`KeywordsError::InvalidKeyword`] for
    /// the list modes; [`KeywordsError::EmptyExpression`],
    /// [`KeywordsError::InvalidKeyword`], or [`KeywordsError::Syntax`] for
    /// [`FilterMode::Expr`]. [`FilterMode::Ignore`] never fails.
    pub fn create_with_mode(
        mode: FilterMode,
        text: &str,
        vocabulary: Option<&Vocabulary>,
        options: &ParseOptions,
    ) -> Result<Self, KeywordsError> {
        match mode {
            FilterMode::Ignore => Ok(Self {
                mode,
                node: Node::Always,
                summary: String::new(),
            }),
            FilterMode::AllOf => {
                let keyword_list = list::build_list(text, vocabulary)?;
                Ok(Self {
                    mode,
                    summary: format!("all of ({})", keyword_list.display),
                    node: Node::AllOf(keyword_list.keys),
                })
            }
            FilterMode::AnyOf => {
                let keyword_list = list::build_list(text, vocabulary)?;
                Ok(Self {
                    mode,
                    summary: format!("any of ({})", keyword_list.display),
                    node: Node::AnyOf(keyword_list.keys),
                })
            }
            FilterMode::Expr => {
                let parsed = expr::parse_expression(text, vocabulary, options)?;
                Ok(Self {
                    mode,
                    summary: parsed.canonical(),
                    node: lower(parsed),
                })
            }
        }
    }

    /// Check whether the predicate matches a test's keyword set.
    ///
    /// The caller must supply an already lower-cased set; matching is plain
    /// case-sensitive containment. Evaluation is pure: the same predicate
    /// and set always give the same answer.
    #[must_use]
    pub fn accepts(&self, keywords: &HashSet<String>) -> bool {
        self.node.eval(keywords)
    }

    /// The mode this predicate was built with.
    #[must_use]
    pub const fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Canonical display text, fixed at construction.
    ///
    /// Expression predicates render with explicit grouping (`(a | (b & c))`)
    /// so the text reflects the evaluated tree; list predicates render as
    /// `all of (…)` / `any of (…)` over the words in their written order;
    /// the no-filter sentinel renders empty.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }
}

impl fmt::Display for KeywordPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary)
    }
}
