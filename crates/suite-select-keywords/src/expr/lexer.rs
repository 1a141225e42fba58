//! Expression lexer converting keyword filter text into semantic tokens.

use crate::options::ParseOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) pos: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TokenKind {
    And,
    Or,
    Not,
    LParen,
    RParen,
    Ident(String),
    Unexpected(char),
    End,
}

impl TokenKind {
    /// The token as the user wrote it, for diagnostics.
    pub(crate) fn describe(&self) -> Option<String> {
        match self {
            Self::And => Some("&".to_string()),
            Self::Or => Some("|".to_string()),
            Self::Not => Some("!".to_string()),
            Self::LParen => Some("(".to_string()),
            Self::RParen => Some(")".to_string()),
            Self::Ident(text) => Some(text.clone()),
            Self::Unexpected(c) => Some(c.to_string()),
            Self::End => None,
        }
    }
}

/// Non-whitespace ISO control characters are dropped from identifiers
/// without terminating them, matching how suites have historically tolerated
/// stray controls pasted into filter text.
fn is_ignorable(c: char) -> bool {
    matches!(
        c,
        '\u{0000}'..='\u{0008}' | '\u{000E}'..='\u{001B}' | '\u{007F}'..='\u{009F}'
    )
}

fn is_ident_start(c: char, options: &ParseOptions) -> bool {
    unicode_ident::is_xid_start(c) || (options.allow_numeric_keywords && c.is_ascii_digit())
}

/// Scan the whole expression into tokens, ending with [`TokenKind::End`].
///
/// Space and tab separate tokens; newline does not. Identifiers are
/// lower-cased as they are scanned. Lexing never fails: characters that
/// start no token become [`TokenKind::Unexpected`] and are rejected by the
/// parser with their position.
pub(crate) fn lex_expression(text: &str, options: &ParseOptions) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        let kind = match c {
            ' ' | '\t' => continue,
            '&' => TokenKind::And,
            '|' => TokenKind::Or,
            '!' => TokenKind::Not,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            _ if is_ident_start(c, options) => {
                let mut ident = String::new();
                ident.extend(c.to_lowercase());
                while let Some(&(_, next)) = chars.peek() {
                    if !unicode_ident::is_xid_continue(next) && !is_ignorable(next) {
                        break;
                    }
                    chars.next();
                    if !is_ignorable(next) {
                        ident.extend(next.to_lowercase());
                    }
                }
                TokenKind::Ident(ident)
            }
            other => TokenKind::Unexpected(other),
        };
        tokens.push(Token { kind, pos });
    }

    tokens.push(Token {
        kind: TokenKind::End,
        pos: text.len(),
    });
    tokens
}
