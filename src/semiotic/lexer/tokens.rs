//! Token definitions for the semiotic notation
//!
//! This module defines all the tokens that can be produced by the semiotic
//! lexer. The tokens are defined using the logos derive macro.
//! See docs/specs/v1/grammar.sym for the grammar of the notation.

use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All possible tokens in the semiotic notation
///
/// Operator glyphs are non-ASCII and matched as whole tokens. Whitespace is
/// insignificant between tokens and skipped by the lexer. `Eq` and `Hash` are
/// required by the parser's error type, which collects expected-token sets.
#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    // Unary operator glyphs
    #[token("∇")]
    Gradient,
    #[token("℘")]
    Powerset,
    // Reserved in the upstream notation but a full grammar production; see
    // the unary_term rule in docs/specs/v1/grammar.sym
    #[token("∅")]
    Nullify,

    // Binary composition glyph
    #[token("⊕")]
    Compose,

    // Grouping
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,

    // Bare symbol identifiers (case-sensitive, non-empty)
    #[regex(r"[A-Za-z0-9]+", |lex| lex.slice().to_string())]
    Symbol(String),
}

impl Token {
    /// Check if this token is a unary operator glyph
    pub fn is_unary_operator(&self) -> bool {
        matches!(self, Token::Gradient | Token::Powerset | Token::Nullify)
    }

    /// Check if this token is the binary composition glyph
    pub fn is_compose(&self) -> bool {
        matches!(self, Token::Compose)
    }

    /// Check if this token is a symbol identifier
    pub fn is_symbol(&self) -> bool {
        matches!(self, Token::Symbol(_))
    }

    /// Stable kind name used in diagnostics (expected-token sets)
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Gradient => "'∇'",
            Token::Powerset => "'℘'",
            Token::Nullify => "'∅'",
            Token::Compose => "'⊕'",
            Token::OpenParen => "'('",
            Token::CloseParen => "')'",
            Token::Symbol(_) => "symbol",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Gradient => write!(f, "<gradient>"),
            Token::Powerset => write!(f, "<powerset>"),
            Token::Nullify => write!(f, "<nullify>"),
            Token::Compose => write!(f, "<compose>"),
            Token::OpenParen => write!(f, "<open-paren>"),
            Token::CloseParen => write!(f, "<close-paren>"),
            Token::Symbol(name) => write!(f, "<symbol:{}>", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Token> {
        Token::lexer(source).filter_map(|result| result.ok()).collect()
    }

    #[test]
    fn test_operator_glyphs() {
        assert_eq!(lex_all("∇"), vec![Token::Gradient]);
        assert_eq!(lex_all("℘"), vec![Token::Powerset]);
        assert_eq!(lex_all("∅"), vec![Token::Nullify]);
        assert_eq!(lex_all("⊕"), vec![Token::Compose]);
    }

    #[test]
    fn test_parens() {
        assert_eq!(lex_all("()"), vec![Token::OpenParen, Token::CloseParen]);
    }

    #[test]
    fn test_symbol_tokens() {
        assert_eq!(lex_all("X"), vec![Token::Symbol("X".to_string())]);
        assert_eq!(lex_all("x42"), vec![Token::Symbol("x42".to_string())]);
        // Case-sensitive: distinct symbols stay distinct
        assert_ne!(lex_all("x"), lex_all("X"));
    }

    #[test]
    fn test_whitespace_skipped() {
        assert_eq!(
            lex_all("  X \t ⊕\n Y "),
            vec![
                Token::Symbol("X".to_string()),
                Token::Compose,
                Token::Symbol("Y".to_string()),
            ]
        );
    }

    #[test]
    fn test_full_expression() {
        assert_eq!(
            lex_all("∇(X) ⊕ ℘(Y)"),
            vec![
                Token::Gradient,
                Token::OpenParen,
                Token::Symbol("X".to_string()),
                Token::CloseParen,
                Token::Compose,
                Token::Powerset,
                Token::OpenParen,
                Token::Symbol("Y".to_string()),
                Token::CloseParen,
            ]
        );
    }

    #[test]
    fn test_token_predicates() {
        assert!(Token::Gradient.is_unary_operator());
        assert!(Token::Powerset.is_unary_operator());
        assert!(Token::Nullify.is_unary_operator());
        assert!(!Token::Compose.is_unary_operator());

        assert!(Token::Compose.is_compose());
        assert!(!Token::OpenParen.is_compose());

        assert!(Token::Symbol("X".to_string()).is_symbol());
        assert!(!Token::CloseParen.is_symbol());
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::Gradient.to_string(), "<gradient>");
        assert_eq!(Token::Symbol("X".to_string()).to_string(), "<symbol:X>");
    }
}
