//! Error types for the lexing and parsing pipeline
//!
//! All errors are terminal for the current parse call: no partial tree is
//! returned and nothing is retried. Parsing the same input again always
//! produces the same outcome, so callers report the error and move on.

use crate::semiotic::ast::position::Position;
use crate::semiotic::lexer::{Span, Token};
use std::fmt;

/// An unrecognized character in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// Byte offset of the unexpected character
    pub offset: usize,
    /// Line/column of the unexpected character
    pub position: Position,
    /// The character that matched no token pattern
    pub unexpected: char,
}

impl LexError {
    pub fn new(offset: usize, position: Position, unexpected: char) -> Self {
        Self {
            offset,
            position,
            unexpected,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized character '{}' at {}",
            self.unexpected, self.position
        )
    }
}

impl std::error::Error for LexError {}

/// A token stream that matches no grammar production
///
/// Carries the set of token kinds the grammar would have accepted at the
/// failure point, and the token actually found (`None` at end of input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Token kinds acceptable at the failure point, sorted and deduplicated
    pub expected: Vec<String>,
    /// The offending token, or `None` when input ended too early
    pub found: Option<Token>,
    /// Byte span of the offending token (empty span at end of input)
    pub span: Span,
    /// Line/column of the offending token
    pub position: Position,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let found = match &self.found {
            Some(token) => format!("found {}", token.kind()),
            None => "found end of input".to_string(),
        };
        if self.expected.is_empty() {
            write!(f, "syntax error at {}: {}", self.position, found)
        } else {
            write!(
                f,
                "syntax error at {}: expected {}, {}",
                self.position,
                self.expected.join(" or "),
                found
            )
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Any failure while turning source text into a typed expression
///
/// This is the error surface of the full pipeline entry points; each stage's
/// error converts into it with `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Lex(LexError),
    Syntax(SyntaxError),
    Build(AstBuildError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(err) => write!(f, "{}", err),
            ParseError::Syntax(err) => write!(f, "{}", err),
            ParseError::Build(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}

impl From<SyntaxError> for ParseError {
    fn from(err: SyntaxError) -> Self {
        ParseError::Syntax(err)
    }
}

impl From<AstBuildError> for ParseError {
    fn from(err: AstBuildError) -> Self {
        ParseError::Build(err)
    }
}

/// A parse tree that does not have the shape the grammar guarantees
///
/// Trees produced by the compiled grammar never trigger these; they exist so
/// the AST builder stays total over hand-constructed trees without panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstBuildError {
    /// A non-leaf node is missing an expected child
    MissingOperand { node_type: &'static str },
    /// A symbol node carries no symbol token to take its name from
    MissingSymbolToken,
}

impl fmt::Display for AstBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstBuildError::MissingOperand { node_type } => {
                write!(f, "malformed parse tree: {} node is missing an operand", node_type)
            }
            AstBuildError::MissingSymbolToken => {
                write!(f, "malformed parse tree: symbol node has no symbol token")
            }
        }
    }
}

impl std::error::Error for AstBuildError {}
