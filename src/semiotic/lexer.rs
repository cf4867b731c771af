//! Lexer module for the semiotic notation
//!
//! This module contains the token definitions and the tokenization entry
//! points. Tokenization is handled entirely by the logos lexer; there are no
//! further token-stream transformations because the notation is flat
//! (whitespace is insignificant and skipped, and there is no indentation
//! structure to recover).

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{lex, lex_with_spans};
pub use tokens::Token;

/// Byte span of a token in the source text.
pub type Span = std::ops::Range<usize>;
