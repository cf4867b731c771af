//! Core tokenization implementation for the semiotic lexer
//!
//! This module provides the raw tokenization using the logos lexer library,
//! returning tokens paired with their source byte spans. Any character that
//! matches no token pattern stops tokenization with a [`LexError`] carrying
//! the offending character and its position.

use crate::semiotic::ast::error::LexError;
use crate::semiotic::ast::position::Position;
use crate::semiotic::lexer::tokens::Token;
use crate::semiotic::lexer::Span;
use logos::Logos;

/// Tokenize source text with location information
///
/// This function performs a single pass over the source, producing tokens
/// paired with their byte spans. The token sequence is finite and consumed
/// in order by the parser; it is not restartable.
pub fn lex_with_spans(source: &str) -> Result<Vec<(Token, Span)>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                let span = lexer.span();
                let unexpected = source[span.start..].chars().next().unwrap_or('\u{FFFD}');
                return Err(LexError::new(
                    span.start,
                    Position::from_offset(source, span.start),
                    unexpected,
                ));
            }
        }
    }

    Ok(tokens)
}

/// Tokenize source text, discarding location information
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Ok(lex_with_spans(source)?
        .into_iter()
        .map(|(token, _)| token)
        .collect())
}
