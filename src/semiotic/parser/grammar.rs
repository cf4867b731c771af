//! Combinator grammar for the semiotic notation
//!
//! This is the compiled form of docs/specs/v1/grammar.sym:
//!
//!     expr        := unary_term (COMPOSE unary_term)*     ; folds left
//!     unary_term  := GRADIENT "(" operand ")"
//!                  | POWERSET "(" operand ")"
//!                  | NULLIFY  "(" operand ")"
//!                  | SYMBOL
//!     operand     := SYMBOL | unary_term
//!
//! The `operand` rule is subsumed by `unary_term` (its SYMBOL alternative is
//! already a `unary_term` production), so the combinators collapse the two.
//! Restricting unary operands to unary terms keeps composition unambiguous
//! with a single token of lookahead; there is no backtracking beyond the
//! ordered alternatives below.

use crate::semiotic::lexer::Token;
use crate::semiotic::parser::ir::{NodeType, ParseNode};
use chumsky::prelude::*;

/// Type alias for parser error
pub(crate) type ParserError = Simple<Token>;

/// Parse a bare symbol into a leaf parse node
fn symbol() -> impl Parser<Token, ParseNode, Error = ParserError> + Clone {
    filter_map(|span: std::ops::Range<usize>, token: Token| match token {
        Token::Symbol(_) => Ok(ParseNode::new(
            NodeType::Symbol,
            vec![(token, span)],
            vec![],
        )),
        other => Err(Simple::expected_input_found(
            span,
            vec![Some(Token::Symbol(String::new()))],
            Some(other),
        )),
    })
}

/// One unary production: GLYPH "(" operand ")"
fn unary_rule(
    glyph: Token,
    node_type: NodeType,
    operand: impl Parser<Token, ParseNode, Error = ParserError> + Clone,
) -> impl Parser<Token, ParseNode, Error = ParserError> + Clone {
    just(glyph)
        .map_with_span(|token, span| (token, span))
        .then_ignore(just(Token::OpenParen))
        .then(operand)
        .then_ignore(just(Token::CloseParen))
        .map(move |(head, operand)| ParseNode::new(node_type.clone(), vec![head], vec![operand]))
}

/// The `unary_term` production, including the bare-symbol base case
pub(crate) fn unary_term() -> impl Parser<Token, ParseNode, Error = ParserError> + Clone {
    recursive(|term| {
        unary_rule(Token::Gradient, NodeType::Gradient, term.clone())
            .or(unary_rule(Token::Powerset, NodeType::Powerset, term.clone()))
            .or(unary_rule(Token::Nullify, NodeType::Nullify, term))
            .or(symbol())
    })
}

/// The `expr` start production
///
/// Chained composition folds left while parsing, so the parse tree already
/// carries the `((a ∘ b) ∘ c)` shape and the AST builder never reassociates.
/// The whole token stream must be consumed; trailing tokens are an error.
pub(crate) fn expression() -> impl Parser<Token, ParseNode, Error = ParserError> + Clone {
    let term = unary_term();
    term.clone()
        .then(
            just(Token::Compose)
                .map_with_span(|token, span| (token, span))
                .then(term)
                .repeated(),
        )
        .foldl(|left, (op, right)| ParseNode::new(NodeType::Compose, vec![op], vec![left, right]))
        .then_ignore(end())
}
