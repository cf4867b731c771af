//! Intermediate Representation for the parser
//!
//! The parser produces a tree of `ParseNode`s describing the desired AST
//! structure without coupling the grammar to the AST building logic. Each
//! node keeps the tokens that introduced it, so later stages can recover
//! symbol names and source spans without re-lexing.

use crate::semiotic::lexer::{Span, Token};

/// Type alias for a token with its source byte span
pub type TokenSpan = (Token, Span);

/// The type of a node in the parse tree
///
/// One variant per grammar production; `Symbol` covers both the bare-symbol
/// alternative of `unary_term` and the SYMBOL case of `operand`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeType {
    Gradient,
    Powerset,
    Nullify,
    Compose,
    Symbol,
}

/// A node in the parse tree
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNode {
    pub node_type: NodeType,
    /// The tokens that introduced this node: the operator glyph for unary
    /// and compose nodes, the symbol token for symbol nodes
    pub tokens: Vec<TokenSpan>,
    /// Operand for unary nodes; left then right for compose nodes
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    /// Creates a new `ParseNode`.
    pub fn new(node_type: NodeType, tokens: Vec<TokenSpan>, children: Vec<ParseNode>) -> Self {
        Self {
            node_type,
            tokens,
            children,
        }
    }

    /// The symbol name carried by a `Symbol` node, if any
    pub fn symbol_name(&self) -> Option<&str> {
        self.tokens.iter().find_map(|(token, _)| match token {
            Token::Symbol(name) => Some(name.as_str()),
            _ => None,
        })
    }
}
