//! Parser module for the semiotic notation
//!
//! The parser consumes the lexer's token stream and produces a concrete
//! parse tree ([`ir::ParseNode`]). The grammar is expressed as chumsky
//! combinators in [`grammar`] and compiled once into an [`ExprParser`] via
//! [`ExprParser::compile`]; there is deliberately no module-level parser
//! instance, so construction is always explicit and visible at the call
//! site.

pub mod api;
pub mod grammar;
pub mod ir;

pub use api::{parse_expr, ExprParser};
pub use ir::{NodeType, ParseNode};
