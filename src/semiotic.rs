//! Core modules for the semiotic expression notation.
//!
//! The pipeline runs in three stages, each with its own module:
//!
//!     source text -> [lexer] -> token stream -> [parser] -> parse tree
//!                 -> [ast::builder] -> typed expression
//!
//! Stage boundaries are deliberate: the lexer produces a flat token stream,
//! the parser produces a concrete parse tree (IR), and the AST builder turns
//! the IR into the typed [`SymbolicExpr`](ast::SymbolicExpr) tree. Parsed
//! expressions feed into the [state](state) module's interpretive tracker.
//!
//! The grammar itself is documented in [docs/specs/v1/grammar.sym]; the
//! compiled form of it lives in [parser::grammar].

pub mod ast;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod state;
pub mod testing;

pub use ast::{BinaryOperator, ParseError, Symbol, SymbolicExpr};
pub use lexer::{lex, lex_with_spans, Token};
pub use parser::{parse_expr, ExprParser};
pub use state::{DriftMeasure, DriftValue, InterpretiveState, NeutralDrift, NEUTRAL_DRIFT};
