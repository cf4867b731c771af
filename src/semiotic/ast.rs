//! AST module for the semiotic notation
//!
//! This module contains the typed expression tree, the error taxonomy for
//! the lexing/parsing pipeline, source position types, and the builder that
//! transforms the parser's concrete parse tree into typed expressions.

pub mod builder;
pub mod error;
pub mod expr;
pub mod position;

pub use builder::build;
pub use error::{AstBuildError, LexError, ParseError, SyntaxError};
pub use expr::{BinaryOperator, Symbol, SymbolicExpr};
pub use position::Position;
