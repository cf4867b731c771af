//! # semiotic
//!
//! A parser for the semiotic expression notation.
//!
//! The notation combines unary operators over symbols (`∇`, `℘`, `∅`) with a
//! binary composition operator (`⊕`). Source text is tokenized, parsed into a
//! concrete parse tree, and transformed into a typed expression AST. Parsed
//! expressions can then be fed through an interpretive state tracker that
//! records history and measures drift between successive expressions.
//!
//! ## Testing
//!
//! For testing guidelines, see the [testing module](semiotic::testing).
//! Parser tests should use verified sample sources and AST assertions.

pub mod semiotic;
