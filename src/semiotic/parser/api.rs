//! Public API for the parser
//!
//! The grammar is compiled exactly once into an [`ExprParser`] by the
//! caller, typically at process startup, and passed to wherever parsing
//! happens. This replaces the import-time parser singleton the upstream
//! notation tooling used; construction is explicit and there is no hidden
//! module state.

use crate::semiotic::ast::builder::build;
use crate::semiotic::ast::error::{ParseError, SyntaxError};
use crate::semiotic::ast::expr::SymbolicExpr;
use crate::semiotic::ast::position::Position;
use crate::semiotic::lexer::{lex_with_spans, Token};
use crate::semiotic::parser::grammar::{self, ParserError};
use crate::semiotic::parser::ir::{ParseNode, TokenSpan};
use chumsky::{BoxedParser, Parser, Stream};
use std::fmt;

/// A compiled grammar for the semiotic notation
///
/// Compiling is cheap but not free; reuse one parser per thread rather than
/// compiling per call. The compiled parser holds reference-counted
/// combinator state and is not `Send`, so threads compile their own.
pub struct ExprParser {
    parser: BoxedParser<'static, Token, ParseNode, ParserError>,
}

impl ExprParser {
    /// Compile the grammar into a reusable parser
    pub fn compile() -> Self {
        Self {
            parser: grammar::expression().boxed(),
        }
    }

    /// Parse a token stream against the compiled grammar
    ///
    /// The source text is only used to turn byte offsets into line/column
    /// positions for diagnostics. Produces exactly one parse tree or one
    /// error; there are no partial results.
    pub fn parse_with_source(
        &self,
        tokens: Vec<TokenSpan>,
        source: &str,
    ) -> Result<ParseNode, SyntaxError> {
        let end_of_input = source.len()..source.len();
        let stream = Stream::from_iter(end_of_input, tokens.into_iter());
        self.parser
            .parse(stream)
            .map_err(|errors| syntax_error_from(errors, source))
    }

    /// Run the full pipeline: lex, parse, and build the typed expression
    pub fn parse(&self, source: &str) -> Result<SymbolicExpr, ParseError> {
        let tokens = lex_with_spans(source)?;
        let tree = self.parse_with_source(tokens, source)?;
        Ok(build(&tree)?)
    }
}

impl Default for ExprParser {
    fn default() -> Self {
        Self::compile()
    }
}

impl fmt::Debug for ExprParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExprParser").finish_non_exhaustive()
    }
}

/// Parse a single expression, compiling the grammar just for this call
///
/// Convenience entry point for one-off parses and tests. Anything parsing
/// repeatedly should hold an [`ExprParser`] instead.
pub fn parse_expr(source: &str) -> Result<SymbolicExpr, ParseError> {
    ExprParser::compile().parse(source)
}

/// Convert chumsky's error report into the crate's syntax error
///
/// Only the first error is surfaced: the grammar has no recovery points, so
/// later errors would describe the same failure.
fn syntax_error_from(errors: Vec<ParserError>, source: &str) -> SyntaxError {
    match errors.into_iter().next() {
        Some(error) => {
            let span = error.span();
            let mut expected: Vec<String> = error
                .expected()
                .map(|token| match token {
                    Some(token) => token.kind().to_string(),
                    None => "end of input".to_string(),
                })
                .collect();
            expected.sort();
            expected.dedup();
            let position = Position::from_offset(source, span.start);
            SyntaxError {
                expected,
                found: error.found().cloned(),
                span,
                position,
            }
        }
        None => SyntaxError {
            expected: vec![],
            found: None,
            span: 0..0,
            position: Position::from_offset(source, 0),
        },
    }
}
