//! Testing support for the semiotic notation
//!
//! Two rules keep parser tests honest:
//!
//! 1. Assert on AST structure with [`assert_expr`], not on debug strings.
//! 2. Multi-expression sources come from the verified samples under
//!    docs/specs/v1/samples/ via [`sources::SemioticSources`], so tests
//!    track the specification instead of drifting copies.
//!
//! The assertion helpers panic with a descriptive message on mismatch; they
//! are meant for test code only.

use crate::semiotic::ast::expr::SymbolicExpr;

/// Start a fluent assertion over an expression tree
pub fn assert_expr(expr: &SymbolicExpr) -> ExprAssertion<'_> {
    ExprAssertion { expr }
}

/// Fluent structural assertions over a [`SymbolicExpr`]
pub struct ExprAssertion<'a> {
    expr: &'a SymbolicExpr,
}

impl<'a> ExprAssertion<'a> {
    /// Assert this node is a leaf with the given symbol name
    pub fn is_leaf(&self, name: &str) -> &Self {
        match self.expr {
            SymbolicExpr::Leaf(symbol) if symbol.as_str() == name => self,
            other => panic!("expected Leaf(\"{}\"), got {}", name, other.node_type()),
        }
    }

    /// Assert this node is a gradient and descend into its operand
    pub fn is_gradient(&self, operand: impl FnOnce(ExprAssertion)) -> &Self {
        match self.expr {
            SymbolicExpr::Gradient(inner) => {
                operand(ExprAssertion { expr: inner });
                self
            }
            other => panic!("expected Gradient, got {}", other.node_type()),
        }
    }

    /// Assert this node is a powerset and descend into its operand
    pub fn is_powerset(&self, operand: impl FnOnce(ExprAssertion)) -> &Self {
        match self.expr {
            SymbolicExpr::Powerset(inner) => {
                operand(ExprAssertion { expr: inner });
                self
            }
            other => panic!("expected Powerset, got {}", other.node_type()),
        }
    }

    /// Assert this node is a nullify and descend into its operand
    pub fn is_nullify(&self, operand: impl FnOnce(ExprAssertion)) -> &Self {
        match self.expr {
            SymbolicExpr::Nullify(inner) => {
                operand(ExprAssertion { expr: inner });
                self
            }
            other => panic!("expected Nullify, got {}", other.node_type()),
        }
    }

    /// Assert this node is a composition and descend into both operands
    pub fn is_compose(
        &self,
        left: impl FnOnce(ExprAssertion),
        right: impl FnOnce(ExprAssertion),
    ) -> &Self {
        match self.expr {
            SymbolicExpr::BinaryOp {
                left: left_expr,
                right: right_expr,
                ..
            } => {
                left(ExprAssertion { expr: left_expr });
                right(ExprAssertion { expr: right_expr });
                self
            }
            other => panic!("expected BinaryOp, got {}", other.node_type()),
        }
    }
}

/// Verified sample sources
pub mod sources {
    use std::fmt;
    use std::fs;

    /// The current specification version
    pub const SPEC_VERSION: &str = "v1";

    /// Available sample files (canonical sources)
    pub const AVAILABLE_SAMPLES: &[&str] = &[
        "010-unary-terms.sym",
        "020-composition.sym",
        "030-session.sym",
    ];

    /// Error raised when a sample cannot be loaded
    #[derive(Debug, Clone, PartialEq)]
    pub enum SampleError {
        NotAvailable(String),
        IoError(String),
    }

    impl fmt::Display for SampleError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                SampleError::NotAvailable(name) => {
                    write!(f, "Sample '{}' is not available", name)
                }
                SampleError::IoError(msg) => write!(f, "IO error: {}", msg),
            }
        }
    }

    impl std::error::Error for SampleError {}

    /// Main interface for accessing verified sample files
    pub struct SemioticSources;

    impl SemioticSources {
        fn sample_path(filename: &str) -> String {
            format!("docs/specs/{}/samples/{}", SPEC_VERSION, filename)
        }

        /// Get sample content as a raw string
        pub fn get_string(filename: &str) -> Result<String, SampleError> {
            if !AVAILABLE_SAMPLES.contains(&filename) {
                return Err(SampleError::NotAvailable(filename.to_string()));
            }
            let path = Self::sample_path(filename);
            fs::read_to_string(&path)
                .map_err(|e| SampleError::IoError(format!("failed to read {}: {}", path, e)))
        }

        /// The expression lines of a sample, blank lines skipped
        pub fn get_lines(filename: &str) -> Result<Vec<String>, SampleError> {
            Ok(Self::get_string(filename)?
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| line.to_string())
                .collect())
        }

        /// List all available sample files
        pub fn list_samples() -> Vec<&'static str> {
            AVAILABLE_SAMPLES.to_vec()
        }
    }
}
