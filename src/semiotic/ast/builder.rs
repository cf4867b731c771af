//! Parse tree to AST transformation
//!
//! A pure structural transform with one rule per grammar production. The
//! parser already folds compose chains left, so the builder only mirrors
//! shapes; it never reassociates or rewrites.

use crate::semiotic::ast::error::AstBuildError;
use crate::semiotic::ast::expr::SymbolicExpr;
use crate::semiotic::parser::ir::{NodeType, ParseNode};

/// Build a typed expression from a parse tree
///
/// Total over every tree the compiled grammar produces. The error paths are
/// reachable only from hand-constructed trees with missing children or a
/// symbol node without its token.
pub fn build(node: &ParseNode) -> Result<SymbolicExpr, AstBuildError> {
    match node.node_type {
        NodeType::Symbol => match node.symbol_name() {
            Some(name) => Ok(SymbolicExpr::leaf(name)),
            None => Err(AstBuildError::MissingSymbolToken),
        },
        NodeType::Gradient => Ok(SymbolicExpr::gradient(build(child(node, 0, "Gradient")?)?)),
        NodeType::Powerset => Ok(SymbolicExpr::powerset(build(child(node, 0, "Powerset")?)?)),
        NodeType::Nullify => Ok(SymbolicExpr::nullify(build(child(node, 0, "Nullify")?)?)),
        NodeType::Compose => {
            let left = build(child(node, 0, "BinaryOp")?)?;
            let right = build(child(node, 1, "BinaryOp")?)?;
            Ok(SymbolicExpr::compose(left, right))
        }
    }
}

fn child<'a>(
    node: &'a ParseNode,
    index: usize,
    node_type: &'static str,
) -> Result<&'a ParseNode, AstBuildError> {
    node.children
        .get(index)
        .ok_or(AstBuildError::MissingOperand { node_type })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semiotic::lexer::{lex_with_spans, Token};
    use crate::semiotic::parser::ExprParser;

    fn parse_tree(source: &str) -> ParseNode {
        let tokens = lex_with_spans(source).expect("test input must lex");
        ExprParser::compile()
            .parse_with_source(tokens, source)
            .expect("test input must parse")
    }

    #[test]
    fn test_build_symbol_leaf() {
        let expr = build(&parse_tree("X")).unwrap();
        assert_eq!(expr, SymbolicExpr::leaf("X"));
    }

    #[test]
    fn test_build_each_unary_production() {
        assert_eq!(
            build(&parse_tree("∇(X)")).unwrap(),
            SymbolicExpr::gradient(SymbolicExpr::leaf("X"))
        );
        assert_eq!(
            build(&parse_tree("℘(X)")).unwrap(),
            SymbolicExpr::powerset(SymbolicExpr::leaf("X"))
        );
        assert_eq!(
            build(&parse_tree("∅(X)")).unwrap(),
            SymbolicExpr::nullify(SymbolicExpr::leaf("X"))
        );
    }

    #[test]
    fn test_build_compose_folds_left() {
        let expr = build(&parse_tree("X ⊕ Y ⊕ Z")).unwrap();
        assert_eq!(
            expr,
            SymbolicExpr::compose(
                SymbolicExpr::compose(SymbolicExpr::leaf("X"), SymbolicExpr::leaf("Y")),
                SymbolicExpr::leaf("Z"),
            )
        );
    }

    #[test]
    fn test_missing_operand_is_an_error() {
        let node = ParseNode::new(NodeType::Gradient, vec![(Token::Gradient, 0..3)], vec![]);
        assert_eq!(
            build(&node),
            Err(AstBuildError::MissingOperand {
                node_type: "Gradient"
            })
        );
    }

    #[test]
    fn test_symbol_without_token_is_an_error() {
        let node = ParseNode::new(NodeType::Symbol, vec![], vec![]);
        assert_eq!(build(&node), Err(AstBuildError::MissingSymbolToken));
    }
}
