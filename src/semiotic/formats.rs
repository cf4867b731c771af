//! Output formats for tokens and expressions
//!
//! Serialization lives here so the lexer, parser, and AST stay free of
//! format concerns. Token streams render to a simple tag format or JSON;
//! expressions render to JSON, YAML, or back to canonical notation text
//! (the inverse of parsing, for grammar-shaped trees).

use crate::semiotic::ast::expr::SymbolicExpr;
use crate::semiotic::lexer::Token;

/// Render tokens in the simple tag format, one tag per token
pub fn tokens_to_simple(tokens: &[Token]) -> String {
    let mut result = String::new();
    for token in tokens {
        result.push_str(&token.to_string());
    }
    result
}

/// Serialize tokens to pretty-printed JSON
pub fn tokens_to_json(tokens: &[Token]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tokens)
}

/// Serialize an expression to pretty-printed JSON
pub fn expr_to_json(expr: &SymbolicExpr) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(expr)
}

/// Serialize an expression to YAML
pub fn expr_to_yaml(expr: &SymbolicExpr) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(expr)
}

/// Render an expression back to canonical notation text
pub fn expr_to_notation(expr: &SymbolicExpr) -> String {
    expr.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semiotic::lexer::lex;
    use crate::semiotic::parser::parse_expr;

    #[test]
    fn test_tokens_to_simple() {
        let tokens = lex("∇(X) ⊕ ℘(Y)").unwrap();
        insta::assert_snapshot!(
            tokens_to_simple(&tokens),
            @"<gradient><open-paren><symbol:X><close-paren><compose><powerset><open-paren><symbol:Y><close-paren>"
        );
    }

    #[test]
    fn test_tokens_to_json() {
        let tokens = lex("∇(X)").unwrap();
        let json = tokens_to_json(&tokens).unwrap();
        assert!(json.contains("\"Gradient\""));
        assert!(json.contains("\"Symbol\": \"X\""));
    }

    #[test]
    fn test_expr_to_json_shape() {
        let expr = parse_expr("∇(X) ⊕ ℘(Y)").unwrap();
        let compact = serde_json::to_string(&expr).unwrap();
        insta::assert_snapshot!(
            compact,
            @r#"{"BinaryOp":{"left":{"Gradient":{"Leaf":"X"}},"op":"Compose","right":{"Powerset":{"Leaf":"Y"}}}}"#
        );
    }

    #[test]
    fn test_expr_to_yaml() {
        let expr = parse_expr("∇(X)").unwrap();
        let yaml = expr_to_yaml(&expr).unwrap();
        assert!(yaml.contains("Gradient"));
        assert!(yaml.contains("Leaf"));
    }

    #[test]
    fn test_notation_round_trip() {
        let expr = parse_expr("∇(X) ⊕ ℘(Y) ⊕ ∅(Z)").unwrap();
        let rendered = expr_to_notation(&expr);
        assert_eq!(rendered, "∇(X) ⊕ ℘(Y) ⊕ ∅(Z)");
        assert_eq!(parse_expr(&rendered).unwrap(), expr);
    }
}
