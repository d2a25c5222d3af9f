//! End-to-end tests: text in, minimized DNF text out

use dnf_simplifier::{
    simplify_expression, simplify_expression_with, to_dnf, Error, ExpansionError, Expr,
    ExpressionParseError, SimplifyConfig, MAX_NESTING_DEPTH,
};

#[test]
fn test_no_subset_relation_is_kept() {
    let expr = Expr::parse("a & b v a & !b").unwrap();
    let expanded = to_dnf(&expr).unwrap();
    assert_eq!(expanded.to_string(), "a & b v a & !b");
    assert_eq!(
        simplify_expression("a & b v a & !b").unwrap(),
        "a & b v a & !b"
    );
}

#[test]
fn test_absorption() {
    let expanded = to_dnf(&Expr::parse("a v a & b").unwrap()).unwrap();
    assert_eq!(expanded.len(), 2);
    assert_eq!(simplify_expression("a v a & b").unwrap(), "a");
}

#[test]
fn test_contradiction_yields_zero() {
    assert_eq!(simplify_expression("a & !a").unwrap(), "0");
    assert_eq!(simplify_expression("(a v !b) & !a & b").unwrap(), "0");
}

#[test]
fn test_negated_conjunction_is_unsupported() {
    let err = simplify_expression("!(a & b)").unwrap_err();
    assert!(matches!(
        err,
        Error::Expansion(ExpansionError::UnsupportedNegation { .. })
    ));
    assert!(err.to_string().contains("a & b"));
}

#[test]
fn test_missing_close_paren() {
    let err = simplify_expression("(a v b").unwrap_err();
    assert!(matches!(
        err,
        Error::Parse(ExpressionParseError::Syntax { .. })
    ));
}

#[test]
fn test_trailing_tokens() {
    let err = simplify_expression("a & b)").unwrap_err();
    assert!(matches!(
        err,
        Error::Parse(ExpressionParseError::TrailingTokens { position: 5, .. })
    ));
}

#[test]
fn test_distribution_over_groups() {
    assert_eq!(
        simplify_expression("(a v b) & (a v c)").unwrap(),
        "a v b & c"
    );
    assert_eq!(
        simplify_expression("(x v !y) & (z v w)").unwrap(),
        "x & z v w & x v !y & z v w & !y"
    );
}

#[test]
fn test_literal_order_within_terms() {
    assert_eq!(simplify_expression("c & !a & b").unwrap(), "!a & b & c");
    assert_eq!(simplify_expression("x2 & x10 & x1").unwrap(), "x1 & x10 & x2");
}

#[test]
fn test_term_order_is_first_seen() {
    assert_eq!(simplify_expression("c v b v a v b").unwrap(), "c v b v a");
}

#[test]
fn test_skipped_characters_and_whitespace() {
    assert_eq!(simplify_expression("  a&b   v\tc  ").unwrap(), "a & b v c");
    // `+` is skipped, leaving two adjacent literals
    assert!(matches!(
        simplify_expression("a + b"),
        Err(Error::Parse(ExpressionParseError::TrailingTokens { .. }))
    ));
}

#[test]
fn test_fixed_point_gives_same_output() {
    let inputs = [
        "a & b & c v a & b v a",
        "(a v b) & (a v c) & (a v d)",
        "p & q v q & r v p & q & r",
    ];
    for input in inputs {
        assert_eq!(
            simplify_expression_with(input, &SimplifyConfig::fixed_point()).unwrap(),
            simplify_expression(input).unwrap(),
            "input: {}",
            input
        );
    }
}

#[test]
fn test_errors_convert_to_io_errors() {
    let err = simplify_expression("(a").unwrap_err();
    let io_err: std::io::Error = err.into();
    assert_eq!(io_err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn test_deep_nesting_returns_error() {
    let n = MAX_NESTING_DEPTH;
    let ok = format!("{}a{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(simplify_expression(&ok).unwrap(), "a");

    for depth in [n + 1, 2000, 20000] {
        let groups = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));
        assert!(matches!(
            simplify_expression(&groups),
            Err(Error::Parse(ExpressionParseError::Syntax { .. }))
        ));
        let negations = format!("{}a", "!".repeat(depth));
        assert!(matches!(
            simplify_expression(&negations),
            Err(Error::Parse(ExpressionParseError::Syntax { .. }))
        ));
    }
}
