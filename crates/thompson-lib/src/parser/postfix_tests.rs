//! Tests for infix → postfix conversion.

use super::*;
use crate::error::{Error, MalformedKind};

fn postfix(pattern: &str) -> String {
    match to_postfix(pattern) {
        Ok(p) => p.to_string(),
        Err(e) => format!("error: {e}"),
    }
}

fn malformed(pattern: &str) -> (MalformedKind, Span) {
    match to_postfix(pattern) {
        Err(Error::MalformedPattern { kind, span }) => (kind, span),
        other => panic!("expected malformed pattern for {pattern:?}, got {other:?}"),
    }
}

#[test]
fn single_literal() {
    insta::assert_snapshot!(postfix("a"), @"a");
}

#[test]
fn juxtaposition_concatenates() {
    insta::assert_snapshot!(postfix("abc"), @"a b . c .");
}

#[test]
fn explicit_dot_matches_juxtaposition() {
    assert_eq!(postfix("a.b.c"), postfix("abc"));
}

#[test]
fn alternation_binds_loosest() {
    insta::assert_snapshot!(postfix("ab|c"), @"a b . c |");
    insta::assert_snapshot!(postfix("a|bc"), @"a b c . |");
}

#[test]
fn closure_binds_tightest() {
    insta::assert_snapshot!(postfix("ab*"), @"a b * .");
    insta::assert_snapshot!(postfix("a|b*"), @"a b * |");
}

#[test]
fn left_associative() {
    insta::assert_snapshot!(postfix("a|b|c"), @"a b | c |");
    insta::assert_snapshot!(postfix("a.b.c"), @"a b . c .");
}

#[test]
fn groups_override_precedence() {
    insta::assert_snapshot!(postfix("(a|b)*abb"), @"a b | * a . b . b .");
    insta::assert_snapshot!(postfix("a(b|c)"), @"a b c | .");
}

#[test]
fn adjacent_groups_concatenate() {
    insta::assert_snapshot!(postfix("(a)(b)"), @"a b .");
}

#[test]
fn closure_then_literal_concatenates() {
    insta::assert_snapshot!(postfix("a*b*c*"), @"a * b * . c * .");
}

#[test]
fn repeated_closure() {
    insta::assert_snapshot!(postfix("a**"), @"a * *");
    insta::assert_snapshot!(postfix("(a*)*"), @"a * *");
}

#[test]
fn plus_is_literal() {
    insta::assert_snapshot!(postfix("(0|1)+"), @"0 1 | + .");
}

#[test]
fn implicit_concat_has_empty_span() {
    let p = to_postfix("ab").unwrap();
    let concat = &p.tokens()[2];

    assert_eq!(concat.kind, TokenKind::Operator(Operator::Concat));
    assert!(concat.is_implicit());
    assert_eq!(concat.span, 1..1);
}

#[test]
fn explicit_concat_keeps_its_span() {
    let p = to_postfix("a.b").unwrap();
    let concat = &p.tokens()[2];

    assert!(!concat.is_implicit());
    assert_eq!(concat.span, 1..2);
}

#[test]
fn literal_spans_point_into_pattern() {
    let p = to_postfix("(a|b)").unwrap();
    let spans: Vec<_> = p.iter().map(|t| t.span.clone()).collect();

    assert_eq!(spans, vec![1..2, 3..4, 2..3]);
}

#[test]
fn empty_pattern_is_empty_postfix() {
    assert!(to_postfix("").unwrap().is_empty());
}

#[test]
fn empty_group_is_not_a_lexical_error() {
    assert!(to_postfix("()").unwrap().is_empty());
    insta::assert_snapshot!(postfix("a()"), @"a .");
}

#[test]
fn unclosed_group() {
    assert_eq!(malformed("(a|b"), (MalformedKind::UnclosedGroup, 0..1));
    assert_eq!(malformed("a((b)"), (MalformedKind::UnclosedGroup, 1..2));
}

#[test]
fn unopened_group() {
    assert_eq!(malformed("a)"), (MalformedKind::UnopenedGroup, 1..2));
    assert_eq!(malformed("(a))"), (MalformedKind::UnopenedGroup, 3..4));
}

#[test]
fn operator_without_left_operand() {
    assert_eq!(
        malformed("*a"),
        (MalformedKind::MissingOperand { operator: '*' }, 0..1)
    );
    assert_eq!(
        malformed("|a"),
        (MalformedKind::MissingOperand { operator: '|' }, 0..1)
    );
    assert_eq!(
        malformed("a||b"),
        (MalformedKind::MissingOperand { operator: '|' }, 2..3)
    );
    assert_eq!(
        malformed("(*)"),
        (MalformedKind::MissingOperand { operator: '*' }, 1..2)
    );
}

#[test]
fn operator_without_right_operand() {
    assert_eq!(
        malformed("a|"),
        (MalformedKind::TrailingOperator { operator: '|' }, 1..2)
    );
    assert_eq!(
        malformed("a."),
        (MalformedKind::TrailingOperator { operator: '.' }, 1..2)
    );
    assert_eq!(
        malformed("(a|)b"),
        (MalformedKind::TrailingOperator { operator: '|' }, 2..3)
    );
}

#[test]
fn error_messages() {
    insta::assert_snapshot!(postfix("(a"), @"error: malformed pattern: unbalanced parentheses, missing `)`");
    insta::assert_snapshot!(postfix("a)"), @"error: malformed pattern: unbalanced parentheses, unexpected `)`");
    insta::assert_snapshot!(postfix("*"), @"error: malformed pattern: operator `*` is missing its left operand");
    insta::assert_snapshot!(postfix("a|"), @"error: malformed pattern: operator `|` is missing its right operand");
}

#[test]
fn operator_metadata() {
    assert!(Operator::Closure.precedence() > Operator::Concat.precedence());
    assert!(Operator::Concat.precedence() > Operator::Alternate.precedence());
    assert_eq!(Operator::Closure.arity(), 1);
    assert_eq!(Operator::Alternate.arity(), 2);
    assert_eq!(Operator::Concat.to_string(), ".");
}
