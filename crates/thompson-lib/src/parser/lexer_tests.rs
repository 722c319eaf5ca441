//! Tests for the pattern lexer.

use super::lexer::token_text;
use super::*;

fn dump(source: &str) -> String {
    lex(source)
        .iter()
        .map(|t| format!("{:?} {:?} {:?}", t.kind, t.span, token_text(source, t)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn reserved_characters() {
    insta::assert_snapshot!(dump("()*|."), @r#"
    ParenOpen 0..1 "("
    ParenClose 1..2 ")"
    Star 2..3 "*"
    Pipe 3..4 "|"
    Dot 4..5 "."
    "#);
}

#[test]
fn every_other_character_is_a_symbol() {
    insta::assert_snapshot!(dump("a+ 0"), @r#"
    Symbol 0..1 "a"
    Symbol 1..2 "+"
    Symbol 2..3 " "
    Symbol 3..4 "0"
    "#);
}

#[test]
fn multibyte_symbols_keep_byte_spans() {
    insta::assert_snapshot!(dump("é|ß"), @r#"
    Symbol 0..2 "é"
    Pipe 2..3 "|"
    Symbol 3..5 "ß"
    "#);
}

#[test]
fn empty_source() {
    assert!(lex("").is_empty());
}

#[test]
fn operand_boundaries() {
    assert!(SyntaxKind::Symbol.ends_operand());
    assert!(SyntaxKind::ParenClose.ends_operand());
    assert!(SyntaxKind::Star.ends_operand());
    assert!(!SyntaxKind::ParenOpen.ends_operand());
    assert!(!SyntaxKind::Pipe.ends_operand());
    assert!(!SyntaxKind::Dot.ends_operand());

    assert!(SyntaxKind::Pipe.is_binary_operator());
    assert!(SyntaxKind::Dot.is_binary_operator());
    assert!(!SyntaxKind::Star.is_binary_operator());
}
