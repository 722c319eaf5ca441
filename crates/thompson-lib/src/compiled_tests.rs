use super::*;

#[test]
fn compile_keeps_every_artifact() {
    let compiled = compile("(a|b)*abb").unwrap();

    assert_eq!(compiled.pattern(), "(a|b)*abb");
    assert_eq!(compiled.postfix().to_string(), "a b | * a . b . b .");
    assert_eq!(compiled.steps().len(), compiled.postfix().len());
    assert_eq!(compiled.automaton().len(), 14);
}

#[test]
fn narration_is_one_line_per_step() {
    let compiled = compile("a|b").unwrap();

    insta::assert_snapshot!(compiled.narration(), @r"
    Symbol 'a': direct transition 0 -> 1.
    Symbol 'b': direct transition 2 -> 3.
    Operator '|': union with new start 4 and end 5.
    ");
}

#[test]
fn each_compile_starts_numbering_at_zero() {
    let first = compile("abc").unwrap();
    let second = compile("x").unwrap();

    assert_eq!(first.steps()[0].to_string(), "Symbol 'a': direct transition 0 -> 1.");
    assert_eq!(second.steps()[0].to_string(), "Symbol 'x': direct transition 0 -> 1.");
}

#[test]
fn verdicts() {
    let compiled = compile("(a|b)*abb").unwrap();

    assert_eq!(compiled.verdict("aabb"), Verdict::Accepted);
    assert_eq!(compiled.verdict("ab"), Verdict::Rejected);
    assert_eq!(compiled.verdict("aabb").result_line(), "Result: ACCEPTED");
    assert_eq!(compiled.verdict("").result_line(), "Result: REJECTED");
}

#[test]
fn colored_result_line() {
    assert_eq!(
        Verdict::Accepted.result_line_colored(Colors::ON),
        "Result: \x1b[32mACCEPTED\x1b[0m"
    );
    assert_eq!(
        Verdict::Rejected.result_line_colored(Colors::ON),
        "Result: \x1b[31mREJECTED\x1b[0m"
    );
    assert_eq!(
        Verdict::Rejected.result_line_colored(Colors::OFF),
        Verdict::Rejected.result_line()
    );
}

#[test]
fn verdict_conversions() {
    assert_eq!(Verdict::from(true), Verdict::Accepted);
    assert!(!Verdict::from(false).is_accepted());
    assert_eq!(
        serde_json::to_value(Verdict::Rejected).unwrap(),
        serde_json::json!("REJECTED")
    );
}

#[test]
fn malformed_pattern() {
    let err = compile("(a|b").unwrap_err();

    assert!(err.is_malformed());
    assert_eq!(err.span(), 0..1);
}

#[test]
fn empty_pattern_is_incomplete() {
    let err = compile("").unwrap_err();

    assert_eq!(
        err,
        Error::IncompleteExpression {
            kind: IncompleteKind::EmptyExpression,
            span: 0..0,
        }
    );
}

#[test]
fn malformed_is_reported_before_construction() {
    // `a|` would also underflow, the converter catches it first
    assert!(compile("a|").unwrap_err().is_malformed());
    assert!(compile("a()").unwrap_err().is_incomplete());
}
