//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Unified flags: pattern commands accept each other's flags without error
//! 2. Help visibility: hidden flags don't appear in --help
//! 3. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use thompson_lib::Verbosity;

use super::*;
use crate::cli::commands::{
    check_command, dump_command, exec_command, postfix_command, samples_command, steps_command,
    trace_command,
};
use crate::commands::dump::{DumpArgs, DumpFormat};
use crate::commands::exec::ExecArgs;
use crate::commands::trace::TraceArgs;

#[test]
fn check_accepts_positional_file() {
    let m = check_command()
        .try_get_matches_from(["check", "pattern.re"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.pattern_path, Some(PathBuf::from("pattern.re")));
    assert_eq!(params.pattern_text, None);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn check_accepts_stdin_dash() {
    let m = check_command().try_get_matches_from(["check", "-"]).unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.pattern_path, Some(PathBuf::from("-")));
}

#[test]
fn file_and_inline_pattern_conflict() {
    let result = check_command().try_get_matches_from(["check", "pattern.re", "-p", "a"]);

    assert!(result.is_err());
}

#[test]
fn check_accepts_match_and_dump_flags() {
    let result = check_command().try_get_matches_from([
        "check", "-p", "a|b", "-w", "a", "-vv", "--format", "json", "--steps", "--by-id",
    ]);
    assert!(
        result.is_ok(),
        "check should accept unified flags: {:?}",
        result.err()
    );

    let params = CheckParams::from_matches(&result.unwrap());
    assert_eq!(params.pattern_text.as_deref(), Some("a|b"));
}

#[test]
fn postfix_accepts_match_flags() {
    let result = postfix_command().try_get_matches_from(["postfix", "-p", "ab", "-w", "ab"]);

    assert!(result.is_ok(), "{:?}", result.err());
}

#[test]
fn steps_accepts_dump_flags() {
    let result = steps_command().try_get_matches_from(["steps", "-p", "ab", "--format", "json"]);

    assert!(result.is_ok(), "{:?}", result.err());
}

#[test]
fn dump_params() {
    let m = dump_command()
        .try_get_matches_from([
            "dump", "-p", "a*", "--format", "json", "--steps", "--by-id", "--color", "never",
        ])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.format, DumpFormat::Json);
    assert!(params.steps);
    assert!(params.by_id);
    assert_eq!(params.color, ColorChoice::Never);

    let args: DumpArgs = params.into();
    assert_eq!(args.pattern_text.as_deref(), Some("a*"));
    assert!(!args.color);
}

#[test]
fn dump_defaults_to_text() {
    let m = dump_command().try_get_matches_from(["dump", "-p", "a"]).unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.format, DumpFormat::Text);
    assert!(!params.steps);
}

#[test]
fn dump_rejects_unknown_format() {
    let result = dump_command().try_get_matches_from(["dump", "-p", "a", "--format", "dot"]);

    assert!(result.is_err());
}

#[test]
fn dump_accepts_match_flags() {
    let result = dump_command().try_get_matches_from(["dump", "-p", "a", "-w", "a", "-v"]);

    assert!(result.is_ok(), "{:?}", result.err());
}

#[test]
fn exec_params() {
    let m = exec_command()
        .try_get_matches_from(["exec", "-p", "(a|b)*abb", "-w", "aabb", "--color", "always"])
        .unwrap();
    let args: ExecArgs = ExecParams::from_matches(&m).into();

    assert_eq!(args.pattern_text.as_deref(), Some("(a|b)*abb"));
    assert_eq!(args.word.as_deref(), Some("aabb"));
    assert!(args.color);
}

#[test]
fn exec_accepts_empty_word() {
    let m = exec_command()
        .try_get_matches_from(["exec", "-p", "a*", "-w", ""])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.word.as_deref(), Some(""));
}

#[test]
fn exec_without_word() {
    let m = exec_command().try_get_matches_from(["exec", "-p", "a*"]).unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.word, None);
}

#[test]
fn exec_accepts_trace_and_dump_flags() {
    let result = exec_command().try_get_matches_from([
        "exec", "-p", "a", "-w", "a", "-vv", "--format", "json", "--steps",
    ]);

    assert!(result.is_ok(), "{:?}", result.err());
}

#[test]
fn pattern_text_may_start_with_dash() {
    let m = exec_command()
        .try_get_matches_from(["exec", "-p", "-a", "-w", "-a"])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.pattern_text.as_deref(), Some("-a"));
    assert_eq!(params.word.as_deref(), Some("-a"));
}

#[test]
fn trace_verbosity_levels() {
    let cases = [
        (vec!["trace", "-p", "a", "-w", "a"], Verbosity::Default),
        (vec!["trace", "-p", "a", "-w", "a", "-v"], Verbosity::Verbose),
        (vec!["trace", "-p", "a", "-w", "a", "-vv"], Verbosity::VeryVerbose),
        (
            vec!["trace", "-p", "a", "-w", "a", "-vvv"],
            Verbosity::VeryVerbose,
        ),
    ];

    for (argv, expected) in cases {
        let m = trace_command().try_get_matches_from(argv).unwrap();
        let args: TraceArgs = TraceParams::from_matches(&m).into();
        assert_eq!(args.verbosity, expected);
    }
}

#[test]
fn samples_narrate() {
    let m = samples_command()
        .try_get_matches_from(["samples", "--narrate"])
        .unwrap();

    assert!(SamplesParams::from_matches(&m).narrate);
}

#[test]
fn samples_takes_no_pattern() {
    let result = samples_command().try_get_matches_from(["samples", "-p", "a"]);

    assert!(result.is_err());
}

#[test]
fn check_help_hides_unified_flags() {
    let help = check_command().render_help().to_string();

    assert!(help.contains("--pattern"));
    assert!(!help.contains("--word"), "check help should not show --word");
    assert!(
        !help.contains("Verbosity level"),
        "check help should not show -v description"
    );
    assert!(!help.contains("--format"), "check help should not show --format");
    assert!(!help.contains("--steps"), "check help should not show --steps");
}

#[test]
fn dump_help_shows_format_hides_word() {
    let help = dump_command().render_help().to_string();

    assert!(help.contains("--format"));
    assert!(help.contains("--by-id"));
    assert!(!help.contains("--word"), "dump help should not show --word");
}

#[test]
fn exec_help_hides_trace_flags() {
    let help = exec_command().render_help().to_string();

    assert!(help.contains("--word"));
    assert!(
        !help.contains("Verbosity level"),
        "exec help should not show -v description"
    );
    assert!(!help.contains("--by-id"), "exec help should not show --by-id");
}

#[test]
fn trace_help_shows_verbosity() {
    let help = trace_command().render_help().to_string();

    assert!(help.contains("Verbosity level"));
    assert!(!help.contains("--format"), "trace help should not show --format");
}

#[test]
fn cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["thompson"]);

    assert!(result.is_err());
}

#[test]
fn cli_dispatches_subcommands() {
    for name in ["check", "postfix", "dump", "steps", "exec", "trace"] {
        let m = build_cli()
            .try_get_matches_from(["thompson", name, "-p", "a"])
            .unwrap();
        assert_eq!(m.subcommand_name(), Some(name));
    }
}

#[test]
fn cli_debug_assertions() {
    build_cli().debug_assert();
}
