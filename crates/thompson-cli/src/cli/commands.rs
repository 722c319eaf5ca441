//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! Pattern commands accept every flag of their siblings, with the ones they
//! ignore hidden from `--help`, so switching `dump` to `trace` never breaks
//! a command line.

use clap::Command;

use super::args::*;

/// Add hidden output-shape args (for commands that don't print the automaton).
fn with_hidden_dump_args(cmd: Command) -> Command {
    cmd.arg(format_arg().hide(true))
        .arg(steps_arg().hide(true))
        .arg(by_id_arg().hide(true))
}

/// Add hidden matching args (for commands that don't test a word).
fn with_hidden_match_args(cmd: Command) -> Command {
    cmd.arg(word_arg().hide(true))
        .arg(verbose_arg().hide(true))
}

/// Pattern input: positional file or `-p`.
fn with_pattern_args(cmd: Command) -> Command {
    cmd.arg(pattern_path_arg()).arg(pattern_text_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("thompson")
        .about("Compile regular expressions into Thompson NFAs and run them")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(postfix_command())
        .subcommand(dump_command())
        .subcommand(steps_command())
        .subcommand(exec_command())
        .subcommand(trace_command())
        .subcommand(samples_command())
}

/// Validate a pattern.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a pattern")
        .override_usage(
            "\
  thompson check <FILE>
  thompson check -p <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  thompson check pattern.re           # from file
  thompson check -p '(a|b)*abb'       # inline pattern
  echo 'a*b' | thompson check -       # from stdin"#,
        );
    let cmd = with_pattern_args(cmd).arg(color_arg());

    // Hidden unified flags
    with_hidden_match_args(with_hidden_dump_args(cmd))
}

/// Show the postfix form of a pattern.
pub fn postfix_command() -> Command {
    let cmd = Command::new("postfix")
        .about("Show the postfix token sequence")
        .override_usage(
            "\
  thompson postfix <FILE>
  thompson postfix -p <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  thompson postfix -p '(a|b)*abb'     # a b | * a . b . b ."#,
        );
    let cmd = with_pattern_args(cmd).arg(color_arg());

    // Hidden unified flags
    with_hidden_match_args(with_hidden_dump_args(cmd))
}

/// Show the compiled automaton.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the compiled automaton")
        .override_usage(
            "\
  thompson dump <FILE> [--format <FORMAT>]
  thompson dump -p <TEXT> [--format <FORMAT>]",
        )
        .after_help(
            r#"EXAMPLES:
  thompson dump -p 'a|b'                    # states from start, depth first
  thompson dump -p 'a|b' --by-id            # states by identifier
  thompson dump -p 'a|b' --steps            # with construction steps
  thompson dump -p 'a|b' --format json      # for external renderers"#,
        );
    let cmd = with_pattern_args(cmd)
        .arg(format_arg())
        .arg(steps_arg())
        .arg(by_id_arg())
        .arg(color_arg());

    // Hidden unified flags
    with_hidden_match_args(cmd)
}

/// Narrate the construction.
pub fn steps_command() -> Command {
    let cmd = Command::new("steps")
        .about("Show the construction steps, one per postfix token")
        .override_usage(
            "\
  thompson steps <FILE>
  thompson steps -p <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  thompson steps -p 'a|b'"#,
        );
    let cmd = with_pattern_args(cmd).arg(color_arg());

    // Hidden unified flags
    with_hidden_match_args(with_hidden_dump_args(cmd))
}

/// Test a word against a pattern.
///
/// Exit code 0 on accept, 1 on reject, 2 when the pattern does not compile.
pub fn exec_command() -> Command {
    let cmd = Command::new("exec")
        .about("Test a word against a pattern")
        .override_usage(
            "\
  thompson exec <FILE> -w <WORD>
  thompson exec -p <TEXT> -w <WORD>",
        )
        .after_help(
            r#"EXAMPLES:
  thompson exec -p '(a|b)*abb' -w aabb    # Result: ACCEPTED
  thompson exec -p 'a*' -w ''             # empty word
  thompson exec -p 'a*'                   # automaton only

EXIT STATUS:
  0 accepted, 1 rejected, 2 invalid pattern"#,
        );
    let cmd = with_pattern_args(cmd).arg(word_arg()).arg(color_arg());

    // Hidden unified flags
    with_hidden_dump_args(cmd).arg(verbose_arg().hide(true))
}

/// Test a word and show how the matcher explored the automaton.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace matching of a word for debugging")
        .override_usage(
            "\
  thompson trace <FILE> -w <WORD>
  thompson trace -p <TEXT> -w <WORD>",
        )
        .after_help(
            r#"EXAMPLES:
  thompson trace -p '(a|b)*abb' -w abb      # symbol moves only
  thompson trace -p '(a|b)*abb' -w abb -v   # with epsilon moves
  thompson trace -p '(a*)*' -w b -vv        # with skipped pairs"#,
        );
    let cmd = with_pattern_args(cmd)
        .arg(word_arg())
        .arg(verbose_arg())
        .arg(color_arg());

    // Hidden unified flags
    with_hidden_dump_args(cmd)
}

/// List sample patterns.
pub fn samples_command() -> Command {
    Command::new("samples")
        .about("List sample patterns to try")
        .arg(narrate_arg())
}
