//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.
//! The same definition is reused across commands, hidden (via `.hide(true)`)
//! where a command accepts but ignores it.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Pattern file (positional, `-` for stdin).
pub fn pattern_path_arg() -> Arg {
    Arg::new("pattern_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("pattern_text")
        .help("Pattern file (use - for stdin)")
}

/// Inline pattern text (-p/--pattern).
pub fn pattern_text_arg() -> Arg {
    Arg::new("pattern_text")
        .short('p')
        .long("pattern")
        .value_name("TEXT")
        .allow_hyphen_values(true)
        .help("Inline pattern text")
}

/// Word to test (-w/--word). May be empty.
pub fn word_arg() -> Arg {
    Arg::new("word")
        .short('w')
        .long("word")
        .value_name("WORD")
        .allow_hyphen_values(true)
        .help("Word to test against the pattern")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Output format")
}

/// Include the construction trace (--steps).
pub fn steps_arg() -> Arg {
    Arg::new("steps")
        .long("steps")
        .action(ArgAction::SetTrue)
        .help("Include the construction steps")
}

/// List states by identifier (--by-id).
pub fn by_id_arg() -> Arg {
    Arg::new("by_id")
        .long("by-id")
        .action(ArgAction::SetTrue)
        .help("List states by identifier instead of from the start state")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for verbose, -vv for very verbose)")
}

/// Spoken-style suggestion text (--narrate).
pub fn narrate_arg() -> Arg {
    Arg::new("narrate")
        .long("narrate")
        .action(ArgAction::SetTrue)
        .help("Also print the suggestions as a sentence")
}
