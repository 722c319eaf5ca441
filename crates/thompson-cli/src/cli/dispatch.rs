//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors that pull relevant fields (ignoring hidden ones)
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use thompson_lib::Verbosity;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::{DumpArgs, DumpFormat};
use crate::commands::exec::ExecArgs;
use crate::commands::postfix::PostfixArgs;
use crate::commands::samples::SamplesArgs;
use crate::commands::steps::StepsArgs;
use crate::commands::trace::TraceArgs;

pub struct CheckParams {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub color: ColorChoice,
    // Note: word, verbose, format, steps, by_id are parsed but not extracted
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern_path: m.get_one::<PathBuf>("pattern_path").cloned(),
            pattern_text: m.get_one::<String>("pattern_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            pattern_path: p.pattern_path,
            pattern_text: p.pattern_text,
            color: p.color.should_colorize(),
        }
    }
}

pub struct PostfixParams {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub color: ColorChoice,
}

impl PostfixParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern_path: m.get_one::<PathBuf>("pattern_path").cloned(),
            pattern_text: m.get_one::<String>("pattern_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<PostfixParams> for PostfixArgs {
    fn from(p: PostfixParams) -> Self {
        Self {
            pattern_path: p.pattern_path,
            pattern_text: p.pattern_text,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub format: DumpFormat,
    pub steps: bool,
    pub by_id: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern_path: m.get_one::<PathBuf>("pattern_path").cloned(),
            pattern_text: m.get_one::<String>("pattern_text").cloned(),
            format: parse_format(m),
            steps: m.get_flag("steps"),
            by_id: m.get_flag("by_id"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            pattern_path: p.pattern_path,
            pattern_text: p.pattern_text,
            format: p.format,
            steps: p.steps,
            by_id: p.by_id,
            color: p.color.should_colorize(),
        }
    }
}

pub struct StepsParams {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub color: ColorChoice,
}

impl StepsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern_path: m.get_one::<PathBuf>("pattern_path").cloned(),
            pattern_text: m.get_one::<String>("pattern_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<StepsParams> for StepsArgs {
    fn from(p: StepsParams) -> Self {
        Self {
            pattern_path: p.pattern_path,
            pattern_text: p.pattern_text,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ExecParams {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub word: Option<String>,
    pub color: ColorChoice,
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern_path: m.get_one::<PathBuf>("pattern_path").cloned(),
            pattern_text: m.get_one::<String>("pattern_text").cloned(),
            word: m.get_one::<String>("word").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        Self {
            pattern_path: p.pattern_path,
            pattern_text: p.pattern_text,
            word: p.word,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub word: Option<String>,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern_path: m.get_one::<PathBuf>("pattern_path").cloned(),
            pattern_text: m.get_one::<String>("pattern_text").cloned(),
            word: m.get_one::<String>("word").cloned(),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };

        Self {
            pattern_path: p.pattern_path,
            pattern_text: p.pattern_text,
            word: p.word,
            verbosity,
            color: p.color.should_colorize(),
        }
    }
}

pub struct SamplesParams {
    pub narrate: bool,
}

impl SamplesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            narrate: m.get_flag("narrate"),
        }
    }
}

impl From<SamplesParams> for SamplesArgs {
    fn from(p: SamplesParams) -> Self {
        Self { narrate: p.narrate }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// Parse --format flag into DumpFormat.
fn parse_format(m: &ArgMatches) -> DumpFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => DumpFormat::Json,
        _ => DumpFormat::Text,
    }
}
