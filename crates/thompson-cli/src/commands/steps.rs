//! Narrate the construction, one line per postfix token.

use std::path::PathBuf;

use super::run_common::{compile_or_exit, load_or_exit};

pub struct StepsArgs {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub color: bool,
}

pub fn run(args: StepsArgs) {
    let pattern = load_or_exit(args.pattern_path.as_deref(), args.pattern_text.as_deref(), 1);
    let compiled = compile_or_exit(&pattern, args.color, 1);

    println!("{}", compiled.narration());
}
