//! Test one word against a pattern.

use std::path::PathBuf;

use thompson_lib::Colors;

use super::run_common::{compile_or_exit, exit_code, load_or_exit, print_prompt};

pub struct ExecArgs {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub word: Option<String>,
    pub color: bool,
}

pub fn run(args: ExecArgs) {
    let pattern = load_or_exit(args.pattern_path.as_deref(), args.pattern_text.as_deref(), 2);
    let compiled = compile_or_exit(&pattern, args.color, 2);

    let Some(word) = args.word else {
        print_prompt(&compiled, args.color);
        return;
    };

    let verdict = compiled.verdict(&word);
    println!("{}", verdict.result_line_colored(Colors::new(args.color)));
    std::process::exit(exit_code(verdict));
}
