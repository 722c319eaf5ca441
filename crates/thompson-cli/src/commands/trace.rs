//! Trace matching for debugging.

use std::path::PathBuf;

use thompson_lib::{Colors, PrintTracer, Verbosity, Verdict};

use super::run_common::{compile_or_exit, exit_code, load_or_exit, print_prompt};

pub struct TraceArgs {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub word: Option<String>,
    pub verbosity: Verbosity,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let pattern = load_or_exit(args.pattern_path.as_deref(), args.pattern_text.as_deref(), 2);
    let compiled = compile_or_exit(&pattern, args.color, 2);

    let Some(word) = args.word else {
        print_prompt(&compiled, args.color);
        return;
    };

    let colors = Colors::new(args.color);
    let mut tracer = PrintTracer::builder()
        .verbosity(args.verbosity)
        .colored(args.color)
        .build();

    let verdict = Verdict::from(compiled.is_match_with(&word, &mut tracer));
    tracer.print();

    println!("{}---{}", colors.dim, colors.reset);
    println!("{}", verdict.result_line_colored(colors));
    std::process::exit(exit_code(verdict));
}
