//! Print the compiled automaton as text or JSON.

use std::path::PathBuf;

use serde::Serialize;
use thompson_lib::Compiled;
use thompson_lib::graph::{AutomatonView, Step};

use super::run_common::{compile_or_exit, load_or_exit};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DumpFormat {
    #[default]
    Text,
    Json,
}

pub struct DumpArgs {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub format: DumpFormat,
    pub steps: bool,
    pub by_id: bool,
    pub color: bool,
}

#[derive(Serialize)]
struct DumpOutput<'a> {
    pattern: &'a str,
    postfix: String,
    automaton: AutomatonView,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<&'a [Step]>,
}

pub fn run(args: DumpArgs) {
    let pattern = load_or_exit(args.pattern_path.as_deref(), args.pattern_text.as_deref(), 1);
    let compiled = compile_or_exit(&pattern, args.color, 1);

    match args.format {
        DumpFormat::Text => print!("{}", render_text(&compiled, &args)),
        DumpFormat::Json => match render_json(&compiled, args.steps) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize automaton: {}", e);
                std::process::exit(1);
            }
        },
    }
}

pub fn render_text(compiled: &Compiled, args: &DumpArgs) -> String {
    let mut out = String::new();
    if args.steps {
        out.push_str(&compiled.narration());
        out.push_str("\n\n");
    }
    out.push_str(
        &compiled
            .automaton()
            .printer()
            .colored(args.color)
            .arena_order(args.by_id)
            .dump(),
    );
    out
}

pub fn render_json(compiled: &Compiled, steps: bool) -> serde_json::Result<String> {
    let output = DumpOutput {
        pattern: compiled.pattern(),
        postfix: compiled.postfix().to_string(),
        automaton: compiled.automaton().view(),
        steps: steps.then(|| compiled.steps()),
    };
    serde_json::to_string_pretty(&output)
}
