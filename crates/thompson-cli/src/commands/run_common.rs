//! Shared logic for pattern commands.

use std::path::Path;

use thompson_lib::{Compiled, Error, Verdict, compile};

use super::pattern_loader::{LoadedPattern, load_pattern};

/// Load the pattern or exit with `code`.
pub fn load_or_exit(
    pattern_path: Option<&Path>,
    pattern_text: Option<&str>,
    code: i32,
) -> LoadedPattern {
    let pattern = load_pattern(pattern_path, pattern_text).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(code);
    });
    log::debug!(
        "loaded pattern {:?} from {}",
        pattern.text,
        pattern.origin.as_deref().unwrap_or("--pattern")
    );
    pattern
}

/// Compile the pattern, or print the diagnostic and exit with `code`.
pub fn compile_or_exit(pattern: &LoadedPattern, color: bool, code: i32) -> Compiled {
    compile(&pattern.text).unwrap_or_else(|e| report_and_exit(&e, pattern, color, code))
}

pub fn report_and_exit(err: &Error, pattern: &LoadedPattern, color: bool, code: i32) -> ! {
    eprintln!("{}", render_error(err, pattern, color));
    std::process::exit(code);
}

pub fn render_error(err: &Error, pattern: &LoadedPattern, color: bool) -> String {
    let mut printer = err.printer(&pattern.text).colored(color);
    if let Some(origin) = &pattern.origin {
        printer = printer.path(origin);
    }
    printer.render()
}

/// What exec and trace print when no word was given.
pub fn print_prompt(compiled: &Compiled, color: bool) {
    print!("{}", compiled.automaton().printer().colored(color).dump());
    println!();
    println!("Enter a word to test.");
}

/// Process exit code for a verdict.
pub fn exit_code(verdict: Verdict) -> i32 {
    if verdict.is_accepted() { 0 } else { 1 }
}
