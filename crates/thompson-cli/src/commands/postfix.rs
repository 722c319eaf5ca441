//! Print the postfix token sequence.

use std::path::PathBuf;

use thompson_lib::to_postfix;

use super::run_common::{load_or_exit, report_and_exit};

pub struct PostfixArgs {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub color: bool,
}

pub fn run(args: PostfixArgs) {
    let pattern = load_or_exit(args.pattern_path.as_deref(), args.pattern_text.as_deref(), 1);

    // Conversion only: `()` prints an empty line instead of failing in the builder.
    match to_postfix(&pattern.text) {
        Ok(postfix) => println!("{}", postfix),
        Err(e) => report_and_exit(&e, &pattern, args.color, 1),
    }
}
