//! One-call compilation: pattern text → postfix → automaton.

use std::fmt;

use serde::Serialize;

use crate::Colors;
use crate::engine::{Matcher, Tracer};
use crate::graph::{Automaton, Step, construct};
use crate::parser::{Postfix, to_postfix};

/// Outcome of testing one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl Verdict {
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// `Result: ACCEPTED` / `Result: REJECTED`
    pub fn result_line(self) -> String {
        self.result_line_colored(Colors::OFF)
    }

    /// Like [`result_line`](Self::result_line), verdict in green or red.
    pub fn result_line_colored(self, colors: Colors) -> String {
        let color = if self.is_accepted() {
            colors.green
        } else {
            colors.red
        };
        format!("Result: {}{}{}", color, self, colors.reset)
    }
}

impl From<bool> for Verdict {
    fn from(accepted: bool) -> Self {
        if accepted {
            Self::Accepted
        } else {
            Self::Rejected
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => f.write_str("ACCEPTED"),
            Self::Rejected => f.write_str("REJECTED"),
        }
    }
}

/// A pattern with every artifact of its compilation.
#[derive(Debug, Clone)]
pub struct Compiled {
    pattern: String,
    postfix: Postfix,
    automaton: Automaton,
    steps: Vec<Step>,
}

/// Compile `pattern` into an automaton.
///
/// State identifiers start at 0 on every call.
pub fn compile(pattern: &str) -> crate::Result<Compiled> {
    let postfix = to_postfix(pattern)?;
    log::debug!("postfix for {:?}: {}", pattern, postfix);

    let construction = construct(&postfix)?;

    Ok(Compiled {
        pattern: pattern.to_owned(),
        postfix,
        automaton: construction.automaton,
        steps: construction.steps,
    })
}

impl Compiled {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn postfix(&self) -> &Postfix {
        &self.postfix
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// Construction trace, one entry per postfix token.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Construction trace as text, one line per step.
    pub fn narration(&self) -> String {
        let lines: Vec<String> = self.steps.iter().map(Step::to_string).collect();
        lines.join("\n")
    }

    pub fn matcher(&self) -> Matcher<'_> {
        Matcher::new(&self.automaton)
    }

    pub fn is_match(&self, word: &str) -> bool {
        self.matcher().is_match(word)
    }

    pub fn is_match_with<T: Tracer>(&self, word: &str, tracer: &mut T) -> bool {
        self.matcher().is_match_with(word, tracer)
    }

    pub fn verdict(&self, word: &str) -> Verdict {
        Verdict::from(self.is_match(word))
    }
}
