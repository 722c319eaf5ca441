//! Thompson: compile a small regular-expression dialect into an NFA and simulate it.
//!
//! The dialect has literal symbols, grouping `( )`, alternation `|`,
//! explicit concatenation `.`, implicit concatenation by juxtaposition,
//! and closure `*`. Every other printable character is a literal.
//!
//! # Example
//!
//! ```
//! use thompson_lib::compile;
//!
//! let compiled = compile("(a|b)*abb").expect("valid pattern");
//!
//! assert!(compiled.is_match("aabb"));
//! assert!(!compiled.is_match("ab"));
//! assert_eq!(compiled.verdict("babb").to_string(), "ACCEPTED");
//! ```
//!
//! # Pipeline
//!
//! ```text
//! pattern ─→ lex ─→ to_postfix ─→ construct ─→ Automaton ─→ Matcher
//!                                    │
//!                                    └─→ Vec<Step> (construction trace)
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod colors;
pub mod compiled;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod graph;
pub mod parser;
pub mod samples;

#[cfg(test)]
mod compiled_tests;

pub use colors::Colors;
pub use compiled::{Compiled, Verdict, compile};
pub use diagnostics::ErrorPrinter;
pub use engine::{Matcher, NoopTracer, PrintTracer, Tracer, Verbosity};
pub use error::{Error, IncompleteKind, MalformedKind};
pub use graph::{Automaton, Label, StateId, Step};
pub use parser::{Postfix, Span, to_postfix};
pub use samples::SAMPLE_PATTERNS;

/// Result type for pattern compilation.
pub type Result<T> = std::result::Result<T, Error>;
