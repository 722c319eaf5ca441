//! State graph: arena, Thompson construction, and the finished automaton.
//!
//! # Architecture
//!
//! ```text
//! Postfix → construct → BuildGraph (mutable) → Automaton (read-only)
//! ```
//!
//! State identifiers are assigned in creation order and restart at 0 for
//! every construction.

mod automaton;
mod build;
mod construct;
mod dump;


pub use automaton::{Automaton, AutomatonView, StateView, TransitionView};
pub use build::{BuildGraph, Fragment, Label, State, StateId};
pub use construct::{Construction, Step, StepKind, construct};
pub use dump::AutomatonPrinter;
