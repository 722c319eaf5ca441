//! Backtracking-free NFA simulation over `(state, position)` pairs.
//!
//! Exploration keeps an explicit worklist instead of recursing, so deep
//! epsilon chains cannot overflow the call stack. Each pair is explored at
//! most once, which bounds the work to `states × (input length + 1)` and
//! terminates on epsilon cycles such as the one `(a*)*` produces.
//!
//! The visited set is local to one call; nothing survives between matches.

use std::collections::HashSet;

use crate::graph::{Automaton, Label, StateId};

use super::trace::{NoopTracer, Tracer};

/// Runs words against one automaton.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    automaton: &'a Automaton,
}

impl<'a> Matcher<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Self { automaton }
    }

    /// Whether some path consumes all of `input` and ends in the accept state.
    ///
    /// This is a convenience method that uses `NoopTracer`, which gets
    /// completely optimized away at compile time.
    pub fn is_match(&self, input: &str) -> bool {
        self.is_match_with(input, &mut NoopTracer)
    }

    /// Match with a tracer for debugging.
    pub fn is_match_with<T: Tracer>(&self, input: &str, tracer: &mut T) -> bool {
        let symbols: Vec<char> = input.chars().collect();
        let start = self.automaton.start();
        let accept = self.automaton.accept();
        tracer.trace_start(start, accept, input);

        let mut visited: HashSet<(StateId, usize)> = HashSet::new();
        let mut worklist = vec![(start, 0)];

        while let Some((state, pos)) = worklist.pop() {
            if !visited.insert((state, pos)) {
                tracer.trace_revisit(state, pos);
                continue;
            }
            tracer.trace_visit(state, pos);

            if pos == symbols.len() && state == accept {
                tracer.trace_accept(state, pos);
                log::debug!("accepted {:?} after {} pairs", input, visited.len());
                return true;
            }

            let Some(node) = self.automaton.state(state) else {
                continue;
            };

            // Pushed first, explored last: symbol moves run before epsilon moves.
            // Targets are pushed reversed so they pop in link order.
            let epsilon = node.targets(Label::Epsilon);
            for &target in epsilon {
                tracer.trace_epsilon(state, target, pos);
            }
            worklist.extend(epsilon.iter().rev().map(|&t| (t, pos)));

            if let Some(&symbol) = symbols.get(pos) {
                let moves = node.targets(Label::Symbol(symbol));
                for &target in moves {
                    tracer.trace_consume(state, symbol, target, pos);
                }
                worklist.extend(moves.iter().rev().map(|&t| (t, pos + 1)));
            }
        }

        tracer.trace_exhausted(visited.len());
        log::debug!("rejected {:?} after {} pairs", input, visited.len());
        false
    }
}

impl Automaton {
    /// Shorthand for [`Matcher::is_match`].
    pub fn is_match(&self, input: &str) -> bool {
        Matcher::new(self).is_match(input)
    }
}
