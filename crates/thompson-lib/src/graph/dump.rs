//! Textual listing of an automaton for inspection and snapshot tests.
//!
//! One line per state:
//!
//! ```text
//! S4 [start]: ε → S0, S2
//! S0: a → S1
//! S5 [accept]: ∅
//! ```
//!
//! Several labels on one state are separated by `; `.

use std::fmt;

use super::automaton::Automaton;
use super::build::{Label, StateId};
use crate::Colors;

/// Printer for [`Automaton`] with configurable output options.
pub struct AutomatonPrinter<'a> {
    automaton: &'a Automaton,
    colors: Colors,
    arena_order: bool,
}

impl<'a> AutomatonPrinter<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Self {
            automaton,
            colors: Colors::OFF,
            arena_order: false,
        }
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    /// List states by identifier instead of depth-first from start.
    pub fn arena_order(mut self, enabled: bool) -> Self {
        self.arena_order = enabled;
        self
    }

    pub fn dump(&self) -> String {
        self.to_string()
    }

    fn order(&self) -> Vec<StateId> {
        if self.arena_order {
            self.automaton.states().map(|(id, _)| id).collect()
        } else {
            self.automaton.reachable()
        }
    }

    fn format_state(&self, w: &mut fmt::Formatter<'_>, id: StateId) -> fmt::Result {
        let c = &self.colors;
        write!(w, "{}", c.state(id))?;
        if self.automaton.is_start(id) {
            write!(w, " {}", c.dimmed("[start]"))?;
        }
        if self.automaton.is_accept(id) {
            write!(w, " {}", c.dimmed("[accept]"))?;
        }
        write!(w, ":")?;

        let Some(state) = self.automaton.state(id) else {
            return Ok(());
        };
        if state.is_terminal() {
            return write!(w, " {}", c.dimmed("∅"));
        }

        for (i, (label, targets)) in state.by_label().enumerate() {
            if i > 0 {
                write!(w, ";")?;
            }
            let targets: Vec<_> = targets.iter().map(|t| c.state(*t)).collect();
            write!(
                w,
                " {} {} {}",
                self.format_label(label),
                c.dimmed("→"),
                targets.join(", ")
            )?;
        }
        Ok(())
    }

    fn format_label(&self, label: Label) -> String {
        match label {
            Label::Epsilon => self.colors.dimmed(label),
            Label::Symbol(symbol) => self.colors.symbol(symbol),
        }
    }
}

impl fmt::Display for AutomatonPrinter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in self.order() {
            self.format_state(f, id)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Automaton {
    /// Create a printer for this automaton.
    pub fn printer(&self) -> AutomatonPrinter<'_> {
        AutomatonPrinter::new(self)
    }

    /// Dump reachable states in discovery order, uncolored.
    pub fn dump(&self) -> String {
        self.printer().dump()
    }
}
