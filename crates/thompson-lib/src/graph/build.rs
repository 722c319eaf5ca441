//! Core types and construction for the state graph.
//!
//! States live in a flat arena and are referenced by `StateId`. Transitions
//! store identifiers, never ownership, so the back-edges introduced by
//! closure cost nothing structurally.
//!
//! `BuildGraph` is the builder context: it owns the arena and hands out
//! identifiers in creation order, starting from 0 for every new graph.
//! There is no separate counter; the next identifier is the arena length.

use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use super::automaton::Automaton;

/// Index into the state arena.
pub type StateId = u32;

/// Transition label: an input symbol or the empty transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    Epsilon,
    Symbol(char),
}

impl Label {
    pub fn is_epsilon(self) -> bool {
        matches!(self, Self::Epsilon)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Epsilon => f.write_str("ε"),
            Self::Symbol(c) => write!(f, "{c}"),
        }
    }
}

/// Serialized as its display form: `"ε"` or the symbol itself.
impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A node of the automaton.
///
/// Labels keep insertion order; targets under one label keep the order
/// they were linked in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    transitions: IndexMap<Label, Vec<StateId>>,
}

impl State {
    /// Targets reachable over `label`, empty if there are none.
    pub fn targets(&self, label: Label) -> &[StateId] {
        self.transitions
            .get(&label)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All `(label, target)` pairs, grouped by label.
    pub fn transitions(&self) -> impl Iterator<Item = (Label, StateId)> + '_ {
        self.transitions
            .iter()
            .flat_map(|(label, targets)| targets.iter().map(move |t| (*label, *t)))
    }

    /// Labels with their target lists.
    pub fn by_label(&self) -> impl Iterator<Item = (Label, &[StateId])> {
        self.transitions.iter().map(|(l, t)| (*l, t.as_slice()))
    }

    pub fn is_terminal(&self) -> bool {
        self.transitions.is_empty()
    }

    fn add_transition(&mut self, label: Label, target: StateId) {
        self.transitions.entry(label).or_default().push(target);
    }
}

/// A graph fragment with single entry and exit points.
///
/// Every postfix token produces one fragment. Combinators consume their
/// operand fragments and return a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub entry: StateId,
    pub exit: StateId,
}

impl Fragment {
    pub fn new(entry: StateId, exit: StateId) -> Self {
        Self { entry, exit }
    }
}

/// Build-time graph: the state arena. A new state's identifier is the
/// arena length at the time it is added.
#[derive(Debug, Default)]
pub struct BuildGraph {
    states: Vec<State>,
}

impl BuildGraph {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Add a state, returning its ID.
    pub fn add_state(&mut self) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(State::default());
        id
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id as usize]
    }

    /// Number of states in the graph.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate over all states with their IDs.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states.iter().enumerate().map(|(i, s)| (i as StateId, s))
    }

    /// Add an edge `from --label--> to`.
    pub fn connect(&mut self, from: StateId, label: Label, to: StateId) {
        self.states[from as usize].add_transition(label, to);
    }

    pub fn connect_epsilon(&mut self, from: StateId, to: StateId) {
        self.connect(from, Label::Epsilon, to);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Fragment Combinators
    // ─────────────────────────────────────────────────────────────────────

    /// Two fresh states joined by one symbol edge.
    ///
    /// ```text
    /// entry ─a→ exit
    /// ```
    pub fn literal(&mut self, symbol: char) -> Fragment {
        let entry = self.add_state();
        let exit = self.add_state();
        self.connect(entry, Label::Symbol(symbol), exit);
        Fragment::new(entry, exit)
    }

    /// left · right
    ///
    /// ```text
    /// left.entry ─…→ left.exit ─ε→ right.entry ─…→ right.exit
    /// ```
    pub fn concat(&mut self, left: Fragment, right: Fragment) -> Fragment {
        self.connect_epsilon(left.exit, right.entry);
        Fragment::new(left.entry, right.exit)
    }

    /// left | right
    ///
    /// ```text
    ///          ┌─ε→ left ──ε─┐
    /// entry ───┤             ├──→ exit
    ///          └─ε→ right ─ε─┘
    /// ```
    pub fn alternation(&mut self, left: Fragment, right: Fragment) -> Fragment {
        let entry = self.add_state();
        let exit = self.add_state();

        self.connect_epsilon(entry, left.entry);
        self.connect_epsilon(entry, right.entry);
        self.connect_epsilon(left.exit, exit);
        self.connect_epsilon(right.exit, exit);

        Fragment::new(entry, exit)
    }

    /// inner*
    ///
    /// ```text
    ///                 ┌────ε────┐
    ///                 ↓         │
    /// entry ─ε→ inner.entry …→ inner.exit ─ε→ exit
    ///   │                                      ↑
    ///   └──────────────────ε───────────────────┘
    /// ```
    ///
    /// The repeat edge is the only back-edge the construction ever adds.
    pub fn closure(&mut self, inner: Fragment) -> Fragment {
        let entry = self.add_state();
        let exit = self.add_state();

        self.connect_epsilon(entry, inner.entry);
        self.connect_epsilon(entry, exit);
        self.connect_epsilon(inner.exit, inner.entry);
        self.connect_epsilon(inner.exit, exit);

        Fragment::new(entry, exit)
    }

    /// Freeze the arena; `fragment` becomes (start, accept).
    pub fn finish(self, fragment: Fragment) -> Automaton {
        Automaton::new(self.states, fragment.entry, fragment.exit)
    }
}
