//! Read-only automaton handed to matchers and renderers.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use super::build::{Label, State, StateId};

/// A finished NFA: the state arena plus its start and accept states.
///
/// Immutable once built. Renderers need only [`states`](Self::states),
/// [`transitions_of`](Self::transitions_of), [`is_start`](Self::is_start)
/// and [`is_accept`](Self::is_accept).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    states: Vec<State>,
    start: StateId,
    accept: StateId,
}

impl Automaton {
    pub(crate) fn new(states: Vec<State>, start: StateId, accept: StateId) -> Self {
        Self {
            states,
            start,
            accept,
        }
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accept(&self) -> StateId {
        self.accept
    }

    pub fn is_start(&self, id: StateId) -> bool {
        id == self.start
    }

    pub fn is_accept(&self, id: StateId) -> bool {
        id == self.accept
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id as usize)
    }

    /// All states in identifier order.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states.iter().enumerate().map(|(i, s)| (i as StateId, s))
    }

    /// `(label, target)` pairs leaving `id`. Empty for unknown IDs.
    pub fn transitions_of(&self, id: StateId) -> impl Iterator<Item = (Label, StateId)> + '_ {
        self.state(id).into_iter().flat_map(State::transitions)
    }

    /// States reachable from start, in depth-first discovery order.
    ///
    /// Successors are explored label by label, targets in link order, so
    /// the listing follows the order edges were created in.
    pub fn reachable(&self) -> Vec<StateId> {
        let mut seen = HashSet::new();
        let mut order = Vec::new();
        let mut stack = vec![self.start];

        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            order.push(id);

            let successors: Vec<StateId> = self.transitions_of(id).map(|(_, t)| t).collect();
            stack.extend(successors.into_iter().rev());
        }

        order
    }

    /// Every input symbol that labels some transition.
    pub fn alphabet(&self) -> BTreeSet<char> {
        self.states
            .iter()
            .flat_map(State::transitions)
            .filter_map(|(label, _)| match label {
                Label::Symbol(c) => Some(c),
                Label::Epsilon => None,
            })
            .collect()
    }

    /// Serializable snapshot for external renderers.
    pub fn view(&self) -> AutomatonView {
        AutomatonView {
            start: self.start,
            accept: self.accept,
            states: self
                .states()
                .map(|(id, state)| StateView {
                    id,
                    start: self.is_start(id),
                    accept: self.is_accept(id),
                    transitions: state
                        .transitions()
                        .map(|(label, target)| TransitionView { label, target })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AutomatonView {
    pub start: StateId,
    pub accept: StateId,
    pub states: Vec<StateView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StateView {
    pub id: StateId,
    pub start: bool,
    pub accept: bool,
    pub transitions: Vec<TransitionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransitionView {
    pub label: Label,
    pub target: StateId,
}
