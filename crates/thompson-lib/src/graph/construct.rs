//! Thompson construction: fold a postfix sequence into one fragment.
//!
//! Each token manipulates a stack of fragments:
//! - literal: push a two-state fragment
//! - `.`: pop right, pop left, link left.exit → right.entry
//! - `|`: pop two, wrap them in fresh entry/exit states
//! - `*`: pop one, wrap it in fresh entry/exit states with a repeat edge
//!
//! One [`Step`] is recorded per token for narration.

use std::fmt;

use serde::Serialize;

use super::automaton::Automaton;
use super::build::{BuildGraph, Fragment, StateId};
use crate::error::{Error, IncompleteKind};
use crate::parser::{Operator, Postfix, PostfixToken, Span, TokenKind};

/// What one postfix token did to the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StepKind {
    Symbol {
        symbol: char,
        from: StateId,
        to: StateId,
    },
    Concat {
        left_exit: StateId,
        right_entry: StateId,
    },
    Alternate {
        entry: StateId,
        exit: StateId,
    },
    Closure {
        entry: StateId,
        exit: StateId,
    },
}

/// Construction trace entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub kind: StepKind,
    /// Pattern text the token came from (empty for implicit concatenation).
    pub span: Span,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            StepKind::Symbol { symbol, from, to } => {
                write!(f, "Symbol '{symbol}': direct transition {from} -> {to}.")
            }
            StepKind::Concat {
                left_exit,
                right_entry,
            } => write!(
                f,
                "Operator '.': joined end {left_exit} to start {right_entry}."
            ),
            StepKind::Alternate { entry, exit } => write!(
                f,
                "Operator '|': union with new start {entry} and end {exit}."
            ),
            StepKind::Closure { entry, exit } => write!(
                f,
                "Operator '*': loop created with start {entry} and end {exit}."
            ),
        }
    }
}

/// Output of a successful construction.
#[derive(Debug, Clone)]
pub struct Construction {
    pub automaton: Automaton,
    pub steps: Vec<Step>,
}

/// Run Thompson's construction over `postfix`.
///
/// Fails with an incomplete-expression error when an operator finds too few
/// fragments, or when the sequence does not reduce to exactly one.
pub fn construct(postfix: &Postfix) -> Result<Construction, Error> {
    let mut constructor = Constructor::new(postfix.len());
    for token in postfix {
        constructor.apply(token)?;
    }
    constructor.finish(postfix)
}

struct Constructor {
    graph: BuildGraph,
    stack: Vec<Fragment>,
    steps: Vec<Step>,
}

impl Constructor {
    fn new(token_count: usize) -> Self {
        Self {
            graph: BuildGraph::new(),
            stack: Vec::new(),
            steps: Vec::with_capacity(token_count),
        }
    }

    fn apply(&mut self, token: &PostfixToken) -> Result<(), Error> {
        let kind = match token.kind {
            TokenKind::Literal(symbol) => {
                let frag = self.graph.literal(symbol);
                self.stack.push(frag);
                StepKind::Symbol {
                    symbol,
                    from: frag.entry,
                    to: frag.exit,
                }
            }
            TokenKind::Operator(op) => self.apply_operator(op, token)?,
        };

        self.steps.push(Step {
            kind,
            span: token.span.clone(),
        });
        Ok(())
    }

    fn apply_operator(&mut self, op: Operator, token: &PostfixToken) -> Result<StepKind, Error> {
        let kind = match op {
            Operator::Closure => {
                let inner = self.pop_one(op, token)?;
                let frag = self.graph.closure(inner);
                self.stack.push(frag);
                StepKind::Closure {
                    entry: frag.entry,
                    exit: frag.exit,
                }
            }
            Operator::Concat => {
                let (left, right) = self.pop_two(op, token)?;
                let frag = self.graph.concat(left, right);
                self.stack.push(frag);
                StepKind::Concat {
                    left_exit: left.exit,
                    right_entry: right.entry,
                }
            }
            Operator::Alternate => {
                let (left, right) = self.pop_two(op, token)?;
                let frag = self.graph.alternation(left, right);
                self.stack.push(frag);
                StepKind::Alternate {
                    entry: frag.entry,
                    exit: frag.exit,
                }
            }
        };
        Ok(kind)
    }

    fn pop_one(&mut self, op: Operator, token: &PostfixToken) -> Result<Fragment, Error> {
        let found = self.stack.len();
        self.stack
            .pop()
            .ok_or_else(|| underflow(op, found, token))
    }

    /// Pops right then left; returns them in source order.
    fn pop_two(
        &mut self,
        op: Operator,
        token: &PostfixToken,
    ) -> Result<(Fragment, Fragment), Error> {
        let found = self.stack.len();
        if found < 2 {
            return Err(underflow(op, found, token));
        }
        match (self.stack.pop(), self.stack.pop()) {
            (Some(right), Some(left)) => Ok((left, right)),
            _ => Err(underflow(op, found, token)),
        }
    }

    fn finish(mut self, postfix: &Postfix) -> Result<Construction, Error> {
        let count = self.stack.len();
        let fragment = match self.stack.pop() {
            Some(fragment) if count == 1 => fragment,
            Some(_) => {
                let span = postfix.tokens().last().map_or(0..0, |t| t.span.clone());
                return Err(Error::incomplete(
                    IncompleteKind::DanglingFragments { count },
                    span,
                ));
            }
            None => return Err(Error::incomplete(IncompleteKind::EmptyExpression, 0..0)),
        };

        log::debug!(
            "constructed automaton: {} states, start {}, accept {}",
            self.graph.len(),
            fragment.entry,
            fragment.exit
        );

        Ok(Construction {
            automaton: self.graph.finish(fragment),
            steps: self.steps,
        })
    }
}

fn underflow(op: Operator, found: usize, token: &PostfixToken) -> Error {
    Error::incomplete(
        IncompleteKind::OperandUnderflow {
            operator: op,
            found,
        },
        token.span.clone(),
    )
}
