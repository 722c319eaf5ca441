//! Errors produced while compiling a pattern.
//!
//! Both kinds are detected at the offending token and carry its span.
//! No automaton is returned alongside an error.

use std::fmt;

use crate::parser::{Operator, Span};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The pattern text itself is ill-formed (grouping or operator placement).
    #[error("malformed pattern: {kind}")]
    MalformedPattern { kind: MalformedKind, span: Span },

    /// The postfix reduction did not end with exactly one fragment.
    #[error("incomplete expression: {kind}")]
    IncompleteExpression { kind: IncompleteKind, span: Span },
}

impl Error {
    pub fn malformed(kind: MalformedKind, span: Span) -> Self {
        Self::MalformedPattern { kind, span }
    }

    pub fn incomplete(kind: IncompleteKind, span: Span) -> Self {
        Self::IncompleteExpression { kind, span }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::MalformedPattern { span, .. } | Self::IncompleteExpression { span, .. } => {
                span.clone()
            }
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedPattern { .. })
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::IncompleteExpression { .. })
    }

    /// Short annotation placed under the offending span.
    pub fn label(&self) -> String {
        match self {
            Self::MalformedPattern { kind, .. } => match kind {
                MalformedKind::UnclosedGroup => "this group is never closed".to_owned(),
                MalformedKind::UnopenedGroup => "no `(` to close".to_owned(),
                MalformedKind::MissingOperand { .. } => "nothing to the left".to_owned(),
                MalformedKind::TrailingOperator { .. } => "nothing to the right".to_owned(),
            },
            Self::IncompleteExpression { kind, .. } => match kind {
                IncompleteKind::EmptyExpression => "empty".to_owned(),
                IncompleteKind::OperandUnderflow { operator, found } => {
                    format!("needs {}, found {}", operand_count(operator.arity()), found)
                }
                IncompleteKind::DanglingFragments { count } => {
                    format!("{count} fragments left over")
                }
            },
        }
    }
}

fn operand_count(n: usize) -> String {
    if n == 1 {
        "1 operand".to_owned()
    } else {
        format!("{n} operands")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// `(` never closed.
    UnclosedGroup,
    /// `)` without a matching `(`.
    UnopenedGroup,
    /// Operator with no operand to its left.
    MissingOperand { operator: char },
    /// Binary operator followed by `)` or end of input.
    TrailingOperator { operator: char },
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnclosedGroup => write!(f, "unbalanced parentheses, missing `)`"),
            Self::UnopenedGroup => write!(f, "unbalanced parentheses, unexpected `)`"),
            Self::MissingOperand { operator } => {
                write!(f, "operator `{operator}` is missing its left operand")
            }
            Self::TrailingOperator { operator } => {
                write!(f, "operator `{operator}` is missing its right operand")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncompleteKind {
    /// No tokens at all, e.g. the empty pattern or `()`.
    EmptyExpression,
    /// Operator popped fewer fragments than its arity.
    OperandUnderflow { operator: Operator, found: usize },
    /// More than one fragment left once all tokens were consumed.
    DanglingFragments { count: usize },
}

impl fmt::Display for IncompleteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "pattern is empty"),
            Self::OperandUnderflow { operator, found } => write!(
                f,
                "operator `{operator}` needs {}, found {found}",
                operand_count(operator.arity())
            ),
            Self::DanglingFragments { count } => {
                write!(f, "expected a single expression, found {count}")
            }
        }
    }
}
