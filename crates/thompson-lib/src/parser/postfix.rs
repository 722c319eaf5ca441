//! Shunting-yard conversion from infix pattern to postfix tokens.
//!
//! Precedence: closure (3) > concatenation (2) > alternation (1).
//! Binary operators are left-associative: an incoming operator first pops
//! every stacked operator of equal or higher precedence.
//!
//! Juxtaposition means concatenation. Before a literal or an open group,
//! if the previous token ended an operand (literal, `)` or `*`), a
//! concatenation operator is synthesized and reduced exactly like an
//! explicit `.`. So `(a)(b)` and `a*b` both concatenate.
//!
//! Lexical errors are reported at the offending token:
//! - `)` without a matching `(` → [`MalformedKind::UnopenedGroup`]
//! - `(` still open at end of input → [`MalformedKind::UnclosedGroup`]
//! - `*`, `|`, `.` with nothing on the left → [`MalformedKind::MissingOperand`]
//! - `|`, `.` followed by `)` or end of input → [`MalformedKind::TrailingOperator`]
//!
//! Empty groups like `()` are not lexical errors; the builder rejects
//! the resulting postfix sequence as incomplete.

use std::fmt;

use super::Span;
use super::lexer::{SyntaxKind, Token, lex, token_text};
use crate::error::{Error, MalformedKind};

/// Operators of the dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `.`, explicit or implicit.
    Concat,
    /// `|`
    Alternate,
    /// `*`
    Closure,
}

impl Operator {
    pub fn precedence(self) -> u8 {
        match self {
            Self::Closure => 3,
            Self::Concat => 2,
            Self::Alternate => 1,
        }
    }

    /// Number of fragments the operator consumes.
    pub fn arity(self) -> usize {
        match self {
            Self::Closure => 1,
            Self::Concat | Self::Alternate => 2,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Concat => '.',
            Self::Alternate => '|',
            Self::Closure => '*',
        }
    }

    fn from_kind(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::Dot => Some(Self::Concat),
            SyntaxKind::Pipe => Some(Self::Alternate),
            SyntaxKind::Star => Some(Self::Closure),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Literal(char),
    Operator(Operator),
}

/// One postfix token with the span of the pattern text it came from.
///
/// Synthesized concatenations carry an empty span at the start of the
/// token that triggered them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostfixToken {
    pub kind: TokenKind,
    pub span: Span,
}

impl PostfixToken {
    pub fn literal(symbol: char, span: Span) -> Self {
        Self {
            kind: TokenKind::Literal(symbol),
            span,
        }
    }

    pub fn operator(operator: Operator, span: Span) -> Self {
        Self {
            kind: TokenKind::Operator(operator),
            span,
        }
    }

    /// True for concatenations inserted by juxtaposition.
    pub fn is_implicit(&self) -> bool {
        self.span.is_empty()
    }
}

impl fmt::Display for PostfixToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Literal(c) => write!(f, "{c}"),
            TokenKind::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// Immutable postfix token sequence, consumable strictly left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postfix {
    tokens: Vec<PostfixToken>,
}

impl Postfix {
    /// Wrap an already-ordered postfix sequence.
    ///
    /// No validation happens here; the builder checks operand counts.
    pub fn new(tokens: Vec<PostfixToken>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[PostfixToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PostfixToken> {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a Postfix {
    type Item = &'a PostfixToken;
    type IntoIter = std::slice::Iter<'a, PostfixToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Space-separated, e.g. `a b | * a . b . b .`
impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Convert an infix pattern into postfix order.
pub fn to_postfix(pattern: &str) -> Result<Postfix, Error> {
    let mut converter = Converter::new(pattern);
    for token in lex(pattern) {
        converter.push(token)?;
    }
    converter.finish()
}

/// Operator-stack entries. Groups sit on the same stack as operators and
/// act as barriers (precedence 0).
#[derive(Debug)]
enum StackEntry {
    Operator(Operator, Span),
    Group(Span),
}

struct Converter<'p> {
    source: &'p str,
    output: Vec<PostfixToken>,
    stack: Vec<StackEntry>,
    prev: Option<Token>,
}

impl<'p> Converter<'p> {
    fn new(source: &'p str) -> Self {
        Self {
            source,
            output: Vec::new(),
            stack: Vec::new(),
            prev: None,
        }
    }

    fn push(&mut self, token: Token) -> Result<(), Error> {
        match token.kind {
            SyntaxKind::Symbol => {
                self.implicit_concat(&token);
                let symbol = token_text(self.source, &token)
                    .chars()
                    .next()
                    .unwrap_or_default();
                self.output
                    .push(PostfixToken::literal(symbol, token.span.clone()));
            }
            SyntaxKind::ParenOpen => {
                self.implicit_concat(&token);
                self.stack.push(StackEntry::Group(token.span.clone()));
            }
            SyntaxKind::ParenClose => {
                self.check_right_operand()?;
                self.close_group(&token)?;
            }
            SyntaxKind::Star | SyntaxKind::Pipe | SyntaxKind::Dot => {
                if !self.prev_ends_operand() {
                    return Err(Error::malformed(
                        MalformedKind::MissingOperand {
                            operator: token_text(self.source, &token)
                                .chars()
                                .next()
                                .unwrap_or_default(),
                        },
                        token.span.clone(),
                    ));
                }
                if let Some(op) = Operator::from_kind(token.kind) {
                    self.reduce(op, token.span.clone());
                }
            }
        }

        self.prev = Some(token);
        Ok(())
    }

    fn finish(mut self) -> Result<Postfix, Error> {
        self.check_right_operand()?;

        while let Some(entry) = self.stack.pop() {
            match entry {
                StackEntry::Operator(op, span) => {
                    self.output.push(PostfixToken::operator(op, span));
                }
                StackEntry::Group(span) => {
                    return Err(Error::malformed(MalformedKind::UnclosedGroup, span));
                }
            }
        }

        log::trace!("postfix for {:?}: {} tokens", self.source, self.output.len());
        Ok(Postfix::new(self.output))
    }

    fn prev_ends_operand(&self) -> bool {
        self.prev.as_ref().is_some_and(|t| t.kind.ends_operand())
    }

    /// A binary operator right before `)` or end of input has no right operand.
    fn check_right_operand(&self) -> Result<(), Error> {
        match &self.prev {
            Some(prev) if prev.kind.is_binary_operator() => Err(Error::malformed(
                MalformedKind::TrailingOperator {
                    operator: token_text(self.source, prev)
                        .chars()
                        .next()
                        .unwrap_or_default(),
                },
                prev.span.clone(),
            )),
            _ => Ok(()),
        }
    }

    fn implicit_concat(&mut self, next: &Token) {
        if self.prev_ends_operand() {
            let at = next.span.start;
            self.reduce(Operator::Concat, at..at);
        }
    }

    /// Pop every stacked operator binding at least as tightly as `op`,
    /// then push `op`.
    fn reduce(&mut self, op: Operator, span: Span) {
        while let Some(StackEntry::Operator(top, _)) = self.stack.last() {
            if top.precedence() < op.precedence() {
                break;
            }
            if let Some(StackEntry::Operator(top, top_span)) = self.stack.pop() {
                self.output.push(PostfixToken::operator(top, top_span));
            }
        }
        self.stack.push(StackEntry::Operator(op, span));
    }

    fn close_group(&mut self, close: &Token) -> Result<(), Error> {
        loop {
            match self.stack.pop() {
                Some(StackEntry::Operator(op, span)) => {
                    self.output.push(PostfixToken::operator(op, span));
                }
                Some(StackEntry::Group(_)) => return Ok(()),
                None => {
                    return Err(Error::malformed(
                        MalformedKind::UnopenedGroup,
                        close.span.clone(),
                    ));
                }
            }
        }
    }
}
