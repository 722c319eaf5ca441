//! Pattern front end: lexing and infix → postfix conversion.
//!
//! # Architecture
//!
//! ```text
//! "(a|b)*c" ─→ lex ─→ [Token] ─→ to_postfix ─→ Postfix "a b | * c ."
//! ```

pub mod lexer;
mod postfix;

#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod postfix_tests;

pub use lexer::{SyntaxKind, Token, lex};
pub use postfix::{Operator, Postfix, PostfixToken, TokenKind, to_postfix};

/// Byte range into the pattern text.
pub type Span = std::ops::Range<usize>;
