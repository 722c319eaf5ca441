//! Lexer for the pattern dialect.
//!
//! Produces span-based tokens without storing text. The symbol a `Symbol`
//! token stands for is sliced from the source via [`token_text`].
//!
//! Five characters are reserved: `(`, `)`, `*`, `|` and `.`. Every other
//! character, whitespace included, lexes as a one-character `Symbol`.

use logos::Logos;

use super::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    /// Closure (Kleene star), postfix unary.
    #[token("*")]
    Star,

    /// Alternation, infix binary.
    #[token("|")]
    Pipe,

    /// Explicit concatenation, infix binary.
    #[token(".")]
    Dot,

    #[regex(r"[^()*|.]")]
    Symbol,
}

impl SyntaxKind {
    /// Whether a token of this kind closes an operand.
    ///
    /// A literal or an open group following such a token gets an implicit
    /// concatenation in front of it.
    pub fn ends_operand(self) -> bool {
        matches!(self, Self::Symbol | Self::ParenClose | Self::Star)
    }

    /// Binary operators that need an operand on each side.
    pub fn is_binary_operator(self) -> bool {
        matches!(self, Self::Pipe | Self::Dot)
    }
}

/// Zero-copy token: kind + byte span into the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Tokenizes a pattern.
///
/// The `Symbol` rule covers every non-reserved character, so a lexer error
/// can only come from input the rule somehow misses; such spans are kept as
/// `Symbol` tokens rather than dropped.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(source.len());
    let mut lexer = SyntaxKind::lexer(source);

    while let Some(result) = lexer.next() {
        let kind = result.unwrap_or(SyntaxKind::Symbol);
        tokens.push(Token::new(kind, lexer.span()));
    }

    tokens
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'p>(source: &'p str, token: &Token) -> &'p str {
    &source[token.span.clone()]
}
