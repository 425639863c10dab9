use std::{fmt, iter::FusedIterator};

use logos::Logos;

use crate::error::LexError;

/// The kind of a lexical token.
///
/// `Eof` and `Error` are terminal: exactly one of them ends every token
/// stream, and nothing follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Numeric literal tokens, such as `42`, `-7` or `3.25`.
    Number,
    /// Any other run of non-delimiter characters, such as `define` or `+`.
    Symbol,
    /// End of a balanced input.
    Eof,
    /// A terminal lexical fault; the token text holds its message.
    Error(LexError),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Number => "number",
            Self::Symbol => "symbol",
            Self::Eof => "EOF",
            Self::Error(_) => "error",
        };
        f.write_str(name)
    }
}

/// Represents a lexical token in the source input.
///
/// `text` borrows the exact source slice for delimiters, numbers and symbols.
/// It is empty for `Eof` and holds the error message for `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The source slice or message.
    pub text: &'src str,
}

impl<'src> Token<'src> {
    /// Creates a token of the given kind with the given text.
    #[must_use]
    pub const fn new(kind: TokenKind, text: &'src str) -> Self {
        Self { kind, text }
    }

    /// The end-of-input token.
    #[must_use]
    pub const fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    /// A terminal error token carrying the message of `error`.
    #[must_use]
    pub const fn error(error: LexError) -> Self {
        Self::new(TokenKind::Error(error), error.message())
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("EOF"),
            _ => f.write_str(self.text),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks how many lists are currently open so that balance faults are
/// reported while lexing rather than left to the parser.
#[derive(Default)]
pub struct LexerExtras {
    /// Number of `(` not yet matched by a `)`.
    pub depth: usize,
}

/// The raw lexemes recognized by the generated scanner.
///
/// Each variant corresponds to one state of the dispatch: a paren, a number
/// scan or a symbol scan. A bare `+` or `-` is routed by [`sign`], which looks
/// one character ahead.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(extras = LexerExtras)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n]+")]
enum Lexeme {
    #[token("(", open_paren)]
    LeftParen,
    #[token(")", close_paren)]
    RightParen,
    #[regex(r"[+-]?[0-9]+(\.[0-9]*)?")]
    #[regex(r"[+-]\.[0-9]*")]
    Number,
    #[token("+", sign)]
    #[token("-", sign)]
    #[regex(r"[^ \t\r\n()0-9+\-][^ \t\r\n)]*", allow_greedy = true)]
    Symbol,
}

impl From<Lexeme> for TokenKind {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::LeftParen => Self::LeftParen,
            Lexeme::RightParen => Self::RightParen,
            Lexeme::Number => Self::Number,
            Lexeme::Symbol => Self::Symbol,
        }
    }
}

fn open_paren(lex: &mut logos::Lexer<Lexeme>) {
    lex.extras.depth += 1;
}

fn close_paren(lex: &mut logos::Lexer<Lexeme>) -> Result<(), LexError> {
    if lex.extras.depth == 0 {
        return Err(LexError::UnexpectedRightParen);
    }
    lex.extras.depth -= 1;
    Ok(())
}

/// Decides whether a lone sign is the operator symbol or the start of a
/// number.
///
/// A sign followed by whitespace or the end of input is a symbol. Anything
/// else makes it a number scan, even when no digits follow, so the `-` in
/// `(-)` becomes a number token that later fails to parse.
fn sign(lex: &logos::Lexer<Lexeme>) -> Lexeme {
    match lex.remainder().chars().next() {
        None => Lexeme::Symbol,
        Some(c) if is_whitespace(c) => Lexeme::Symbol,
        Some(_) => Lexeme::Number,
    }
}

/// Characters that separate tokens.
#[must_use]
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// A lazy token stream over a source string.
///
/// Produced by [`lex`]. Yields tokens left to right and always finishes with
/// exactly one `Eof` or `Error` token, after which it is exhausted.
pub struct Lexer<'src> {
    inner:    logos::Lexer<'src, Lexeme>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    fn new(input: &'src str) -> Self {
        Self { inner:    Lexeme::lexer_with_extras(input, LexerExtras::default()),
               finished: false, }
    }

    /// Number of lists opened so far and not yet closed.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.inner.extras.depth
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        if self.finished {
            return None;
        }

        let token = match self.inner.next() {
            Some(Ok(lexeme)) => Token::new(lexeme.into(), self.inner.slice()),
            Some(Err(error)) => {
                self.finished = true;
                Token::error(error)
            },
            None => {
                self.finished = true;
                if self.depth() == 0 {
                    Token::eof()
                } else {
                    Token::error(LexError::UnclosedLeftParen)
                }
            },
        };

        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}

/// Turns source text into a lazy stream of tokens.
///
/// Whitespace separates tokens and is otherwise ignored. Parenthesis balance
/// is checked on the fly: a `)` with nothing open ends the stream with an
/// `unexpected right paren` error, and running out of input inside a list ends
/// it with `unclosed left paren` instead of `Eof`.
///
/// # Example
/// ```
/// use gleam::interpreter::lexer::{Token, TokenKind, lex};
///
/// let tokens: Vec<_> = lex("(+ 1 -2.5)").collect();
/// assert_eq!(tokens,
///            [Token::new(TokenKind::LeftParen, "("),
///             Token::new(TokenKind::Symbol, "+"),
///             Token::new(TokenKind::Number, "1"),
///             Token::new(TokenKind::Number, "-2.5"),
///             Token::new(TokenKind::RightParen, ")"),
///             Token::eof()]);
///
/// let tokens: Vec<_> = lex("(").collect();
/// assert_eq!(tokens.last().unwrap().text, "unclosed left paren");
/// ```
#[must_use]
pub fn lex(input: &str) -> Lexer<'_> {
    Lexer::new(input)
}
