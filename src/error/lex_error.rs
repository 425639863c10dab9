#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Represents the terminal faults of the lexer.
///
/// Both are parenthesis balance violations; there is no such thing as an
/// invalid character.
pub enum LexError {
    /// A `)` was found while no list was open.
    UnexpectedRightParen,
    /// The input ended while at least one `(` was still open.
    UnclosedLeftParen,
}

impl LexError {
    /// The message carried by the `Error` token for this fault.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::UnexpectedRightParen => "unexpected right paren",
            Self::UnclosedLeftParen => "unclosed left paren",
        }
    }
}

// Every character starts some lexeme, so the only way the generated lexer can
// fail is the balance check on `)`.
impl Default for LexError {
    fn default() -> Self {
        Self::UnexpectedRightParen
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for LexError {}
