use crate::error::LexError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer stopped on a terminal `Error` token.
    Lex(LexError),
    /// The token stream ended inside a list.
    UnclosedLeftParen,
    /// A `)` appeared where an expression was expected.
    UnexpectedRightParen,
    /// Lists were nested deeper than the parser allows.
    NestingTooDeep {
        /// The deepest accepted nesting.
        limit: usize,
    },
    /// A number token whose text is not a valid float literal.
    InvalidNumber {
        /// The offending token text.
        literal: String,
        /// Why the conversion failed.
        reason:  String,
    },
    /// Found a token that cannot start an expression.
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::UnclosedLeftParen => write!(f, "unclosed left paren"),
            Self::UnexpectedRightParen => write!(f, "unexpected right paren"),
            Self::NestingTooDeep { limit } => {
                write!(f, "nesting too deep: more than {limit} levels")
            },
            Self::InvalidNumber { reason, .. } => write!(f, "unable to parse number: {reason}"),
            Self::UnexpectedToken { token } => write!(f, "unexpected token: {token}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            _ => None,
        }
    }
}
