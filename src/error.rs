/// Lexing errors.
///
/// The two ways raw text can fail to tokenize: a closing parenthesis with no
/// matching opener, or input that ends while a list is still open.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning a token stream into
/// nodes, including lexing faults that surface through the stream.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while reducing a node:
/// unbound symbols, malformed `define` forms and bad builtin arguments.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any failure of the full text to result pipeline.
///
/// Syntax problems and evaluation problems are kept apart because they are
/// reported differently: the former verbatim, the latter behind an `error: `
/// prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The line could not be lexed or parsed.
    Parse(ParseError),
    /// A parsed expression failed to evaluate.
    Eval(EvalError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
