#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// A symbol was referenced or called without a binding.
    Undefined {
        /// The name of the symbol.
        name: String,
    },
    /// A `define` form did not have exactly a target and an expression.
    MalformedDefine,
    /// A builtin received fewer arguments than it requires.
    NotEnoughArguments {
        /// The builtin's name.
        name: String,
        /// The smallest accepted argument count.
        min:  usize,
    },
    /// A builtin received an argument that is not a number.
    ExpectedNumber {
        /// The builtin's name.
        name: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undefined { name } => write!(f, "{name} undefined"),
            Self::MalformedDefine => write!(f, "expected identifier and expression"),
            Self::NotEnoughArguments { min, .. } => {
                let plural = if *min == 1 { "" } else { "s" };
                write!(f, "requires at least {min} argument{plural}")
            },
            Self::ExpectedNumber { .. } => write!(f, "expected number"),
        }
    }
}

impl std::error::Error for EvalError {}
