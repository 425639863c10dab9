use crate::{
    ast::Node,
    error::EvalError,
    interpreter::evaluator::{core::EvalResult, function::builtin},
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the numeric values of its already evaluated arguments.
type BuiltinFn = fn(&[f64]) -> f64;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Any` accepts every count, including zero.
/// - `AtLeast(n)` requires `n` or more arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Any,
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity constraint,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "+" => { arity: Arity::Any, func: builtin::add },
    "-" => { arity: Arity::AtLeast(1), func: builtin::sub },
    "*" => { arity: Arity::Any, func: builtin::mul },
    "/" => { arity: Arity::AtLeast(1), func: builtin::div },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    fn check(self, name: &str, n: usize) -> EvalResult<()> {
        match self {
            Self::AtLeast(min) if n < min => {
                Err(EvalError::NotEnoughArguments { name: name.to_string(),
                                                    min })
            },
            _ => Ok(()),
        }
    }
}

/// One entry of the builtin table.
///
/// The table is static: builtins cannot be added, removed or redefined at run
/// time, and binding one of their names with `define` does not affect calls.
pub struct Builtin {
    name:  &'static str,
    arity: Arity,
    func:  BuiltinFn,
}

impl Builtin {
    /// Looks up the builtin called `name`.
    ///
    /// # Example
    /// ```
    /// use gleam::interpreter::evaluator::function::core::{Arity, Builtin};
    ///
    /// assert_eq!(Builtin::find("-").unwrap().arity(), Arity::AtLeast(1));
    /// assert!(Builtin::find("define").is_none());
    /// ```
    #[must_use]
    pub fn find(name: &str) -> Option<&'static Self> {
        BUILTIN_TABLE.iter().find(|b| b.name == name)
    }

    /// The name the builtin is called by.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// How many arguments the builtin accepts.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    /// Applies the builtin to evaluated arguments.
    ///
    /// The arity is checked first, then every argument must be a number.
    ///
    /// # Errors
    /// - `NotEnoughArguments` if the arity constraint is not met.
    /// - `ExpectedNumber` if any argument is not a number node.
    pub fn call(&self, args: &[Node]) -> EvalResult<Node> {
        self.arity.check(self.name, args.len())?;

        let numbers = args.iter()
                          .map(|arg| {
                              arg.as_number()
                                 .ok_or_else(|| EvalError::ExpectedNumber { name: self.name
                                                                                      .to_string() })
                          })
                          .collect::<EvalResult<Vec<_>>>()?;

        let result = (self.func)(&numbers);
        log::trace!("({} {numbers:?}) = {result}", self.name());

        Ok(Node::number(result))
    }
}
