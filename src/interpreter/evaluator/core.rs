use crate::{
    ast::Node,
    error::EvalError,
    interpreter::{environment::Environment, evaluator::function::core::Builtin},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// The special form that binds a name in the environment.
pub const DEFINE: &str = "define";

/// Evaluates a node and returns the resulting node.
///
/// This is the main entry point for evaluation. The evaluator dispatches on
/// the node variant:
/// - numbers evaluate to themselves,
/// - symbols are replaced by the node bound to them, exactly as it was stored
///   and without evaluating it again,
/// - lists dispatch on their head element: the `define` form, a builtin
///   call, or plain data.
///
/// The environment is only modified by `define`; a failed evaluation leaves
/// it as it was, except for bindings made by `define` forms that completed
/// before the failure.
///
/// # Parameters
/// - `node`: Node to evaluate.
/// - `env`: The session's global bindings.
///
/// # Errors
/// - `Undefined` for an unbound symbol, whether referenced or called.
/// - `MalformedDefine` for a `define` without exactly two operands.
/// - `NotEnoughArguments` and `ExpectedNumber` from builtins.
///
/// # Example
/// ```
/// use gleam::{
///     ast::Node,
///     interpreter::{environment::Environment, evaluator::core::evaluate},
/// };
///
/// let mut env = Environment::new();
/// let sum = Node::list([Node::symbol("+"), Node::number(1.0), Node::number(2.0)]);
///
/// assert_eq!(evaluate(&sum, &mut env).unwrap(), Node::number(3.0));
/// ```
pub fn evaluate(node: &Node, env: &mut Environment) -> EvalResult<Node> {
    match node {
        Node::Number(_) => Ok(node.clone()),
        Node::Symbol(name) => {
            env.lookup(name)
               .cloned()
               .ok_or_else(|| EvalError::Undefined { name: name.clone() })
        },
        Node::List(elements) => eval_list(node, elements, env),
    }
}

/// Evaluates a list according to its head element.
///
/// Rules, checked in order:
/// 1. The empty list evaluates to itself.
/// 2. A `define` head is the binding special form.
/// 3. A builtin head evaluates every remaining element left to right and then
///    applies the builtin. The first failing element aborts the call.
/// 4. Any other symbol in head position is undefined, even if the environment
///    binds it.
/// 5. A non-symbol head makes the list plain data, returned unevaluated.
fn eval_list(list: &Node, elements: &[Node], env: &mut Environment) -> EvalResult<Node> {
    let Some((head, rest)) = elements.split_first() else {
        return Ok(list.clone());
    };

    let Some(name) = head.as_symbol() else {
        return Ok(list.clone());
    };

    if name == DEFINE {
        return eval_define(list, rest, env);
    }

    let builtin =
        Builtin::find(name).ok_or_else(|| EvalError::Undefined { name: name.to_string() })?;

    let args = rest.iter()
                   .map(|arg| evaluate(arg, env))
                   .collect::<EvalResult<Vec<_>>>()?;

    builtin.call(&args)
}

/// Evaluates `(define target expression)`.
///
/// The expression is stored verbatim, without being evaluated, under the
/// textual form of `target`. The `define` form itself is the result.
///
/// # Errors
/// `MalformedDefine` unless exactly a target and an expression follow
/// `define`.
fn eval_define(list: &Node, operands: &[Node], env: &mut Environment) -> EvalResult<Node> {
    let [target, expression] = operands else {
        return Err(EvalError::MalformedDefine);
    };

    let name = target.to_string();
    log::trace!("define {name} = {expression}");
    env.define(name, expression.clone());

    Ok(list.clone())
}
