//! # gleam
//!
//! gleam is an interactive evaluator for a tiny s-expression language written
//! in Rust. It lexes, parses and evaluates lists of symbols and numbers with
//! four arithmetic builtins and a `define` form that binds names in a global
//! environment.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Node,
    error::Error,
    interpreter::{
        environment::Environment,
        evaluator::{core::evaluate as evaluate_node, function::core::BUILTIN_FUNCTIONS},
        lexer::lex,
        parser::parse_program,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum, the closed set of shapes an
/// expression can take: symbols, numbers and lists. The AST is built by the
/// parser, walked by the evaluator, and printed back in its textual form.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while turning a line of
/// input into a result. Every error is fatal to the current evaluation only;
/// the session and its environment carry on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Formats each error as the single-line message shown to the user.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the three-stage pipeline.
///
/// This module ties together lexing, parsing, evaluation, and the binding
/// environment. Each stage is usable on its own; [`crate::evaluate`] and
/// [`crate::run`] chain them for a whole line of input.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and environment.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a line of source code and returns the result node.
///
/// Every expression on the line is parsed before any of them is evaluated, so
/// a syntax error anywhere leaves the environment untouched. The expressions
/// are then evaluated in order against `env` and the result of the last one is
/// returned. The first failure stops the line.
///
/// # Errors
/// Returns [`Error::Parse`] if the line does not lex or parse and
/// [`Error::Eval`] if an expression fails to evaluate.
///
/// # Examples
/// ```
/// use gleam::{ast::Node, interpreter::environment::Environment, run};
///
/// let mut env = Environment::new();
/// assert_eq!(run("(define x 5) (* x 2)", &mut env).unwrap(), Node::number(10.0));
/// assert!(run("(* x", &mut env).is_err());
/// ```
pub fn run(source: &str, env: &mut Environment) -> Result<Node, Error> {
    let tokens = lex(source).inspect(|token| log::trace!("token {:?} {:?}", token.kind, token.text));
    let program = parse_program(tokens)?;
    log::debug!("parsed {} expression(s): {program:?}", program.len());

    // `parse_program` never yields an empty program.
    let mut result = Node::List(Vec::new());
    for node in &program {
        result = evaluate_node(node, env)?;
    }

    Ok(result)
}

/// Evaluates a line of source code and returns the text to show the user.
///
/// This is the entry point used by the REPL. The returned string is:
/// - the raw message for a lexing or parsing failure,
/// - `error: ` followed by the message for an evaluation failure,
/// - `result:` and a newline followed by the textual form of the result.
///
/// # Examples
/// ```
/// use gleam::{evaluate, interpreter::environment::Environment};
///
/// let mut env = Environment::new();
/// assert_eq!(evaluate("(* 2 (+ 5 7))", &mut env), "result:\n24");
/// assert_eq!(evaluate("(foo 1)", &mut env), "error: foo undefined");
/// assert_eq!(evaluate("(+ 1", &mut env), "unclosed left paren");
/// ```
pub fn evaluate(source: &str, env: &mut Environment) -> String {
    match run(source, env) {
        Ok(node) => format!("result:\n{node}"),
        Err(e) => {
            log::debug!("evaluation failed: {e:?}");
            e.to_string()
        },
    }
}

/// Evaluates a script line by line and returns the text for each line.
///
/// Blank lines are skipped. All lines share `env`, and a failing line does not
/// stop the ones after it.
///
/// # Examples
/// ```
/// use gleam::{evaluate_script, interpreter::environment::Environment};
///
/// let mut env = Environment::new();
/// let output = evaluate_script("(define x 2)\n\n(oops)\n(* x 3)\n", &mut env);
///
/// assert_eq!(output, ["result:\n(define x 2)", "error: oops undefined", "result:\n6"]);
/// ```
pub fn evaluate_script(script: &str, env: &mut Environment) -> Vec<String> {
    script.lines()
          .filter(|line| !line.trim().is_empty())
          .map(|line| evaluate(line, env))
          .collect()
}

/// The text printed by the REPL's `:help` command.
#[must_use]
pub fn help() -> String {
    format!("builtins: {}\nspecial forms: (define NAME EXPR)\ncommands: :env :help :quit",
            BUILTIN_FUNCTIONS.join(" "))
}
