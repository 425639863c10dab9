use std::fs;

use gleam::{
    ast::Node,
    error::{Error, EvalError},
    evaluate,
    evaluate_script,
    help,
    interpreter::environment::Environment,
    run,
};
use walkdir::WalkDir;

const PROMPT: &str = "gleam> ";

/// Replays every session transcript under `tests/transcripts`.
///
/// A transcript alternates prompt lines, `gleam> ` followed by an input line,
/// with the output the REPL prints for that line. Lines starting with `;;`
/// and blank lines are ignored. Every file starts from an empty environment.
#[test]
fn transcripts_replay() {
    let mut count = 0;

    for entry in
        WalkDir::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/transcripts")).into_iter()
                                                                             .filter_map(Result::ok)
                                                                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "gleam"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut env = Environment::new();
        for (input, expected) in extract_exchanges(&content) {
            count += 1;
            let actual = evaluate(&input, &mut env);
            assert_eq!(actual, expected, "input {input:?} in {path:?}");
        }
    }

    assert!(count > 0, "No exchanges found in tests/transcripts");
}

fn extract_exchanges(content: &str) -> Vec<(String, String)> {
    let mut exchanges: Vec<(String, Vec<&str>)> = Vec::new();

    for line in content.lines() {
        if line.starts_with(";;") || line.trim().is_empty() {
            continue;
        }
        if let Some(input) = line.strip_prefix(PROMPT) {
            exchanges.push((input.to_string(), Vec::new()));
            continue;
        }
        match exchanges.last_mut() {
            Some((_, output)) => output.push(line),
            None => panic!("Output line {line:?} before the first prompt"),
        }
    }

    exchanges.into_iter()
             .map(|(input, output)| (input, output.join("\n")))
             .collect()
}

#[test]
fn results_are_prefixed() {
    let mut env = Environment::new();
    assert_eq!(evaluate("(+ 1 2)", &mut env), "result:\n3");
    assert_eq!(evaluate("(- 5)", &mut env), "result:\n-5");
    assert_eq!(evaluate("(+ 0.1 0.2)", &mut env), "result:\n0.30000000000000004");
    assert_eq!(evaluate("(/ 1 0)", &mut env), "result:\ninf");
    assert_eq!(evaluate("()", &mut env), "result:\n()");
}

#[test]
fn evaluation_errors_are_prefixed_and_syntax_errors_are_not() {
    let mut env = Environment::new();
    assert_eq!(evaluate("(- )", &mut env), "error: requires at least 1 argument");
    assert_eq!(evaluate("(+ 1 x)", &mut env), "error: x undefined");
    assert_eq!(evaluate(")", &mut env), "unexpected right paren");
    assert_eq!(evaluate("(+ 1 (", &mut env), "unclosed left paren");
    assert_eq!(evaluate("", &mut env), "unexpected token: EOF");
}

#[test]
fn definitions_persist_across_lines() {
    let mut env = Environment::new();
    assert_eq!(evaluate("(define x 5)", &mut env), "result:\n(define x 5)");
    assert_eq!(evaluate("(+ x 1)", &mut env), "result:\n6");
    assert_eq!(evaluate("(define x 5) (* x x)", &mut env), "result:\n25");
}

#[test]
fn syntax_error_anywhere_on_a_line_skips_the_whole_line() {
    let mut env = Environment::new();

    assert_eq!(evaluate("(define x 5) )", &mut env), "unexpected right paren");
    assert!(env.is_empty());

    assert_eq!(evaluate("(define x 5) (+ x", &mut env), "unclosed left paren");
    assert!(env.is_empty());
}

#[test]
fn deep_nesting_is_an_error_not_a_crash() {
    let mut env = Environment::new();
    evaluate("(define x 5)", &mut env);

    let deep = format!("{}1{}", "(+ ".repeat(100_000), ")".repeat(100_000));
    assert_eq!(evaluate(&deep, &mut env), "nesting too deep: more than 1024 levels");

    assert_eq!(evaluate("(+ x 1)", &mut env), "result:\n6");
}

#[test]
fn evaluation_error_keeps_earlier_definitions_on_the_line() {
    let mut env = Environment::new();

    let err = run("(define a 1) (nope) (define b 2)", &mut env).unwrap_err();
    assert!(matches!(err, Error::Eval(EvalError::Undefined { ref name }) if name == "nope"));
    assert_eq!(env.names(), ["a"]);
}

#[test]
fn run_returns_the_last_result() {
    let mut env = Environment::new();
    assert_eq!(run("1 2 (+ 1 2)", &mut env).unwrap(), Node::number(3.0));
    assert_eq!(run("(define f (a b))", &mut env).unwrap(),
               Node::list([Node::symbol("define"),
                           Node::symbol("f"),
                           Node::list([Node::symbol("a"), Node::symbol("b")])]));
    assert_eq!(run("f", &mut env).unwrap(),
               Node::list([Node::symbol("a"), Node::symbol("b")]));
}

#[test]
fn environment_lists_sorted_bindings() {
    let mut env = Environment::new();
    assert_eq!(env.to_string(), "");

    evaluate_script("(define zed (+ 1 2))\n(define a 1)\n(define (f x) ())", &mut env);
    assert_eq!(env.to_string(), "(f x) = ()\na = 1\nzed = (+ 1 2)");
}

#[test]
fn scripts_skip_blank_lines() {
    let mut env = Environment::new();
    let output = evaluate_script("\n(define x 4)\n   \n\t\n(* x x)\n)\n(y)\n", &mut env);

    assert_eq!(output,
               ["result:\n(define x 4)", "result:\n16", "unexpected right paren", "error: y undefined"]);
}

#[test]
fn help_lists_builtins_and_commands() {
    let text = help();
    assert!(text.contains("builtins: + - * /"));
    assert!(text.contains(":env :help :quit"));
}
