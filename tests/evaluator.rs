use gleam::{
    ast::Node,
    error::EvalError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, evaluate},
            function::{
                builtin,
                core::{Arity, BUILTIN_FUNCTIONS, Builtin},
            },
        },
        lexer::lex,
        parser::parse,
    },
};

fn node(src: &str) -> Node {
    parse(&mut lex(src).peekable()).unwrap()
}

fn eval(src: &str, env: &mut Environment) -> EvalResult<Node> {
    evaluate(&node(src), env)
}

fn eval_fresh(src: &str) -> EvalResult<Node> {
    eval(src, &mut Environment::new())
}

fn undefined(name: &str) -> EvalError {
    EvalError::Undefined { name: name.to_string() }
}

#[test]
fn numbers_evaluate_to_themselves() {
    assert_eq!(eval_fresh("42").unwrap(), Node::number(42.0));
    assert_eq!(eval_fresh("-0.25").unwrap(), Node::number(-0.25));
}

#[test]
fn empty_list_evaluates_to_itself() {
    assert_eq!(eval_fresh("()").unwrap(), Node::list([]));
}

#[test]
fn list_with_non_symbol_head_is_data() {
    assert_eq!(eval_fresh("(1 2 3)").unwrap(), node("(1 2 3)"));
    assert_eq!(eval_fresh("((+ 1 2) (foo))").unwrap(), node("((+ 1 2) (foo))"));
}

#[test]
fn arithmetic() {
    assert_eq!(eval_fresh("(+ 1 2)").unwrap(), Node::number(3.0));
    assert_eq!(eval_fresh("(* 2 (+ 5 7))").unwrap(), Node::number(24.0));
    assert_eq!(eval_fresh("(- 10 4 3)").unwrap(), Node::number(3.0));
    assert_eq!(eval_fresh("(/ 100 5 2)").unwrap(), Node::number(10.0));
    assert_eq!(eval_fresh("(+ 0.5 (* -2 (- 3)))").unwrap(), Node::number(6.5));
}

#[test]
fn builtin_identities() {
    assert_eq!(eval_fresh("(+ )").unwrap(), Node::number(0.0));
    assert_eq!(eval_fresh("(* )").unwrap(), Node::number(1.0));
    assert_eq!(eval_fresh("(- 5)").unwrap(), Node::number(-5.0));
    assert_eq!(eval_fresh("(/ 4)").unwrap(), Node::number(4.0));
}

#[test]
fn subtraction_and_division_need_an_argument() {
    for src in ["(- )", "(/ )"] {
        let err = eval_fresh(src).unwrap_err();
        assert!(matches!(err, EvalError::NotEnoughArguments { min: 1, .. }));
        assert_eq!(err.to_string(), "requires at least 1 argument");
    }
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_eq!(eval_fresh("(/ 1 0)").unwrap(), Node::number(f64::INFINITY));
    assert_eq!(eval_fresh("(/ -1 0)").unwrap(), Node::number(f64::NEG_INFINITY));
    assert_eq!(eval_fresh("(/ 0 0)").unwrap(), Node::number(f64::NAN));
}

#[test]
fn builtins_reject_non_numbers() {
    let mut env = Environment::new();
    env.define("s", Node::symbol("t"));

    for src in ["(+ 1 ())", "(* s 2)", "(- (1 2))", "(/ 1 (define q 2))"] {
        let err = eval(src, &mut env).unwrap_err();
        assert!(matches!(err, EvalError::ExpectedNumber { .. }), "{src}");
        assert_eq!(err.to_string(), "expected number");
    }
}

#[test]
fn unknown_head_is_undefined() {
    assert_eq!(eval_fresh("(foo 1)").unwrap_err(), undefined("foo"));
    assert_eq!(eval_fresh("(foo 1)").unwrap_err().to_string(), "foo undefined");
}

#[test]
fn bound_names_are_not_callable() {
    let mut env = Environment::new();
    eval("(define f 5)", &mut env).unwrap();
    assert_eq!(eval("(f 1)", &mut env).unwrap_err(), undefined("f"));
}

#[test]
fn unbound_symbol_is_undefined() {
    assert_eq!(eval_fresh("x").unwrap_err(), undefined("x"));
    assert_eq!(eval_fresh("define").unwrap_err(), undefined("define"));
}

#[test]
fn define_stores_the_expression_and_returns_the_form() {
    let mut env = Environment::new();

    assert_eq!(eval("(define x 5)", &mut env).unwrap(), node("(define x 5)"));
    assert_eq!(env.lookup("x"), Some(&Node::number(5.0)));
    assert_eq!(eval("(+ x 1)", &mut env).unwrap(), Node::number(6.0));

    eval("(define x 7)", &mut env).unwrap();
    assert_eq!(eval("x", &mut env).unwrap(), Node::number(7.0));
    assert_eq!(env.len(), 1);
}

#[test]
fn define_does_not_evaluate_its_expression() {
    let mut env = Environment::new();

    eval("(define y (+ 1 2))", &mut env).unwrap();
    assert_eq!(env.lookup("y"), Some(&node("(+ 1 2)")));

    // A reference substitutes the stored node once, without reducing it.
    assert_eq!(eval("y", &mut env).unwrap(), node("(+ 1 2)"));
    assert!(matches!(eval("(+ y 1)", &mut env), Err(EvalError::ExpectedNumber { .. })));

    // An unbound name inside the stored expression is not an error until used.
    eval("(define z (nope))", &mut env).unwrap();
    assert_eq!(eval("z", &mut env).unwrap(), node("(nope)"));
}

#[test]
fn lookup_is_a_single_substitution() {
    let mut env = Environment::new();
    eval("(define a b)", &mut env).unwrap();
    eval("(define b 5)", &mut env).unwrap();

    assert_eq!(eval("a", &mut env).unwrap(), Node::symbol("b"));
    assert_eq!(eval("b", &mut env).unwrap(), Node::number(5.0));
}

#[test]
fn define_keys_on_the_printed_target() {
    let mut env = Environment::new();
    eval("(define (f x) 1)", &mut env).unwrap();
    eval("(define 2.50 two)", &mut env).unwrap();

    assert_eq!(env.names(), ["(f x)", "2.5"]);
}

#[test]
fn define_needs_a_target_and_an_expression() {
    let mut env = Environment::new();

    for src in ["(define)", "(define x)", "(define x 1 2)"] {
        let err = eval(src, &mut env).unwrap_err();
        assert_eq!(err, EvalError::MalformedDefine, "{src}");
        assert_eq!(err.to_string(), "expected identifier and expression");
    }
    assert!(env.is_empty());
}

#[test]
fn builtins_cannot_be_redefined() {
    let mut env = Environment::new();
    eval("(define + 3)", &mut env).unwrap();

    assert_eq!(eval("(+ 1 2)", &mut env).unwrap(), Node::number(3.0));
    assert_eq!(eval("+", &mut env).unwrap(), Node::number(3.0));
}

#[test]
fn first_failing_argument_stops_evaluation() {
    let mut env = Environment::new();

    assert_eq!(eval("(+ (foo) (define late 1))", &mut env).unwrap_err(), undefined("foo"));
    assert_eq!(env.lookup("late"), None);

    // Arguments before the failure have already run.
    assert_eq!(eval("(+ (define early 1) (foo))", &mut env).unwrap_err(), undefined("foo"));
    assert_eq!(env.lookup("early"), Some(&Node::number(1.0)));
}

#[test]
fn builtin_table_lookup() {
    for name in BUILTIN_FUNCTIONS {
        assert_eq!(Builtin::find(name).map(Builtin::name), Some(*name));
    }
    assert_eq!(Builtin::find("+").map(Builtin::arity), Some(Arity::Any));
    assert_eq!(Builtin::find("/").map(Builtin::arity), Some(Arity::AtLeast(1)));
    assert!(Builtin::find("define").is_none());
}

#[test]
fn builtin_functions_accept_empty_arguments() {
    assert_eq!(builtin::add(&[]), 0.0);
    assert_eq!(builtin::mul(&[]), 1.0);
    assert_eq!(builtin::sub(&[]), 0.0);
    assert_eq!(builtin::div(&[]), 1.0);
}
