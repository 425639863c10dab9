/// The environment module holds the session's global bindings.
///
/// A single flat table from symbol name to node, filled by `define` and read
/// by symbol evaluation. It is passed to the evaluator explicitly instead of
/// living in global state.
pub mod environment;
/// The evaluator module reduces AST nodes to results.
///
/// The evaluator walks a node, substitutes bound symbols, performs `define`
/// and dispatches builtin calls. It is the last stage of the pipeline.
///
/// # Responsibilities
/// - Evaluates nodes according to their variant and head element.
/// - Maintains the environment through `define`.
/// - Reports errors such as unbound symbols or non-number operands.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a lazy stream of tokens:
/// parentheses, numbers and symbols. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into typed tokens carrying their
///   exact source text.
/// - Disambiguates a sign between an operator symbol and a signed number.
/// - Reports unbalanced parentheses as a terminal error token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token stream produced by the lexer and constructs
/// nodes by recursive descent, one token of lookahead at a time.
///
/// # Responsibilities
/// - Converts tokens into symbol, number and list nodes.
/// - Validates structure, reporting stray or missing parentheses.
/// - Rejects number literals that do not denote a finite float.
pub mod parser;
