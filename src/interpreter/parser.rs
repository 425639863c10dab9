use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::lexer::{Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest list nesting the parser accepts.
///
/// Parsing, evaluation and printing all recurse once per level, so the limit
/// keeps every stage within the stack.
pub const MAX_DEPTH: usize = 1024;

/// Parses exactly one node from the front of the token stream.
///
/// This is the recursive-descent entry point. It reads one token and
/// dispatches on its kind; a `(` recurses into [`parse_list`]. Tokens are
/// consumed strictly left to right with one token of lookahead and no
/// backtracking, so anything after the node stays in the stream.
///
/// Grammar: `node := number | symbol | "(" node* ")"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of an expression.
///
/// # Returns
/// The parsed node.
///
/// # Errors
/// - `UnexpectedRightParen` for a `)` where an expression should start.
/// - `UnclosedLeftParen` if the stream ends inside a list.
/// - `NestingTooDeep` for lists nested more than [`MAX_DEPTH`] levels.
/// - `InvalidNumber` for a number token that does not denote a finite `f64`.
/// - `UnexpectedToken` at end of input.
/// - `Lex` when the stream carries a terminal lexer error.
///
/// # Example
/// ```
/// use gleam::{
///     ast::Node,
///     interpreter::{lexer::lex, parser::parse},
/// };
///
/// let mut tokens = lex("(+ 1 (* 2 3)) rest").peekable();
/// let node = parse(&mut tokens).unwrap();
///
/// assert_eq!(node,
///            Node::list([Node::symbol("+"),
///                        Node::number(1.0),
///                        Node::list([Node::symbol("*"), Node::number(2.0), Node::number(3.0)])]));
/// assert_eq!(tokens.next().unwrap().text, "rest");
/// ```
pub fn parse<'src, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = Token<'src>>
{
    parse_node(tokens, 0)
}

/// Parses one node found inside `depth` open lists.
fn parse_node<'src, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = Token<'src>>
{
    let Some(token) = tokens.next() else {
        return Err(ParseError::UnexpectedToken { token: TokenKind::Eof.to_string() });
    };

    match token.kind {
        TokenKind::LeftParen => parse_list(tokens, depth + 1),
        TokenKind::RightParen => Err(ParseError::UnexpectedRightParen),
        TokenKind::Number => parse_number(token.text),
        TokenKind::Symbol => Ok(Node::symbol(token.text)),
        TokenKind::Eof => Err(ParseError::UnexpectedToken { token: token.to_string() }),
        TokenKind::Error(e) => Err(e.into()),
    }
}

/// Parses the elements of a list whose `(` has already been consumed.
///
/// Peeks before every element: a `)` closes the list, the end of the stream
/// means the list was never closed, and anything else is parsed as a child.
/// `depth` counts this list.
fn parse_list<'src, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = Token<'src>>
{
    if depth > MAX_DEPTH {
        return Err(ParseError::NestingTooDeep { limit: MAX_DEPTH });
    }

    let mut elements = Vec::new();
    loop {
        match tokens.peek().map(|token| token.kind) {
            None | Some(TokenKind::Eof) => return Err(ParseError::UnclosedLeftParen),
            Some(TokenKind::RightParen) => {
                tokens.next();
                return Ok(Node::List(elements));
            },
            Some(_) => elements.push(parse_node(tokens, depth)?),
        }
    }
}

/// Converts the text of a number token into a number node.
///
/// The lexer only hands over signs, digits and dots, but not every such
/// string is a float (a lone `-`, for instance), and very long literals can
/// overflow to infinity. Both are rejected.
fn parse_number(literal: &str) -> ParseResult<Node> {
    let invalid = |reason: String| ParseError::InvalidNumber { literal: literal.to_string(),
                                                               reason };

    let value = literal.parse::<f64>()
                       .map_err(|e| invalid(e.to_string()))?;
    if !value.is_finite() {
        return Err(invalid("value out of range".to_string()));
    }

    Ok(Node::number(value))
}

/// Parses every node in a token stream.
///
/// Nodes are parsed one after another with [`parse`] until the stream's
/// `Eof`. At least one node is required. Because the whole stream is consumed
/// here, a lexing fault anywhere in the input is reported before any of the
/// nodes can be evaluated.
///
/// # Errors
/// Returns the first error raised by [`parse`].
///
/// # Example
/// ```
/// use gleam::interpreter::{lexer::lex, parser::parse_program};
///
/// let program = parse_program(lex("(define x 5) (+ x 1)")).unwrap();
/// assert_eq!(program.len(), 2);
///
/// assert!(parse_program(lex("(+ 1 2) )")).is_err());
/// assert!(parse_program(lex("   ")).is_err());
/// ```
pub fn parse_program<'src, I>(tokens: I) -> ParseResult<Vec<Node>>
    where I: IntoIterator<Item = Token<'src>>
{
    let mut tokens = tokens.into_iter().peekable();

    let mut program = vec![parse(&mut tokens)?];
    while tokens.peek()
                .is_some_and(|token| token.kind != TokenKind::Eof)
    {
        program.push(parse(&mut tokens)?);
    }

    Ok(program)
}
