use std::fmt;

use ordered_float::OrderedFloat;

/// An abstract syntax tree (AST) node.
///
/// Every expression of the language is one of three shapes: a symbol, a
/// number, or a parenthesized list of further nodes. Nodes are built bottom-up
/// by the parser and never mutated afterwards; evaluation produces new nodes
/// instead. A list owns its elements, so no sharing or cycles can occur.
///
/// Numbers are stored as parsed `f64` values wrapped in [`OrderedFloat`], which
/// gives nodes total equality (`NaN == NaN`) so results of IEEE edge cases such
/// as `(/ 0 0)` can be compared structurally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An identifier, holding the exact source text that produced it.
    Symbol(String),
    /// A numeric literal or arithmetic result.
    Number(OrderedFloat<f64>),
    /// Zero or more child nodes. The empty list is legal and denotes itself.
    List(Vec<Self>),
}

impl Node {
    /// Creates a symbol node.
    ///
    /// # Example
    /// ```
    /// use gleam::ast::Node;
    ///
    /// assert_eq!(Node::symbol("x").to_string(), "x");
    /// ```
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Creates a number node.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }

    /// Creates a list node from its elements.
    ///
    /// # Example
    /// ```
    /// use gleam::ast::Node;
    ///
    /// let sum = Node::list([Node::symbol("+"), Node::number(1.0), Node::number(2.5)]);
    /// assert_eq!(sum.to_string(), "(+ 1 2.5)");
    /// assert_eq!(Node::list([]).to_string(), "()");
    /// ```
    pub fn list(elements: impl IntoIterator<Item = Self>) -> Self {
        Self::List(elements.into_iter().collect())
    }

    /// Returns the numeric value if this node is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value.0),
            _ => None,
        }
    }

    /// Returns the name if this node is a symbol.
    #[must_use]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(name) => Some(name),
            _ => None,
        }
    }
}

/// Prints the textual form of a node.
///
/// Lists print their elements space-joined inside parentheses, symbols print
/// their name and numbers print the shortest decimal that parses back to the
/// same `f64`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(name) => f.write_str(name),
            Self::Number(value) => write!(f, "{}", value.0),
            Self::List(elements) => {
                f.write_str("(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str(")")
            },
        }
    }
}
