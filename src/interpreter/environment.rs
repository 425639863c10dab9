use std::{collections::HashMap, fmt};

use crate::ast::Node;

/// The global binding table of a session.
///
/// Maps symbol names to the node they were bound to by `define`. There is a
/// single flat table: no scopes, no shadowing and no way to remove a binding.
/// Rebinding a name overwrites the previous node.
///
/// The table is owned by the caller and handed to the evaluator by reference,
/// so a session keeps one `Environment` alive across many evaluations and a
/// test can start from a fresh one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: HashMap<String, Node>,
}

impl Environment {
    /// Creates an environment with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `node`, replacing any earlier binding.
    ///
    /// # Example
    /// ```
    /// use gleam::{ast::Node, interpreter::environment::Environment};
    ///
    /// let mut env = Environment::new();
    /// env.define("x", Node::number(1.0));
    /// env.define("x", Node::number(2.0));
    ///
    /// assert_eq!(env.lookup("x"), Some(&Node::number(2.0)));
    /// assert_eq!(env.len(), 1);
    /// ```
    pub fn define(&mut self, name: impl Into<String>, node: Node) {
        self.bindings.insert(name.into(), node);
    }

    /// Returns the node bound to `name`, if any.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Node> {
        self.bindings.get(name)
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// All bound names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names = self.bindings
                            .keys()
                            .map(String::as_str)
                            .collect::<Vec<_>>();
        names.sort_unstable();
        names
    }
}

/// Lists the bindings as `name = node` lines, sorted by name.
///
/// # Example
/// ```
/// use gleam::{ast::Node, interpreter::environment::Environment};
///
/// let mut env = Environment::new();
/// env.define("y", Node::list([Node::symbol("+"), Node::number(1.0)]));
/// env.define("x", Node::number(5.0));
///
/// assert_eq!(env.to_string(), "x = 5\ny = (+ 1)");
/// ```
impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names().into_iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{name} = {}", self.bindings[name])?;
        }
        Ok(())
    }
}
