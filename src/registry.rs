use std::collections::HashSet;

use crate::{ast::UnaryFunction, error::ParseError};

/// Reserved names that do not fall into any other category, such as keywords
/// and the reserved coordinate and time symbols.
pub const RESERVED_NAMES: &[&str] = &["x", "y", "z", "t", "true", "false", "and", "or"];

/// Tests whether a name is reserved and therefore unavailable as a custom
/// terminal.
///
/// Reserved names are the coordinate and time symbols, the boolean and
/// logical keywords, and every unary function name.
///
/// ## Example
/// ```
/// use fieldexpr::registry::is_reserved_name;
///
/// assert!(is_reserved_name("x"));
/// assert!(is_reserved_name("sqrt"));
/// assert!(!is_reserved_name("density"));
/// ```
#[must_use]
pub fn is_reserved_name(name: &str) -> bool {
    RESERVED_NAMES.contains(&name) || UnaryFunction::from_name(name).is_some()
}

/// The closed set of legal custom-terminal names for one configuration
/// context.
///
/// The configuration system registers every free name up front; the parser
/// then holds a reference to the registry and rejects any name outside the
/// set at parse time, never at evaluation time. Each configuration context
/// owns its registry, so independent parses cannot leak names into each
/// other.
///
/// ## Usage
///
/// ```
/// use fieldexpr::{interpreter::parser::core::Parser, registry::TerminalRegistry};
///
/// let mut registry = TerminalRegistry::new();
/// registry.register("kappa").unwrap();
///
/// let tree = Parser::new(&registry).parse("kappa * 2").unwrap();
/// assert_eq!(tree.used_terminals(), ["kappa"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct TerminalRegistry {
    names: HashSet<String>,
}

impl TerminalRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { names: HashSet::new() }
    }

    /// Registers a custom-terminal name.
    ///
    /// # Errors
    /// - `ParseError::IdentifierReserved` if the name collides with a
    ///   reserved symbol, keyword, or function name.
    /// - `ParseError::DuplicateTerminal` if the name is already registered.
    ///
    /// ## Example
    /// ```
    /// use fieldexpr::registry::TerminalRegistry;
    ///
    /// let mut registry = TerminalRegistry::new();
    /// assert!(registry.register("p").is_ok());
    /// assert!(registry.register("p").is_err());
    /// assert!(registry.register("sin").is_err());
    /// ```
    pub fn register(&mut self, name: impl Into<String>) -> Result<(), ParseError> {
        let name = name.into();

        if is_reserved_name(&name) {
            return Err(ParseError::IdentifierReserved { name });
        }
        if !self.names.insert(name.clone()) {
            return Err(ParseError::DuplicateTerminal { name });
        }

        Ok(())
    }

    /// Tests whether a name has been registered.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns the number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no names have been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
