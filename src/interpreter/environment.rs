use std::collections::{BTreeMap, HashMap};

use log::debug;

use crate::error::RuntimeError;

/// Names that can never be the target of an assignment.
pub const RESERVED_NAMES: [&str; 13] = ["true", "false", "and", "or", "not", "xor", "nand", "nor",
                                        "exit", "random", "help", "1", "0"];

/// The permanent bindings every environment starts with.
pub const LITERALS: [(&str, bool); 4] = [("true", true), ("1", true), ("false", false), ("0", false)];

/// Returns `true` if `name`, in any casing, is a keyword, literal or builtin.
///
/// # Example
/// ```
/// use caesium::interpreter::environment::is_reserved;
///
/// assert!(is_reserved("TRUE"));
/// assert!(is_reserved("nor"));
/// assert!(!is_reserved("quux"));
/// ```
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    let name = name.to_lowercase();
    RESERVED_NAMES.contains(&name.as_str())
}

/// The mutable table of names visible to the evaluator.
///
/// Names are stored lower-cased, so `X` and `x` are the same variable. One
/// environment is created per session and threaded through every evaluated
/// line; assignment is the only way to change it.
#[derive(Debug, Clone)]
pub struct Environment {
    variables: HashMap<String, bool>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only the literal bindings `true`, `1`,
    /// `false` and `0`.
    #[must_use]
    pub fn new() -> Self {
        let variables = LITERALS.iter()
                                .map(|&(name, value)| (name.to_string(), value))
                                .collect();
        Self { variables }
    }

    /// Looks up `name` case-insensitively.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<bool> {
        self.variables.get(&name.to_lowercase()).copied()
    }

    /// Looks up `name`, failing if it has never been bound.
    pub fn lookup(&self, name: &str) -> Result<bool, RuntimeError> {
        self.get(name)
            .ok_or_else(|| RuntimeError::UndefinedName { name: name.to_string() })
    }

    /// Binds `name` to `value`, replacing any previous binding.
    ///
    /// # Errors
    /// Returns `RuntimeError::ReservedName` if `name` is a keyword, literal or
    /// builtin. The environment is left untouched in that case.
    ///
    /// # Example
    /// ```
    /// use caesium::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// env.assign("Foo", true).unwrap();
    /// assert_eq!(env.get("foo"), Some(true));
    ///
    /// assert!(env.assign("random", false).is_err());
    /// ```
    pub fn assign(&mut self, name: &str, value: bool) -> Result<(), RuntimeError> {
        if is_reserved(name) {
            return Err(RuntimeError::ReservedName { name: name.to_string() });
        }

        debug!("assigning {value} to {name:?}");
        self.variables.insert(name.to_lowercase(), value);
        Ok(())
    }

    /// The user-defined bindings, sorted by name. The literal bindings are
    /// not included.
    #[must_use]
    pub fn bindings(&self) -> BTreeMap<&str, bool> {
        self.variables
            .iter()
            .filter(|(name, _)| !is_reserved(name))
            .map(|(name, &value)| (name.as_str(), value))
            .collect()
    }
}
