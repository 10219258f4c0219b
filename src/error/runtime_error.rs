#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a parse tree.
pub enum RuntimeError {
    /// Tried to read a name with no binding.
    UndefinedName {
        /// The name as it was written.
        name: String,
    },
    /// Tried to assign to a keyword, literal or builtin.
    ReservedName {
        /// The name as it was written.
        name: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedName { name } => write!(f, "Undefined name \"{name}\"."),
            Self::ReservedName { name } => write!(f, "Name \"{name}\" is reserved."),
        }
    }
}

impl std::error::Error for RuntimeError {}
