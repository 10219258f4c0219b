/// Parsing errors.
///
/// Defines all error types that can occur during lexing and tree building.
/// Parse errors include unrecognized characters, unbalanced parentheses and
/// token arrangements that do not form a valid expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a tree:
/// reading an undefined name or assigning to a reserved one.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The flat classification of every failure a line can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCharacter,
    UnmatchedParenthesis,
    EmptyExpression,
    InvalidSyntax,
    UndefinedName,
    ReservedName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any error produced by one of the pipeline stages.
pub enum Error {
    /// Raised by the lexer or the tree builder.
    Parse(ParseError),
    /// Raised by the evaluator.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the kind of failure, independent of its payload.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(ParseError::InvalidCharacter { .. }) => ErrorKind::InvalidCharacter,
            Self::Parse(ParseError::UnmatchedParenthesis) => ErrorKind::UnmatchedParenthesis,
            Self::Parse(ParseError::EmptyExpression) => ErrorKind::EmptyExpression,
            Self::Parse(ParseError::InvalidSyntax { .. }) => ErrorKind::InvalidSyntax,
            Self::Runtime(RuntimeError::UndefinedName { .. }) => ErrorKind::UndefinedName,
            Self::Runtime(RuntimeError::ReservedName { .. }) => ErrorKind::ReservedName,
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
