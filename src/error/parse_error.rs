#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing a line or building
/// its parse tree.
pub enum ParseError {
    /// Found a character that matches no token pattern.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the line.
        position:  usize,
    },
    /// A `)` closed no open group, or a `(` was never closed.
    UnmatchedParenthesis,
    /// The line produced no tokens at all.
    EmptyExpression,
    /// The tokens could not be arranged into a valid tree, e.g. an operator
    /// with a missing operand.
    InvalidSyntax {
        /// The text of the token at fault.
        text: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, .. } => {
                write!(f, "Invalid syntax: \"{character}\".")
            },
            Self::UnmatchedParenthesis => write!(f, "Unmatched bracket in expression."),
            Self::EmptyExpression => write!(f, "Empty expression."),
            Self::InvalidSyntax { text } if text.is_empty() => write!(f, "Invalid syntax."),
            Self::InvalidSyntax { text } => write!(f, "Invalid syntax: \"{text}\"."),
        }
    }
}

impl std::error::Error for ParseError {}
