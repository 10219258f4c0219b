use crate::interpreter::lexer::{Token, TokenKind};

/// A node of the parse tree built for one line.
///
/// Leaves are always `Name` tokens: a literal, a variable or a builtin.
/// Every other node is an operator or a grouping and owns its operands as
/// `children`, in source order.
///
/// Shape rules, checked by the tree builder:
/// - `Not` and `LParen` have exactly one child.
/// - `Help` has at most one child.
/// - `Equals` has exactly two: the target `Name` leaf and the value.
/// - `And`, `Or`, `Xor`, `Nand` and `Nor` have two or more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// The token this node was created from.
    pub token:    Token,
    /// The operands of this node, left to right.
    pub children: Vec<Self>,
}

impl Node {
    /// The kind of the token this node was created from.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.token.kind
    }

    /// Returns `true` for a childless `Name` node.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.token.kind == TokenKind::Name && self.children.is_empty()
    }
}

impl std::fmt::Display for Node {
    /// Renders the tree as nested applications, e.g. `AND(a, OR(b, c))`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.token.kind == TokenKind::Name {
            return write!(f, "{}", self.token.text);
        }

        write!(f, "{}(", self.token.kind)?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{child}")?;
        }
        write!(f, ")")
    }
}
