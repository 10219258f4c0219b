use crate::{
    ast::Node,
    interpreter::lexer::{Token, TokenKind},
};

/// Index of a node inside an [`Arena`].
pub type NodeId = usize;

#[derive(Debug)]
struct Slot {
    token:    Token,
    children: Vec<NodeId>,
}

/// Owns every node created for one line until the tree is complete.
#[derive(Debug, Default)]
pub struct Arena {
    slots: Vec<Slot>,
}

impl Arena {
    /// Stores a new childless node and returns its index.
    pub fn alloc(&mut self, token: Token) -> NodeId {
        self.slots.push(Slot { token,
                               children: Vec::new() });
        self.slots.len() - 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn token(&self, id: NodeId) -> &Token {
        &self.slots[id].token
    }

    #[must_use]
    pub fn kind(&self, id: NodeId) -> TokenKind {
        self.slots[id].token.kind
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.slots[id].children
    }

    pub fn children_mut(&mut self, id: NodeId) -> &mut Vec<NodeId> {
        &mut self.slots[id].children
    }

    /// Copies the subtree rooted at `id` out of the arena as an owned tree.
    #[must_use]
    pub fn to_node(&self, id: NodeId) -> Node {
        let slot = &self.slots[id];
        Node { token:    slot.token.clone(),
               children: slot.children.iter().map(|&child| self.to_node(child)).collect(), }
    }
}
