use log::debug;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        environment::is_reserved,
        lexer::{Token, TokenKind},
        parser::arena::{Arena, NodeId},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The deepest run of open parents one line may hold. Trees are walked
/// recursively, so deeper lines are rejected rather than risking the stack.
pub const MAX_NESTING: usize = 256;

/// Builds the parse tree of one line from its tokens.
///
/// There is no precedence table. The builder keeps a stack of open parents,
/// with a synthetic root at the bottom, and handles each token as follows:
///
/// - A binary operator takes the last child of the open parent as its first
///   operand, replaces it in that parent and becomes the open parent itself.
///   If the open parent is already an operator of the same kind, the token
///   simply joins it, so `a and b and c` yields one `AND` with three
///   operands. `=` never joins, keeping assignment right-nested.
/// - `not`, `(` and `help` are appended to the open parent and opened.
/// - `)` closes everything up to and including the nearest open `(`.
/// - A name is appended to the open parent as a leaf.
///
/// All binary operators therefore share one precedence level: a new operator
/// captures only the operand right before it, so `a and b or c` becomes
/// `AND(a, OR(b, c))`.
///
/// # Errors
/// - `EmptyExpression` when `tokens` is empty.
/// - `UnmatchedParenthesis` for a `)` with no open `(`, or a `(` left open.
/// - `InvalidSyntax` for an operator missing an operand, a line holding
///   more than one expression, or nesting deeper than [`MAX_NESTING`].
///
/// A keyword written where an assignment target belongs, as in `and = x`,
/// becomes a name leaf so that evaluation rejects it as a reserved name.
///
/// # Example
/// ```
/// use caesium::interpreter::{lexer::tokenize, parser::build_tree};
///
/// let tree = build_tree(tokenize("a and b or c").unwrap()).unwrap();
/// assert_eq!(tree.to_string(), "AND(a, OR(b, c))");
///
/// let tree = build_tree(tokenize("x = y = true").unwrap()).unwrap();
/// assert_eq!(tree.to_string(), "EQUALS(x, EQUALS(y, true))");
/// ```
pub fn build_tree(tokens: impl IntoIterator<Item = Token>) -> ParseResult<Node> {
    let mut builder = TreeBuilder::default();
    for token in tokens {
        builder.push(token)?;
    }

    let tree = builder.finish()?;
    debug!("built tree {tree}");
    Ok(tree)
}

#[derive(Debug, Default)]
struct TreeBuilder {
    arena:     Arena,
    /// Children of the synthetic root.
    roots:     Vec<NodeId>,
    /// Open parents above the synthetic root, innermost last.
    parents:   Vec<NodeId>,
    /// Text of an operator that joined an open node and still awaits its
    /// operand.
    dangling:  Option<String>,
    last_kind: Option<TokenKind>,
}

impl TreeBuilder {
    fn top_kind(&self) -> Option<TokenKind> {
        self.parents.last().map(|&id| self.arena.kind(id))
    }

    fn open_children(&mut self) -> &mut Vec<NodeId> {
        match self.parents.last() {
            Some(&id) => self.arena.children_mut(id),
            None => &mut self.roots,
        }
    }

    fn push(&mut self, token: Token) -> ParseResult<()> {
        let kind = token.kind;
        let text = token.text.clone();
        self.push_token(token)?;

        if self.parents.len() > MAX_NESTING {
            return Err(ParseError::InvalidSyntax { text });
        }

        self.last_kind = Some(kind);
        Ok(())
    }

    fn push_token(&mut self, token: Token) -> ParseResult<()> {
        if let Some(text) = self.dangling.take()
           && (token.kind.is_binary() || token.kind == TokenKind::RParen)
        {
            return Err(ParseError::InvalidSyntax { text });
        }

        match token.kind {
            kind if kind.is_n_ary() && self.top_kind() == Some(kind) => {
                if self.last_kind.is_some_and(TokenKind::is_binary) {
                    return Err(ParseError::InvalidSyntax { text: token.text });
                }
                self.dangling = Some(token.text);
            },
            TokenKind::And
            | TokenKind::Or
            | TokenKind::Xor
            | TokenKind::Nand
            | TokenKind::Nor
            | TokenKind::Equals => {
                let target = if token.kind == TokenKind::Equals {
                    self.reclaim_keyword()
                } else {
                    None
                };
                let operand = target.or_else(|| self.open_children().pop());

                let id = self.arena.alloc(token);
                // A missing operand is left for `check_shape`, which accepts it
                // only in `help and`.
                if let Some(operand) = operand {
                    self.arena.children_mut(id).push(operand);
                }

                self.open_children().push(id);
                self.parents.push(id);
            },
            TokenKind::Not | TokenKind::LParen | TokenKind::Help => {
                let id = self.arena.alloc(token);
                self.open_children().push(id);
                self.parents.push(id);
            },
            TokenKind::RParen => {
                let group = self.parents
                                .iter()
                                .rposition(|&id| self.arena.kind(id) == TokenKind::LParen)
                                .ok_or(ParseError::UnmatchedParenthesis)?;
                self.parents.truncate(group);
            },
            TokenKind::Name => {
                let id = self.arena.alloc(token);
                self.open_children().push(id);
            },
        }

        Ok(())
    }

    /// Turns a keyword that was opened with nothing in it, as in `and = x` or
    /// `help = x`, back into a name leaf so the assignment can reject it as
    /// reserved.
    fn reclaim_keyword(&mut self) -> Option<NodeId> {
        let &id = self.parents.last()?;
        let token = self.arena.token(id);

        let opens = matches!(token.kind, TokenKind::Not | TokenKind::Help) || token.kind.is_binary();
        let is_keyword = opens
                         && self.arena.children(id).is_empty()
                         && is_reserved(&token.text);
        if !is_keyword {
            return None;
        }

        let leaf = Token::new(TokenKind::Name, token.text.clone());
        self.parents.pop();
        self.open_children().pop();
        Some(self.arena.alloc(leaf))
    }

    fn finish(self) -> ParseResult<Node> {
        if self.arena.is_empty() {
            return Err(ParseError::EmptyExpression);
        }

        if let Some(text) = &self.dangling {
            return Err(ParseError::InvalidSyntax { text: text.clone() });
        }

        if self.parents.iter().any(|&id| self.arena.kind(id) == TokenKind::LParen) {
            return Err(ParseError::UnmatchedParenthesis);
        }

        match self.roots.as_slice() {
            [root] => {
                self.check_shape(*root, false)?;
                Ok(self.arena.to_node(*root))
            },
            [_, extra, ..] => {
                Err(ParseError::InvalidSyntax { text: self.arena.token(*extra).text.clone() })
            },
            [] => Err(ParseError::InvalidSyntax { text: String::new() }),
        }
    }

    /// Verifies the operand count of every node below `id`.
    ///
    /// The direct operand of `help` only names an operator, so its own operand
    /// count is not checked: `help and` is as valid as `help a and b`.
    fn check_shape(&self, id: NodeId, inside_help: bool) -> ParseResult<()> {
        let children = self.arena.children(id);
        let kind = self.arena.kind(id);

        let valid = match kind {
            TokenKind::Name => children.is_empty(),
            _ if inside_help => true,
            TokenKind::Not | TokenKind::LParen => children.len() == 1,
            TokenKind::Help => children.len() <= 1,
            TokenKind::Equals => {
                children.len() == 2
                && self.arena.kind(children[0]) == TokenKind::Name
                && self.arena.children(children[0]).is_empty()
            },
            TokenKind::And | TokenKind::Or | TokenKind::Xor | TokenKind::Nand | TokenKind::Nor => {
                children.len() >= 2
            },
            TokenKind::RParen => false,
        };

        if !valid {
            return Err(ParseError::InvalidSyntax { text: self.arena.token(id).text.clone() });
        }

        let inside_help = kind == TokenKind::Help;
        children.iter()
                .try_for_each(|&child| self.check_shape(child, inside_help))
    }
}
