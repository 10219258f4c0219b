use log::{debug, trace};

use crate::{
    ast::Node,
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::help::describe,
        lexer::{Token, TokenKind},
    },
};

/// Ways an evaluation can end without producing a boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// `exit` was evaluated; the session should end.
    Exit,
    /// `help` was evaluated; carries the text to show.
    Help(String),
    /// Evaluation failed.
    Error(Error),
}

impl From<RuntimeError> for Signal {
    fn from(e: RuntimeError) -> Self {
        Self::Error(e.into())
    }
}

impl From<ParseError> for Signal {
    fn from(e: ParseError) -> Self {
        Self::Error(e.into())
    }
}

/// Result type used by the evaluator.
///
/// Every evaluation function returns either a boolean or the [`Signal`] that
/// interrupted it, so `?` carries `exit` and `help` straight to the caller.
pub type EvalResult<T> = Result<T, Signal>;

/// Reduces `node` to a boolean against `env`.
///
/// Operands are evaluated left to right and every operand is evaluated; the
/// first signal raised by any of them aborts the whole evaluation.
///
/// # Example
/// ```
/// use caesium::interpreter::{
///     environment::Environment,
///     evaluator::core::{Signal, evaluate},
///     lexer::tokenize,
///     parser::build_tree,
/// };
///
/// let mut env = Environment::new();
/// let tree = build_tree(tokenize("x = not false").unwrap()).unwrap();
/// assert_eq!(evaluate(&tree, &mut env), Ok(true));
/// assert_eq!(env.get("X"), Some(true));
///
/// let tree = build_tree(tokenize("x and exit").unwrap()).unwrap();
/// assert_eq!(evaluate(&tree, &mut env), Err(Signal::Exit));
/// ```
pub fn evaluate(node: &Node, env: &mut Environment) -> EvalResult<bool> {
    env.eval(node)
}

impl Environment {
    /// Evaluates a parse tree, dispatching on the kind of its root.
    pub fn eval(&mut self, node: &Node) -> EvalResult<bool> {
        let kind = node.kind();
        match kind {
            TokenKind::Name => self.eval_name(&node.token),
            TokenKind::Equals => self.eval_assignment(node),
            TokenKind::Not => Ok(!self.eval(single_operand(node)?)?),
            TokenKind::LParen => self.eval(single_operand(node)?),
            TokenKind::And | TokenKind::Or | TokenKind::Xor | TokenKind::Nand | TokenKind::Nor => {
                let values = node.children
                                 .iter()
                                 .map(|child| self.eval(child))
                                 .collect::<EvalResult<Vec<_>>>()?;
                Self::eval_logic(kind, &values).ok_or_else(|| invalid_syntax(node))
            },
            TokenKind::Help => {
                debug!("help requested for {node}");
                Err(Signal::Help(describe(node.children.first(), self)))
            },
            TokenKind::RParen => Err(invalid_syntax(node)),
        }
    }

    /// Resolves a name leaf: `exit` and `random` are builtins, everything
    /// else is read from the environment.
    fn eval_name(&self, token: &Token) -> EvalResult<bool> {
        match token.lowercase().as_str() {
            "exit" => {
                debug!("exit requested");
                Err(Signal::Exit)
            },
            "random" => {
                let value = rand::random::<bool>();
                trace!("random produced {value}");
                Ok(value)
            },
            _ => Ok(self.lookup(&token.text)?),
        }
    }

    /// Evaluates the value side of `target = value`, then binds it.
    ///
    /// The assignment itself evaluates to the assigned value, so assignments
    /// chain: `a = b = true` sets both names.
    fn eval_assignment(&mut self, node: &Node) -> EvalResult<bool> {
        let [target, value] = node.children.as_slice() else {
            return Err(invalid_syntax(node));
        };
        if !target.is_leaf() {
            return Err(invalid_syntax(target));
        }

        let value = self.eval(value)?;
        self.assign(&target.token.text, value)?;
        Ok(value)
    }
}

fn single_operand(node: &Node) -> EvalResult<&Node> {
    match node.children.as_slice() {
        [operand] => Ok(operand),
        _ => Err(invalid_syntax(node)),
    }
}

fn invalid_syntax(node: &Node) -> Signal {
    ParseError::InvalidSyntax { text: node.token.text.clone() }.into()
}
