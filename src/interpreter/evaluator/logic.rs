use crate::interpreter::{environment::Environment, lexer::TokenKind};

impl Environment {
    /// Applies a logical operator to the evaluated operands of one node.
    ///
    /// Each operator works on any number of operands:
    /// - `And` is true iff every operand is true.
    /// - `Or` is true iff any operand is true.
    /// - `Xor` is true iff the operands are not all the same.
    /// - `Nand` and `Nor` negate `And` and `Or`.
    ///
    /// Returns `None` for token kinds that are not logical operators.
    ///
    /// # Example
    /// ```
    /// use caesium::interpreter::{environment::Environment, lexer::TokenKind};
    ///
    /// assert_eq!(Environment::eval_logic(TokenKind::Xor, &[true, false, true]), Some(true));
    /// assert_eq!(Environment::eval_logic(TokenKind::Xor, &[true, true, true]), Some(false));
    /// assert_eq!(Environment::eval_logic(TokenKind::Nor, &[false, false]), Some(true));
    /// assert_eq!(Environment::eval_logic(TokenKind::Not, &[true]), None);
    /// ```
    #[must_use]
    pub fn eval_logic(op: TokenKind, values: &[bool]) -> Option<bool> {
        let all = values.iter().all(|&v| v);
        let any = values.iter().any(|&v| v);

        match op {
            TokenKind::And => Some(all),
            TokenKind::Or => Some(any),
            TokenKind::Xor => Some(any && !all),
            TokenKind::Nand => Some(!all),
            TokenKind::Nor => Some(!any),
            _ => None,
        }
    }
}
