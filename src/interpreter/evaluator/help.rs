use crate::{
    ast::Node,
    interpreter::{
        environment::{Environment, LITERALS},
        lexer::TokenKind,
    },
};

const OVERVIEW: &str = "\
Type a boolean expression and press enter to see its value.
  literals     true, false, 1, 0
  not a        also written !a
  a and b      also written a && b or a & b
  a or b       also written a || b or a | b
  a xor b      also written a ^ b
  a nand b     also written a @ b
  a nor b      also written a ~ b
  x = a        binds the value of a to x
  (a)          groups an expression
  random       true or false at random
  exit         ends the session
  # comment    ignored up to the end of the line
Operators share one precedence level; use parentheses to group.
Type `help <operator or name>` for details.";

/// Builds the text shown for `help <subject>`, or the overview for a bare
/// `help`.
///
/// Operators are described by their kind, whatever operands follow them.
/// Names report their current binding.
#[must_use]
pub fn describe(subject: Option<&Node>, env: &Environment) -> String {
    let Some(subject) = subject else {
        return overview(env);
    };

    match subject.kind() {
        TokenKind::Name => describe_name(&subject.token.text, env),
        TokenKind::Not => {
            "not (or !) negates the expression that follows it: `not a` is true when a is false."
                .to_string()
        },
        TokenKind::And => {
            "and (or &&, &) is true when every operand is true: `a and b and c`.".to_string()
        },
        TokenKind::Or => "or (or ||, |) is true when any operand is true: `a or b`.".to_string(),
        TokenKind::Xor => {
            "xor (or ^) is true when the operands are not all the same: `a xor b`.".to_string()
        },
        TokenKind::Nand => {
            "nand (or @) is the negation of and: `a nand b` equals `not (a and b)`.".to_string()
        },
        TokenKind::Nor => {
            "nor (or ~) is the negation of or: `a nor b` equals `not (a or b)`.".to_string()
        },
        TokenKind::Equals => {
            "= binds a value to a name and evaluates to that value: `x = a`. Keywords, literals \
             and builtins cannot be assigned."
                .to_string()
        },
        TokenKind::LParen | TokenKind::RParen => {
            "( and ) group an expression so it is evaluated as one operand: `a and (b or c)`."
                .to_string()
        },
        TokenKind::Help => {
            "help (or ?) describes an operator or a name: `help xor`, `help x`.".to_string()
        },
    }
}

fn describe_name(name: &str, env: &Environment) -> String {
    let lowered = name.to_lowercase();
    match lowered.as_str() {
        "exit" => "exit ends the session.".to_string(),
        "random" => "random evaluates to true or false with equal odds.".to_string(),
        literal if LITERALS.iter().any(|&(n, _)| n == literal) => {
            let value = env.get(literal).unwrap_or_default();
            format!("{name} is a literal with the value {value}.")
        },
        _ => match env.get(&lowered) {
            Some(value) => format!("{name} is a variable bound to {value}."),
            None => format!("{name} is not defined. Bind it with `{name} = <expression>`."),
        },
    }
}

fn overview(env: &Environment) -> String {
    let mut text = OVERVIEW.to_string();
    let bindings = env.bindings();

    if !bindings.is_empty() {
        text.push_str("\nDefined names:");
        for (name, value) in bindings {
            text.push_str(&format!("\n  {name} = {value}"));
        }
    }

    text
}
