use log::trace;
use logos::Logos;

use crate::{error::ParseError, interpreter::parser::ParseResult};

/// The closed set of token classes the tree builder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `not` or `!`
    Not,
    /// `or`, `||` or `|`
    Or,
    /// `and`, `&&` or `&`
    And,
    /// `xor` or `^`
    Xor,
    /// `nand` or `@`
    Nand,
    /// `nor` or `~`
    Nor,
    /// `=`
    Equals,
    /// Literals, variables and builtins: any run of word characters.
    Name,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `help` or `?`
    Help,
}

impl TokenKind {
    /// Returns `true` for the operators that take the preceding operand as
    /// their first child.
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Xor | Self::Nand | Self::Nor | Self::Equals)
    }

    /// Returns `true` for the binary operators that accept any number of
    /// operands. `Equals` is binary but never n-ary.
    #[must_use]
    pub const fn is_n_ary(self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Xor | Self::Nand | Self::Nor)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Not => "NOT",
            Self::Or => "OR",
            Self::And => "AND",
            Self::Xor => "XOR",
            Self::Nand => "NAND",
            Self::Nor => "NOR",
            Self::Equals => "EQUALS",
            Self::Name => "NAME",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Help => "HELP",
        };
        f.write_str(name)
    }
}

/// A classified slice of the input line.
///
/// `text` is the slice exactly as written, so `Name` tokens keep the casing
/// the user typed. Lookups lower-case it later.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    /// Creates a token of the given kind from its source text.
    ///
    /// # Example
    /// ```
    /// use caesium::interpreter::lexer::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Name, "Foo");
    /// assert_eq!(token.text, "Foo");
    /// assert_eq!(token.lowercase(), "foo");
    /// ```
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into() }
    }

    /// The token text folded to lower case, which is how names are stored.
    #[must_use]
    pub fn lowercase(&self) -> String {
        self.text.to_lowercase()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// The raw patterns the scanner tries at every position.
///
/// Keyword literals outrank the generic `Name` pattern, so `or` is never read
/// as a variable while `orange` still is.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    #[token("help", ignore(case))]
    #[token("?")]
    Help,
    #[token("not", ignore(case))]
    #[token("!")]
    Not,
    #[token("or", ignore(case))]
    #[token("||")]
    #[token("|")]
    Or,
    #[token("and", ignore(case))]
    #[token("&&")]
    #[token("&")]
    And,
    #[token("xor", ignore(case))]
    #[token("^")]
    Xor,
    #[token("nand", ignore(case))]
    #[token("@")]
    Nand,
    #[token("nor", ignore(case))]
    #[token("~")]
    Nor,
    #[token("=")]
    Equals,
    #[regex(r"\w+", priority = 1)]
    Name,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[regex(r"\s+", logos::skip)]
    Whitespace,
    /// `# Comments` run to the end of the line.
    #[regex(r"#[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
}

impl Lexeme {
    /// Maps a lexeme to the token kind it produces. Skipped lexemes produce
    /// nothing.
    const fn kind(self) -> Option<TokenKind> {
        match self {
            Self::Help => Some(TokenKind::Help),
            Self::Not => Some(TokenKind::Not),
            Self::Or => Some(TokenKind::Or),
            Self::And => Some(TokenKind::And),
            Self::Xor => Some(TokenKind::Xor),
            Self::Nand => Some(TokenKind::Nand),
            Self::Nor => Some(TokenKind::Nor),
            Self::Equals => Some(TokenKind::Equals),
            Self::Name => Some(TokenKind::Name),
            Self::LParen => Some(TokenKind::LParen),
            Self::RParen => Some(TokenKind::RParen),
            Self::Whitespace | Self::Comment => None,
        }
    }
}

/// Converts one line of source text into its token sequence.
///
/// Whitespace and `#` comments are dropped. The first character that matches
/// no pattern fails the whole call.
///
/// # Errors
/// Returns `ParseError::InvalidCharacter` carrying the offending character.
///
/// # Example
/// ```
/// use caesium::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("!a && B # trailing comment").unwrap()
///                                                           .into_iter()
///                                                           .map(|t| t.kind)
///                                                           .collect();
/// assert_eq!(kinds, [TokenKind::Not, TokenKind::Name, TokenKind::And, TokenKind::Name]);
///
/// assert!(tokenize("a + b").is_err());
/// ```
pub fn tokenize(text: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(text);

    while let Some(lexeme) = lexer.next() {
        let Ok(lexeme) = lexeme else {
            let position = lexer.span().start;
            let character = lexer.slice().chars().next().unwrap_or_default();
            return Err(ParseError::InvalidCharacter { character, position });
        };

        if let Some(kind) = lexeme.kind() {
            tokens.push(Token::new(kind, lexer.slice()));
        }
    }

    trace!("tokenized {text:?} into {} tokens", tokens.len());
    Ok(tokens)
}
