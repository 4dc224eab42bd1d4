use logos::Logos;

use crate::{ast::OperatorKind, error::SyntaxError};

/// A lexical unit of an equation.
///
/// Parenthesized text becomes a single [`Token::Group`] holding its own,
/// recursively tokenized, sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal, such as `3`, `2.5` or `.5`.
    Number(f64),
    /// One of `+ - * / ^ %`, or an operator the normalizer produced.
    Operator(OperatorKind),
    /// A run of uppercase letters such as `SIN`. Acts as a unary prefix
    /// operator of kind [`OperatorKind::Function`].
    Function(String),
    /// A single lowercase letter.
    Variable(char),
    /// A parenthesized sub-expression.
    Group(Vec<Self>),
}

impl Token {
    /// The operator kind of this token, if it is an operator.
    ///
    /// Function names count as operators of kind [`OperatorKind::Function`].
    #[must_use]
    pub const fn operator(&self) -> Option<OperatorKind> {
        match self {
            Self::Operator(kind) => Some(*kind),
            Self::Function(_) => Some(OperatorKind::Function),
            _ => None,
        }
    }

    /// Returns `true` for operator and function tokens.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        self.operator().is_some()
    }
}

/// The flat lexemes recognised at a single scan position.
///
/// `(` only marks the start of a group; [`tokenize`] finds the matching `)`
/// itself so the group's contents can be tokenized recursively.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r" +")]
enum Lexeme {
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),
    #[token("+", |_| OperatorKind::Add)]
    #[token("-", |_| OperatorKind::Subtract)]
    #[token("*", |_| OperatorKind::Multiply)]
    #[token("/", |_| OperatorKind::Divide)]
    #[token("^", |_| OperatorKind::Exponent)]
    #[token("%", |_| OperatorKind::Modulo)]
    Operator(OperatorKind),
    #[regex("[a-z]", |lex| lex.slice().chars().next())]
    Variable(char),
    #[regex("[A-Z]+", |lex| lex.slice().to_owned())]
    Function(String),
    #[token("(")]
    LParen,
}

/// The output of [`tokenize`].
///
/// On failure `tokens` still holds everything produced before the error, but
/// it must not be normalized or built into a tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Tokenized {
    /// The tokens produced.
    pub tokens: Vec<Token>,
    /// The first syntax error, if any.
    pub error:  Option<SyntaxError>,
}

impl Tokenized {
    /// Returns `true` if the whole input was tokenized.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Converts into a `Result`, discarding partial tokens on failure.
    ///
    /// # Errors
    /// Returns the syntax error that stopped tokenizing.
    pub fn into_result(self) -> Result<Vec<Token>, SyntaxError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.tokens),
        }
    }
}

/// Splits an equation into tokens.
///
/// Numbers, operators, lowercase variables, uppercase function names and
/// parenthesized groups are recognised, and runs of spaces are skipped. The
/// text between a `(` and its matching `)` is tokenized recursively into a
/// [`Token::Group`]. Tokenizing stops at the first unrecognised character or
/// unmatched parenthesis. An empty equation yields no tokens and no error.
///
/// # Example
/// ```
/// use graphcalc::{
///     ast::OperatorKind,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let lexed = tokenize("2x + SIN(y)");
/// assert!(lexed.is_ok());
/// assert_eq!(lexed.tokens,
///            vec![Token::Number(2.0),
///                 Token::Variable('x'),
///                 Token::Operator(OperatorKind::Add),
///                 Token::Function("SIN".to_string()),
///                 Token::Group(vec![Token::Variable('y')])]);
///
/// assert!(!tokenize("(3+4").is_ok());
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Tokenized {
    let mut tokens = Vec::new();
    let error = tokenize_into(text, 0, &mut tokens).err();

    Tokenized { tokens, error }
}

/// Tokenizes `text` into `out`. `base` is the byte offset of `text` inside
/// the full equation, used for error positions.
fn tokenize_into(text: &str, base: usize, out: &mut Vec<Token>) -> Result<(), SyntaxError> {
    let mut lexer = Lexeme::lexer(text);

    while let Some(lexeme) = lexer.next() {
        let start = lexer.span().start;

        match lexeme {
            Ok(Lexeme::Number(n)) => out.push(Token::Number(n)),
            Ok(Lexeme::Operator(kind)) => out.push(Token::Operator(kind)),
            Ok(Lexeme::Variable(name)) => out.push(Token::Variable(name)),
            Ok(Lexeme::Function(name)) => out.push(Token::Function(name)),
            Ok(Lexeme::LParen) => {
                let rest = lexer.remainder();
                let Some(close) = find_closing_paren(rest) else {
                    return Err(SyntaxError::UnmatchedParenthesis { text:   text[start..].to_owned(),
                                                                   offset: base + start, });
                };

                let mut children = Vec::new();
                let inner = tokenize_into(&rest[..close], base + start + 1, &mut children);
                out.push(Token::Group(children));
                inner?;

                lexer.bump(close + 1);
            },
            Err(()) => {
                return Err(SyntaxError::UnexpectedInput { text:   text[start..].to_owned(),
                                                          offset: base + start, });
            },
        }
    }

    Ok(())
}

/// Finds the `)` closing a group whose `(` was just consumed.
///
/// Returns its byte index in `text`, or `None` if the group is never closed.
fn find_closing_paren(text: &str) -> Option<usize> {
    let mut depth = 0usize;

    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return Some(i),
            ')' => depth -= 1,
            _ => {},
        }
    }

    None
}
