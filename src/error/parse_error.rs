use crate::ast::OperatorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Errors raised while tokenizing an equation.
pub enum SyntaxError {
    /// An opening parenthesis has no matching `)`.
    UnmatchedParenthesis {
        /// The unterminated text, starting at the `(`.
        text:   String,
        /// Byte offset of the `(` in the equation.
        offset: usize,
    },
    /// The remaining input does not start with any known token.
    UnexpectedInput {
        /// The text that could not be tokenized.
        text:   String,
        /// Byte offset where tokenizing stopped.
        offset: usize,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmatchedParenthesis { text, offset } => {
                write!(f, "Syntax error at {offset}: Unmatched parenthesis in '{text}'.")
            },
            Self::UnexpectedInput { text, offset } => {
                write!(f, "Syntax error at {offset}: Cannot parse '{text}'.")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Errors raised by the normalizer when a token sequence has an invalid shape.
pub enum StructureError {
    /// The sequence (or a group) ends in an operator.
    TrailingOperator,
    /// Three operators appear in a row.
    TooManyOperators {
        /// Index of the middle operator.
        position: usize,
    },
    /// A `+` directly follows a binary `-`.
    AmbiguousAddition {
        /// Index of the `+`.
        position: usize,
    },
}

impl std::fmt::Display for StructureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TrailingOperator => write!(f, "Structure error: Equation ends in an operator."),
            Self::TooManyOperators { position } => write!(f,
                                                          "Structure error at token {position}: Too many successive operators (3+)."),
            Self::AmbiguousAddition { position } => write!(f,
                                                           "Structure error at token {position}: '+' follows '-'. Did you mean a+-b?"),
        }
    }
}

impl std::error::Error for StructureError {}

#[derive(Debug, Clone, PartialEq)]
/// Errors raised while building an expression tree.
pub enum BuildError {
    /// The token sequence was empty.
    EmptyInput,
    /// An operator has nothing to its right.
    MissingOperand {
        /// The operator missing its operand.
        operator: OperatorKind,
    },
    /// The sequence holds no operator and does not start with a value.
    UnrecognizedToken {
        /// Debug rendering of the offending token.
        token: String,
    },
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Build error: Cannot build a tree from no tokens."),
            Self::MissingOperand { operator } => {
                write!(f, "Build error: Operator '{operator}' has no right operand.")
            },
            Self::UnrecognizedToken { token } => {
                write!(f, "Build error: No operator or value found, starting at {token}.")
            },
        }
    }
}

impl std::error::Error for BuildError {}

#[derive(Debug, Clone, PartialEq)]
/// Any failure while turning equation text into a tree.
pub enum ParseError {
    /// Tokenizing failed.
    Syntax(SyntaxError),
    /// Normalizing failed.
    Structure(StructureError),
    /// Building the tree failed.
    Build(BuildError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => e.fmt(f),
            Self::Structure(e) => e.fmt(f),
            Self::Build(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Structure(e) => Some(e),
            Self::Build(e) => Some(e),
        }
    }
}

impl From<SyntaxError> for ParseError {
    fn from(value: SyntaxError) -> Self {
        Self::Syntax(value)
    }
}

impl From<StructureError> for ParseError {
    fn from(value: StructureError) -> Self {
        Self::Structure(value)
    }
}

impl From<BuildError> for ParseError {
    fn from(value: BuildError) -> Self {
        Self::Build(value)
    }
}
