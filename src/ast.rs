use std::fmt;

use crate::error::Warning;

/// The operators an equation can contain.
///
/// `Negate` and `Function` are unary: they only ever use the right operand.
/// Every other operator is binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// `+`
    Add,
    /// Binary `-`.
    Subtract,
    /// Unary `-`, produced by the normalizer from an ambiguous `-`.
    Negate,
    /// `*`, or an implicit multiplication such as `3x`.
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Exponent,
    /// `%`
    Modulo,
    /// Application of a named built-in function such as `SIN`.
    Function,
}

impl OperatorKind {
    /// The order in which the tree builder looks for a split point.
    ///
    /// The first kind in this list that appears in a token sequence becomes the
    /// root of the subtree built from that sequence, so earlier entries bind
    /// more loosely. `Modulo` is never a split point: a sequence whose only
    /// operator is `%` reads as several values with no operator between them.
    pub const PRECEDENCE: [Self; 7] = [Self::Add,
                                       Self::Subtract,
                                       Self::Multiply,
                                       Self::Divide,
                                       Self::Exponent,
                                       Self::Negate,
                                       Self::Function];

    /// The glyph used when printing the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract | Self::Negate => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Exponent => "^",
            Self::Modulo => "%",
            Self::Function => "<fn>",
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Negate => "negate",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Exponent => "exponent",
            Self::Modulo => "modulo",
            Self::Function => "function",
        };
        f.write_str(name)
    }
}

/// One node of an expression tree.
///
/// Every node owns its children, so a tree is never shared and never cyclic.
/// The right child of an operation is always present; the left child is absent
/// for unary operators and for binary operators written without a left operand
/// (e.g. a leading `+`), in which case it evaluates to `0`.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A resolved numeric leaf.
    Number(f64),
    /// A symbolic leaf, resolved from the bindings at evaluation time.
    Variable(char),
    /// An arithmetic operation.
    Operation {
        /// The operator.
        operator: OperatorKind,
        /// Left operand, if one was written.
        left:     Option<Box<Self>>,
        /// Right operand.
        right:    Box<Self>,
    },
    /// Application of a named built-in function.
    Function {
        /// Function name, e.g. `SIN`.
        name:  String,
        /// Left operand, if one was written.
        left:  Option<Box<Self>>,
        /// The argument.
        right: Box<Self>,
    },
}

impl Node {
    /// Returns `true` if the subtree contains no variables.
    ///
    /// A constant subtree without stateful functions evaluates to the same
    /// value under every binding.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        match self {
            Self::Number(_) => true,
            Self::Variable(_) => false,
            Self::Operation { left, right, .. } | Self::Function { left, right, .. } => {
                left.as_deref().is_none_or(Self::is_constant) && right.is_constant()
            },
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Variable(v) => write!(f, "{v}"),
            Self::Operation { operator: OperatorKind::Negate,
                              right,
                              .. } => write!(f, "(-{right})"),
            Self::Operation { operator,
                              left,
                              right, } => match left {
                Some(left) => write!(f, "({left} {} {right})", operator.symbol()),
                None => write!(f, "({} {right})", operator.symbol()),
            },
            Self::Function { name, left, right } => match left {
                Some(left) => write!(f, "({left} {name}({right}))"),
                None => write!(f, "{name}({right})"),
            },
        }
    }
}

/// A built expression tree together with the warnings raised while building
/// it.
///
/// The tree is immutable once built and may be evaluated any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    /// The root node.
    pub root:     Node,
    /// Non-fatal problems found while building, such as values with no
    /// operator between them.
    pub warnings: Vec<Warning>,
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt(f)
    }
}
