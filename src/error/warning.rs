use crate::ast::OperatorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Non-fatal problems. Processing continues with a fallback value.
pub enum Warning {
    /// A function name is not in the built-in table. Evaluates to `0`.
    UnknownFunction {
        /// The name as written.
        name: String,
    },
    /// An operator has no evaluation rule. Evaluates to its right operand.
    UnknownOperator {
        /// The operator.
        operator: OperatorKind,
    },
    /// Several values appear with no operator between them. Only the first is
    /// kept.
    MultipleValues {
        /// How many tokens the sequence held.
        count: usize,
    },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFunction { name } => write!(f, "Warning: Unknown function '{name}'."),
            Self::UnknownOperator { operator } => {
                write!(f, "Warning: Unknown operation '{operator}'.")
            },
            Self::MultipleValues { count } => write!(f,
                                                     "Warning: {count} values with no operation between them, using the first."),
        }
    }
}
