/// Core evaluation logic and context management.
///
/// Contains the tree walker, the evaluation context holding the register and
/// warnings, and the variable bindings type.
pub mod core;

/// Operator evaluation.
///
/// Applies arithmetic operators to evaluated operands.
pub mod operation;

/// Function evaluation.
///
/// The builtin function table and its implementations, including the stateful
/// register functions.
pub mod function;
