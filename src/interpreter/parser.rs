/// Tree building entry point.
///
/// Turns a normalized token sequence into a [`Tree`](crate::ast::Tree) and
/// collects the warnings raised along the way.
pub mod core;

/// Operator splitting.
///
/// Finds the operator a sequence splits at and builds the operation node
/// around it.
pub mod binary;
