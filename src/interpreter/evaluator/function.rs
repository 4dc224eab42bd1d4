/// Builtin function implementations.
///
/// Helpers for the builtins that are more than a single `f64` method call.
pub mod builtin;
/// Stateful builtins.
///
/// `SETN` stores a value in the context register; `LOGN`, `MODN` and `ROOTN`
/// read it.
pub mod register;

pub mod core;
