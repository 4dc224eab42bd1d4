/// Parsing errors.
///
/// Defines the errors of the three parse stages: tokenizing, normalizing and
/// tree building, plus [`ParseError`] which wraps all of them.
pub mod parse_error;
/// Grid errors.
///
/// Raised when a plotting window has inverted bounds or an unusable step.
pub mod grid_error;
/// Warnings.
///
/// Problems that do not stop processing, such as unknown function names.
pub mod warning;

pub use grid_error::GridError;
pub use parse_error::{BuildError, ParseError, StructureError, SyntaxError};
pub use warning::Warning;
