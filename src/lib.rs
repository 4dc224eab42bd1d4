//! # graphcalc
//!
//! graphcalc is a small graphing calculator written in Rust.
//! It parses equations in `x` and `y`, evaluates them with a set of builtin
//! functions, samples them over a rectangular window and draws the curve where
//! the equation equals zero as ASCII art.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Tree,
    error::ParseError,
    interpreter::{lexer::tokenize, normalizer::normalize, parser::core::build_tree},
};

/// Defines the structure of parsed equations.
///
/// This module declares the operator kinds, the `Node` enum and the `Tree`
/// wrapper that represent an equation after parsing. Trees are built by the
/// parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines the operator kinds and their precedence order.
/// - Defines number, variable, operation and function nodes.
/// - Prints trees back as fully parenthesized infix text.
pub mod ast;
/// Provides error and warning types for parsing and plotting.
///
/// This module defines all errors that can be raised while tokenizing,
/// normalizing or building an equation, or while sampling it over a window,
/// together with the warnings that are reported without stopping.
///
/// # Responsibilities
/// - Defines one error enum per stage and a wrapper for the whole parse.
/// - Carries offsets and positions for context.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Turns equation text into values.
///
/// This module ties together the lexer, normalizer, tree builder and
/// evaluator.
///
/// # Responsibilities
/// - Tokenizes, normalizes and builds trees from equation text.
/// - Evaluates trees under variable bindings.
pub mod interpreter;
/// Samples equations over a window and draws them.
///
/// # Responsibilities
/// - Validates plotting windows and evaluates equations at every grid point.
/// - Renders the sign changes of the sampled values as ASCII art.
pub mod plot;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `usize` and `f64` without silent data loss.
pub mod util;

/// Parses an equation into an expression tree.
///
/// Runs the three parse stages in order: tokenizing, normalizing and tree
/// building. Warnings raised while building stay attached to the returned
/// [`Tree`].
///
/// # Errors
/// Returns the error of the first stage that fails.
///
/// # Examples
/// ```
/// use graphcalc::{interpreter::evaluator::core::evaluate, parse_equation};
///
/// let tree = parse_equation("2 + 3").unwrap();
/// assert_eq!(evaluate(&tree.root, &Default::default()), 5.0);
///
/// // A dangling operator is rejected by the normalizer.
/// assert!(parse_equation("3++").is_err());
///
/// // So is a parenthesis that is never closed.
/// assert!(parse_equation("(3+4").is_err());
/// ```
pub fn parse_equation(source: &str) -> Result<Tree, ParseError> {
    let tokens = tokenize(source).into_result()?;
    let tokens = normalize(tokens)?;
    Ok(build_tree(&tokens)?)
}
