/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks a tree under a set of variable bindings, applying
/// operators and builtin functions. It owns the state of the stateful builtins
/// and collects warnings for unknown functions.
///
/// # Responsibilities
/// - Evaluates trees right operand first, so builtin state flows right to left.
/// - Dispatches builtin functions by name.
/// - Reports unknown functions and operators as warnings, never as errors.
pub mod evaluator;
/// The lexer module tokenizes equations.
///
/// The lexer reads the raw equation and produces tokens for numbers,
/// operators, variables and function names. Parenthesized text is tokenized
/// recursively into group tokens.
///
/// # Responsibilities
/// - Converts the input text into tokens.
/// - Matches parentheses and tokenizes groups recursively.
/// - Reports unrecognised input and unmatched parentheses with their offset.
pub mod lexer;
/// The normalizer module prepares tokens for tree building.
///
/// # Responsibilities
/// - Inserts implicit multiplications.
/// - Resolves `-` into subtraction, negation or (doubled) addition.
/// - Rejects trailing operators and runs of operators.
pub mod normalizer;
/// The parser module builds expression trees from tokens.
///
/// The parser splits a normalized token sequence at its loosest-binding
/// operator and recurses into both sides.
///
/// # Responsibilities
/// - Converts tokens into a [`Tree`](crate::ast::Tree).
/// - Fails on empty input and on operators missing their operand.
/// - Warns about values with no operator between them.
pub mod parser;
