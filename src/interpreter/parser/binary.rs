use crate::{
    ast::{Node, OperatorKind},
    error::{BuildError, Warning},
    interpreter::{
        lexer::Token,
        parser::core::{BuildResult, build_node},
    },
};

/// Finds the index of the token the sequence splits at.
///
/// Each kind in [`OperatorKind::PRECEDENCE`] is tried in order, and the first
/// top-level token of that kind wins. Tokens inside groups are never
/// considered. Returns `None` if the sequence holds no operator.
pub(in crate::interpreter::parser) fn find_split(tokens: &[Token]) -> Option<usize> {
    OperatorKind::PRECEDENCE.iter().find_map(|kind| {
                                        tokens.iter()
                                              .position(|token| token.operator() == Some(*kind))
                                    })
}

/// Builds the operation rooted at `tokens[split]`.
///
/// Everything before the split becomes the left operand, which is omitted when
/// empty. Everything after it becomes the right operand, which is required.
pub(in crate::interpreter::parser) fn build_operation(tokens: &[Token],
                                                      split: usize,
                                                      warnings: &mut Vec<Warning>)
                                                      -> BuildResult<Node> {
    let (before, rest) = tokens.split_at(split);
    let (token, after) = rest.split_first().ok_or(BuildError::EmptyInput)?;

    let operator = token.operator()
                        .ok_or_else(|| BuildError::UnrecognizedToken { token: format!("{token:?}") })?;

    let left = if before.is_empty() {
        None
    } else {
        Some(Box::new(build_node(before, warnings)?))
    };

    if after.is_empty() {
        return Err(BuildError::MissingOperand { operator });
    }
    let right = Box::new(build_node(after, warnings)?);

    Ok(match token {
        Token::Function(name) => Node::Function { name: name.clone(),
                                                  left,
                                                  right },
        _ => Node::Operation { operator,
                               left,
                               right },
    })
}
