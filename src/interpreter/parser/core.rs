use crate::{
    ast::{Node, Tree},
    error::{BuildError, Warning},
    interpreter::{
        lexer::Token,
        parser::binary::{build_operation, find_split},
    },
};

pub type BuildResult<T> = Result<T, BuildError>;

/// Builds an expression tree from a normalized token sequence.
///
/// The sequence is split at the first operator found when scanning for each
/// kind in [`OperatorKind::PRECEDENCE`](crate::ast::OperatorKind::PRECEDENCE)
/// in turn. The tokens before the split build the left subtree and the tokens
/// after it build the right subtree. A sequence without operators must be a
/// single value or group.
///
/// # Errors
/// - [`BuildError::EmptyInput`] if `tokens` is empty.
/// - [`BuildError::MissingOperand`] if an operator has nothing to its right.
/// - [`BuildError::UnrecognizedToken`] if no operator or value is found.
///
/// # Example
/// ```
/// use graphcalc::{
///     ast::{Node, OperatorKind},
///     interpreter::{lexer::Token, parser::core::build_tree},
/// };
///
/// let tree = build_tree(&[Token::Number(2.0),
///                         Token::Operator(OperatorKind::Add),
///                         Token::Number(3.0)]).unwrap();
///
/// assert_eq!(tree.root,
///            Node::Operation { operator: OperatorKind::Add,
///                              left:     Some(Box::new(Node::Number(2.0))),
///                              right:    Box::new(Node::Number(3.0)), });
/// ```
pub fn build_tree(tokens: &[Token]) -> BuildResult<Tree> {
    let mut warnings = Vec::new();
    let root = build_node(tokens, &mut warnings)?;

    Ok(Tree { root, warnings })
}

/// Recursive step of [`build_tree`]. Warnings from every level are collected
/// into `warnings`.
pub(in crate::interpreter::parser) fn build_node(tokens: &[Token],
                                                 warnings: &mut Vec<Warning>)
                                                 -> BuildResult<Node> {
    if tokens.is_empty() {
        return Err(BuildError::EmptyInput);
    }

    if let Some(split) = find_split(tokens) {
        return build_operation(tokens, split, warnings);
    }

    build_value(tokens, warnings)
}

/// Builds a leaf from a sequence holding no operators.
///
/// Only the first token is used. Any further tokens are reported as a
/// [`Warning::MultipleValues`] and dropped.
fn build_value(tokens: &[Token], warnings: &mut Vec<Warning>) -> BuildResult<Node> {
    let node = match &tokens[0] {
        Token::Group(children) => build_node(children, warnings)?,
        Token::Number(n) => Node::Number(*n),
        Token::Variable(name) => Node::Variable(*name),
        token @ (Token::Operator(_) | Token::Function(_)) => {
            return Err(BuildError::UnrecognizedToken { token: format!("{token:?}") });
        },
    };

    if tokens.len() > 1 {
        warnings.push(Warning::MultipleValues { count: tokens.len() });
    }

    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::OperatorKind;

    fn op(kind: OperatorKind) -> Token {
        Token::Operator(kind)
    }

    fn leaf(n: f64) -> Option<Box<Node>> {
        Some(Box::new(Node::Number(n)))
    }

    #[test]
    fn empty_input_fails() {
        assert_eq!(build_tree(&[]), Err(BuildError::EmptyInput));
    }

    #[test]
    fn single_values() {
        assert_eq!(build_tree(&[Token::Number(4.5)]).unwrap().root, Node::Number(4.5));
        assert_eq!(build_tree(&[Token::Variable('y')]).unwrap().root, Node::Variable('y'));
    }

    #[test]
    fn lone_group_builds_its_children() {
        let tokens = [Token::Group(vec![Token::Number(1.0), op(OperatorKind::Add), Token::Number(2.0)])];
        assert_eq!(build_tree(&tokens).unwrap().root,
                   Node::Operation { operator: OperatorKind::Add,
                                     left:     leaf(1.0),
                                     right:    Box::new(Node::Number(2.0)), });
    }

    #[test]
    fn add_binds_looser_than_multiply() {
        let tokens = [Token::Number(2.0),
                      op(OperatorKind::Multiply),
                      Token::Number(3.0),
                      op(OperatorKind::Add),
                      Token::Number(4.0)];
        let Node::Operation { operator, left, .. } = build_tree(&tokens).unwrap().root else {
            panic!("expected an operation at the root");
        };
        assert_eq!(operator, OperatorKind::Add);
        assert!(matches!(left.as_deref(),
                         Some(Node::Operation { operator: OperatorKind::Multiply, .. })));
    }

    #[test]
    fn add_is_found_before_an_earlier_subtract() {
        let tokens = [Token::Number(5.0),
                      op(OperatorKind::Subtract),
                      Token::Number(3.0),
                      op(OperatorKind::Add),
                      Token::Number(2.0)];
        let Node::Operation { operator, .. } = build_tree(&tokens).unwrap().root else {
            panic!("expected an operation at the root");
        };
        assert_eq!(operator, OperatorKind::Add);
    }

    #[test]
    fn unary_operators_have_no_left() {
        let tokens = [op(OperatorKind::Negate), Token::Number(2.0)];
        assert_eq!(build_tree(&tokens).unwrap().root,
                   Node::Operation { operator: OperatorKind::Negate,
                                     left:     None,
                                     right:    Box::new(Node::Number(2.0)), });
    }

    #[test]
    fn function_keeps_its_name() {
        let tokens = [Token::Function("COS".to_string()), Token::Group(vec![Token::Variable('x')])];
        assert_eq!(build_tree(&tokens).unwrap().root,
                   Node::Function { name:  "COS".to_string(),
                                    left:  None,
                                    right: Box::new(Node::Variable('x')), });
    }

    #[test]
    fn modulo_is_not_a_split_point() {
        let tokens = [Token::Number(7.0), op(OperatorKind::Modulo), Token::Number(4.0)];
        let tree = build_tree(&tokens).unwrap();
        assert_eq!(tree.root, Node::Number(7.0));
        assert_eq!(tree.warnings, vec![Warning::MultipleValues { count: 3 }]);
    }

    #[test]
    fn missing_right_operand_fails() {
        let tokens = [Token::Number(1.0), op(OperatorKind::Add)];
        assert_eq!(build_tree(&tokens),
                   Err(BuildError::MissingOperand { operator: OperatorKind::Add }));
    }

    #[test]
    fn bare_values_warn_and_keep_the_first() {
        let tree = build_tree(&[Token::Number(1.0), Token::Number(2.0)]).unwrap();
        assert_eq!(tree.root, Node::Number(1.0));
        assert_eq!(tree.warnings, vec![Warning::MultipleValues { count: 2 }]);
    }

    #[test]
    fn warnings_from_groups_are_kept() {
        let tokens = [Token::Number(3.0),
                      op(OperatorKind::Multiply),
                      Token::Group(vec![Token::Variable('x'), Token::Variable('y')])];
        let tree = build_tree(&tokens).unwrap();
        assert_eq!(tree.warnings, vec![Warning::MultipleValues { count: 2 }]);
    }
}
