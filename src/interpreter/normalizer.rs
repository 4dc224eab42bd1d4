use crate::{ast::OperatorKind, error::StructureError, interpreter::lexer::Token};

/// Prepares a token sequence for tree building.
///
/// The sequence is read front to back and a new one is written out:
/// - an empty sequence (or empty group) becomes a single `0`;
/// - a value followed by a value or a function gets an implicit `*` between
///   them, so `3x` reads `3*x` and `8SIN(x)` reads `8*SIN(x)`;
/// - `--` becomes `+`, and a leading `--` must be followed by a value;
/// - a `-` at the start or after another operator becomes a negation;
/// - groups are normalized recursively.
///
/// Every check looks at the sequence as rewritten so far, so an inserted `*`
/// or a collapsed `--` is what the next position sees as its predecessor.
///
/// # Errors
/// - [`StructureError::TrailingOperator`] if the sequence ends in an operator.
/// - [`StructureError::TooManyOperators`] for three operators in a row.
/// - [`StructureError::AmbiguousAddition`] for a `+` right after a binary `-`.
///
/// # Example
/// ```
/// use graphcalc::{
///     ast::OperatorKind,
///     interpreter::{lexer::Token, normalizer::normalize},
/// };
///
/// let tokens = normalize(vec![Token::Number(3.0), Token::Variable('x')]).unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(3.0),
///                 Token::Operator(OperatorKind::Multiply),
///                 Token::Variable('x')]);
/// ```
pub fn normalize(tokens: Vec<Token>) -> Result<Vec<Token>, StructureError> {
    if tokens.is_empty() {
        return Ok(vec![Token::Number(0.0)]);
    }
    if tokens.last().is_some_and(Token::is_operator) {
        return Err(StructureError::TrailingOperator);
    }

    let mut input = tokens.into_iter().peekable();
    let mut out = Vec::with_capacity(input.len());

    if let Some(first) = input.next() {
        let first = match first {
            Token::Operator(OperatorKind::Subtract) => {
                if input.next_if_eq(&Token::Operator(OperatorKind::Subtract)).is_some() {
                    if input.peek().is_some_and(Token::is_operator) {
                        return Err(StructureError::TooManyOperators { position: 1 });
                    }
                    Token::Operator(OperatorKind::Add)
                } else {
                    Token::Operator(OperatorKind::Negate)
                }
            },
            Token::Group(children) => Token::Group(normalize(children)?),
            other => other,
        };
        out.push(first);
    }

    while let Some(token) = input.next() {
        let token = match token {
            Token::Group(children) => Token::Group(normalize(children)?),
            other => other,
        };

        let previous_is_operator = out.last().is_some_and(Token::is_operator);
        let starts_operand = !token.is_operator() || matches!(token, Token::Function(_));
        if starts_operand && !previous_is_operator {
            out.push(Token::Operator(OperatorKind::Multiply));
        }

        let Some(next) = input.peek() else {
            out.push(token);
            break;
        };

        let position = out.len();
        let previous = out.last().and_then(Token::operator);

        if previous.is_some() && token.is_operator() && next.is_operator() {
            return Err(StructureError::TooManyOperators { position });
        }

        let token = match token.operator() {
            Some(OperatorKind::Subtract)
                if next.operator() == Some(OperatorKind::Subtract) =>
            {
                input.next();
                Token::Operator(OperatorKind::Add)
            },
            Some(OperatorKind::Subtract) if previous.is_some() => {
                Token::Operator(OperatorKind::Negate)
            },
            Some(OperatorKind::Add) if previous == Some(OperatorKind::Subtract) => {
                return Err(StructureError::AmbiguousAddition { position });
            },
            _ => token,
        };
        out.push(token);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn op(kind: OperatorKind) -> Token {
        Token::Operator(kind)
    }

    fn normalized(text: &str) -> Result<Vec<Token>, StructureError> {
        normalize(tokenize(text).into_result().unwrap())
    }

    #[test]
    fn implicit_multiplication_between_values() {
        assert_eq!(normalize(vec![Token::Number(3.0), Token::Variable('x')]).unwrap(),
                   vec![Token::Number(3.0), op(OperatorKind::Multiply), Token::Variable('x')]);
    }

    #[test]
    fn implicit_multiplication_before_function() {
        assert_eq!(normalized("8SIN(x)").unwrap(),
                   vec![Token::Number(8.0),
                        op(OperatorKind::Multiply),
                        Token::Function("SIN".to_string()),
                        Token::Group(vec![Token::Variable('x')])]);
    }

    #[test]
    fn implicit_multiplication_chain() {
        assert_eq!(normalized("2xy").unwrap(),
                   vec![Token::Number(2.0),
                        op(OperatorKind::Multiply),
                        Token::Variable('x'),
                        op(OperatorKind::Multiply),
                        Token::Variable('y')]);
    }

    #[test]
    fn no_multiplication_after_operator() {
        assert_eq!(normalized("2+SIN(x)").unwrap(),
                   vec![Token::Number(2.0),
                        op(OperatorKind::Add),
                        Token::Function("SIN".to_string()),
                        Token::Group(vec![Token::Variable('x')])]);
    }

    #[test]
    fn leading_double_minus_collapses_to_add() {
        assert_eq!(normalize(vec![op(OperatorKind::Subtract),
                                  op(OperatorKind::Subtract),
                                  Token::Number(5.0)]).unwrap(),
                   vec![op(OperatorKind::Add), Token::Number(5.0)]);
    }

    #[test]
    fn leading_triple_minus_fails() {
        assert_eq!(normalized("---5"), Err(StructureError::TooManyOperators { position: 1 }));
        assert_eq!(normalized("--*5"), Err(StructureError::TooManyOperators { position: 1 }));
    }

    #[test]
    fn inner_double_minus_collapses_to_add() {
        assert_eq!(normalized("3--4").unwrap(),
                   vec![Token::Number(3.0), op(OperatorKind::Add), Token::Number(4.0)]);
    }

    #[test]
    fn leading_minus_is_negation() {
        assert_eq!(normalized("-x").unwrap(),
                   vec![op(OperatorKind::Negate), Token::Variable('x')]);
    }

    #[test]
    fn minus_after_operator_is_negation() {
        assert_eq!(normalized("3+-4").unwrap(),
                   vec![Token::Number(3.0),
                        op(OperatorKind::Add),
                        op(OperatorKind::Negate),
                        Token::Number(4.0)]);
    }

    #[test]
    fn empty_sequence_and_group_become_zero() {
        assert_eq!(normalize(vec![]).unwrap(), vec![Token::Number(0.0)]);
        assert_eq!(normalized("()").unwrap(), vec![Token::Group(vec![Token::Number(0.0)])]);
    }

    #[test]
    fn groups_are_normalized_recursively() {
        assert_eq!(normalized("(2x)").unwrap(),
                   vec![Token::Group(vec![Token::Number(2.0),
                                          op(OperatorKind::Multiply),
                                          Token::Variable('x')])]);
    }

    #[test]
    fn adjacent_groups_multiply() {
        assert_eq!(normalized("(1)(2)").unwrap(),
                   vec![Token::Group(vec![Token::Number(1.0)]),
                        op(OperatorKind::Multiply),
                        Token::Group(vec![Token::Number(2.0)])]);
    }

    #[test]
    fn trailing_operator_fails() {
        assert_eq!(normalized("3++"), Err(StructureError::TrailingOperator));
        assert_eq!(normalized("(3*)"), Err(StructureError::TrailingOperator));
    }

    #[test]
    fn three_operators_fail() {
        assert_eq!(normalized("3*+-4"), Err(StructureError::TooManyOperators { position: 2 }));
    }

    #[test]
    fn plus_after_minus_fails() {
        assert_eq!(normalized("3-+4"), Err(StructureError::AmbiguousAddition { position: 2 }));
    }
}
