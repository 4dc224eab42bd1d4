use crate::{
    ast::OperatorKind,
    error::Warning,
    interpreter::evaluator::core::Context,
};

impl Context {
    /// Applies an operator to already evaluated operands.
    ///
    /// `Negate` ignores `left`. Division and modulo follow IEEE 754, so a zero
    /// divisor yields an infinity or NaN. A bare `Function` operator carries no
    /// name to dispatch on; it raises [`Warning::UnknownOperator`] and yields
    /// `right`.
    ///
    /// # Example
    /// ```
    /// use graphcalc::{ast::OperatorKind, interpreter::evaluator::core::Context};
    ///
    /// let mut context = Context::new();
    /// assert_eq!(context.eval_operation(OperatorKind::Exponent, 2.0, 10.0), 1024.0);
    /// assert_eq!(context.eval_operation(OperatorKind::Negate, 5.0, 3.0), -3.0);
    /// assert!(context.eval_operation(OperatorKind::Divide, 1.0, 0.0).is_infinite());
    /// ```
    pub fn eval_operation(&mut self, operator: OperatorKind, left: f64, right: f64) -> f64 {
        match operator {
            OperatorKind::Add => left + right,
            OperatorKind::Subtract => left - right,
            OperatorKind::Negate => -right,
            OperatorKind::Multiply => left * right,
            OperatorKind::Divide => left / right,
            OperatorKind::Exponent => left.powf(right),
            OperatorKind::Modulo => left % right,
            OperatorKind::Function => {
                self.warn(Warning::UnknownOperator { operator });
                right
            },
        }
    }
}
