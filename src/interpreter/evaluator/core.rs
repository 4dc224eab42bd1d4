use std::collections::HashMap;

use crate::{
    ast::Node,
    error::Warning,
    interpreter::evaluator::function::register::Register,
};

/// Values for the variables of an equation, keyed by variable name.
///
/// Variables without a binding evaluate to `0`.
pub type Bindings = HashMap<char, f64>;

/// Stores the runtime evaluation state.
///
/// Trees are immutable, so everything that changes while evaluating lives
/// here: the register used by the stateful built-ins (`SETN`, `LOGN`, ...)
/// and the warnings raised so far.
///
/// ## Usage
///
/// The register is not reset between calls. Evaluating the same tree several
/// times with one `Context` couples the calls through the register whenever the
/// tree uses `SETN`; use a fresh `Context` (or [`Context::reset`]) to keep the
/// calls independent.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Shared state of the stateful built-ins.
    pub register: Register,
    warnings:     Vec<Warning>,
}

impl Context {
    /// Creates a context with the register at its default and no warnings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates a tree under the given bindings.
    ///
    /// Both operands of a node are evaluated before the node itself, the
    /// right operand first. State set by a built-in on the right is therefore
    /// visible to the left operand and to everything evaluated afterwards.
    ///
    /// Floating point edge cases are not caught: division by zero or a root of
    /// a negative number produce infinities and NaNs.
    ///
    /// # Example
    /// ```
    /// use graphcalc::{
    ///     interpreter::evaluator::core::{Bindings, Context},
    ///     parse_equation,
    /// };
    ///
    /// let tree = parse_equation("3x^2 + y").unwrap();
    /// let bindings = Bindings::from([('x', 2.0), ('y', 1.0)]);
    ///
    /// assert_eq!(Context::new().evaluate(&tree.root, &bindings), 13.0);
    /// ```
    pub fn evaluate(&mut self, node: &Node, bindings: &Bindings) -> f64 {
        match node {
            Node::Number(value) => *value,
            Node::Variable(name) => bindings.get(name).copied().unwrap_or(0.0),
            Node::Operation { operator,
                              left,
                              right, } => {
                let (left, right) = self.eval_operands(left.as_deref(), right, bindings);
                self.eval_operation(*operator, left, right)
            },
            Node::Function { name, left, right } => {
                let (left, right) = self.eval_operands(left.as_deref(), right, bindings);
                self.eval_function(name, left, right)
            },
        }
    }

    /// Evaluates `right`, then `left`. A missing left operand is `0`.
    fn eval_operands(&mut self,
                     left: Option<&Node>,
                     right: &Node,
                     bindings: &Bindings)
                     -> (f64, f64) {
        let right = self.evaluate(right, bindings);
        let left = left.map_or(0.0, |left| self.evaluate(left, bindings));

        (left, right)
    }

    /// Records a warning. A warning already recorded is not repeated.
    pub fn warn(&mut self, warning: Warning) {
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }

    /// The warnings raised so far, oldest first.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Removes and returns the warnings raised so far.
    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }

    /// Restores the register to its default and forgets all warnings.
    pub fn reset(&mut self) {
        self.register = Register::default();
        self.warnings.clear();
    }
}

/// Evaluates a tree with a fresh [`Context`].
///
/// Stateful built-ins start from the default register on every call, so the
/// result depends only on the tree and the bindings.
#[must_use]
pub fn evaluate(node: &Node, bindings: &Bindings) -> f64 {
    Context::new().evaluate(node, bindings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::OperatorKind;

    fn number(n: f64) -> Box<Node> {
        Box::new(Node::Number(n))
    }

    #[test]
    fn leaves() {
        let bindings = Bindings::from([('x', 4.0)]);
        assert_eq!(evaluate(&Node::Number(2.5), &bindings), 2.5);
        assert_eq!(evaluate(&Node::Variable('x'), &bindings), 4.0);
        assert_eq!(evaluate(&Node::Variable('y'), &bindings), 0.0);
    }

    #[test]
    fn missing_left_operand_is_zero() {
        let node = Node::Operation { operator: OperatorKind::Subtract,
                                     left:     None,
                                     right:    number(3.0), };
        assert_eq!(evaluate(&node, &Bindings::new()), -3.0);
    }

    #[test]
    fn right_is_evaluated_before_left() {
        // SETN(2) on the right, LOGN(8) on the left: 3 + 0.
        let node =
            Node::Operation { operator: OperatorKind::Add,
                              left:     Some(Box::new(Node::Function { name:  "LOGN".to_string(),
                                                                       left:  None,
                                                                       right: number(8.0), })),
                              right:    Box::new(Node::Function { name:  "SETN".to_string(),
                                                                  left:  None,
                                                                  right: number(2.0), }), };
        let value = evaluate(&node, &Bindings::new());
        assert!((value - 3.0).abs() < 1e-12);
    }

    #[test]
    fn register_persists_across_calls() {
        let set = Node::Function { name:  "SETN".to_string(),
                                   left:  None,
                                   right: number(7.0), };
        let modulo = Node::Function { name:  "MODN".to_string(),
                                      left:  None,
                                      right: number(9.0), };

        let mut context = Context::new();
        context.evaluate(&set, &Bindings::new());
        assert_eq!(context.evaluate(&modulo, &Bindings::new()), 2.0);

        context.reset();
        assert_eq!(context.evaluate(&modulo, &Bindings::new()), 9.0);
    }

    #[test]
    fn warnings_are_deduplicated() {
        let node = Node::Function { name:  "NOPE".to_string(),
                                    left:  None,
                                    right: number(1.0), };
        let mut context = Context::new();
        assert_eq!(context.evaluate(&node, &Bindings::new()), 0.0);
        assert_eq!(context.evaluate(&node, &Bindings::new()), 0.0);
        assert_eq!(context.take_warnings(),
                   vec![Warning::UnknownFunction { name: "NOPE".to_string() }]);
        assert!(context.warnings().is_empty());
    }
}
