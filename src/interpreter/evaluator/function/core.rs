use std::f64::consts::{E, PI};

use crate::{
    error::Warning,
    interpreter::evaluator::{
        core::Context,
        function::{builtin, register, register::Register},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the shared register, the left operand (`0` when none
/// was written) and its argument, the right operand.
type BuiltinFn = fn(&mut Register, f64, f64) -> f64;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "SIN"   => |_, _, value| value.sin(),
    "ASIN"  => |_, _, value| value.asin(),
    "COS"   => |_, _, value| value.cos(),
    "ACOS"  => |_, _, value| value.acos(),
    "TAN"   => |_, _, value| value.tan(),
    "ATAN"  => |_, _, value| value.atan(),
    "SQRT"  => |_, _, value| value.sqrt(),
    "CBRT"  => |_, _, value| value.cbrt(),
    "LOG"   => |_, _, value| value.log10(),
    "LB"    => |_, _, value| value.log2(),
    "LN"    => |_, _, value| value.ln(),
    "ABS"   => |_, _, value| value.abs(),
    "SIGN"  => |_, _, value| builtin::sign(value),
    "EVEN"  => |_, _, value| value % 2.0,
    "PI"    => |_, _, value| builtin::constant(PI, value),
    "E"     => |_, _, value| builtin::constant(E, value),
    "SETN"  => register::set,
    "LOGN"  => register::log,
    "MODN"  => register::modulo,
    "ROOTN" => register::root,
}

impl Context {
    /// Evaluates a call to a builtin function.
    ///
    /// Names are case sensitive. An unknown name raises
    /// [`Warning::UnknownFunction`] and evaluates to `0`.
    ///
    /// # Example
    /// ```
    /// use graphcalc::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::new();
    /// assert_eq!(context.eval_function("SQRT", 0.0, 16.0), 4.0);
    /// assert_eq!(context.eval_function("sqrt", 0.0, 16.0), 0.0);
    /// assert_eq!(context.warnings().len(), 1);
    /// ```
    pub fn eval_function(&mut self, name: &str, left: f64, value: f64) -> f64 {
        if let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) {
            return (builtin.func)(&mut self.register, left, value);
        }

        self.warn(Warning::UnknownFunction { name: name.to_string() });
        0.0
    }
}

/// Returns `true` if `name` is a builtin function.
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    fn call(name: &str, value: f64) -> f64 {
        Context::new().eval_function(name, 0.0, value)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-12, "expected {expected}, got {actual}");
    }

    #[test]
    fn trigonometry() {
        assert_close(call("SIN", FRAC_PI_2), 1.0);
        assert_close(call("COS", 0.0), 1.0);
        assert_close(call("TAN", 0.0), 0.0);
        assert_close(call("ASIN", 1.0), FRAC_PI_2);
        assert_close(call("ACOS", 1.0), 0.0);
        assert_close(call("ATAN", 0.0), 0.0);
    }

    #[test]
    fn roots_and_logarithms() {
        assert_close(call("SQRT", 9.0), 3.0);
        assert_close(call("CBRT", 27.0), 3.0);
        assert_close(call("CBRT", -8.0), -2.0);
        assert_close(call("LOG", 1000.0), 3.0);
        assert_close(call("LB", 8.0), 3.0);
        assert_close(call("LN", E), 1.0);
    }

    #[test]
    fn sign_abs_even() {
        assert_eq!(call("ABS", -2.5), 2.5);
        assert_eq!(call("SIGN", -3.0), -1.0);
        assert_eq!(call("SIGN", 0.0), 0.0);
        assert_eq!(call("SIGN", 0.1), 1.0);
        assert_eq!(call("EVEN", 5.0), 1.0);
        assert_eq!(call("EVEN", 4.0), 0.0);
    }

    #[test]
    fn constants_scale_a_nonzero_argument() {
        assert_eq!(call("PI", 0.0), PI);
        assert_eq!(call("PI", 2.0), 2.0 * PI);
        assert_eq!(call("E", 0.0), E);
        assert_eq!(call("E", 3.0), 3.0 * E);
    }

    #[test]
    fn out_of_domain_is_nan() {
        assert!(call("SQRT", -1.0).is_nan());
        assert!(call("ASIN", 2.0).is_nan());
        assert_eq!(call("LN", 0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!(is_builtin("SIN"));
        assert!(!is_builtin("Sin"));
    }

    #[test]
    fn every_listed_name_dispatches() {
        for name in BUILTIN_FUNCTIONS {
            let mut context = Context::new();
            context.eval_function(name, 0.0, 1.0);
            assert!(context.warnings().is_empty(), "{name} was not dispatched");
        }
    }
}
