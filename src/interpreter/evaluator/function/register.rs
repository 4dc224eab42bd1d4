/// Starting value of the register written by `SETN`.
pub const DEFAULT_REGISTER: f64 = 10.0;

/// State shared by the stateful builtins of one evaluation context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Register {
    /// The current base, modulus or root degree.
    pub n: f64,
}

impl Default for Register {
    fn default() -> Self {
        Self { n: DEFAULT_REGISTER }
    }
}

/// `SETN(v)`: stores `v` and evaluates to `0`.
///
/// Because right operands are evaluated first, `LOGN(SETN(4) + x)` stores `4`
/// before the logarithm is taken.
pub fn set(register: &mut Register, _left: f64, value: f64) -> f64 {
    register.n = value;
    0.0
}

/// `LOGN(v)`: logarithm of `v` in base `n`.
pub fn log(register: &mut Register, _left: f64, value: f64) -> f64 {
    value.log(register.n)
}

/// `MODN(v)`: remainder of `v` divided by `n`.
pub fn modulo(register: &mut Register, _left: f64, value: f64) -> f64 {
    value % register.n
}

/// `ROOTN(v)`: the `n`-th root of `v`.
pub fn root(register: &mut Register, _left: f64, value: f64) -> f64 {
    value.powf(register.n.recip())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_read() {
        let mut register = Register::default();
        assert!((log(&mut register, 0.0, 100.0) - 2.0).abs() < 1e-12);

        assert_eq!(set(&mut register, 0.0, 2.0), 0.0);
        assert_eq!(register.n, 2.0);
        assert!((log(&mut register, 0.0, 8.0) - 3.0).abs() < 1e-12);
        assert_eq!(modulo(&mut register, 0.0, 5.0), 1.0);
        assert_eq!(root(&mut register, 0.0, 9.0), 3.0);
    }
}
