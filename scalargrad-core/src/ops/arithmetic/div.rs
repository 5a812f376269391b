use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::pow_op;
use crate::value::Value;

/// Division `a / b`, expressed as `a * b^-1`.
///
/// Division by a zero-valued node yields infinity or NaN; it is not an error.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, -1.0))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
