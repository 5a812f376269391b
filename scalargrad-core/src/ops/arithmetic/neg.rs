use crate::ops::arithmetic::mul::mul_op;
use crate::value::Value;

/// Negation, expressed as multiplication by a `-1` leaf so it stays a recorded graph node.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &Value::new(-1.0))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
