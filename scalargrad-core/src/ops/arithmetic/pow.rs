use crate::autograd::BackwardOp;
use crate::value::Value;
use std::rc::Rc;

// --- Backward Operation ---

#[derive(Debug)]
struct PowBackward {
    base: Value,
    base_data: f64,
    exponent: f64,
}

impl BackwardOp for PowBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        // d(x^k)/dx = k * x^(k-1)
        let local = self.exponent * self.base_data.powf(self.exponent - 1.0);
        vec![local * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.base.clone()]
    }

    fn op_label(&self) -> String {
        format!("**{}", self.exponent)
    }
}

// --- Forward Operation ---

/// Raises `base` to the real exponent `exponent`.
///
/// Domain violations are not masked: a negative base with a fractional exponent, or a zero
/// base with `exponent < 1` in the derivative, produce NaN or infinity per IEEE-754 and the
/// result propagates to downstream consumers.
pub fn pow_op(base: &Value, exponent: f64) -> Value {
    let base_data = base.data();
    let grad_fn = PowBackward {
        base: base.clone(),
        base_data,
        exponent,
    };
    Value::from_op(base_data.powf(exponent), Rc::new(grad_fn))
}

// --- Value Method ---

impl Value {
    /// Raises this value to the power `exponent`. See [`pow_op`].
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
