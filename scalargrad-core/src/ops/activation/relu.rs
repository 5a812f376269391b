use crate::autograd::BackwardOp;
use crate::value::Value;
use std::rc::Rc;

// --- Backward Operation ---

/// Gates on the output value: the derivative at exactly zero is taken to be 0.
#[derive(Debug)]
struct ReluBackward {
    input: Value,
    output_data: f64,
}

impl BackwardOp for ReluBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        if self.output_data > 0.0 {
            vec![grad_output]
        } else {
            vec![0.0]
        }
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }

    fn op_label(&self) -> String {
        "ReLU".to_string()
    }
}

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `ReLU(x) = max(0, x)`.
pub fn relu_op(input: &Value) -> Value {
    let x = input.data();
    // Not f64::max: a NaN input must stay NaN instead of being clamped to 0.
    let output_data = if x < 0.0 { 0.0 } else { x };
    let grad_fn = ReluBackward {
        input: input.clone(),
        output_data,
    };
    Value::from_op(output_data, Rc::new(grad_fn))
}

impl Value {
    /// Applies the Rectified Linear Unit. See [`relu_op`].
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
