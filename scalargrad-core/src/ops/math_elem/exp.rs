use crate::autograd::BackwardOp;
use crate::value::Value;
use std::rc::Rc;

// --- Backward Operation ---

#[derive(Debug)]
struct ExpBackward {
    input: Value,
    output_data: f64,
}

impl BackwardOp for ExpBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        // d e^x/dx = e^x, reused from the forward pass
        vec![self.output_data * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }

    fn op_label(&self) -> String {
        "exp".to_string()
    }
}

// --- Forward Operation ---

/// Natural exponential `e^x`.
pub fn exp_op(input: &Value) -> Value {
    let output_data = input.data().exp();
    let grad_fn = ExpBackward {
        input: input.clone(),
        output_data,
    };
    Value::from_op(output_data, Rc::new(grad_fn))
}

impl Value {
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
