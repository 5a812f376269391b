use crate::autograd::BackwardOp;
use crate::value::Value;
use std::rc::Rc;

// --- Backward Operation ---

#[derive(Debug)]
struct LnBackward {
    input: Value,
    input_data: f64,
}

impl BackwardOp for LnBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        // d ln(x)/dx = 1/x
        vec![grad_output / self.input_data]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }

    fn op_label(&self) -> String {
        "ln".to_string()
    }
}

// --- Forward Operation ---

/// Natural logarithm.
///
/// `ln(0)` is `-inf` and `ln(x < 0)` is NaN, per IEEE-754; neither is treated as an error.
pub fn ln_op(input: &Value) -> Value {
    let input_data = input.data();
    let grad_fn = LnBackward {
        input: input.clone(),
        input_data,
    };
    Value::from_op(input_data.ln(), Rc::new(grad_fn))
}

impl Value {
    pub fn ln(&self) -> Value {
        ln_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
