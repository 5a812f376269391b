use crate::autograd::BackwardOp;
use crate::value::Value;
use std::rc::Rc;

#[derive(Debug)]
struct SigmoidBackward {
    input: Value,
    output_data: f64,
}

impl BackwardOp for SigmoidBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        // d s(x)/dx = s(x) * (1 - s(x))
        vec![self.output_data * (1.0 - self.output_data) * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }

    fn op_label(&self) -> String {
        "sigmoid".to_string()
    }
}

/// Logistic sigmoid `1 / (1 + e^-x)`, computed as a single node.
pub fn sigmoid_op(input: &Value) -> Value {
    let output_data = 1.0 / (1.0 + (-input.data()).exp());
    let grad_fn = SigmoidBackward {
        input: input.clone(),
        output_data,
    };
    Value::from_op(output_data, Rc::new(grad_fn))
}

impl Value {
    pub fn sigmoid(&self) -> Value {
        sigmoid_op(self)
    }
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
