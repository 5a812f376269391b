use crate::autograd::BackwardOp;
use crate::value::Value;
use std::rc::Rc;

// --- Backward Operation Structure ---

/// Backward operation context for multiplication.
/// Operand values are captured at construction (product rule needs them).
#[derive(Debug)]
struct MulBackward {
    a: Value,
    b: Value,
    a_data: f64,
    b_data: f64,
}

// --- Backward Operation Implementation ---

impl BackwardOp for MulBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        // grad_a = grad_output * b, grad_b = grad_output * a
        vec![self.b_data * grad_output, self.a_data * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone(), self.b.clone()]
    }

    fn op_label(&self) -> String {
        "*".to_string()
    }
}

// --- Forward Operation ---

/// Multiplies two values, producing a node with operands `[a, b]`.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let a_data = a.data();
    let b_data = b.data();
    let backward_context = MulBackward {
        a: a.clone(),
        b: b.clone(),
        a_data,
        b_data,
    };
    Value::from_op(a_data * b_data, Rc::new(backward_context))
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
