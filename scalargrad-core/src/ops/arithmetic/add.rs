use crate::autograd::BackwardOp;
use crate::value::Value;
use std::rc::Rc;

// --- Backward Operation Structure ---

/// Backward operation context for addition.
#[derive(Debug)]
struct AddBackward {
    a: Value,
    b: Value,
}

// --- Backward Operation Implementation ---

impl BackwardOp for AddBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        // d(a + b)/da = d(a + b)/db = 1
        vec![grad_output, grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone(), self.b.clone()]
    }

    fn op_label(&self) -> String {
        "+".to_string()
    }
}

// --- Forward Operation ---

/// Adds two values, producing a node with operands `[a, b]`.
pub fn add_op(a: &Value, b: &Value) -> Value {
    let data = a.data() + b.data();
    let backward_context = AddBackward {
        a: a.clone(),
        b: b.clone(),
    };
    Value::from_op(data, Rc::new(backward_context))
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
