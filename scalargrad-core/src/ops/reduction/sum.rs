use crate::autograd::BackwardOp;
use crate::value::Value;
use std::rc::Rc;

// --- Backward Operation ---

#[derive(Debug)]
struct SumBackward {
    inputs: Vec<Value>,
}

impl BackwardOp for SumBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![grad_output; self.inputs.len()]
    }

    fn inputs(&self) -> Vec<Value> {
        self.inputs.clone()
    }

    fn op_label(&self) -> String {
        "sum".to_string()
    }
}

// --- Forward Operation ---

/// Sums any number of values into a single node whose operands are `values`, in order.
///
/// One n-ary node instead of a chain of binary additions keeps the graph shallow for
/// large reductions (dot products, losses). An empty slice yields a `0.0` leaf.
pub fn sum_op(values: &[Value]) -> Value {
    if values.is_empty() {
        return Value::new(0.0);
    }
    let data: f64 = values.iter().map(Value::data).sum();
    let grad_fn = SumBackward {
        inputs: values.to_vec(),
    };
    Value::from_op(data, Rc::new(grad_fn))
}

// --- Tests ---
#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
