use crate::autograd::BackwardOp;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::rc::Rc;

/// Holds the scalar and the autograd metadata of one graph node.
///
/// Always accessed through a [`Value`](crate::Value) handle, which wraps it in
/// `Rc<RefCell<...>>` so every consumer of the node shares the same gradient accumulator.
pub struct ValueData {
    pub(crate) data: f64,
    pub(crate) grad: f64,
    /// Producing operation. `None` for leaves.
    pub(crate) grad_fn: Option<Rc<dyn BackwardOp>>,
    pub(crate) label: Option<String>,
}

impl ValueData {
    pub(crate) fn leaf(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            grad_fn: None,
            label: None,
        }
    }

    pub(crate) fn from_op(data: f64, grad_fn: Rc<dyn BackwardOp>) -> Self {
        ValueData {
            data,
            grad: 0.0,
            grad_fn: Some(grad_fn),
            label: None,
        }
    }

    pub(crate) fn op_label(&self) -> String {
        self.grad_fn
            .as_ref()
            .map(|op| op.op_label())
            .unwrap_or_default()
    }
}

// Manual implementation of Debug: grad_fn is summarized by its label so that printing a
// node never walks the whole graph.
impl Debug for ValueData {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ValueData")
            .field("data", &self.data)
            .field("grad", &self.grad)
            .field("op", &self.op_label())
            .field("label", &self.label)
            .finish()
    }
}

// Dropping the output of a long chain would otherwise recurse once per node
// (Value -> grad_fn -> operand Value -> ...). Unlink the graph iteratively instead: a node
// whose last handle is being released gives up its grad_fn before it is dropped, so each
// individual drop stays shallow.
impl Drop for ValueData {
    fn drop(&mut self) {
        let mut pending: Vec<Rc<dyn BackwardOp>> = match self.grad_fn.take() {
            Some(op) => vec![op],
            None => return,
        };
        while let Some(op) = pending.pop() {
            if Rc::strong_count(&op) > 1 {
                continue;
            }
            let inputs = op.inputs();
            drop(op);
            for input in inputs {
                if Rc::strong_count(&input.0) == 1 {
                    if let Some(next) = input.0.borrow_mut().grad_fn.take() {
                        pending.push(next);
                    }
                }
            }
        }
    }
}
