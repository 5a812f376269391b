use crate::autograd::BackwardOp;
use crate::value::Value;
use log::warn;
use std::rc::Rc;

impl Value {
    /// Returns the forward-computed scalar.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Returns the accumulated gradient.
    ///
    /// Meaningful only after `backward()` has run on an output this node is reachable from.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Overwrites the scalar held by this node.
    ///
    /// Intended for leaves (parameter updates by an optimizer). Nodes already built on top of
    /// this one keep the values they computed at construction time.
    pub fn set_data(&self, data: f64) {
        let mut guard = self.write_data();
        if guard.grad_fn.is_some() {
            warn!(
                "set_data called on a non-leaf value (op {:?}); downstream nodes are not recomputed",
                guard.op_label()
            );
        }
        guard.data = data;
    }

    /// Overwrites the gradient accumulator.
    pub fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Label of the producing operation (`"+"`, `"*"`, `"**k"`, `"ReLU"`, ...); empty for leaves.
    pub fn op(&self) -> String {
        self.read_data().op_label()
    }

    /// The direct operands this node was built from, in construction order.
    pub fn operands(&self) -> Vec<Value> {
        self.grad_fn()
            .map(|op| op.inputs())
            .unwrap_or_default()
    }

    /// Returns `true` if this node has no producing operation.
    pub fn is_leaf(&self) -> bool {
        self.read_data().grad_fn.is_none()
    }

    /// Returns the user label, if any.
    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }

    /// Returns a clone of the `Rc` pointing to the backward operation (`grad_fn`).
    pub fn grad_fn(&self) -> Option<Rc<dyn BackwardOp>> {
        self.read_data().grad_fn.clone()
    }
}
