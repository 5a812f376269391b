use crate::autograd::graph::topological_sort;
use crate::value::Value;
use log::{debug, trace};

impl Value {
    /// Performs the backward pass starting from this value.
    ///
    /// Computes the gradient of this value with respect to every node reachable from it
    /// through operand links, using the chain rule:
    ///
    /// 1. Topologically sort the reachable nodes (each node at most once, keyed on identity).
    /// 2. Seed this node's gradient with `1.0`.
    /// 3. Walk the order in reverse and let each node's `BackwardOp` push its contribution
    ///    into its operands' accumulators.
    ///
    /// Gradients of the other nodes are added to, never reset: calling `backward()` twice on
    /// overlapping graphs accumulates twice, as in standard reverse-mode engines. Use
    /// [`zero_grad_graph`](Value::zero_grad_graph) between passes to start from zero.
    pub fn backward(&self) {
        let sorted_nodes = topological_sort(self);
        debug!(
            "backward: {} nodes reachable from output (data={})",
            sorted_nodes.len(),
            self.data()
        );

        self.write_data().grad = 1.0;

        for node in sorted_nodes.iter().rev() {
            // Copy what we need and release the borrow before touching the operands;
            // an operand may be this very node's sibling or appear twice (x + x).
            let (grad_output, grad_fn) = {
                let guard = node.read_data();
                (guard.grad, guard.grad_fn.clone())
            };
            let Some(op) = grad_fn else {
                continue;
            };

            let input_grads = op.backward(grad_output);
            let inputs = op.inputs();
            debug_assert_eq!(
                input_grads.len(),
                inputs.len(),
                "BackwardOp {:?} returned the wrong number of gradients",
                op
            );
            trace!(
                "backward: op {:?} grad_output={} contributions={:?}",
                op.op_label(),
                grad_output,
                input_grads
            );

            for (input, grad_to_add) in inputs.iter().zip(input_grads) {
                input.write_data().grad += grad_to_add;
            }
        }
        debug!("backward: complete");
    }

    /// Resets this node's gradient to zero.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Resets the gradient of every node reachable from this one, including itself.
    pub fn zero_grad_graph(&self) {
        for node in topological_sort(self) {
            node.zero_grad();
        }
    }
}
