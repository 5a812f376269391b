use crate::value::Value;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable scalar operation.
///
/// Every operation that creates a non-leaf [`Value`] stores an implementation of this trait
/// in the output's `grad_fn` field. The implementation owns strong handles to the operands
/// (so the graph stays alive as long as its output does) and whatever forward-time context
/// the derivative needs, captured at construction.
pub trait BackwardOp: Debug {
    /// Computes the contribution to each input's gradient, given the gradient flowing into
    /// the output of this operation (dL/dOutput).
    ///
    /// For `Output = f(Input_1, ..., Input_n)` this returns, for each `i`,
    /// `dL/dOutput * dOutput/dInput_i`.
    ///
    /// The order of the returned vector **must** match the order of [`inputs`](Self::inputs).
    /// The engine adds each entry into the matching operand's accumulator.
    fn backward(&self, grad_output: f64) -> Vec<f64>;

    /// Returns handles to the operands that participated in the forward operation, in
    /// construction order. The same node may appear more than once (`x * x`).
    fn inputs(&self) -> Vec<Value>;

    /// Human-readable tag of the operation, used only for diagnostics.
    fn op_label(&self) -> String;
}
