//! # Scalar Operations Module (`ops`)
//!
//! Every differentiable operation on [`Value`](crate::Value) lives here, grouped by kind.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (`add_op`, `pow_op`, ...) that
//!   performs the forward computation eagerly and wires the output node to its operands.
//!   The `std::ops` overloads and the inherent methods on `Value` are thin wrappers over them.
//! - **`Backward` Structs:** Each operation has a private struct (e.g. `AddBackward`) that
//!   implements [`BackwardOp`](crate::autograd::BackwardOp). It stores strong handles to the
//!   operands plus the forward-time values the derivative needs.
//! - **Composite operations** (negation, subtraction, division) are expressed through the
//!   primitive ones, so they never bypass the graph.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, pow and the derived neg, sub, div, plus operator overloads.
//! - [`activation`]: relu, tanh, sigmoid.
//! - [`math_elem`]: exp, ln.
//! - [`reduction`]: n-ary sum.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod reduction;

pub use activation::{relu_op, sigmoid_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::{exp_op, ln_op};
pub use reduction::sum_op;
