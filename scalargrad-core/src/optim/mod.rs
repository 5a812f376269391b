// scalargrad-core/src/optim/mod.rs

//! Optimizers that update leaf parameters from their accumulated gradients.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::{Sgd, SgdConfig};
