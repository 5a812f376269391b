// src/nn/mod.rs
// Scalar neural-network building blocks on top of the autograd engine.

pub mod layers;
pub mod losses;
pub mod module; // Trait Module

// Re-export common items
pub use layers::{Layer, Mlp, Neuron};
pub use losses::{mse_loss, MseLoss, Reduction};
pub use module::Module;
