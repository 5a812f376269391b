use crate::error::ScalarGradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers update the `data` of the leaves they manage using the gradients
/// left there by the last `backward` pass.
pub trait Optimizer {
    /// Performs a single optimization step over every managed parameter.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Resets the gradient of every managed parameter to 0.
    ///
    /// Call this before each new backward pass; gradients accumulate otherwise.
    fn zero_grad(&mut self);
}
