use crate::error::ScalarGradError;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, containers).
///
/// Modules work on slices of scalar [`Value`]s; every output is a graph node, so calling
/// `backward()` on a loss built from the outputs fills in the parameters' gradients.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// Returns `ScalarGradError::InputLengthMismatch` if `input` does not have the length
    /// the module was built for.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// Returns handles to all learnable parameters, including those of sub-modules.
    ///
    /// The handles share the parameters' nodes, so optimizers can update them in place.
    fn parameters(&self) -> Vec<Value>;

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// Total number of learnable scalars.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
