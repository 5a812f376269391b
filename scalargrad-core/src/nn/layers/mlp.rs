use crate::error::ScalarGradError;
use crate::nn::layers::layer::Layer;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// A multi-layer perceptron. Hidden layers use ReLU; the last layer is linear.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds an MLP taking `n_inputs` values through layers of the given output sizes.
    ///
    /// # Errors
    /// Returns `ScalarGradError::EmptyInput` if `layer_sizes` is empty.
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if layer_sizes.is_empty() {
            return Err(ScalarGradError::EmptyInput("Mlp::new layer_sizes".to_string()));
        }
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = n_inputs;
        for (i, &size) in layer_sizes.iter().enumerate() {
            let nonlin = i + 1 != layer_sizes.len();
            layers.push(Layer::new(fan_in, size, nonlin, rng));
            fan_in = size;
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut current = input.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
