use crate::error::ScalarGradError;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// A fully connected layer: `n_outputs` independent neurons over the same input.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
    n_inputs: usize,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        n_outputs: usize,
        nonlin: bool,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..n_outputs)
            .map(|_| Neuron::new(n_inputs, nonlin, rng))
            .collect();
        Layer { neurons, n_inputs }
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn in_features(&self) -> usize {
        self.n_inputs
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        if input.len() != self.n_inputs {
            return Err(ScalarGradError::InputLengthMismatch {
                expected: self.n_inputs,
                actual: input.len(),
            });
        }
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(input))
            .collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }
}
