use crate::error::ScalarGradError;
use crate::nn::module::Module;
use crate::ops::reduction::sum_op;
use crate::value::Value;
use rand::Rng;

/// A single unit computing `act(w · x + b)`, with ReLU as activation when `nonlin` is set.
#[derive(Debug)]
pub struct Neuron {
    pub(crate) weights: Vec<Value>,
    pub(crate) bias: Value,
    nonlin: bool,
}

impl Neuron {
    /// Creates a neuron with `n_inputs` weights drawn uniformly from `[-1, 1)` and a zero bias.
    pub fn new<R: Rng + ?Sized>(n_inputs: usize, nonlin: bool, rng: &mut R) -> Self {
        let weights = (0..n_inputs)
            .map(|_| Value::uniform(rng, -1.0, 1.0))
            .collect();
        Neuron {
            weights,
            bias: Value::new(0.0),
            nonlin,
        }
    }

    /// Creates a neuron from explicit parameter values.
    pub fn from_parameters(weights: &[f64], bias: f64, nonlin: bool) -> Self {
        Neuron {
            weights: weights.iter().copied().map(Value::new).collect(),
            bias: Value::new(bias),
            nonlin,
        }
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn is_nonlinear(&self) -> bool {
        self.nonlin
    }

    /// Computes the neuron's single output.
    pub fn activate(&self, input: &[Value]) -> Result<Value, ScalarGradError> {
        if input.len() != self.weights.len() {
            return Err(ScalarGradError::InputLengthMismatch {
                expected: self.weights.len(),
                actual: input.len(),
            });
        }
        let mut terms: Vec<Value> = self
            .weights
            .iter()
            .zip(input)
            .map(|(w, x)| w * x)
            .collect();
        terms.push(self.bias.clone());
        let pre_activation = sum_op(&terms);
        Ok(if self.nonlin {
            pre_activation.relu()
        } else {
            pre_activation
        })
    }
}

impl Module for Neuron {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Ok(vec![self.activate(input)?])
    }

    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}
