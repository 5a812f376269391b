use crate::error::ScalarGradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::value::Value;
use log::{debug, warn};

/// Hyperparameters for [`Sgd`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SgdConfig {
    /// Learning rate. Must be positive and finite.
    pub lr: f64,
    /// Momentum factor in `[0, 1)`. `0.0` disables momentum.
    pub momentum: f64,
}

impl Default for SgdConfig {
    fn default() -> Self {
        SgdConfig {
            lr: 0.01,
            momentum: 0.0,
        }
    }
}

impl SgdConfig {
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if !(self.lr.is_finite() && self.lr > 0.0) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "learning rate must be positive and finite, got {}",
                self.lr
            )));
        }
        if !(0.0..1.0).contains(&self.momentum) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "momentum must be in [0, 1), got {}",
                self.momentum
            )));
        }
        Ok(())
    }
}

/// Stochastic Gradient Descent with optional (heavy-ball) momentum.
///
/// Each step computes `v = momentum * v + grad` and then `data -= lr * v`.
/// With momentum `0.0` this is plain `data -= lr * grad`.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Value>,
    config: SgdConfig,
    velocities: Vec<f64>,
}

impl Sgd {
    /// Creates an optimizer over `params`.
    ///
    /// # Errors
    /// * `InvalidConfig` if `config` fails validation.
    /// * `NonLeafParameter` if any parameter was produced by an operation.
    pub fn new(params: Vec<Value>, config: SgdConfig) -> Result<Self, ScalarGradError> {
        config.validate()?;
        if let Some(index) = params.iter().position(|p| !p.is_leaf()) {
            return Err(ScalarGradError::NonLeafParameter { index });
        }
        let velocities = vec![0.0; params.len()];
        Ok(Sgd {
            params,
            config,
            velocities,
        })
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn config(&self) -> SgdConfig {
        self.config
    }

    pub fn lr(&self) -> f64 {
        self.config.lr
    }

    pub fn set_lr(&mut self, lr: f64) -> Result<(), ScalarGradError> {
        let candidate = SgdConfig { lr, ..self.config };
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}

impl Optimizer for Sgd {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        debug!(
            "Sgd step over {} parameters (lr={}, momentum={})",
            self.params.len(),
            self.config.lr,
            self.config.momentum
        );
        for (i, (param, velocity)) in self
            .params
            .iter()
            .zip(self.velocities.iter_mut())
            .enumerate()
        {
            let grad = param.grad();
            if !grad.is_finite() {
                warn!("Skipping parameter {} with non-finite gradient {}", i, grad);
                continue;
            }
            *velocity = self.config.momentum * *velocity + grad;
            param.set_data(param.data() - self.config.lr * *velocity);
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
