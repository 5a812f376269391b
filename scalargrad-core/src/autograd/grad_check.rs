use crate::error::ScalarGradError;
use crate::value::Value;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Gradient check input must be a leaf value (no grad_fn). Input index: {input_index}")]
    InputNotLeaf { input_index: usize },

    #[error("Gradient check setup error: {0}")]
    ValueError(ScalarGradError),
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ValueError(err)
    }
}

/// Step size and acceptance threshold for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Half-width of the central difference.
    pub epsilon: f64,
    /// Maximum accepted absolute and relative difference.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            tolerance: 1e-4,
        }
    }
}

impl GradCheckConfig {
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "grad check epsilon must be positive and finite, got {}",
                self.epsilon
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "grad check tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Checks analytical gradients against numerical gradients using central finite differences.
///
/// `func` builds a scalar output from the given leaves. It is called once on `inputs`
/// (whose gradients are reset first) to obtain analytical gradients via `backward()`, then
/// twice per input on fresh leaves with that input shifted by `±epsilon`.
///
/// An input passes when either the absolute or the relative difference is within
/// `tolerance`.
pub fn check_grad<F>(
    func: F,
    inputs: &[Value],
    config: &GradCheckConfig,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Value,
{
    config.validate()?;
    let epsilon = config.epsilon;

    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        input.zero_grad();
    }

    // --- Analytical pass ---
    let output = func(inputs);
    output.backward();
    let analytical_grads: Vec<f64> = inputs.iter().map(Value::grad).collect();
    let original_data: Vec<f64> = inputs.iter().map(Value::data).collect();

    let evaluate = |index: usize, delta: f64| -> f64 {
        let perturbed: Vec<Value> = original_data
            .iter()
            .enumerate()
            .map(|(j, &x)| Value::new(if j == index { x + delta } else { x }))
            .collect();
        func(&perturbed).data()
    };

    // --- Numerical pass ---
    for (i, &analytical_grad) in analytical_grads.iter().enumerate() {
        let loss_plus = evaluate(i, epsilon);
        let loss_minus = evaluate(i, -epsilon);
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        debug!(
            "check_grad: input {} analytical={} numerical={} diff={}",
            i, analytical_grad, numerical_grad, difference
        );
        if difference > config.tolerance
            && (difference / (analytical_grad.abs() + epsilon)) > config.tolerance
        {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
