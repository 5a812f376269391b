use crate::error::ScalarGradError;
use crate::ops::reduction::sum_op;
use crate::value::Value;
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors: `mean` | `sum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarGradError::InvalidConfig(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Mean Squared Error loss between predictions and targets.
#[derive(Debug, Clone, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds the loss as a graph node over `input` and `target`.
    ///
    /// Targets are ordinary values; pass leaves that are not trained.
    ///
    /// # Errors
    /// * `InputLengthMismatch` if the slices differ in length.
    /// * `EmptyInput` if both are empty.
    pub fn calculate(&self, input: &[Value], target: &[Value]) -> Result<Value, ScalarGradError> {
        if input.len() != target.len() {
            return Err(ScalarGradError::InputLengthMismatch {
                expected: input.len(),
                actual: target.len(),
            });
        }
        if input.is_empty() {
            return Err(ScalarGradError::EmptyInput("MseLoss::calculate".to_string()));
        }

        let squared_errors: Vec<Value> = input
            .iter()
            .zip(target)
            .map(|(p, t)| (p - t).pow(2.0))
            .collect();
        let total = sum_op(&squared_errors);

        Ok(match self.reduction {
            Reduction::Mean => total / input.len() as f64,
            Reduction::Sum => total,
        })
    }
}

/// Mean-reduced MSE; shorthand for `MseLoss::new(Reduction::Mean).calculate(...)`.
pub fn mse_loss(input: &[Value], target: &[Value]) -> Result<Value, ScalarGradError> {
    MseLoss::new(Reduction::Mean).calculate(input, target)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
