use crate::value::Value;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

impl Value {
    /// Creates a leaf drawn uniformly from `[low, high)`.
    ///
    /// If the range is empty or unbounded, `low` is used, so parameter initialization
    /// never panics on a degenerate range.
    pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> Self {
        if low < high && (high - low).is_finite() {
            Value::new(Uniform::new(low, high).sample(rng))
        } else {
            Value::new(low)
        }
    }

    /// Creates a leaf drawn from a normal distribution `N(mean, std^2)`.
    ///
    /// A negative or non-finite `std` yields a NaN leaf, following the crate's convention of
    /// surfacing domain violations as NaN rather than errors.
    pub fn randn<R: Rng + ?Sized>(rng: &mut R, mean: f64, std: f64) -> Self {
        match Normal::new(mean, std) {
            Ok(normal) => Value::new(normal.sample(rng)),
            Err(_) => Value::new(f64::NAN),
        }
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl From<f32> for Value {
    fn from(data: f32) -> Self {
        Value::new(f64::from(data))
    }
}

impl From<i32> for Value {
    fn from(data: i32) -> Self {
        Value::new(f64::from(data))
    }
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
