use crate::value::Value;

/// Checks that each value's gradient is within `tolerance` of the expected one.
/// Panics with the offending index otherwise.
pub fn check_grads_near(values: &[Value], expected_grads: &[f64], tolerance: f64) {
    assert_eq!(
        values.len(),
        expected_grads.len(),
        "Gradient count mismatch"
    );

    for (i, (value, expected)) in values.iter().zip(expected_grads.iter()).enumerate() {
        let actual = value.grad();
        let diff = (actual - expected).abs();
        if diff > tolerance || diff.is_nan() {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, actual, expected, diff, tolerance
            );
        }
    }
}

/// Helper to create leaves from raw scalars for testing purposes.
pub fn create_test_values(data: &[f64]) -> Vec<Value> {
    data.iter().copied().map(Value::new).collect()
}

/// Initializes `env_logger` once for tests; later calls are no-ops.
#[cfg(test)]
pub(crate) fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
