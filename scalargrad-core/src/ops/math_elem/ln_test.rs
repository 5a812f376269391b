use super::*;
use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_ln_forward_backward() {
    let x = Value::new(4.0);
    let y = ln_op(&x);
    assert_relative_eq!(y.data(), 4.0_f64.ln());
    assert_eq!(y.op(), "ln");
    y.backward();
    assert_relative_eq!(x.grad(), 0.25);
}

#[test]
fn test_ln_domain() {
    assert_eq!(Value::new(0.0).ln().data(), f64::NEG_INFINITY);
    assert!(Value::new(-1.0).ln().data().is_nan());
}
