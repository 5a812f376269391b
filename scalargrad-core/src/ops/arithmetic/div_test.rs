use super::*;
use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_div_forward_and_structure() {
    let a = Value::new(6.0);
    let b = Value::new(3.0);
    let c = div_op(&a, &b);
    assert_relative_eq!(c.data(), 2.0);
    assert_eq!(c.op(), "*");
    assert_eq!(c.operands()[1].op(), "**-1");
}

#[test]
fn test_div_backward() {
    // d(a/b)/da = 1/b, d(a/b)/db = -a/b^2
    let a = Value::new(6.0);
    let b = Value::new(3.0);
    let c = div_op(&a, &b);
    c.backward();
    assert_relative_eq!(a.grad(), 1.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(b.grad(), -6.0 / 9.0, epsilon = 1e-12);
}

#[test]
fn test_div_by_zero_is_not_an_error() {
    let a = Value::new(1.0);
    let b = Value::new(0.0);
    let c = div_op(&a, &b);
    assert!(c.data().is_infinite());
}
