use super::*;
use crate::ops::arithmetic::add::add_op;
use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_mul_forward() {
    let a = Value::new(2.0);
    let b = Value::new(-3.0);
    let c = mul_op(&a, &b);
    assert_relative_eq!(c.data(), -6.0);
    assert_eq!(c.op(), "*");
    assert_eq!(c.operands().len(), 2);
}

#[test]
fn test_mul_backward() {
    let a = Value::new(2.0);
    let b = Value::new(-3.0);
    let c = mul_op(&a, &b);
    c.backward();
    assert_relative_eq!(a.grad(), -3.0);
    assert_relative_eq!(b.grad(), 2.0);
}

#[test]
fn test_mul_square_via_self() {
    // x * x: d/dx = 2x
    let x = Value::new(5.0);
    let y = mul_op(&x, &x);
    y.backward();
    assert_relative_eq!(y.data(), 25.0);
    assert_relative_eq!(x.grad(), 10.0);
}

#[test]
fn test_mul_add_chain_rule() {
    // f = (a * b) + c
    let a = Value::new(2.0);
    let b = Value::new(-3.0);
    let c = Value::new(10.0);
    let f = add_op(&mul_op(&a, &b), &c);
    assert_relative_eq!(f.data(), 4.0);
    f.backward();
    assert_relative_eq!(a.grad(), b.data());
    assert_relative_eq!(b.grad(), a.data());
    assert_relative_eq!(c.grad(), 1.0);
}

#[test]
fn test_mul_uses_values_captured_at_construction() {
    let a = Value::new(2.0);
    let b = Value::new(4.0);
    let c = mul_op(&a, &b);
    a.set_data(100.0);
    c.backward();
    assert_relative_eq!(c.data(), 8.0);
    assert_relative_eq!(b.grad(), 2.0);
}
