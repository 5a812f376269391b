use crate::value::Value;
use approx::assert_relative_eq;
use num_traits::Pow;

#[test]
fn test_operators_on_references() {
    let a = Value::new(3.0);
    let b = Value::new(2.0);
    assert_relative_eq!((&a + &b).data(), 5.0);
    assert_relative_eq!((&a - &b).data(), 1.0);
    assert_relative_eq!((&a * &b).data(), 6.0);
    assert_relative_eq!((&a / &b).data(), 1.5);
    assert_relative_eq!((-&a).data(), -3.0);
}

#[test]
fn test_operators_on_owned_values() {
    let a = Value::new(3.0);
    let b = Value::new(2.0);
    let c = a.clone() * b.clone() + a.clone();
    c.backward();
    assert_relative_eq!(c.data(), 9.0);
    // Owned operands are clones of the handle, so gradients still reach a and b.
    assert_relative_eq!(a.grad(), 3.0);
    assert_relative_eq!(b.grad(), 3.0);
}

#[test]
fn test_mixed_scalar_operators() {
    let a = Value::new(4.0);
    assert_relative_eq!((&a + 1.0).data(), 5.0);
    assert_relative_eq!((1.0 + &a).data(), 5.0);
    assert_relative_eq!((&a - 1.0).data(), 3.0);
    assert_relative_eq!((10.0 - &a).data(), 6.0);
    assert_relative_eq!((&a * 2.0).data(), 8.0);
    assert_relative_eq!((2.0 * &a).data(), 8.0);
    assert_relative_eq!((&a / 2.0).data(), 2.0);
    assert_relative_eq!((2.0 / &a).data(), 0.5);
}

#[test]
fn test_scalar_is_wrapped_as_leaf_operand() {
    let a = Value::new(4.0);
    let c = 3.0 * &a;
    let operands = c.operands();
    assert_eq!(operands.len(), 2);
    assert!(operands[0].is_leaf());
    assert_relative_eq!(operands[0].data(), 3.0);
    assert_eq!(operands[1], a);

    c.backward();
    assert_relative_eq!(a.grad(), 3.0);
    assert_relative_eq!(operands[0].grad(), 4.0);
}

#[test]
fn test_scalar_division_backward() {
    // f = 10 / a, df/da = -10 / a^2
    let a = Value::new(2.0);
    let f = 10.0 / &a;
    f.backward();
    assert_relative_eq!(f.data(), 5.0);
    assert_relative_eq!(a.grad(), -2.5, epsilon = 1e-12);
}

#[test]
fn test_assign_operators_rebind_handle() {
    let a = Value::new(1.0);
    let mut c = a.clone();
    c += 2.0;
    c *= &a;
    c -= Value::new(1.0);
    c /= 2.0;
    // ((1 + 2) * 1 - 1) / 2
    assert_relative_eq!(c.data(), 1.0);
    // a itself is untouched: only the handle `c` moved to new nodes.
    assert_relative_eq!(a.data(), 1.0);
    assert!(a.is_leaf());

    c.backward();
    // c = ((a + 2) * a - 1) / 2, dc/da = (2a + 2) / 2 = 2
    assert_relative_eq!(a.grad(), 2.0, epsilon = 1e-12);
}

#[test]
fn test_pow_trait() {
    let a = Value::new(3.0);
    let b = Pow::pow(&a, 2.0);
    assert_relative_eq!(b.data(), 9.0);
    let c = Pow::pow(a.clone(), 3.0);
    c.backward();
    assert_relative_eq!(a.grad(), 27.0);
}

#[test]
fn test_neg_owned() {
    let a = Value::new(2.5);
    let n = -a.clone();
    n.backward();
    assert_relative_eq!(n.data(), -2.5);
    assert_relative_eq!(a.grad(), -1.0);
}
