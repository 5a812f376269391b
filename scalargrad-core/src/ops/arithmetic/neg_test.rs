use super::*;
use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_neg_is_mul_by_minus_one() {
    let a = Value::new(4.0);
    let n = neg_op(&a);
    assert_relative_eq!(n.data(), -4.0);
    assert_eq!(n.op(), "*");
    let operands = n.operands();
    assert_eq!(operands[0], a);
    assert!(operands[1].is_leaf());
    assert_relative_eq!(operands[1].data(), -1.0);
}

#[test]
fn test_neg_backward() {
    let a = Value::new(4.0);
    let n = neg_op(&a);
    n.backward();
    assert_relative_eq!(a.grad(), -1.0);
}
