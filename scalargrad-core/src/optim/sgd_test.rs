use super::*;
use crate::utils::testing::init_test_logger;
use approx::assert_relative_eq;

#[test]
fn test_sgd_config_validation() {
    assert!(SgdConfig::default().validate().is_ok());
    for bad in [
        SgdConfig { lr: 0.0, momentum: 0.0 },
        SgdConfig { lr: -0.1, momentum: 0.0 },
        SgdConfig { lr: f64::NAN, momentum: 0.0 },
        SgdConfig { lr: 0.1, momentum: 1.0 },
        SgdConfig { lr: 0.1, momentum: -0.5 },
    ] {
        assert!(
            matches!(bad.validate(), Err(ScalarGradError::InvalidConfig(_))),
            "{:?} should be rejected",
            bad
        );
    }
}

#[test]
fn test_sgd_rejects_non_leaf_parameters() {
    let a = Value::new(1.0);
    let b = &a * 2.0;
    let result = Sgd::new(vec![a, b], SgdConfig::default());
    assert_eq!(
        result.unwrap_err(),
        ScalarGradError::NonLeafParameter { index: 1 }
    );
}

#[test]
fn test_sgd_basic_step() {
    init_test_logger();
    let w = Value::new(1.0);
    let b = Value::new(-2.0);
    let loss = &w * 3.0 + &b * &b; // dl/dw = 3, dl/db = 2b = -4
    loss.backward();

    let mut optimizer = Sgd::new(
        vec![w.clone(), b.clone()],
        SgdConfig { lr: 0.1, momentum: 0.0 },
    )
    .unwrap();
    optimizer.step().unwrap();

    assert_relative_eq!(w.data(), 1.0 - 0.1 * 3.0, epsilon = 1e-12);
    assert_relative_eq!(b.data(), -2.0 + 0.1 * 4.0, epsilon = 1e-12);
    // Gradients are untouched by step.
    assert_relative_eq!(w.grad(), 3.0);
}

#[test]
fn test_sgd_momentum_accumulates_velocity() {
    let w = Value::new(0.0);
    w.set_grad(1.0);
    let mut optimizer = Sgd::new(vec![w.clone()], SgdConfig { lr: 0.5, momentum: 0.9 }).unwrap();

    optimizer.step().unwrap(); // v = 1.0
    assert_relative_eq!(w.data(), -0.5, epsilon = 1e-12);
    optimizer.step().unwrap(); // v = 0.9 + 1.0
    assert_relative_eq!(w.data(), -0.5 - 0.5 * 1.9, epsilon = 1e-12);
}

#[test]
fn test_sgd_zero_grad() {
    let w = Value::new(1.0);
    let loss = &w * &w;
    loss.backward();
    let mut optimizer = Sgd::new(vec![w.clone()], SgdConfig::default()).unwrap();
    optimizer.zero_grad();
    assert_eq!(w.grad(), 0.0);
}

#[test]
fn test_sgd_skips_non_finite_gradient() {
    let w = Value::new(1.0);
    let v = Value::new(1.0);
    w.set_grad(f64::INFINITY);
    v.set_grad(1.0);
    let mut optimizer = Sgd::new(vec![w.clone(), v.clone()], SgdConfig { lr: 0.1, momentum: 0.0 }).unwrap();
    optimizer.step().unwrap();
    assert_eq!(w.data(), 1.0);
    assert_relative_eq!(v.data(), 0.9, epsilon = 1e-12);
}

#[test]
fn test_sgd_set_lr() {
    let mut optimizer = Sgd::new(vec![], SgdConfig::default()).unwrap();
    optimizer.set_lr(0.2).unwrap();
    assert_eq!(optimizer.lr(), 0.2);
    assert!(optimizer.set_lr(0.0).is_err());
    assert_eq!(optimizer.config().lr, 0.2);
}
