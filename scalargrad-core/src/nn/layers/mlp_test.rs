use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use crate::nn::losses::mse_loss;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_mlp_structure() {
    let mut rng = StdRng::seed_from_u64(42);
    let mlp = Mlp::new(3, &[4, 4, 1], &mut rng).unwrap();
    assert_eq!(mlp.layers().len(), 3);
    // (3+1)*4 + (4+1)*4 + (4+1)*1
    assert_eq!(mlp.num_parameters(), 41);
    assert!(mlp.layers()[0].neurons()[0].is_nonlinear());
    assert!(!mlp.layers()[2].neurons()[0].is_nonlinear());
}

#[test]
fn test_mlp_requires_layers() {
    let mut rng = StdRng::seed_from_u64(42);
    assert!(matches!(
        Mlp::new(3, &[], &mut rng),
        Err(ScalarGradError::EmptyInput(_))
    ));
}

#[test]
fn test_mlp_forward_and_backward_reach_all_parameters() {
    let mut rng = StdRng::seed_from_u64(42);
    let mlp = Mlp::new(2, &[3, 1], &mut rng).unwrap();
    let x = vec![Value::new(0.5), Value::new(-1.5)];
    let out = mlp.forward(&x).unwrap();
    assert_eq!(out.len(), 1);

    let loss = mse_loss(&out, &[Value::new(1.0)]).unwrap();
    loss.backward();
    // The output layer's bias always receives gradient 2 * (pred - target).
    let last_bias = mlp.parameters().last().cloned().unwrap();
    assert!((last_bias.grad() - 2.0 * (out[0].data() - 1.0)).abs() < 1e-12);

    mlp.zero_grad();
    assert!(mlp.parameters().iter().all(|p| p.grad() == 0.0));
}

#[test]
fn test_mlp_gradients_match_finite_differences() {
    let mut rng = StdRng::seed_from_u64(9);
    let mlp = Mlp::new(2, &[4, 1], &mut rng).unwrap();
    let inputs = vec![Value::new(0.3), Value::new(-0.8)];
    let func = |v: &[Value]| {
        let out = mlp.forward(v).unwrap();
        out[0].pow(2.0)
    };
    assert_eq!(check_grad(func, &inputs, &GradCheckConfig::default()), Ok(()));
}
