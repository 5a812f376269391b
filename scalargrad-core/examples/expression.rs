//! # Evaluating and differentiating a scalar expression
//!
//! Builds a small expression out of `+`, `-`, `*`, `/`, powers and `relu`,
//! runs a single backward pass from the final node and prints the value and
//! gradient of the inputs.
//!
//! ## Running
//! `cargo run --example expression`
//! Set `RUST_LOG=debug` to see the backward pass log.

use scalargrad_core::Value;

fn main() {
    env_logger::init();

    let a = Value::with_label(-4.0, "a");
    let b = Value::with_label(2.0, "b");

    let mut c = &a + &b;
    let mut d = &a * &b + b.pow(3.0);
    c = &c + &c + 1.0;
    c = &c + 1.0 + &c + (-&a);
    d = &d + &d * 2.0 + (&b + &a).relu();
    d = &d + 3.0 * &d + (&b - &a).relu();
    let e = &c - &d;
    let f = e.pow(2.0);
    let mut g = &f / 2.0;
    g = &g + 10.0 / &f;

    println!("g = {:.4}", g.data());
    g.backward();
    println!("{}", a);
    println!("{}", b);
    println!("dg/da = {:.4}", a.grad());
    println!("dg/db = {:.4}", b.grad());
}
