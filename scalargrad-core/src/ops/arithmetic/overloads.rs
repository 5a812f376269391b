//! `std::ops` operator overloads for [`Value`].
//!
//! Every combination of owned `Value`, borrowed `&Value` and raw `f64` on either side is
//! supported. A raw scalar is always wrapped as a fresh leaf before combining, so each
//! arithmetic expression yields a recorded graph node with correctly wired operands.
//!
//! Compound assignment (`+=`, ...) rebinds the left-hand handle to the new node; the node it
//! previously pointed at is left untouched and stays part of the graph.

use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
use crate::value::Value;
use num_traits::Pow;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:path) => {
        impl<'a, 'b> $trait<&'b Value> for &'a Value {
            type Output = Value;
            fn $method(self, rhs: &'b Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&self, &rhs)
            }
        }

        impl<'a> $trait<&'a Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &'a Value) -> Value {
                $op_fn(&self, rhs)
            }
        }

        impl<'a> $trait<Value> for &'a Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, &rhs)
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(&self, &Value::new(rhs))
            }
        }

        impl<'a> $trait<f64> for &'a Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(self, &Value::new(rhs))
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&Value::new(self), &rhs)
            }
        }

        impl<'a> $trait<&'a Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &'a Value) -> Value {
                $op_fn(&Value::new(self), rhs)
            }
        }
    };
}

macro_rules! impl_assign_op {
    ($trait:ident, $method:ident, $op_fn:path) => {
        impl<'a> $trait<&'a Value> for Value {
            fn $method(&mut self, rhs: &'a Value) {
                let out = $op_fn(&*self, rhs);
                *self = out;
            }
        }

        impl $trait<Value> for Value {
            fn $method(&mut self, rhs: Value) {
                let out = $op_fn(&*self, &rhs);
                *self = out;
            }
        }

        impl $trait<f64> for Value {
            fn $method(&mut self, rhs: f64) {
                let out = $op_fn(&*self, &Value::new(rhs));
                *self = out;
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl_assign_op!(AddAssign, add_assign, add_op);
impl_assign_op!(SubAssign, sub_assign, sub_op);
impl_assign_op!(MulAssign, mul_assign, mul_op);
impl_assign_op!(DivAssign, div_assign, div_op);

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(&self)
    }
}

impl<'a> Neg for &'a Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Pow<f64> for Value {
    type Output = Value;
    fn pow(self, exponent: f64) -> Value {
        pow_op(&self, exponent)
    }
}

impl<'a> Pow<f64> for &'a Value {
    type Output = Value;
    fn pow(self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "overloads_test.rs"]
mod tests;
