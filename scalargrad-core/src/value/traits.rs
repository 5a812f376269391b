use crate::ops::reduction::sum::sum_op;
use crate::value::Value;
use num_traits::{One, Zero};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::rc::Rc;

/// PartialEq for Value is based on Rc pointer equality, consistent with Hash.
/// Two Values are equal only if they are the same graph node; equal numbers held by
/// distinct nodes are different vertices.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).hash(state);
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        f.debug_struct("Value")
            .field("data", &guard.data)
            .field("grad", &guard.grad)
            .field("op", &guard.op_label())
            .finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        match &guard.label {
            Some(label) => write!(f, "Value({}: data={}, grad={})", label, guard.data, guard.grad),
            None => write!(f, "Value(data={}, grad={})", guard.data, guard.grad),
        }
    }
}

// `zero()` and `one()` build fresh leaves, so generic numeric code never aliases a shared
// constant node by accident.
impl Zero for Value {
    fn zero() -> Self {
        Value::new(0.0)
    }

    fn is_zero(&self) -> bool {
        self.data() == 0.0
    }
}

impl One for Value {
    fn one() -> Self {
        Value::new(1.0)
    }

    fn is_one(&self) -> bool {
        self.data() == 1.0
    }
}

/// Sums into a single n-ary node rather than a chain of binary additions.
impl Sum for Value {
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Self {
        let values: Vec<Value> = iter.collect();
        sum_op(&values)
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        let values: Vec<Value> = iter.cloned().collect();
        sum_op(&values)
    }
}
