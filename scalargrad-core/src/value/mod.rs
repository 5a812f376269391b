use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

// Declare submodules holding the impl blocks for Value
pub mod accessors;
pub mod autograd_methods;
pub mod create;
pub mod traits;

/// The public, user-facing handle to one scalar node of the computation graph.
///
/// Wraps the internal `ValueData` in an `Rc<RefCell<>>` to allow shared ownership and
/// interior mutability needed for autograd. Cloning a `Value` clones the handle, never the
/// node: every operation that uses a node as an operand holds the same allocation, so
/// gradient contributions from all uses land in one accumulator.
///
/// Equality and hashing are by identity (pointer), not by numeric value.
pub struct Value(pub(crate) Rc<RefCell<ValueData>>);

impl Value {
    /// Creates a new leaf holding `data`, with zero gradient and no producing operation.
    pub fn new(data: f64) -> Self {
        Value(Rc::new(RefCell::new(ValueData::leaf(data))))
    }

    /// Creates a new leaf with a human-readable label attached (diagnostics only).
    pub fn with_label(data: f64, label: impl Into<String>) -> Self {
        let value = Self::new(data);
        value.write_data().label = Some(label.into());
        value
    }

    /// Creates the output node of an operation. Used by the `ops` module.
    pub(crate) fn from_op(data: f64, grad_fn: Rc<dyn BackwardOp>) -> Self {
        Value(Rc::new(RefCell::new(ValueData::from_op(data, grad_fn))))
    }

    /// Stable identity of the node, used as the visited-set key during graph traversal.
    pub fn id(&self) -> NodeId {
        Rc::as_ptr(&self.0)
    }

    /// Provides temporary immutable access to the internal `ValueData`.
    /// The `Ref` acts like a read lock; ensure it's dropped promptly.
    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.0.borrow()
    }

    /// Provides temporary mutable access to the internal `ValueData`.
    /// The `RefMut` acts like a write lock; ensure it's dropped promptly.
    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.0.borrow_mut()
    }
}

impl Clone for Value {
    /// Clones the `Value` handle (bumps the `Rc` count).
    fn clone(&self) -> Self {
        Value(Rc::clone(&self.0))
    }
}
