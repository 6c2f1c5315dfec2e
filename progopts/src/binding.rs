use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::option::ValueType;

/// Caller-owned storage an option writes into.
///
/// Clone the slot, hand one handle to [`crate::OptSpec`] and keep the other.
/// Whatever the slot holds before parsing is the default; the parser only
/// writes to it when the option is given with values.
#[derive(Debug, Default)]
pub struct Slot<T>(Rc<RefCell<T>>);

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Slot(Rc::clone(&self.0))
    }
}

impl<T> Slot<T> {
    pub fn new(value: T) -> Self {
        Slot(Rc::new(RefCell::new(value)))
    }
    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }
    pub fn replace(&self, value: T) -> T {
        self.0.replace(value)
    }
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }
}

impl<T: Clone> Slot<T> {
    pub fn get(&self) -> T {
        self.0.borrow().clone()
    }
}

impl<T: Default> Slot<T> {
    pub fn take(&self) -> T {
        self.0.take()
    }
}

#[derive(Debug, Clone, Default)]
pub enum Binding {
    #[default]
    None,
    Int(Slot<i64>),
    Float(Slot<f64>),
    Str(Slot<String>),
    Bool(Slot<bool>),
    Ints(Slot<Vec<i64>>),
    Floats(Slot<Vec<f64>>),
    Strs(Slot<Vec<String>>),
}

impl Binding {
    /// Whether this storage can hold values of `ty`, one or many.
    pub(crate) fn fits(&self, ty: ValueType, multiple: bool) -> bool {
        use ValueType::*;
        match (self, ty, multiple) {
            (Binding::None, ..) => true,
            (Binding::Int(_), Int, false)
            | (Binding::Float(_), Float, false)
            | (Binding::Str(_), String, false)
            | (Binding::Bool(_), Bool, false)
            | (Binding::Ints(_), Int, true)
            | (Binding::Floats(_), Float, true)
            | (Binding::Strs(_), String, true) => true,
            _ => false,
        }
    }
}
