//! Generic single-value holder.

/// Holds one value, fixed at construction.
///
/// Cloning duplicates the value; two wrappers never share it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueWrapper<T> {
    value: T,
}

impl<T: Clone> ValueWrapper<T> {
    /// Wraps `value`
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns a copy of the wrapped value
    pub fn get_value(&self) -> T {
        self.value.clone()
    }
}
