//! Write-once cell for lazily derived location state.

use df_core::{DfError, DfResult};

/// Location state computed once, on the first calculation call, and read
/// for the remainder of the run.
///
/// An explicit two-state type instead of an `Option` sentinel: a location is
/// either still `Uninitialized` (holding only its configuration) or `Ready`
/// with the geometry-derived values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Derived<T> {
    Uninitialized,
    Ready(T),
}

impl<T> Derived<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Derived::Ready(_))
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            Derived::Ready(value) => Some(value),
            Derived::Uninitialized => None,
        }
    }

    /// Return the derived value, running `init` exactly once over the
    /// lifetime of the cell. A failing `init` leaves the cell uninitialized.
    pub fn get_or_try_init<F>(&mut self, init: F) -> DfResult<&T>
    where
        F: FnOnce() -> DfResult<T>,
    {
        if !self.is_ready() {
            *self = Derived::Ready(init()?);
        }
        match self {
            Derived::Ready(value) => Ok(value),
            Derived::Uninitialized => Err(DfError::Invariant {
                what: "derived input cell left uninitialized",
            }),
        }
    }
}

impl<T> Default for Derived<T> {
    fn default() -> Self {
        Derived::Uninitialized
    }
}
