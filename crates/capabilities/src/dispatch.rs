//! Capability values and witness tables
//!
//! A capability value is a zero-sized token naming an operation; the
//! operation itself is resolved from the argument's type. A [`Witness`] is
//! the same resolution captured as a function pointer, so it can be stored,
//! copied and applied later without naming the trait again.

use core::any::type_name;
use core::fmt;

use tracing::trace;

use crate::increment::CanAddOne;

/// A capability that maps a `T` to a `T`
pub trait Capability<T> {
    /// Capability name, used in reports and logs
    const NAME: &'static str;

    fn apply(&self, value: T) -> T;
}

/// The `CanAddOne` capability as a value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AddOne;

impl<T: CanAddOne> Capability<T> for AddOne {
    const NAME: &'static str = "CanAddOne";

    #[inline]
    fn apply(&self, value: T) -> T {
        value.add_one()
    }
}

/// Apply `capability` to `value`, dispatching to `T`'s own implementation
///
/// A `T` that does not conform is a type error at the call site.
#[inline]
pub fn apply_capability<T, C: Capability<T>>(value: T, capability: &C) -> T {
    capability.apply(value)
}

/// Resolved implementation of a capability for one concrete type
pub struct Witness<T> {
    capability: &'static str,
    op: fn(T) -> T,
}

impl<T> Witness<T> {
    /// Build a witness from an explicit function
    pub const fn from_fn(capability: &'static str, op: fn(T) -> T) -> Self {
        Self { capability, op }
    }

    pub fn capability(&self) -> &'static str {
        self.capability
    }

    /// Type name of the conformer this witness was resolved for
    pub fn conformer(&self) -> &'static str {
        type_name::<T>()
    }

    pub fn apply(&self, value: T) -> T {
        trace!(capability = self.capability, conformer = self.conformer(), "witness dispatch");
        (self.op)(value)
    }

    /// Apply the witness `n` times
    pub fn apply_n(&self, value: T, n: usize) -> T {
        (0..n).fold(value, |acc, _| (self.op)(acc))
    }
}

impl<T: CanAddOne> Witness<T> {
    /// The `CanAddOne` witness for `T`
    pub fn of() -> Self {
        Self::from_fn(<AddOne as Capability<T>>::NAME, <T as CanAddOne>::add_one)
    }
}

// manual impls: a function pointer is Copy whatever T is
impl<T> Clone for Witness<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Witness<T> {}

impl<T> fmt::Debug for Witness<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Witness")
            .field("capability", &self.capability)
            .field("conformer", &self.conformer())
            .finish()
    }
}

impl<T> Capability<T> for Witness<T> {
    const NAME: &'static str = "Witness";

    fn apply(&self, value: T) -> T {
        Witness::apply(self, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::increment::increment;

    #[test]
    fn test_apply_capability_preserves_type() {
        let i: i32 = apply_capability(1, &AddOne);
        let f: f64 = apply_capability(1.0, &AddOne);
        assert_eq!(i, 2);
        assert_eq!(f, 2.0);
    }

    #[test]
    fn test_witness_matches_direct_dispatch() {
        let w = Witness::<u16>::of();
        assert_eq!(w.apply(9), increment(9u16));
        assert_eq!(w.apply(9), apply_capability(9u16, &AddOne));
        assert_eq!(w.apply_n(0, 5), 5);
    }

    #[test]
    fn test_witness_metadata() {
        let w = Witness::<f32>::of();
        assert_eq!(w.capability(), "CanAddOne");
        assert_eq!(w.conformer(), "f32");

        let dbg = format!("{:?}", w);
        assert!(dbg.contains("CanAddOne"));
        assert!(dbg.contains("f32"));
    }

    #[test]
    fn test_custom_witness_is_a_capability() {
        let double = Witness::<i64>::from_fn("Double", |x| x * 2);
        assert_eq!(apply_capability(21, &double), 42);
        assert_eq!(double.capability(), "Double");
    }

    #[test]
    fn test_witnesses_are_copy() {
        let w = Witness::<u8>::of();
        let table = [w; 3];
        let out = table.iter().fold(0u8, |acc, w| w.apply(acc));
        assert_eq!(out, 3);
    }
}
