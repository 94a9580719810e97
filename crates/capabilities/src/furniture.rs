//! Furniture with an associated material type
//!
//! The trait leaves `M` open. Each implementor fixes it once, and both
//! accessors must return that same type.

/// A piece of furniture described by two materials of one type
pub trait Furniture {
    /// Material type, fixed by the implementor
    type M;

    fn main_material(&self) -> Self::M;

    fn secondary_material(&self) -> Self::M;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Chair;

impl Furniture for Chair {
    type M = String;

    fn main_material(&self) -> String {
        String::from("Wood")
    }

    fn secondary_material(&self) -> String {
        String::from("More Wood")
    }
}

/// A lamp only knows whether its materials are present
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lamp;

impl Furniture for Lamp {
    type M = bool;

    fn main_material(&self) -> bool {
        true
    }

    fn secondary_material(&self) -> bool {
        true
    }
}

/// Both materials of `piece`, as `(main, secondary)`
pub fn materials<F: Furniture + ?Sized>(piece: &F) -> (F::M, F::M) {
    (piece.main_material(), piece.secondary_material())
}
