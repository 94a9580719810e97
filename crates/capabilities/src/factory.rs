//! Furniture that can construct itself
//!
//! `factory` returns exactly the implementing type. Structs cannot be
//! subtyped, so every implementor is final. A trait object keeps the
//! material accessors but cannot call `factory`, because `Self: Sized`
//! removes it from the vtable.

use crate::material::{Glass, MaterialFurniture};

pub trait Fabricate: MaterialFurniture {
    fn factory() -> Self
    where
        Self: Sized;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mirror;

impl MaterialFurniture for Mirror {
    type M = Glass;

    fn main_material(&self) -> Glass {
        Glass
    }

    fn secondary_material(&self) -> Glass {
        Glass
    }
}

impl Fabricate for Mirror {
    fn factory() -> Mirror {
        Mirror
    }
}

/// Construct an `F` through its factory
#[inline]
pub fn fabricate<F: Fabricate>() -> F {
    F::factory()
}

pub fn fabricate_many<F: Fabricate>(n: usize) -> Vec<F> {
    (0..n).map(|_| F::factory()).collect()
}
