//! Marker capability for materials, and furniture whose material type must
//! carry it

/// Marker for types that may fill a furniture's material slot
pub trait Material {}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Wood;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Glass;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Metal;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cotton;

impl Material for Wood {}
impl Material for Glass {}
impl Material for Metal {}
impl Material for Cotton {}

/// Furniture whose single material type is a [`Material`]
pub trait MaterialFurniture {
    type M: Material;

    fn main_material(&self) -> Self::M;

    fn secondary_material(&self) -> Self::M;
}

/// Furniture with two independently chosen materials
///
/// One associated type cannot hold two different materials, so each
/// accessor gets its own.
pub trait MixedFurniture {
    type Main: Material;
    type Secondary: Material;

    fn main_material(&self) -> Self::Main;

    fn secondary_material(&self) -> Self::Secondary;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Table;

impl MaterialFurniture for Table {
    type M = Wood;

    fn main_material(&self) -> Wood {
        Wood
    }

    fn secondary_material(&self) -> Wood {
        Wood
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Vase;

impl MaterialFurniture for Vase {
    type M = Glass;

    fn main_material(&self) -> Glass {
        Glass
    }

    fn secondary_material(&self) -> Glass {
        Glass
    }
}

/// Wood frame, cotton cushions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sofa;

impl MixedFurniture for Sofa {
    type Main = Wood;
    type Secondary = Cotton;

    fn main_material(&self) -> Wood {
        Wood
    }

    fn secondary_material(&self) -> Cotton {
        Cotton
    }
}

/// Metal post, glass lantern
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lamppost;

impl MixedFurniture for Lamppost {
    type Main = Metal;
    type Secondary = Glass;

    fn main_material(&self) -> Metal {
        Metal
    }

    fn secondary_material(&self) -> Glass {
        Glass
    }
}

/// Both materials of a [`MaterialFurniture`]
pub fn material_pair<F: MaterialFurniture + ?Sized>(piece: &F) -> (F::M, F::M) {
    (piece.main_material(), piece.secondary_material())
}

/// Both materials of a [`MixedFurniture`]
pub fn mixed_pair<F: MixedFurniture + ?Sized>(piece: &F) -> (F::Main, F::Secondary) {
    (piece.main_material(), piece.secondary_material())
}

/// Compile-time check that `M` is a material; returns the value unchanged
#[inline]
pub fn require_material<M: Material>(m: M) -> M {
    m
}
