//! Serializable descriptions of resolved conformances
//!
//! A [`Conformance`] records what the compiler fixed for one implementor:
//! the capability, and the concrete type behind each associated type.

use core::any::type_name;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::dispatch::Witness;
use crate::factory::Fabricate;
use crate::furniture::Furniture;
use crate::increment::CanAddOne;
use crate::material::{MaterialFurniture, MixedFurniture};

/// One associated type and the concrete type the implementor chose
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociatedType {
    pub name: String,
    pub resolved: String,
}

impl AssociatedType {
    fn of<T: ?Sized>(name: &str) -> Self {
        Self {
            name: name.to_string(),
            resolved: type_name::<T>().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conformance {
    pub conformer: String,
    pub capability: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub associated: Vec<AssociatedType>,
}

impl Conformance {
    fn new<T: ?Sized>(capability: &str, associated: Vec<AssociatedType>) -> Self {
        Self {
            conformer: type_name::<T>().to_string(),
            capability: capability.to_string(),
            associated,
        }
    }

    pub fn of_add_one<T: CanAddOne>() -> Self {
        Self::from_witness(&Witness::<T>::of())
    }

    pub fn from_witness<T>(witness: &Witness<T>) -> Self {
        Self::new::<T>(witness.capability(), Vec::new())
    }

    pub fn of_furniture<F: Furniture + ?Sized>() -> Self {
        Self::new::<F>("Furniture", vec![AssociatedType::of::<F::M>("M")])
    }

    pub fn of_material_furniture<F: MaterialFurniture + ?Sized>() -> Self {
        Self::new::<F>("MaterialFurniture", vec![AssociatedType::of::<F::M>("M")])
    }

    pub fn of_mixed_furniture<F: MixedFurniture + ?Sized>() -> Self {
        Self::new::<F>(
            "MixedFurniture",
            vec![
                AssociatedType::of::<F::Main>("Main"),
                AssociatedType::of::<F::Secondary>("Secondary"),
            ],
        )
    }

    pub fn of_fabricate<F: Fabricate>() -> Self {
        Self::new::<F>("Fabricate", vec![AssociatedType::of::<F::M>("M")])
    }

    /// Concrete type chosen for the associated type `name`, if any
    pub fn resolved(&self, name: &str) -> Option<&str> {
        self.associated
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.resolved.as_str())
    }
}

impl fmt::Display for Conformance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.conformer, self.capability)?;
        if !self.associated.is_empty() {
            f.write_str(" [")?;
            for (i, a) in self.associated.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{} = {}", a.name, a.resolved)?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
