//! Capability dispatch with traits
//!
//! A capability is a trait; a conformer is a type with an `impl` of it.
//! Generic code bounded by the trait is specialised per concrete type at
//! each call site, so the right implementation is picked with no runtime
//! type inspection.
//!
//! - [`increment()`]: one generic function over every numeric type
//! - [`Furniture`]: an associated type fixed by each implementor
//! - [`MaterialFurniture`]: an associated type bounded by a marker trait
//! - [`Fabricate`]: a static factory returning exactly `Self`
//!
//! ```
//! use capabilities::{apply_capability, increment, materials, AddOne, Chair};
//!
//! assert_eq!(increment(1), 2);
//! assert_eq!(increment(1.0), 2.0);
//! assert_eq!(apply_capability(1u8, &AddOne), 2u8);
//!
//! let (main, secondary) = materials(&Chair);
//! assert_eq!((main.as_str(), secondary.as_str()), ("Wood", "More Wood"));
//! ```
//!
//! # Rejected at compile time
//!
//! A type without the capability cannot be passed to a function that needs
//! it:
//!
//! ```compile_fail
//! use capabilities::increment;
//!
//! increment("one");
//! ```
//!
//! ```compile_fail
//! use capabilities::{apply_capability, AddOne};
//!
//! struct Plank;
//! apply_capability(Plank, &AddOne);
//! ```
//!
//! Both accessors of one implementor must agree on `M`:
//!
//! ```compile_fail
//! use capabilities::Furniture;
//!
//! struct Lamp;
//!
//! impl Furniture for Lamp {
//!     type M = bool;
//!
//!     fn main_material(&self) -> bool {
//!         true
//!     }
//!
//!     fn secondary_material(&self) -> String {
//!         "Wood".to_string()
//!     }
//! }
//! ```
//!
//! A bounded associated type only accepts fillers that carry the marker:
//!
//! ```compile_fail
//! use capabilities::MaterialFurniture;
//!
//! struct Stool;
//!
//! impl MaterialFurniture for Stool {
//!     type M = String;
//!
//!     fn main_material(&self) -> String {
//!         "Pine".to_string()
//!     }
//!
//!     fn secondary_material(&self) -> String {
//!         "Pine".to_string()
//!     }
//! }
//! ```
//!
//! The marker itself is not a filler either; materials must be concrete:
//!
//! ```compile_fail
//! use capabilities::{Glass, Material, MaterialFurniture};
//!
//! struct Vase;
//!
//! impl MaterialFurniture for Vase {
//!     type M = dyn Material;
//!
//!     fn main_material(&self) -> Box<dyn Material> {
//!         Box::new(Glass)
//!     }
//!
//!     fn secondary_material(&self) -> Box<dyn Material> {
//!         Box::new(Glass)
//!     }
//! }
//! ```
//!
//! A factory cannot be reached through a trait object, whose concrete type
//! is unknown:
//!
//! ```compile_fail
//! use capabilities::{Fabricate, Glass};
//!
//! fn rebuild() -> Box<dyn Fabricate<M = Glass>> {
//!     Box::new(<dyn Fabricate<M = Glass>>::factory())
//! }
//! ```

mod config;
mod dispatch;
mod error;
mod factory;
mod furniture;
mod increment;
mod lesson;
mod material;
mod report;

pub use config::{OutputFormat, TourConfig};
pub use dispatch::{apply_capability, AddOne, Capability, Witness};
pub use error::{Result, TourError};
pub use factory::{fabricate, fabricate_many, Fabricate, Mirror};
pub use furniture::{materials, Chair, Furniture, Lamp};
pub use increment::{checked_increment, increment, increment_n, CanAddOne, CheckedAddOne};
pub use lesson::{run_all, Lesson, LessonOutcome};
pub use material::{
    material_pair, mixed_pair, require_material, Cotton, Glass, Lamppost, Material,
    MaterialFurniture, Metal, MixedFurniture, Sofa, Table, Vase, Wood,
};
pub use report::{AssociatedType, Conformance};
