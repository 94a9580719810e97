//! Runnable lessons
//!
//! Each lesson exercises one construct and records what came out, along
//! with the conformances the compiler resolved on the way.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dispatch::{apply_capability, AddOne, Witness};
use crate::error::{Result, TourError};
use crate::factory::{fabricate, fabricate_many, Mirror};
use crate::furniture::{materials, Chair, Furniture, Lamp};
use crate::increment::{checked_increment, increment, increment_n};
use crate::material::{material_pair, mixed_pair, Lamppost, Sofa, Table, Vase};
use crate::report::Conformance;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lesson {
    Increment,
    AssociatedType,
    ConstrainedAssociatedType,
    MixedMaterials,
    SelfFactory,
}

impl Lesson {
    /// Tour order
    pub const ALL: [Lesson; 5] = [
        Lesson::Increment,
        Lesson::AssociatedType,
        Lesson::ConstrainedAssociatedType,
        Lesson::MixedMaterials,
        Lesson::SelfFactory,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::AssociatedType => "associated-type",
            Self::ConstrainedAssociatedType => "constrained-associated-type",
            Self::MixedMaterials => "mixed-materials",
            Self::SelfFactory => "self-factory",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Self::Increment => "one generic function, resolved per numeric type",
            Self::AssociatedType => "implementors fix the material type themselves",
            Self::ConstrainedAssociatedType => "the material type must be a Material",
            Self::MixedMaterials => "two materials need two associated types",
            Self::SelfFactory => "a static factory returning exactly Self",
        }
    }

    pub fn run(&self) -> LessonOutcome {
        debug!(lesson = self.name(), "running lesson");
        let mut out = LessonOutcome::new(*self);
        match self {
            Self::Increment => {
                out.observe(format!("increment(1) = {}", increment(1)));
                out.observe(format!("increment(1.0) = {:?}", increment(1.0)));
                out.observe(format!(
                    "apply_capability(41u8, &AddOne) = {}",
                    apply_capability(41u8, &AddOne)
                ));
                let w = Witness::<i64>::of();
                out.observe(format!("witness {:?} applied 3 times to 0 = {}", w, w.apply_n(0, 3)));
                out.observe(format!("increment_n(10u32, 5) = {}", increment_n(10u32, 5)));
                out.observe(format!("checked_increment(u8::MAX) = {:?}", checked_increment(u8::MAX)));
                out.conform(Conformance::of_add_one::<i32>());
                out.conform(Conformance::of_add_one::<f64>());
                out.conform(Conformance::from_witness(&w));
            }
            Self::AssociatedType => {
                let (main, secondary) = materials(&Chair);
                out.observe(format!("Chair: main = {:?}, secondary = {:?}", main, secondary));
                let (main, secondary) = materials(&Lamp);
                out.observe(format!("Lamp: main = {}, secondary = {}", main, secondary));
                let room: [&dyn Furniture<M = String>; 1] = [&Chair];
                out.observe(format!(
                    "dyn Furniture<M = String> main = {:?}",
                    room[0].main_material()
                ));
                out.conform(Conformance::of_furniture::<Chair>());
                out.conform(Conformance::of_furniture::<Lamp>());
            }
            Self::ConstrainedAssociatedType => {
                out.observe(format!("Table: {:?}", material_pair(&Table)));
                out.observe(format!("Vase: {:?}", material_pair(&Vase)));
                out.conform(Conformance::of_material_furniture::<Table>());
                out.conform(Conformance::of_material_furniture::<Vase>());
            }
            Self::MixedMaterials => {
                out.observe(format!("Sofa: {:?}", mixed_pair(&Sofa)));
                out.observe(format!("Lamppost: {:?}", mixed_pair(&Lamppost)));
                out.conform(Conformance::of_mixed_furniture::<Sofa>());
                out.conform(Conformance::of_mixed_furniture::<Lamppost>());
            }
            Self::SelfFactory => {
                let mirror: Mirror = fabricate();
                out.observe(format!("fabricate::<Mirror>() = {:?}", mirror));
                out.observe(format!("Mirror materials: {:?}", material_pair(&mirror)));
                out.observe(format!(
                    "fabricate_many::<Mirror>(2).len() = {}",
                    fabricate_many::<Mirror>(2).len()
                ));
                out.conform(Conformance::of_fabricate::<Mirror>());
            }
        }
        out
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lesson {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self> {
        Lesson::ALL
            .into_iter()
            .find(|l| l.name() == s.trim())
            .ok_or_else(|| TourError::UnknownLesson(s.to_string()))
    }
}

/// What one lesson produced
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonOutcome {
    pub lesson: Lesson,
    pub observations: Vec<String>,
    pub conformances: Vec<Conformance>,
}

impl LessonOutcome {
    fn new(lesson: Lesson) -> Self {
        Self {
            lesson,
            observations: Vec::new(),
            conformances: Vec::new(),
        }
    }

    fn observe(&mut self, line: String) {
        self.observations.push(line);
    }

    fn conform(&mut self, c: Conformance) {
        self.conformances.push(c);
    }
}

impl fmt::Display for LessonOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ({})", self.lesson, self.lesson.summary())?;
        for line in &self.observations {
            writeln!(f, "  {}", line)?;
        }
        for c in &self.conformances {
            writeln!(f, "  witness: {}", c)?;
        }
        Ok(())
    }
}

/// Run `lessons` in the given order
pub fn run_all(lessons: &[Lesson]) -> Vec<LessonOutcome> {
    lessons.iter().map(Lesson::run).collect()
}
