//! Core of the ESO build randomizer.
//!
//! Holds the class catalog, the build model with its subclassing rules, and
//! the generator that rolls random builds: a base class keeps one or two of
//! its native skill lines and takes the rest from other classes, one line per
//! donor class.

pub mod build;
pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;

pub use build::{Build, SkillSlot};
pub use catalog::{Catalog, ClassDefinition, ESO_CLASSES, SKILL_LINES_PER_CLASS};
pub use config::{GeneratorConfig, SubstitutionCount};
pub use error::{EsrError, EsrResult};
pub use generator::{BuildGenerator, generate_build};
