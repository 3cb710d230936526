//! Generated builds and the subclassing rules they must satisfy.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::{Catalog, SKILL_LINES_PER_CLASS};
use crate::error::{EsrError, EsrResult};

/// One slotted skill line, tagged with the class that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SkillSlot {
    /// The class the line belongs to.
    pub class: String,
    /// The skill line name.
    pub skill_line: String,
}

impl SkillSlot {
    /// Create a slot for `skill_line` owned by `class`.
    pub fn new(class: impl Into<String>, skill_line: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            skill_line: skill_line.into(),
        }
    }
}

/// A randomized build: a base class with one or two lines subclassed away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Build {
    /// The class the build nominally belongs to.
    pub base_class: String,
    /// The final lines, in the base class's native slot order.
    pub skill_lines: [SkillSlot; SKILL_LINES_PER_CLASS],
    /// Donor classes, in slot order.
    pub subclassed_from: Vec<String>,
}

impl Build {
    /// Whether the line in `slot` is one of the base class's own.
    pub fn is_native(&self, slot: usize) -> bool {
        self.skill_lines
            .get(slot)
            .is_some_and(|s| s.class == self.base_class)
    }

    /// Number of lines kept from the base class.
    pub fn native_count(&self) -> usize {
        self.skill_lines
            .iter()
            .filter(|s| s.class == self.base_class)
            .count()
    }

    /// Number of lines taken from donor classes.
    pub fn substitution_count(&self) -> usize {
        SKILL_LINES_PER_CLASS - self.native_count()
    }

    /// Donor-tagged slots, in slot order.
    pub fn donor_slots(&self) -> impl Iterator<Item = &SkillSlot> {
        self.skill_lines
            .iter()
            .filter(move |s| s.class != self.base_class)
    }

    /// One-line summary, e.g. "Templar with Warden, Sorcerer subclassing".
    pub fn description(&self) -> String {
        format!(
            "{} with {} subclassing",
            self.base_class,
            self.subclassed_from.join(", ")
        )
    }

    /// Check every subclassing rule against `catalog`.
    ///
    /// A build returned by the generator always passes, and passing is
    /// stable: checking the same build again gives the same answer.
    pub fn validate(&self, catalog: &Catalog) -> EsrResult<()> {
        let base = catalog
            .find_class(&self.base_class)
            .filter(|c| c.name() == self.base_class)
            .ok_or_else(|| {
                invalid(format!(
                    "base class '{}' is not in the catalog",
                    self.base_class
                ))
            })?;

        let mut seen_lines = HashSet::new();
        for slot in &self.skill_lines {
            if !seen_lines.insert(slot.skill_line.as_str()) {
                return Err(invalid(format!(
                    "skill line '{}' is slotted twice",
                    slot.skill_line
                )));
            }
            match catalog.owner_of(&slot.skill_line) {
                Some(owner) if owner.name() == slot.class => {}
                Some(owner) => {
                    return Err(invalid(format!(
                        "skill line '{}' belongs to {}, not {}",
                        slot.skill_line,
                        owner.name(),
                        slot.class
                    )));
                }
                None => {
                    return Err(invalid(format!(
                        "unknown skill line '{}'",
                        slot.skill_line
                    )));
                }
            }
        }

        let native = self.native_count();
        if !(1..SKILL_LINES_PER_CLASS).contains(&native) {
            return Err(invalid(format!(
                "{native} native {} line(s), expected 1 or 2",
                base.name()
            )));
        }

        let mut donors = HashSet::new();
        for slot in self.donor_slots() {
            if !donors.insert(slot.class.as_str()) {
                return Err(invalid(format!(
                    "more than one line taken from {}",
                    slot.class
                )));
            }
        }

        if self.subclassed_from.contains(&self.base_class) {
            return Err(invalid(format!(
                "{} is listed as its own donor",
                self.base_class
            )));
        }
        let listed: HashSet<&str> = self.subclassed_from.iter().map(String::as_str).collect();
        if listed.len() != self.subclassed_from.len() || listed != donors {
            return Err(invalid(format!(
                "subclassed_from [{}] does not match the donor lines",
                self.subclassed_from.join(", ")
            )));
        }

        Ok(())
    }
}

fn invalid(reason: String) -> EsrError {
    EsrError::InvalidBuild(reason)
}
