//! The class catalog: every playable class and its three native skill lines.
//!
//! A catalog is validated once on construction and never changes after
//! that. [`Catalog::eso`] ships the seven base-game classes.

use std::collections::HashSet;

use crate::error::{EsrError, EsrResult};

/// Number of native skill lines every class has.
pub const SKILL_LINES_PER_CLASS: usize = 3;

/// The Elder Scrolls Online classes and their skill lines.
pub const ESO_CLASSES: &[(&str, [&str; SKILL_LINES_PER_CLASS])] = &[
    (
        "Arcanist",
        ["Herald of the Tome", "Soldier of Apocrypha", "Curative Runeforms"],
    ),
    (
        "Dragonknight",
        ["Ardent Flame", "Draconic Power", "Earthen Heart"],
    ),
    ("Nightblade", ["Assassination", "Shadow", "Siphoning"]),
    (
        "Sorcerer",
        ["Daedric Summoning", "Dark Magic", "Storm Calling"],
    ),
    (
        "Templar",
        ["Aedric Spear", "Dawn's Wrath", "Restoring Light"],
    ),
    ("Necromancer", ["Grave Lord", "Bone Tyrant", "Living Death"]),
    (
        "Warden",
        ["Animal Companions", "Green Balance", "Winter's Embrace"],
    ),
];

/// A class with its ordered native skill lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDefinition {
    name: String,
    skill_lines: [String; SKILL_LINES_PER_CLASS],
}

impl ClassDefinition {
    /// Create a class definition, checking it has exactly three lines.
    pub fn new<I, S>(name: impl Into<String>, skill_lines: I) -> EsrResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let lines: Vec<String> = skill_lines.into_iter().map(Into::into).collect();
        let skill_lines = <[String; SKILL_LINES_PER_CLASS]>::try_from(lines).map_err(|lines| {
            EsrError::InvalidCatalog(format!(
                "class '{name}' has {} skill lines, expected {SKILL_LINES_PER_CLASS}",
                lines.len()
            ))
        })?;
        Ok(Self { name, skill_lines })
    }

    /// The class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The native skill lines in slot order.
    pub fn skill_lines(&self) -> &[String; SKILL_LINES_PER_CLASS] {
        &self.skill_lines
    }

    /// Whether `skill_line` is one of this class's native lines.
    pub fn has_line(&self, skill_line: &str) -> bool {
        self.skill_lines.iter().any(|l| l == skill_line)
    }
}

/// A validated, read-only table of classes.
#[derive(Debug, Clone)]
pub struct Catalog {
    classes: Vec<ClassDefinition>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate class or skill-line names.
    ///
    /// Small catalogs are accepted here; generation reports
    /// [`EsrError::EmptyCatalog`] when there are too few classes to subclass.
    pub fn new(classes: Vec<ClassDefinition>) -> EsrResult<Self> {
        let mut class_names = HashSet::new();
        let mut line_names = HashSet::new();

        for class in &classes {
            if !class_names.insert(class.name.to_lowercase()) {
                return Err(EsrError::InvalidCatalog(format!(
                    "duplicate class '{}'",
                    class.name
                )));
            }
            for line in &class.skill_lines {
                if !line_names.insert(line.as_str()) {
                    return Err(EsrError::InvalidCatalog(format!(
                        "skill line '{line}' appears more than once"
                    )));
                }
            }
        }

        Ok(Self { classes })
    }

    /// Build a catalog from a static `(class, lines)` table.
    pub fn from_table(table: &[(&str, [&str; SKILL_LINES_PER_CLASS])]) -> EsrResult<Self> {
        let classes = table
            .iter()
            .map(|(name, lines)| ClassDefinition::new(*name, *lines))
            .collect::<EsrResult<Vec<_>>>()?;
        Self::new(classes)
    }

    /// The shipped Elder Scrolls Online catalog.
    pub fn eso() -> EsrResult<Self> {
        Self::from_table(ESO_CLASSES)
    }

    /// All classes in catalog order.
    pub fn classes(&self) -> &[ClassDefinition] {
        &self.classes
    }

    /// All class names in catalog order.
    pub fn class_names(&self) -> Vec<String> {
        self.classes.iter().map(|c| c.name.clone()).collect()
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if the catalog has no classes.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Look up a class by name (case-insensitive).
    pub fn find_class(&self, name: &str) -> Option<&ClassDefinition> {
        let name = name.trim();
        self.classes
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Look up a class by name, failing with [`EsrError::UnknownClass`].
    pub fn require_class(&self, name: &str) -> EsrResult<&ClassDefinition> {
        self.find_class(name).ok_or_else(|| EsrError::UnknownClass {
            name: name.to_string(),
            available: self.class_names(),
        })
    }

    /// The class that owns `skill_line`, if any.
    pub fn owner_of(&self, skill_line: &str) -> Option<&ClassDefinition> {
        self.classes.iter().find(|c| c.has_line(skill_line))
    }
}
