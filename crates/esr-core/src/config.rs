//! Configuration for build generation.

use crate::error::{EsrError, EsrResult};

/// How many of the base class's native lines get replaced.
///
/// Only one or two lines may be traded: at least one native line always
/// survives and at least one line always comes from another class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubstitutionCount {
    /// Replace one native line, keep two.
    One,
    /// Replace two native lines, keep one.
    Two,
}

impl SubstitutionCount {
    /// Both allowed counts, in ascending order.
    pub const ALL: [SubstitutionCount; 2] = [SubstitutionCount::One, SubstitutionCount::Two];

    /// The count as a number of slots.
    pub fn get(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl TryFrom<u8> for SubstitutionCount {
    type Error = EsrError;

    fn try_from(value: u8) -> EsrResult<Self> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(EsrError::InvalidSubstitutionCount(other)),
        }
    }
}

impl std::fmt::Display for SubstitutionCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Configuration for a [`BuildGenerator`](crate::BuildGenerator).
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// RNG seed for reproducible builds. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Fixed number of lines to replace. `None` picks 1 or 2 per build.
    pub substitutions: Option<SubstitutionCount>,
}

impl GeneratorConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fix the number of replaced lines for every build.
    pub fn with_substitutions(mut self, count: SubstitutionCount) -> Self {
        self.substitutions = Some(count);
        self
    }
}
