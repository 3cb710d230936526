//! Error types for catalog construction and build generation.

use thiserror::Error;

/// Result type for randomizer operations.
pub type EsrResult<T> = Result<T, EsrError>;

/// Errors that can occur while building a catalog or generating builds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EsrError {
    /// The requested base class is not in the catalog.
    #[error("unknown class: \"{name}\" (available: {})", .available.join(", "))]
    UnknownClass {
        /// The name that was looked up.
        name: String,
        /// Every class name the catalog does know, in catalog order.
        available: Vec<String>,
    },

    /// Subclassing needs at least one donor besides the base class.
    #[error("catalog has {0} class(es), at least 2 are required to subclass")]
    EmptyCatalog(usize),

    /// The catalog table is malformed.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// A fixed substitution count outside 1..=2.
    #[error("invalid substitution count {0}: must be 1 or 2")]
    InvalidSubstitutionCount(u8),

    /// A build broke one of the subclassing rules.
    #[error("invalid build: {0}")]
    InvalidBuild(String),
}
