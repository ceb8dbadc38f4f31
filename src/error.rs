//! Error types.
//!
//! Every fallible operation in the crate returns [`KnapsackError`]. None of
//! these are retried: they signal a programming or configuration mistake,
//! and the run that hit one is aborted.

/// Errors raised by the knapsack GA.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KnapsackError {
    /// A genome was evaluated against a catalog of a different length.
    #[error("genome length {genome} does not match catalog length {catalog}")]
    GenomeCatalogMismatch { genome: usize, catalog: usize },

    /// Two parents of different lengths were passed to crossover.
    #[error("parent genomes differ in length ({left} vs {right})")]
    ParentLengthMismatch { left: usize, right: usize },

    /// A crossover split point lies beyond the end of the parents.
    #[error("split point {point} is out of range for genomes of length {len}")]
    SplitPointOutOfRange { point: usize, len: usize },

    /// Selection was asked to draw from an empty population.
    #[error("cannot select parents from an empty population")]
    DegenerateSelection,

    /// Run parameters failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl KnapsackError {
    /// Returns `true` for length mismatches between genomes and catalogs or
    /// between two genomes, and for out-of-range crossover split points.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            KnapsackError::GenomeCatalogMismatch { .. }
                | KnapsackError::ParentLengthMismatch { .. }
                | KnapsackError::SplitPointOutOfRange { .. }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KnapsackError>;
