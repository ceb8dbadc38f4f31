//! Bit-string genome encoding.
//!
//! A [`Genome`] holds one inclusion flag per catalog item: bit `i` set means
//! item `i` goes into the knapsack.

use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// A candidate solution: one inclusion flag per catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Genome {
    bits: Vec<bool>,
}

/// An ordered set of genomes.
pub type Population = Vec<Genome>;

impl Genome {
    /// Wraps a vector of inclusion flags.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Number of flags (equals the catalog size in a valid run).
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the genome has no flags.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Flag at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Inverts the flag at `index`.
    ///
    /// Returns `false` and leaves the genome untouched if `index` is out of
    /// range.
    pub fn flip(&mut self, index: usize) -> bool {
        match self.bits.get_mut(index) {
            Some(bit) => {
                *bit = !*bit;
                true
            }
            None => false,
        }
    }

    /// The raw flags.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Consumes the genome, returning its flags.
    pub fn into_bits(self) -> Vec<bool> {
        self.bits
    }

    /// Indices of all set flags, ascending.
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
    }
}

impl From<Vec<bool>> for Genome {
    fn from(bits: Vec<bool>) -> Self {
        Self::from_bits(bits)
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Error returned when parsing a genome from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid genome character {found:?} at position {position}")]
pub struct ParseGenomeError {
    pub position: usize,
    pub found: char,
}

impl FromStr for Genome {
    type Err = ParseGenomeError;

    /// Parses a string of `0`/`1` characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(ParseGenomeError { position, found }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Genome::from_bits)
    }
}

/// Generates a genome of `length` flags, each drawn uniformly from {0, 1}.
pub fn generate_genome<R: Rng>(length: usize, rng: &mut R) -> Genome {
    Genome::from_bits((0..length).map(|_| rng.random_bool(0.5)).collect())
}

/// Generates `size` independent random genomes of `genome_length` flags.
///
/// Genomes are not guaranteed to be distinct.
pub fn generate_population<R: Rng>(size: usize, genome_length: usize, rng: &mut R) -> Population {
    (0..size)
        .map(|_| generate_genome(genome_length, rng))
        .collect()
}
