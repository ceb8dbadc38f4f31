//! Operator capability trait.
//!
//! [`GeneticOperators`] is the seam between the evolution loop and the
//! selection, crossover and mutation strategies it drives. Each method has a
//! default that delegates to this crate's standard operator, so an
//! implementation only overrides what it wants to change.

use super::genome::Genome;
use super::operators::{mutate_in_place, single_point_crossover};
use super::selection::selection_pair;
use crate::error::Result;
use rand::Rng;

/// Selection, crossover and mutation strategies for the GA.
///
/// # Implementing
///
/// ```ignore
/// struct NoMutation;
///
/// impl GeneticOperators for NoMutation {
///     fn mutate<R: Rng>(&self, _genome: &mut Genome, _rng: &mut R) {}
/// }
/// ```
pub trait GeneticOperators {
    /// Draws a breeding pair from `population`.
    ///
    /// The default is fitness-proportional sampling with replacement,
    /// see [`selection_pair`].
    fn select<F, R>(&self, population: &[Genome], fitness: F, rng: &mut R) -> Result<(Genome, Genome)>
    where
        F: Fn(&Genome) -> Result<u64>,
        R: Rng,
    {
        selection_pair(population, fitness, rng)
    }

    /// Recombines two parents into two children.
    ///
    /// The default is [`single_point_crossover`].
    fn crossover<R: Rng>(&self, a: &Genome, b: &Genome, rng: &mut R) -> Result<(Genome, Genome)> {
        single_point_crossover(a, b, rng)
    }

    /// Mutates a child in place.
    ///
    /// The default is a single trial flipping one random bit with
    /// probability 0.5.
    fn mutate<R: Rng>(&self, genome: &mut Genome, rng: &mut R) {
        mutate_in_place(genome, 1, 0.5, rng);
    }
}

/// The standard operator set with configurable mutation.
///
/// Uses the default selection and crossover, and runs `mutation_count`
/// mutation trials at `mutation_probability` each.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardOperators {
    pub mutation_count: usize,
    pub mutation_probability: f64,
}

impl Default for StandardOperators {
    fn default() -> Self {
        Self {
            mutation_count: 1,
            mutation_probability: 0.5,
        }
    }
}

impl StandardOperators {
    pub fn new(mutation_count: usize, mutation_probability: f64) -> Self {
        Self {
            mutation_count,
            mutation_probability,
        }
    }
}

impl GeneticOperators for StandardOperators {
    fn mutate<R: Rng>(&self, genome: &mut Genome, rng: &mut R) {
        mutate_in_place(genome, self.mutation_count, self.mutation_probability, rng);
    }
}
