//! Genetic algorithm for the 0/1 knapsack problem.
//!
//! Candidate solutions are bit strings ([`Genome`]) with one inclusion flag
//! per catalog item. [`GaRunner`] evolves a population of them under a
//! [`GaConfig`], using the operators of a [`GeneticOperators`]
//! implementation.
//!
//! # Key Types
//!
//! - [`KnapsackProblem`]: Catalog plus weight capacity; scores genomes
//! - [`GaConfig`]: Population size, generation limit, fitness target, mutation
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Sorted final population and termination details
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and bit-flip mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod fitness;
mod genome;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use fitness::{fitness, KnapsackProblem, Packing};
pub use genome::{generate_genome, generate_population, Genome, ParseGenomeError, Population};
pub use operators::{mutation, single_point_crossover};
pub use runner::{GaResult, GaRunner, GenerationStats, Termination};
pub use selection::selection_pair;
pub use types::{GeneticOperators, StandardOperators};
