//! Genetic algorithm solver for the 0/1 knapsack problem.
//!
//! Given a catalog of items with values and weights and a weight capacity,
//! the solver searches for the subset of items with the highest total value
//! that still fits. It is a heuristic: a run stops when the best solution
//! reaches a fitness target or when a generation limit runs out, and the
//! global optimum is not guaranteed.
//!
//! - **Catalog**: [`Item`]s addressed by position
//! - **Genome**: one inclusion bit per item, see [`Genome`]
//! - **Fitness**: total value, or 0 when overweight, see [`fitness`]
//! - **Operators**: fitness-proportional selection, single-point crossover,
//!   bit-flip mutation, pluggable via [`GeneticOperators`]
//! - **Runner**: elitist generational loop, see [`GaRunner`]
//!
//! Every stochastic step draws from an explicit RNG; a [`GaConfig`] with a
//! seed reproduces the same run.
//!
//! # Example
//!
//! ```
//! use u_knapsack::{Catalog, GaConfig, GaRunner, Item, KnapsackProblem};
//!
//! let problem = KnapsackProblem::new(
//!     Catalog::new(vec![
//!         Item::new("Laptop", 500, 2200),
//!         Item::new("Headphones", 150, 160),
//!         Item::new("Notepad", 40, 333),
//!     ]),
//!     3000,
//! );
//! let config = GaConfig::default().with_fitness_target(690).with_seed(7);
//! let result = GaRunner::run(&problem, &config).unwrap();
//!
//! let packing = problem.pack(result.best()).unwrap();
//! println!("{:?} -> {}", packing.names(), result.best_fitness());
//! ```

pub mod catalog;
pub mod error;
pub mod ga;
pub mod random;

pub use catalog::{Catalog, Item};
pub use error::{KnapsackError, Result};
pub use ga::{
    fitness, generate_genome, generate_population, mutation, selection_pair,
    single_point_crossover, GaConfig, GaResult, GaRunner, GeneticOperators, GenerationStats,
    Genome, KnapsackProblem, Packing, Population, StandardOperators, Termination,
};
