//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → sort → convergence check → elitism → selection →
//! crossover → mutation → repeat.
//!
//! Each generation keeps the two best genomes unchanged and fills the rest
//! with `population_size / 2 - 1` pairs of children, so the population size
//! never changes.

use super::config::GaConfig;
use super::fitness::KnapsackProblem;
use super::genome::{generate_population, Genome};
use super::types::GeneticOperators;
use crate::error::Result;
use crate::random::rng_from_seed;

/// Number of top genomes copied unchanged into the next generation.
const ELITE_COUNT: usize = 2;

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The best genome reached the fitness target.
    Converged,
    /// `max_generations` ran out first.
    GenerationLimitReached,
}

/// Snapshot of a sorted generation, passed to the observer callback.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStats {
    /// Number of breeding steps completed before this population.
    pub generation: usize,
    pub best_fitness: u64,
    pub mean_fitness: f64,
    pub population_size: usize,
}

impl GenerationStats {
    fn new(generation: usize, fitnesses: &[u64]) -> Self {
        let total: u128 = fitnesses.iter().map(|&f| f as u128).sum();
        Self {
            generation,
            best_fitness: fitnesses.first().copied().unwrap_or(0),
            mean_fitness: if fitnesses.is_empty() {
                0.0
            } else {
                total as f64 / fitnesses.len() as f64
            },
            population_size: fitnesses.len(),
        }
    }
}

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq)]
pub struct GaResult {
    /// Final population, sorted by descending fitness.
    pub population: Vec<Genome>,

    /// Fitness of each genome in `population`, same order.
    pub fitnesses: Vec<u64>,

    /// Generation index at termination.
    ///
    /// On convergence this is the number of breeding steps that preceded
    /// the converged population; at the limit it equals `max_generations`.
    pub generations: usize,

    pub termination: Termination,

    /// Best fitness of every sorted population, starting with generation 0.
    pub fitness_history: Vec<u64>,
}

impl GaResult {
    /// The best genome of the final population.
    pub fn best(&self) -> &Genome {
        &self.population[0]
    }

    /// Fitness of [`best`](Self::best).
    pub fn best_fitness(&self) -> u64 {
        self.fitnesses[0]
    }

    /// Whether the run reached the fitness target.
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_knapsack::{Catalog, GaConfig, GaRunner, Item, KnapsackProblem};
///
/// let catalog = Catalog::new(vec![
///     Item::new("Laptop", 500, 2200),
///     Item::new("Headphones", 150, 160),
///     Item::new("Coffee Mug", 60, 350),
///     Item::new("Notepad", 40, 333),
///     Item::new("Water Bottle", 30, 192),
/// ]);
/// let problem = KnapsackProblem::new(catalog, 3000);
/// let config = GaConfig::default().with_fitness_target(740).with_seed(42);
///
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.population.len(), 10);
/// assert!(result.generations <= 100);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with the standard operators described by `config`.
    ///
    /// # Errors
    /// - [`KnapsackError::InvalidConfig`](crate::KnapsackError::InvalidConfig)
    ///   if `config` fails validation
    /// - any error raised by an operator or by fitness evaluation
    pub fn run(problem: &KnapsackProblem, config: &GaConfig) -> Result<GaResult> {
        Self::run_with(problem, config, &config.operators(), |_| {})
    }

    /// Runs the GA with custom operators and a per-generation observer.
    ///
    /// `on_generation` is called after every sort, including the final one,
    /// so it sees `fitness_history.len()` snapshots in total. The mutation
    /// parameters in `config` are ignored here; `operators` decides.
    pub fn run_with<O, C>(
        problem: &KnapsackProblem,
        config: &GaConfig,
        operators: &O,
        mut on_generation: C,
    ) -> Result<GaResult>
    where
        O: GeneticOperators,
        C: FnMut(&GenerationStats),
    {
        config.validate()?;

        let mut rng = rng_from_seed(config.seed);
        let evaluate = |genome: &Genome| problem.evaluate(genome);
        let offspring_pairs = config.population_size / 2 - 1;

        // 1. Initialize population
        let mut population =
            generate_population(config.population_size, problem.genome_length(), &mut rng);
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);

        // 2. Evolutionary loop
        for generation in 0..config.max_generations {
            let (fitnesses, sorted) = rank(population, problem)?;
            population = sorted;

            let stats = GenerationStats::new(generation, &fitnesses);
            log::debug!(
                "generation {}: best={} mean={:.2}",
                generation,
                stats.best_fitness,
                stats.mean_fitness
            );
            fitness_history.push(stats.best_fitness);
            on_generation(&stats);

            // Convergence check
            if stats.best_fitness >= config.fitness_target {
                log::info!(
                    "converged at generation {} with fitness {}",
                    generation,
                    stats.best_fitness
                );
                return Ok(GaResult {
                    population,
                    fitnesses,
                    generations: generation,
                    termination: Termination::Converged,
                    fitness_history,
                });
            }

            // Elite preservation
            let mut next_gen: Vec<Genome> = population[..ELITE_COUNT].to_vec();

            // Generate offspring
            for _ in 0..offspring_pairs {
                let (p1, p2) = operators.select(&population, evaluate, &mut rng)?;
                let (mut c1, mut c2) = operators.crossover(&p1, &p2, &mut rng)?;
                operators.mutate(&mut c1, &mut rng);
                operators.mutate(&mut c2, &mut rng);
                next_gen.push(c1);
                next_gen.push(c2);
            }

            population = next_gen;
        }

        let (fitnesses, population) = rank(population, problem)?;
        let stats = GenerationStats::new(config.max_generations, &fitnesses);
        fitness_history.push(stats.best_fitness);
        on_generation(&stats);

        log::info!(
            "generation limit {} reached with best fitness {}",
            config.max_generations,
            stats.best_fitness
        );

        Ok(GaResult {
            population,
            fitnesses,
            generations: config.max_generations,
            termination: Termination::GenerationLimitReached,
            fitness_history,
        })
    }
}

/// Scores every genome and sorts by descending fitness.
///
/// The sort is stable, so ties keep their previous relative order.
fn rank(population: Vec<Genome>, problem: &KnapsackProblem) -> Result<(Vec<u64>, Vec<Genome>)> {
    let mut scored = population
        .into_iter()
        .map(|genome| problem.evaluate(&genome).map(|f| (f, genome)))
        .collect::<Result<Vec<_>>>()?;

    scored.sort_by(|a, b| b.0.cmp(&a.0));

    Ok(scored.into_iter().unzip())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Item};
    use crate::error::KnapsackError;
    use crate::ga::StandardOperators;
    use rand::Rng;
    use std::cell::Cell;

    fn things() -> Catalog {
        Catalog::new(vec![
            Item::new("Laptop", 500, 2200),
            Item::new("Headphones", 150, 160),
            Item::new("Coffee Mug", 60, 350),
            Item::new("Notepad", 40, 333),
            Item::new("Water Bottle", 30, 192),
        ])
    }

    fn problem() -> KnapsackProblem {
        KnapsackProblem::new(things(), 3000)
    }

    #[test]
    fn test_reaches_known_optimum() {
        // Laptop + Headphones + Coffee Mug + Water Bottle = 740 @ 2902
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(500)
            .with_fitness_target(740)
            .with_seed(42);

        let result = GaRunner::run(&problem(), &config).unwrap();

        if result.converged() {
            assert!(result.best_fitness() >= 740);
            assert!(result.generations < 500);
        } else {
            assert_eq!(result.generations, 500);
        }
        assert!(result.best_fitness() <= 740, "740 is the optimum");
    }

    #[test]
    fn test_population_sorted_descending() {
        let config = GaConfig::default().with_max_generations(20).with_seed(1);
        let result = GaRunner::run(&problem(), &config).unwrap();

        assert_eq!(result.population.len(), result.fitnesses.len());
        for window in result.fitnesses.windows(2) {
            assert!(window[0] >= window[1]);
        }
        let p = problem();
        for (genome, &fit) in result.population.iter().zip(&result.fitnesses) {
            assert_eq!(p.evaluate(genome).unwrap(), fit);
        }
    }

    #[test]
    fn test_limit_reached_without_target() {
        let config = GaConfig::default().with_max_generations(30).with_seed(42);
        let result = GaRunner::run(&problem(), &config).unwrap();

        assert_eq!(result.termination, Termination::GenerationLimitReached);
        assert_eq!(result.generations, 30);
        // initial + every generation
        assert_eq!(result.fitness_history.len(), 31);
    }

    #[test]
    fn test_zero_target_converges_immediately() {
        let config = GaConfig::default().with_fitness_target(0).with_seed(42);
        let result = GaRunner::run(&problem(), &config).unwrap();

        assert!(result.converged());
        assert_eq!(result.generations, 0);
        assert_eq!(result.fitness_history.len(), 1);
    }

    #[test]
    fn test_elite_preservation() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_generations(50)
            .with_mutation_probability(1.0)
            .with_seed(42);

        let result = GaRunner::run(&problem(), &config).unwrap();

        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "best fitness should never drop with elitism: {} < {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_population_size_constant() {
        let config = GaConfig::default()
            .with_population_size(12)
            .with_max_generations(25)
            .with_seed(3);

        let mut sizes = Vec::new();
        let result = GaRunner::run_with(&problem(), &config, &config.operators(), |stats| {
            sizes.push(stats.population_size)
        })
        .unwrap();

        assert_eq!(sizes.len(), result.fitness_history.len());
        assert!(sizes.iter().all(|&n| n == 12));
        assert_eq!(result.population.len(), 12);
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let config = GaConfig::default().with_max_generations(40).with_seed(99);
        let a = GaRunner::run(&problem(), &config).unwrap();
        let b = GaRunner::run(&problem(), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GaConfig::default().with_population_size(5);
        let err = GaRunner::run(&problem(), &config).unwrap_err();
        assert!(matches!(err, KnapsackError::InvalidConfig(_)));
    }

    #[test]
    fn test_population_of_two_keeps_elites_only() {
        let config = GaConfig::default()
            .with_population_size(2)
            .with_max_generations(10)
            .with_seed(5);

        let mut means = Vec::new();
        let result = GaRunner::run_with(&problem(), &config, &config.operators(), |stats| {
            means.push(stats.mean_fitness)
        })
        .unwrap();

        // no offspring: the two initial genomes survive unchanged
        assert_eq!(means.len(), 11);
        assert!(means.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(result.population.len(), 2);
    }

    // ---- Custom operators ----

    #[derive(Default)]
    struct CountingOperators {
        inner: StandardOperators,
        selects: Cell<usize>,
        crossovers: Cell<usize>,
        mutations: Cell<usize>,
    }

    impl GeneticOperators for CountingOperators {
        fn select<F, R>(
            &self,
            population: &[Genome],
            fitness: F,
            rng: &mut R,
        ) -> Result<(Genome, Genome)>
        where
            F: Fn(&Genome) -> Result<u64>,
            R: Rng,
        {
            self.selects.set(self.selects.get() + 1);
            self.inner.select(population, fitness, rng)
        }

        fn crossover<R: Rng>(&self, a: &Genome, b: &Genome, rng: &mut R) -> Result<(Genome, Genome)> {
            self.crossovers.set(self.crossovers.get() + 1);
            self.inner.crossover(a, b, rng)
        }

        fn mutate<R: Rng>(&self, genome: &mut Genome, rng: &mut R) {
            self.mutations.set(self.mutations.get() + 1);
            self.inner.mutate(genome, rng)
        }
    }

    #[test]
    fn test_operator_call_counts() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_generations(7)
            .with_seed(42);
        let ops = CountingOperators::default();

        let result = GaRunner::run_with(&problem(), &config, &ops, |_| {}).unwrap();
        assert_eq!(result.termination, Termination::GenerationLimitReached);

        // (10 / 2 - 1) pairs per generation
        assert_eq!(ops.selects.get(), 7 * 4);
        assert_eq!(ops.crossovers.get(), 7 * 4);
        assert_eq!(ops.mutations.get(), 7 * 8);
    }

    struct BrokenCrossover;

    impl GeneticOperators for BrokenCrossover {
        fn crossover<R: Rng>(&self, a: &Genome, _b: &Genome, _rng: &mut R) -> Result<(Genome, Genome)> {
            Err(KnapsackError::ParentLengthMismatch {
                left: a.len(),
                right: 0,
            })
        }
    }

    #[test]
    fn test_operator_error_aborts_run() {
        let config = GaConfig::default().with_seed(42);
        let err = GaRunner::run_with(&problem(), &config, &BrokenCrossover, |_| {}).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
