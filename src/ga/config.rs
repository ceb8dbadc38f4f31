//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::types::StandardOperators;
use crate::error::{KnapsackError, Result};

/// Configuration for the knapsack GA.
///
/// # Defaults
///
/// ```
/// use u_knapsack::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.max_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_knapsack::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_fitness_target(740)
///     .with_mutation_count(2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of genomes per generation. Must be even and at least 2.
    pub population_size: usize,

    /// Hard cap on the number of generations.
    pub max_generations: usize,

    /// The run stops as soon as the best genome scores at least this much.
    ///
    /// `u64::MAX` (the default) effectively disables convergence, so the run
    /// goes to `max_generations`.
    pub fitness_target: u64,

    /// Mutation trials applied to each child.
    pub mutation_count: usize,

    /// Probability that a mutation trial flips its bit (0.0–1.0).
    pub mutation_probability: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            max_generations: 100,
            fitness_target: u64::MAX,
            mutation_count: 1,
            mutation_probability: 0.5,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the fitness target.
    pub fn with_fitness_target(mut self, target: u64) -> Self {
        self.fitness_target = target;
        self
    }

    /// Sets the number of mutation trials per child.
    pub fn with_mutation_count(mut self, n: usize) -> Self {
        self.mutation_count = n;
        self
    }

    /// Sets the per-trial flip probability.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The operator set this configuration describes.
    pub fn operators(&self) -> StandardOperators {
        StandardOperators::new(self.mutation_count, self.mutation_probability)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`KnapsackError::InvalidConfig`] describing the first bad parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(invalid("population_size must be at least 2"));
        }
        if self.population_size % 2 != 0 {
            return Err(invalid("population_size must be even"));
        }
        if self.max_generations == 0 {
            return Err(invalid("max_generations must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(invalid("mutation_probability must be within [0, 1]"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> KnapsackError {
    KnapsackError::InvalidConfig(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 10);
        assert_eq!(config.max_generations, 100);
        assert_eq!(config.fitness_target, u64::MAX);
        assert_eq!(config.mutation_count, 1);
        assert!((config.mutation_probability - 0.5).abs() < 1e-15);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(50)
            .with_fitness_target(740)
            .with_mutation_count(3)
            .with_mutation_probability(0.25)
            .with_seed(42);

        assert_eq!(config.population_size, 20);
        assert_eq!(config.max_generations, 50);
        assert_eq!(config.fitness_target, 740);
        assert_eq!(config.mutation_count, 3);
        assert!((config.mutation_probability - 0.25).abs() < 1e-15);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
        assert!(GaConfig::default().with_population_size(2).validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GaConfig::default().with_population_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_odd_population() {
        let err = GaConfig::default()
            .with_population_size(7)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            KnapsackError::InvalidConfig("population_size must be even".into())
        );
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_probability_out_of_range() {
        let config = GaConfig {
            mutation_probability: 1.5,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GaConfig {
            mutation_probability: f64::NAN,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_clamp_probability() {
        let config = GaConfig::default().with_mutation_probability(2.0);
        assert!((config.mutation_probability - 1.0).abs() < 1e-15);
        let config = GaConfig::default().with_mutation_probability(-1.0);
        assert!((config.mutation_probability - 0.0).abs() < 1e-15);
    }

    #[test]
    fn test_operators_from_config() {
        let ops = GaConfig::default()
            .with_mutation_count(4)
            .with_mutation_probability(0.1)
            .operators();
        assert_eq!(ops, StandardOperators::new(4, 0.1));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GaConfig =
            serde_json::from_str(r#"{"population_size": 20, "fitness_target": 740}"#).unwrap();
        assert_eq!(config.population_size, 20);
        assert_eq!(config.fitness_target, 740);
        assert_eq!(config.max_generations, 100);
    }
}
