//! Fitness-proportional parent selection.
//!
//! Parents are drawn independently and with replacement, each with
//! probability `fitness_i / sum(fitness)`. A genome can be paired with
//! itself.
//!
//! When every genome scores 0 the proportional distribution is undefined;
//! selection then falls back to two uniform draws so the loop keeps going.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)

use super::genome::Genome;
use crate::error::{KnapsackError, Result};
use rand::Rng;

/// Draws a breeding pair from `population`, weighted by `fitness_func`.
///
/// `fitness_func` is called once per genome.
///
/// # Errors
/// - [`KnapsackError::DegenerateSelection`] if `population` is empty
/// - any error returned by `fitness_func`
pub fn selection_pair<F, R>(population: &[Genome], fitness_func: F, rng: &mut R) -> Result<(Genome, Genome)>
where
    F: Fn(&Genome) -> Result<u64>,
    R: Rng,
{
    if population.is_empty() {
        return Err(KnapsackError::DegenerateSelection);
    }

    let weights = population
        .iter()
        .map(fitness_func)
        .collect::<Result<Vec<u64>>>()?;

    let (a, b) = match (roulette(&weights, rng), roulette(&weights, rng)) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            log::debug!(
                "all {} genomes score 0, selecting parents uniformly",
                population.len()
            );
            let n = population.len();
            (rng.random_range(0..n), rng.random_range(0..n))
        }
    };

    Ok((population[a].clone(), population[b].clone()))
}

/// Roulette wheel draw over integer weights.
///
/// Returns `None` when all weights are zero.
fn roulette<R: Rng>(weights: &[u64], rng: &mut R) -> Option<usize> {
    let total: u128 = weights.iter().map(|&w| w as u128).sum();
    if total == 0 {
        return None;
    }

    let threshold = rng.random_range(0..total);
    let mut cumulative = 0u128;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w as u128;
        if cumulative > threshold {
            return Some(i);
        }
    }

    None
}
