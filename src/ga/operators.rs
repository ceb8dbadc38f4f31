//! Bit-string crossover and mutation operators.
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: swap suffixes at one random split point
//!
//! # Mutation
//!
//! - [`mutation`]: `num` independent trials, each flipping a random bit
//!   with a given probability
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

use super::genome::Genome;
use crate::error::{KnapsackError, Result};
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover.
///
/// Picks a split point `p` uniformly from `1..=len-1` and returns
/// `(a[..p] + b[p..], b[..p] + a[p..])`. Genomes shorter than 2 cannot be
/// split and are returned unchanged.
///
/// # Errors
/// [`KnapsackError::ParentLengthMismatch`] if the parents differ in length.
pub fn single_point_crossover<R: Rng>(a: &Genome, b: &Genome, rng: &mut R) -> Result<(Genome, Genome)> {
    if a.len() != b.len() {
        return Err(KnapsackError::ParentLengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let n = a.len();
    if n < 2 {
        return Ok((a.clone(), b.clone()));
    }

    let point = rng.random_range(1..n);
    crossover_at(a, b, point)
}

/// Recombines `a` and `b` at a fixed split point.
///
/// # Errors
/// - [`KnapsackError::ParentLengthMismatch`] if the parents differ in length
/// - [`KnapsackError::SplitPointOutOfRange`] if `point > len`
pub fn crossover_at(a: &Genome, b: &Genome, point: usize) -> Result<(Genome, Genome)> {
    if a.len() != b.len() {
        return Err(KnapsackError::ParentLengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if point > a.len() {
        return Err(KnapsackError::SplitPointOutOfRange {
            point,
            len: a.len(),
        });
    }

    let (a_head, a_tail) = a.bits().split_at(point);
    let (b_head, b_tail) = b.bits().split_at(point);

    let child1 = Genome::from_bits([a_head, b_tail].concat());
    let child2 = Genome::from_bits([b_head, a_tail].concat());

    Ok((child1, child2))
}

// ============================================================================
// Mutation
// ============================================================================

/// Runs `num` mutation trials on `genome`.
///
/// Each trial picks a uniformly random position and flips it with
/// `probability`. Trials are independent, so one position may be flipped
/// more than once. The genome is modified and handed back.
///
/// `probability` is clamped to `[0, 1]` (NaN counts as 0). An empty genome
/// is left as is.
pub fn mutation<R: Rng>(mut genome: Genome, num: usize, probability: f64, rng: &mut R) -> Genome {
    mutate_in_place(&mut genome, num, probability, rng);
    genome
}

/// In-place form of [`mutation`].
pub fn mutate_in_place<R: Rng>(genome: &mut Genome, num: usize, probability: f64, rng: &mut R) {
    let n = genome.len();
    if n == 0 {
        return;
    }
    let probability = if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    };

    for _ in 0..num {
        let index = rng.random_range(0..n);
        if rng.random_bool(probability) {
            genome.flip(index);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
