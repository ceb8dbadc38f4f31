//! Random number generator construction.
//!
//! All stochastic operations take an explicit `&mut R: Rng`, so a run is
//! fully reproducible from its seed.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a seeded RNG.
///
/// # Example
///
/// ```
/// use rand::Rng;
/// use u_knapsack::random::create_rng;
///
/// let mut a = create_rng(7);
/// let mut b = create_rng(7);
/// assert_eq!(a.random::<u64>(), b.random::<u64>());
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates an RNG from `seed`, or from fresh entropy when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
