//! Random instance generation.
//!
//! Useful for benchmarking sweeps over problem sizes and time limits, and
//! for exercising solvers on instances with no hand-picked structure.

use std::ops::Range;

use rand::Rng;

use super::DistanceMatrix;

/// Generates a symmetric instance with costs drawn uniformly from `costs`.
///
/// The diagonal is zero and `get(i, j) == get(j, i)` for all pairs.
///
/// # Panics
///
/// Panics if `costs` is empty.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tsp_exact::distance::random_symmetric;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let dm = random_symmetric(5, 10.0..100.0, &mut rng);
/// assert_eq!(dm.size(), 5);
/// assert!(dm.is_symmetric(0.0));
/// ```
pub fn random_symmetric<R: Rng>(size: usize, costs: Range<f64>, rng: &mut R) -> DistanceMatrix {
    let mut dm = DistanceMatrix::new(size);
    for i in 0..size {
        for j in (i + 1)..size {
            let cost = rng.random_range(costs.clone());
            dm.set(i, j, cost);
            dm.set(j, i, cost);
        }
    }
    dm
}

/// Generates an asymmetric instance with costs drawn uniformly from `costs`.
///
/// Each ordered pair gets an independent draw; only the diagonal is zero.
///
/// # Panics
///
/// Panics if `costs` is empty.
pub fn random_asymmetric<R: Rng>(size: usize, costs: Range<f64>, rng: &mut R) -> DistanceMatrix {
    let mut dm = DistanceMatrix::new(size);
    for i in 0..size {
        for j in 0..size {
            if i != j {
                dm.set(i, j, rng.random_range(costs.clone()));
            }
        }
    }
    dm
}
