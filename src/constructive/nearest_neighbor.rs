//! Nearest-neighbor constructive heuristic.
//!
//! Builds a closed tour greedily: starting from the given city, always move
//! to the nearest unvisited city, then close back to the start. No pruning,
//! no backtracking; the result is a fast baseline, not an optimum.
//!
//! # Complexity
//!
//! O(n²) where n = number of cities.

use crate::distance::DistanceMatrix;
use crate::models::{Tour, ValidationError};

/// Constructs a closed tour using the nearest-neighbor heuristic.
///
/// At each step a linear scan keeps the first-seen minimum, so ties resolve
/// to the lowest city index and the construction is deterministic for a
/// fixed matrix and start. A city whose remaining edges are all
/// `f64::INFINITY` is still visited (the tour always has n+1 entries); the
/// total cost then goes to `f64::INFINITY`.
///
/// Runs fully independently of the branch-and-bound solver; it never seeds
/// the solver's incumbent.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the matrix has a negative/NaN entry or
/// nonzero diagonal, or if `start` is out of range.
///
/// # Examples
///
/// ```
/// use tsp_exact::constructive::nearest_neighbor;
/// use tsp_exact::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 10.0, 15.0],
///     vec![10.0, 0.0, 20.0],
///     vec![15.0, 20.0, 0.0],
/// ]).unwrap();
/// let tour = nearest_neighbor(&dm, 0).unwrap();
/// assert_eq!(tour.cities(), &[0, 1, 2, 0]);
/// assert_eq!(tour.cost(), 45.0);
/// ```
pub fn nearest_neighbor(
    distances: &DistanceMatrix,
    start: usize,
) -> Result<Tour, ValidationError> {
    distances.validate()?;
    let n = distances.size();
    if start >= n {
        return Err(ValidationError::StartOutOfRange { start, cities: n });
    }

    let mut visited = vec![false; n];
    visited[start] = true;

    let mut cities = Vec::with_capacity(n + 1);
    cities.push(start);
    let mut current = start;
    let mut cost = 0.0;

    for _ in 1..n {
        // Find the nearest unvisited city, first-seen minimum on ties.
        let mut best: Option<(usize, f64)> = None;
        for candidate in 0..n {
            if visited[candidate] {
                continue;
            }
            let d = distances.get(current, candidate);
            if best.is_none() || d < best.expect("checked is_none").1 {
                best = Some((candidate, d));
            }
        }
        let (next, step) = best.expect("an unvisited city remains on every iteration");
        visited[next] = true;
        cities.push(next);
        cost += step;
        current = next;
    }

    cost += distances.get(current, start);
    cities.push(start);
    Ok(Tour::new(cities, cost))
}
