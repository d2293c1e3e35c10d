//! Anytime best-first branch-and-bound solver.

use std::time::Instant;

use crate::distance::DistanceMatrix;
use crate::models::{SearchResult, ValidationError};

use super::bound::completion_bound;
use super::frontier::{SearchFrontier, SearchNode};

/// Searches for a minimum-cost closed tour from `start` within a wall-clock
/// budget.
///
/// Best-first expansion over a bound-ordered frontier: each popped node is
/// discarded if its bound can no longer beat the incumbent, completed if all
/// cities are visited, and otherwise branched over every unvisited city in
/// ascending index order. Children enter the frontier only while their bound
/// is strictly below the incumbent.
///
/// The run is anytime: when the frontier drains, the incumbent is provably
/// optimal; when the time budget expires first, the incumbent is the best
/// tour seen so far. The budget is checked once per expansion, so the actual
/// duration can overshoot by the cost of one expansion step, and a budget of
/// zero still processes the root node. A run that never completes a tour
/// reports `best_cost` of `f64::INFINITY` and no tour; that is a valid
/// outcome, not an error.
///
/// `time_limit_seconds` may be `f64::INFINITY` to always run to exhaustion.
///
/// # Errors
///
/// Returns a [`ValidationError`] before any search starts if the matrix has
/// a negative/NaN entry or nonzero diagonal, `start` is out of range, or the
/// time limit is negative.
///
/// # Examples
///
/// ```
/// use tsp_exact::distance::DistanceMatrix;
/// use tsp_exact::search::branch_and_bound;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 10.0, 15.0],
///     vec![10.0, 0.0, 20.0],
///     vec![15.0, 20.0, 0.0],
/// ]).unwrap();
/// let result = branch_and_bound(&dm, 0, 5.0).unwrap();
/// assert_eq!(result.best_cost(), 45.0);
/// assert_eq!(result.best_tour(), Some(&[0, 1, 2, 0][..]));
/// ```
pub fn branch_and_bound(
    distances: &DistanceMatrix,
    start: usize,
    time_limit_seconds: f64,
) -> Result<SearchResult, ValidationError> {
    distances.validate()?;
    let n = distances.size();
    if start >= n {
        return Err(ValidationError::StartOutOfRange { start, cities: n });
    }
    if time_limit_seconds.is_nan() || time_limit_seconds < 0.0 {
        return Err(ValidationError::NegativeTimeLimit {
            seconds: time_limit_seconds,
        });
    }

    let clock = Instant::now();
    let mut result = SearchResult::new();
    let mut frontier = SearchFrontier::new();

    let unvisited: Vec<usize> = (0..n).filter(|&city| city != start).collect();
    let root_bound = completion_bound(distances, &[start], 0.0, &unvisited, start);
    frontier.push(SearchNode::new(vec![start], 0.0, unvisited, root_bound));

    loop {
        // The budget is checked after at least one expansion, so a zero
        // limit still processes the root node.
        if result.nodes_expanded > 0 && clock.elapsed().as_secs_f64() > time_limit_seconds {
            break;
        }
        let Some(node) = frontier.pop() else {
            break;
        };
        result.nodes_expanded += 1;
        result.max_depth = result.max_depth.max(node.depth());

        // No descendant can beat the incumbent.
        if node.bound() >= result.best_cost {
            continue;
        }

        let last = *node
            .path()
            .last()
            .expect("a partial tour contains the start city");

        if node.is_complete() {
            let total = node.cost() + distances.get(last, start);
            if total < result.best_cost {
                result.best_cost = total;
                let mut tour = node.path().to_vec();
                tour.push(start);
                result.best_tour = Some(tour);
            }
            continue;
        }

        for &city in node.unvisited() {
            let mut child_path = Vec::with_capacity(node.depth() + 1);
            child_path.extend_from_slice(node.path());
            child_path.push(city);
            let child_cost = node.cost() + distances.get(last, city);
            let child_unvisited: Vec<usize> = node
                .unvisited()
                .iter()
                .copied()
                .filter(|&other| other != city)
                .collect();
            let child_bound =
                completion_bound(distances, &child_path, child_cost, &child_unvisited, start);
            // Generation-time pruning keeps dominated children out of the
            // frontier entirely.
            if child_bound < result.best_cost {
                frontier.push(SearchNode::new(
                    child_path,
                    child_cost,
                    child_unvisited,
                    child_bound,
                ));
            }
        }
    }

    result.elapsed_seconds = clock.elapsed().as_secs_f64();
    Ok(result)
}
