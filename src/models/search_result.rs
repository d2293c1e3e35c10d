//! Outcome of one branch-and-bound invocation.

use serde::{Deserialize, Serialize};

/// The incumbent and search metrics produced by one solver run.
///
/// `best_cost` starts at `f64::INFINITY` and only decreases; a run that
/// never completes a tour within its budget keeps the infinite sentinel and
/// an absent `best_tour`. That is a valid outcome the caller must check via
/// [`found_tour`](Self::found_tour), not an error.
///
/// # Examples
///
/// ```
/// use tsp_exact::distance::DistanceMatrix;
/// use tsp_exact::search::branch_and_bound;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 10.0],
///     vec![10.0, 0.0],
/// ]).unwrap();
/// let result = branch_and_bound(&dm, 0, 5.0).unwrap();
/// assert_eq!(result.best_cost(), 20.0);
/// assert_eq!(result.best_tour(), Some(&[0, 1, 0][..]));
/// assert!(result.found_tour());
/// assert_eq!(result.optimality_gap(20.0), Some(0.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub(crate) best_cost: f64,
    pub(crate) best_tour: Option<Vec<usize>>,
    pub(crate) nodes_expanded: u64,
    pub(crate) max_depth: usize,
    pub(crate) elapsed_seconds: f64,
}

impl SearchResult {
    /// Creates an empty result with an infinite incumbent.
    pub fn new() -> Self {
        Self {
            best_cost: f64::INFINITY,
            best_tour: None,
            nodes_expanded: 0,
            max_depth: 0,
            elapsed_seconds: 0.0,
        }
    }

    /// Cost of the best tour found, or `f64::INFINITY` if none was found.
    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    /// The best tour found (length n+1, closed at the start city), if any.
    pub fn best_tour(&self) -> Option<&[usize]> {
        self.best_tour.as_deref()
    }

    /// Number of frontier nodes popped and examined.
    pub fn nodes_expanded(&self) -> u64 {
        self.nodes_expanded
    }

    /// Longest partial-path length observed (at most n).
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Wall-clock duration of the run, in seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    /// Returns `true` if the run completed at least one tour.
    pub fn found_tour(&self) -> bool {
        self.best_tour.is_some()
    }

    /// Percentage by which a baseline tour cost exceeds the incumbent.
    ///
    /// Returns `None` when no tour was found or the incumbent cost is zero.
    pub fn optimality_gap(&self, baseline_cost: f64) -> Option<f64> {
        if !self.found_tour() || self.best_cost == 0.0 {
            return None;
        }
        Some((baseline_cost - self.best_cost) / self.best_cost * 100.0)
    }
}

impl Default for SearchResult {
    fn default() -> Self {
        Self::new()
    }
}
