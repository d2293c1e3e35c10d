//! Closed tour representation.

use serde::{Deserialize, Serialize};

/// A closed tour: an ordered city sequence plus its total cost.
///
/// A tour over n cities has n+1 entries, with the first and last entry equal
/// to the start city. The cost may be `f64::INFINITY` when the tour crosses
/// an unreachable edge.
///
/// # Examples
///
/// ```
/// use tsp_exact::models::Tour;
///
/// let tour = Tour::new(vec![0, 1, 2, 0], 45.0);
/// assert_eq!(tour.cities(), &[0, 1, 2, 0]);
/// assert_eq!(tour.cost(), 45.0);
/// assert!(tour.is_closed());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    cities: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Creates a tour from a visiting order and its total cost.
    pub fn new(cities: Vec<usize>, cost: f64) -> Self {
        Self { cities, cost }
    }

    /// Returns the visiting order, including the closing return entry.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Total cost of traversing the tour.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of entries in the visiting order (n+1 for a closed tour).
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the tour has no entries.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns `true` if the tour ends where it starts.
    pub fn is_closed(&self) -> bool {
        self.cities.first() == self.cities.last() && !self.cities.is_empty()
    }
}
