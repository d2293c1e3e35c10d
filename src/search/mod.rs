//! Best-first branch-and-bound search for exact TSP.
//!
//! - [`completion_bound`] — Admissible completion-cost bound for a partial tour
//! - [`SearchNode`] / [`SearchFrontier`] — Bound-ordered frontier of partial tours
//! - [`branch_and_bound`] — Anytime best-first solver loop

mod bound;
mod branch_and_bound;
mod frontier;

pub use bound::completion_bound;
pub use branch_and_bound::branch_and_bound;
pub use frontier::{SearchFrontier, SearchNode};
