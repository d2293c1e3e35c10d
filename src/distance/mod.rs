//! Distance matrices and instance generation.
//!
//! - [`DistanceMatrix`] — Dense n×n cost matrix, row-major
//! - [`random_symmetric`] / [`random_asymmetric`] — Seeded instance generators

mod generator;
mod matrix;

pub use generator::{random_asymmetric, random_symmetric};
pub use matrix::DistanceMatrix;
