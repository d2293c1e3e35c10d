//! Dense distance matrix.

use crate::models::ValidationError;

/// A dense n×n cost matrix stored in row-major order.
///
/// Entry `(from, to)` is the cost of traveling from city `from` to city
/// `to`. The diagonal is zero and entries need not be symmetric. An entry of
/// `f64::INFINITY` is legal and means "unreachable"; all solvers propagate it
/// under extended-real arithmetic instead of failing.
///
/// # Examples
///
/// ```
/// use tsp_exact::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 10.0, 15.0],
///     vec![10.0, 0.0, 20.0],
///     vec![15.0, 20.0, 0.0],
/// ]).unwrap();
/// assert_eq!(dm.get(0, 2), 15.0);
/// assert_eq!(dm.size(), 3);
/// assert!(dm.is_symmetric(1e-10));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// Returns [`ValidationError::NotSquare`] if any row's length differs
    /// from the number of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ValidationError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(ValidationError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            data.extend_from_slice(values);
        }
        Ok(Self { data, size })
    }

    /// Returns the cost from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost from city `from` to city `to`.
    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Checks that every entry is a usable cost.
    ///
    /// Off-diagonal entries must be non-negative (`f64::INFINITY` is
    /// allowed, NaN is not) and the diagonal must be exactly zero. Solvers
    /// call this before creating any search state.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for from in 0..self.size {
            for to in 0..self.size {
                let value = self.get(from, to);
                if value.is_nan() || value < 0.0 {
                    return Err(ValidationError::InvalidCost { from, to, value });
                }
                if from == to && value != 0.0 {
                    return Err(ValidationError::NonzeroDiagonal { city: from, value });
                }
            }
        }
        Ok(())
    }
}
