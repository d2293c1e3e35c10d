//! Lower bound on the cost of completing a partial tour.

use crate::distance::DistanceMatrix;

/// Estimates the cheapest possible total cost of any tour extending `path`.
///
/// The "two nearest edges" relaxation: the current position must spend at
/// least its cheapest edge into the unvisited set, and every unvisited city
/// must eventually carry two tour edges, so summing each one's two cheapest
/// outgoing edges and halving never overcounts an edge shared by two
/// unvisited endpoints. With nothing left unvisited the bound degenerates to
/// the exact closing-edge cost, so it is exact at complete paths.
///
/// `f64::INFINITY` entries propagate through the arithmetic; a bound of
/// `f64::INFINITY` means no finite completion exists through the cheapest
/// remaining edges.
///
/// # Panics
///
/// Panics if `path` is empty; a partial tour always contains at least the
/// start city.
///
/// # Examples
///
/// ```
/// use tsp_exact::distance::DistanceMatrix;
/// use tsp_exact::search::completion_bound;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 10.0],
///     vec![10.0, 0.0],
/// ]).unwrap();
/// // Root: connect 0 to 1 (10), plus city 1's single available edge halved.
/// assert_eq!(completion_bound(&dm, &[0], 0.0, &[1], 0), 15.0);
/// // Complete path: exactly the accumulated cost plus the closing edge.
/// assert_eq!(completion_bound(&dm, &[0, 1], 10.0, &[], 0), 20.0);
/// ```
pub fn completion_bound(
    distances: &DistanceMatrix,
    path: &[usize],
    cost_so_far: f64,
    unvisited: &[usize],
    start: usize,
) -> f64 {
    let last = *path.last().expect("a partial tour contains the start city");
    if unvisited.is_empty() {
        // Exact at leaves.
        return cost_so_far + distances.get(last, start);
    }
    let connection = unvisited
        .iter()
        .map(|&city| distances.get(last, city))
        .fold(f64::INFINITY, f64::min);
    let structure: f64 = unvisited
        .iter()
        .map(|&city| two_cheapest_outgoing(distances, city))
        .sum();
    cost_so_far + connection + structure / 2.0
}

/// Sum of the two cheapest edges leaving `city`, self excluded.
///
/// With a single other city there is only one candidate edge; it stands in
/// for the pair rather than padding with an infinite sentinel.
fn two_cheapest_outgoing(distances: &DistanceMatrix, city: usize) -> f64 {
    let mut first = f64::INFINITY;
    let mut second = f64::INFINITY;
    let mut candidates = 0usize;
    for other in 0..distances.size() {
        if other == city {
            continue;
        }
        candidates += 1;
        let d = distances.get(city, other);
        if d < first {
            second = first;
            first = d;
        } else if d < second {
            second = d;
        }
    }
    match candidates {
        0 => 0.0,
        1 => first,
        _ => first + second,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn four_city() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ])
        .expect("square")
    }

    /// Cheapest closed tour from `start`, by full enumeration.
    fn brute_force_optimum(distances: &DistanceMatrix, start: usize) -> f64 {
        fn recurse(
            distances: &DistanceMatrix,
            path: &mut Vec<usize>,
            remaining: &mut Vec<usize>,
            cost: f64,
            start: usize,
            best: &mut f64,
        ) {
            let last = *path.last().unwrap();
            if remaining.is_empty() {
                let total = cost + distances.get(last, start);
                if total < *best {
                    *best = total;
                }
                return;
            }
            for i in 0..remaining.len() {
                let city = remaining.remove(i);
                path.push(city);
                let step = distances.get(last, city);
                recurse(distances, path, remaining, cost + step, start, best);
                path.pop();
                remaining.insert(i, city);
            }
        }

        let mut remaining: Vec<usize> = (0..distances.size()).filter(|&c| c != start).collect();
        let mut best = f64::INFINITY;
        recurse(distances, &mut vec![start], &mut remaining, 0.0, start, &mut best);
        best
    }

    #[test]
    fn test_exact_at_complete_path() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 10.0, 15.0],
            vec![10.0, 0.0, 20.0],
            vec![15.0, 20.0, 0.0],
        ])
        .expect("square");
        let bound = completion_bound(&dm, &[0, 1, 2], 30.0, &[], 0);
        assert_eq!(bound, 45.0);
    }

    #[test]
    fn test_root_bound_value() {
        // connection 10, rows: (10+25) + (15+30) + (20+25) = 125, halved.
        let dm = four_city();
        let bound = completion_bound(&dm, &[0], 0.0, &[1, 2, 3], 0);
        assert!((bound - 72.5).abs() < 1e-9);
    }

    #[test]
    fn test_root_bound_admissible_on_known_instance() {
        let dm = four_city();
        let bound = completion_bound(&dm, &[0], 0.0, &[1, 2, 3], 0);
        assert!(bound <= brute_force_optimum(&dm, 0));
    }

    #[test]
    fn test_bound_grows_along_extension() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 12.0, 18.0],
            vec![15.0, 12.0, 0.0, 22.0],
            vec![20.0, 18.0, 22.0, 0.0],
        ])
        .expect("square");
        let root = completion_bound(&dm, &[0], 0.0, &[1, 2, 3], 0);
        let extended = completion_bound(&dm, &[0, 1], dm.get(0, 1), &[2, 3], 0);
        assert!(extended >= root);
    }

    #[test]
    fn test_two_city_root() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0, 10.0], vec![10.0, 0.0]])
            .expect("square");
        assert_eq!(completion_bound(&dm, &[0], 0.0, &[1], 0), 15.0);
    }

    #[test]
    fn test_infinite_edges_propagate() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 10.0);
        dm.set(0, 2, f64::INFINITY);
        dm.set(2, 0, f64::INFINITY);
        dm.set(1, 2, f64::INFINITY);
        dm.set(2, 1, f64::INFINITY);
        let bound = completion_bound(&dm, &[0], 0.0, &[1, 2], 0);
        assert!(bound.is_infinite() && bound > 0.0);
    }

    fn symmetric_matrix(max_size: usize) -> impl Strategy<Value = DistanceMatrix> {
        (3usize..=max_size).prop_flat_map(|n| {
            proptest::collection::vec(1.0f64..100.0, n * n).prop_map(move |data| {
                let mut dm = DistanceMatrix::new(n);
                for i in 0..n {
                    for j in (i + 1)..n {
                        let d = data[i * n + j];
                        dm.set(i, j, d);
                        dm.set(j, i, d);
                    }
                }
                dm
            })
        })
    }

    proptest! {
        #[test]
        fn test_root_bound_never_exceeds_optimum(dm in symmetric_matrix(6)) {
            let unvisited: Vec<usize> = (1..dm.size()).collect();
            let bound = completion_bound(&dm, &[0], 0.0, &unvisited, 0);
            let optimum = brute_force_optimum(&dm, 0);
            prop_assert!(bound <= optimum + 1e-9);
        }
    }
}
