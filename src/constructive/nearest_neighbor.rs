//! Nearest-neighbor constructive heuristic.
//!
//! Starting from a given vertex, always move to the nearest unvisited
//! vertex until every vertex is placed, then close the cycle.
//!
//! # Complexity
//!
//! O(n²) time, O(n) space. No distance matrix is materialized.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use crate::distance::Geometry;
use crate::models::{DistanceMetric, Tour};

/// Constructs a tour with the nearest-neighbor heuristic.
///
/// Candidates are scanned in ascending id order and only a strictly shorter
/// distance (under `metric`) replaces the current choice, so ties go to the
/// lowest id. The result is fully determined by `start` and `metric`.
///
/// The returned tour's cached length is always the continuous Euclidean
/// length, whichever metric drove the neighbor comparisons.
///
/// # Panics
///
/// Panics if `start` is not a valid id of `geometry`.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::Geometry;
/// use u_tsp::models::DistanceMetric;
/// use u_tsp::constructive::nearest_neighbor;
///
/// let g = Geometry::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
/// let tour = nearest_neighbor(&g, 0, DistanceMetric::Euclidean);
/// assert_eq!(tour.path(), &[0, 1, 2, 3]);
/// assert!((tour.length() - 4.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor(geometry: &Geometry, start: usize, metric: DistanceMetric) -> Tour {
    let n = geometry.size();
    assert!(start < n, "start vertex {start} out of range for {n} points");
    if n == 1 {
        return Tour::singleton(start);
    }

    // Ascending ids, so the first-wins scan gives ties to the lowest id.
    let mut unvisited: Vec<usize> = (0..n).filter(|&id| id != start).collect();
    let mut path = Vec::with_capacity(n);
    path.push(start);
    let mut current = start;

    while let Some(next) = geometry.nearest_neighbor(current, &unvisited, metric) {
        unvisited.retain(|&id| id != next);
        path.push(next);
        current = next;
    }

    Tour::new(geometry, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::is_complete_tour;

    fn square() -> Geometry {
        Geometry::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).expect("valid")
    }

    #[test]
    fn test_nn_square_perimeter() {
        let g = square();
        let t = nearest_neighbor(&g, 0, DistanceMetric::Euclidean);
        assert_eq!(t.path(), &[0, 1, 2, 3]);
        assert!((t.length() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_square_rounded_metric() {
        // Under rounding the diagonal (1.414) ties with the sides (1), and
        // the lowest id still wins, giving the same perimeter tour.
        let g = square();
        let t = nearest_neighbor(&g, 0, DistanceMetric::Rounded);
        assert_eq!(t.path(), &[0, 1, 2, 3]);
        assert!((t.length() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let g = Geometry::from_coords(&[(0.0, 0.0), (10.0, 0.0), (1.0, 0.0)]).expect("valid");
        let t = nearest_neighbor(&g, 0, DistanceMetric::Euclidean);
        assert_eq!(t.path(), &[0, 2, 1]);
    }

    #[test]
    fn test_nn_metric_changes_tie_break() {
        // From 0: vertex 1 at 1.4, vertex 2 at 1.0.
        let g = Geometry::from_coords(&[(0.0, 0.0), (1.4, 0.0), (-1.0, 0.0)]).expect("valid");
        let euclid = nearest_neighbor(&g, 0, DistanceMetric::Euclidean);
        let rounded = nearest_neighbor(&g, 0, DistanceMetric::Rounded);
        assert_eq!(euclid.path(), &[0, 2, 1]);
        assert_eq!(rounded.path(), &[0, 1, 2]);
    }

    #[test]
    fn test_nn_each_step_is_geometry_nearest() {
        let coords: Vec<(f64, f64)> = (0..15)
            .map(|i| {
                let f = i as f64;
                ((f * 2.3).sin() * 9.0, (f * 1.7).cos() * 9.0)
            })
            .collect();
        let g = Geometry::from_coords(&coords).expect("valid");
        let t = nearest_neighbor(&g, 4, DistanceMetric::Euclidean);
        let path = t.path();
        for k in 0..path.len() - 1 {
            let mut remaining = path[k + 1..].to_vec();
            remaining.sort_unstable();
            assert_eq!(
                g.nearest_neighbor(path[k], &remaining, DistanceMetric::Euclidean),
                Some(path[k + 1])
            );
        }
    }

    #[test]
    fn test_nn_single_point() {
        let g = Geometry::from_coords(&[(4.0, 2.0)]).expect("valid");
        let t = nearest_neighbor(&g, 0, DistanceMetric::Euclidean);
        assert_eq!(t.path(), &[0]);
        assert_eq!(t.length(), 0.0);
    }

    #[test]
    fn test_nn_two_points_out_and_back() {
        let g = Geometry::from_coords(&[(0.0, 0.0), (3.0, 4.0)]).expect("valid");
        let t = nearest_neighbor(&g, 1, DistanceMetric::Euclidean);
        assert_eq!(t.path(), &[1, 0]);
        assert!((t.length() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_deterministic_and_complete() {
        let coords: Vec<(f64, f64)> = (0..30)
            .map(|i| {
                let f = i as f64;
                ((f * 7.3) % 11.0, (f * 3.1) % 13.0)
            })
            .collect();
        let g = Geometry::from_coords(&coords).expect("valid");
        let a = nearest_neighbor(&g, 5, DistanceMetric::Euclidean);
        let b = nearest_neighbor(&g, 5, DistanceMetric::Euclidean);
        assert_eq!(a, b);
        assert_eq!(a.path()[0], 5);
        assert!(is_complete_tour(&g, a.path()));
    }

    #[test]
    fn test_nn_coincident_points() {
        let g = Geometry::from_coords(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]).expect("valid");
        let t = nearest_neighbor(&g, 2, DistanceMetric::Euclidean);
        assert_eq!(t.path(), &[2, 0, 1]);
        assert_eq!(t.length(), 0.0);
    }
}
