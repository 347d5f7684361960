//! Tour length and completeness checks.
//!
//! This is the objective function every heuristic is scored against.

use crate::distance::Geometry;

/// Computes the closed-tour length of `path`:
/// `path[0] → path[1] → ... → path[m-1] → path[0]`.
///
/// A single vertex (or an empty path) has length zero; two vertices give
/// the out-and-back distance.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::Geometry;
/// use u_tsp::evaluation::tour_length;
///
/// let g = Geometry::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
/// assert!((tour_length(&g, &[0, 1, 2, 3]) - 4.0).abs() < 1e-10);
/// ```
pub fn tour_length(geometry: &Geometry, path: &[usize]) -> f64 {
    let m = path.len();
    if m < 2 {
        return 0.0;
    }
    let mut dist = 0.0;
    for i in 0..m {
        dist += geometry.distance(path[i], path[(i + 1) % m]);
    }
    dist
}

/// Returns `true` if `path` visits every vertex of `geometry` exactly once.
pub fn is_complete_tour(geometry: &Geometry, path: &[usize]) -> bool {
    let n = geometry.size();
    if path.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &id in path {
        if id >= n || seen[id] {
            return false;
        }
        seen[id] = true;
    }
    true
}

/// Returns the longest edge of the closed tour as `(position, length)`,
/// where the edge runs from `path[position]` to its successor.
///
/// Returns `None` for tours with fewer than two vertices.
pub fn longest_edge(geometry: &Geometry, path: &[usize]) -> Option<(usize, f64)> {
    let m = path.len();
    if m < 2 {
        return None;
    }
    let mut best: Option<(usize, f64)> = None;
    for i in 0..m {
        let d = geometry.distance(path[i], path[(i + 1) % m]);
        if best.is_none_or(|(_, bd)| d > bd) {
            best = Some((i, d));
        }
    }
    best
}
