//! Tour type: a cyclic vertex ordering with a cached length.

use serde::Serialize;

use crate::distance::Geometry;
use crate::evaluation::tour_length;

/// A closed tour over geometry ids.
///
/// The cached `length` always equals the cyclic sum of Euclidean edge
/// lengths, including the edge from the last vertex back to the first.
/// Fields are private; mutations either recompute the length or patch it by
/// an exact delta.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::Geometry;
/// use u_tsp::models::Tour;
///
/// let g = Geometry::from_coords(&[(0.0, 0.0), (3.0, 4.0)]).unwrap();
/// let tour = Tour::new(&g, vec![0, 1]);
/// assert_eq!(tour.path(), &[0, 1]);
/// assert!((tour.length() - 10.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    path: Vec<usize>,
    length: f64,
}

impl Tour {
    /// Creates a tour and computes its length.
    pub fn new(geometry: &Geometry, path: Vec<usize>) -> Self {
        let length = tour_length(geometry, &path);
        Self { path, length }
    }

    /// The single-vertex tour, of length zero.
    pub fn singleton(id: usize) -> Self {
        Self {
            path: vec![id],
            length: 0.0,
        }
    }

    /// Vertex ids in visiting order.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Consumes the tour, returning its vertex ordering.
    pub fn into_path(self) -> Vec<usize> {
        self.path
    }

    /// Cached closed-tour length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of vertices in the tour.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns `true` if the tour has no vertices.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Returns `true` if this tour is strictly shorter than `other`.
    pub fn is_shorter_than(&self, other: &Tour) -> bool {
        self.length < other.length
    }

    /// Recomputes the cached length from scratch and returns it.
    pub fn recompute_length(&mut self, geometry: &Geometry) -> f64 {
        self.length = tour_length(geometry, &self.path);
        self.length
    }

    /// Reverses `path[from..=to]` and shifts the cached length by `delta`.
    ///
    /// `delta` must be the exact length change of the reversal.
    pub(crate) fn reverse_segment(&mut self, from: usize, to: usize, delta: f64) {
        self.path[from..=to].reverse();
        self.length += delta;
    }

    /// Swaps the vertices at positions `i` and `j` and recomputes the length.
    pub(crate) fn swap_positions(&mut self, geometry: &Geometry, i: usize, j: usize) {
        self.path.swap(i, j);
        self.recompute_length(geometry);
    }
}
