//! Immutable point set with on-demand Euclidean distances.

use crate::error::{Error, Result};
use crate::models::{DistanceMetric, Point};

/// An ordered, immutable set of points.
///
/// Point ids are a permutation of `0..N` and each point sits at the index
/// equal to its id, so `point_at(id)` is a direct lookup. Distances are
/// computed on demand, keeping memory at O(N) for large inputs.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::Geometry;
///
/// let geometry = Geometry::from_coords(&[(0.0, 0.0), (3.0, 4.0), (0.0, 8.0)]).unwrap();
/// assert_eq!(geometry.size(), 3);
/// assert!((geometry.distance(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(geometry.rounded_distance(1, 2), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct Geometry {
    points: Vec<Point>,
}

impl Geometry {
    /// Creates a geometry from points already carrying their ids.
    ///
    /// Returns [`Error::InvalidInput`] if the set is empty, a coordinate is
    /// not finite, or a point's id differs from its position.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::invalid_input("geometry needs at least one point"));
        }
        for (idx, p) in points.iter().enumerate() {
            if p.id() != idx {
                return Err(Error::invalid_input(format!(
                    "point at position {idx} has id {}",
                    p.id()
                )));
            }
            if !p.is_finite() {
                return Err(Error::invalid_input(format!(
                    "point {idx} has a non-finite coordinate ({}, {})",
                    p.x(),
                    p.y()
                )));
            }
        }
        Ok(Self { points })
    }

    /// Creates a geometry from raw coordinates, assigning ids by position.
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(
            coords
                .iter()
                .enumerate()
                .map(|(id, &(x, y))| Point::new(id, x, y))
                .collect(),
        )
    }

    /// Creates a geometry from coordinates derived from an existing,
    /// validated geometry (centroids, subsets), skipping validation.
    pub(crate) fn from_derived_coords(coords: &[(f64, f64)]) -> Self {
        debug_assert!(!coords.is_empty());
        let points = coords
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| Point::new(id, x, y))
            .collect();
        Self { points }
    }

    /// Builds a local geometry over a subset of this one.
    ///
    /// Local id `k` corresponds to `ids[k]` in this geometry.
    ///
    /// # Panics
    ///
    /// Panics if `ids` is empty or contains an out-of-range id.
    pub fn subset(&self, ids: &[usize]) -> Self {
        assert!(!ids.is_empty(), "subset needs at least one id");
        let points = ids
            .iter()
            .enumerate()
            .map(|(local, &id)| {
                let p = &self.points[id];
                Point::new(local, p.x(), p.y())
            })
            .collect();
        Self { points }
    }

    /// Number of points.
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// All points in canonical order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the point with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds.
    pub fn point_at(&self, id: usize) -> &Point {
        &self.points[id]
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.points[a].distance_to(&self.points[b])
    }

    /// Euclidean distance rounded to the nearest integer.
    pub fn rounded_distance(&self, a: usize, b: usize) -> f64 {
        self.points[a].rounded_distance_to(&self.points[b])
    }

    /// Distance between two points under the given metric.
    pub fn distance_with(&self, metric: DistanceMetric, a: usize, b: usize) -> f64 {
        metric.between(&self.points[a], &self.points[b])
    }

    /// Arithmetic mean of the given points' coordinates.
    ///
    /// Returns `(0.0, 0.0)` for an empty slice.
    pub fn centroid_of(&self, ids: &[usize]) -> (f64, f64) {
        if ids.is_empty() {
            return (0.0, 0.0);
        }
        let (sx, sy) = ids.iter().fold((0.0, 0.0), |(sx, sy), &id| {
            let p = &self.points[id];
            (sx + p.x(), sy + p.y())
        });
        let n = ids.len() as f64;
        (sx / n, sy / n)
    }

    /// Returns the nearest of `candidates` to `from` under `metric`.
    ///
    /// Candidates are scanned in the given order and only a strictly
    /// shorter distance replaces the current best, so the first candidate
    /// wins ties. Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(
        &self,
        from: usize,
        candidates: &[usize],
        metric: DistanceMetric,
    ) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &c in candidates {
            let d = self.distance_with(metric, from, c);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((c, d));
            }
        }
        best.map(|(c, _)| c)
    }
}
