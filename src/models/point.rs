//! Point and distance metric types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Distance convention used when comparing candidate neighbors.
///
/// `Rounded` rounds the Euclidean distance to the nearest integer (halves
/// away from zero). Two candidates that differ by less than one unit then
/// compare equal, and the lower index wins the tie.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{DistanceMetric, Point};
///
/// let a = Point::new(0, 0.0, 0.0);
/// let b = Point::new(1, 1.0, 1.0);
/// assert!((DistanceMetric::Euclidean.between(&a, &b) - 2f64.sqrt()).abs() < 1e-12);
/// assert_eq!(DistanceMetric::Rounded.between(&a, &b), 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Continuous Euclidean norm.
    #[default]
    Euclidean,
    /// Euclidean norm rounded to the nearest integer.
    Rounded,
}

impl DistanceMetric {
    /// Distance between two points under this metric.
    pub fn between(self, a: &Point, b: &Point) -> f64 {
        match self {
            Self::Euclidean => a.distance_to(b),
            Self::Rounded => a.rounded_distance_to(b),
        }
    }
}

impl FromStr for DistanceMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euclidean" => Ok(Self::Euclidean),
            "rounded" => Ok(Self::Rounded),
            other => Err(format!(
                "unknown distance metric '{other}' (expected 'euclidean' or 'rounded')"
            )),
        }
    }
}

/// A location in the plane.
///
/// `id` is the point's index in input order and is what gets written out
/// in path mode.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
///
/// let a = Point::new(0, 0.0, 0.0);
/// let b = Point::new(1, 3.0, 4.0);
/// assert_eq!(b.id(), 1);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    id: usize,
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Index of this point in input order.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Euclidean distance rounded to the nearest integer.
    pub fn rounded_distance_to(&self, other: &Point) -> f64 {
        self.distance_to(other).round()
    }
}
