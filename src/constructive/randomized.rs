//! Random permutation construction.
//!
//! Draws a random unused vertex for each position, retrying on collision.
//! The expected number of draws is O(n log n); this is a restart seed for
//! the selector, not a uniformity-critical shuffle.

use rand::Rng;

use crate::distance::Geometry;
use crate::models::Tour;

/// Constructs a random tour over all vertices of `geometry`.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::Geometry;
/// use u_tsp::constructive::random_tour;
/// use u_tsp::evaluation::is_complete_tour;
///
/// let g = Geometry::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]).unwrap();
/// let mut rng = u_numflow::random::create_rng(42);
/// let tour = random_tour(&g, &mut rng);
/// assert!(is_complete_tour(&g, tour.path()));
/// ```
pub fn random_tour<R: Rng>(geometry: &Geometry, rng: &mut R) -> Tour {
    let n = geometry.size();
    if n == 1 {
        return Tour::singleton(0);
    }

    let mut used = vec![false; n];
    let mut path = Vec::with_capacity(n);
    for _ in 0..n {
        let mut r = rng.random_range(0..n as u64) as usize;
        while used[r] {
            r = rng.random_range(0..n as u64) as usize;
        }
        used[r] = true;
        path.push(r);
    }

    Tour::new(geometry, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{is_complete_tour, tour_length};

    fn line(n: usize) -> Geometry {
        let coords: Vec<(f64, f64)> = (0..n).map(|i| (i as f64, 0.0)).collect();
        Geometry::from_coords(&coords).expect("valid")
    }

    #[test]
    fn test_random_tour_is_permutation() {
        let g = line(50);
        let mut rng = u_numflow::random::create_rng(7);
        let t = random_tour(&g, &mut rng);
        assert!(is_complete_tour(&g, t.path()));
        assert!((t.length() - tour_length(&g, t.path())).abs() < 1e-9);
    }

    #[test]
    fn test_random_tour_reproducible_with_seed() {
        let g = line(20);
        let mut r1 = u_numflow::random::create_rng(99);
        let mut r2 = u_numflow::random::create_rng(99);
        assert_eq!(random_tour(&g, &mut r1), random_tour(&g, &mut r2));
    }

    #[test]
    fn test_random_tour_single_point() {
        let g = line(1);
        let mut rng = u_numflow::random::create_rng(1);
        let t = random_tour(&g, &mut rng);
        assert_eq!(t.path(), &[0]);
        assert_eq!(t.length(), 0.0);
    }

    #[test]
    fn test_random_tour_two_points() {
        let g = line(2);
        let mut rng = u_numflow::random::create_rng(3);
        let t = random_tour(&g, &mut rng);
        assert!(is_complete_tour(&g, t.path()));
        assert!((t.length() - 2.0).abs() < 1e-10);
    }
}
