//! Bounded-depth pairwise vertex swap.
//!
//! For each of the first `depth` positions i, try swapping the vertex at i
//! with every later position j. A swap is kept only if the recomputed tour
//! length is strictly shorter; otherwise it is undone. The double loop runs
//! once, so the operator is cheap and exploratory and is meant to be paired
//! with many random restarts.
//!
//! # Complexity
//!
//! O(depth · n²): O(depth · n) candidate swaps, each rescored in O(n).

use crate::distance::Geometry;
use crate::models::Tour;

use super::{LocalSearchStats, IMPROVEMENT_EPSILON};

/// Applies bounded-depth pairwise swap improvement to `tour` in place.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::Geometry;
/// use u_tsp::models::Tour;
/// use u_tsp::local_search::pairwise_swap_improve;
///
/// let g = Geometry::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
/// let mut tour = Tour::new(&g, vec![0, 2, 1, 3]);
/// pairwise_swap_improve(&g, &mut tour, 2);
/// assert!((tour.length() - 4.0).abs() < 1e-10);
/// ```
pub fn pairwise_swap_improve(geometry: &Geometry, tour: &mut Tour, depth: usize) -> LocalSearchStats {
    let mut stats = LocalSearchStats::default();
    let m = tour.len();
    if m < 2 || depth == 0 {
        return stats;
    }
    stats.passes = 1;

    for i in 0..depth.min(m) {
        for j in i + 1..m {
            stats.moves_evaluated += 1;
            let before = tour.length();
            tour.swap_positions(geometry, i, j);
            if tour.length() < before - IMPROVEMENT_EPSILON {
                stats.moves_applied += 1;
            } else {
                tour.swap_positions(geometry, i, j);
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{is_complete_tour, tour_length};

    fn scattered(n: usize) -> Geometry {
        let coords: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let f = i as f64;
                ((f * 5.71).sin() * 20.0, (f * 2.39).cos() * 20.0)
            })
            .collect();
        Geometry::from_coords(&coords).expect("valid")
    }

    #[test]
    fn test_swap_fixes_square() {
        let g = Geometry::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
            .expect("valid");
        let mut t = Tour::new(&g, vec![0, 2, 1, 3]);
        let stats = pairwise_swap_improve(&g, &mut t, 2);
        assert!(stats.moves_applied >= 1);
        assert!((t.length() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_swap_never_worsens() {
        let g = scattered(25);
        let mut t = Tour::new(&g, (0..25).collect());
        let initial = t.length();
        pairwise_swap_improve(&g, &mut t, 3);
        assert!(t.length() <= initial + 1e-10);
        assert!(is_complete_tour(&g, t.path()));
        assert!((t.length() - tour_length(&g, t.path())).abs() < 1e-9);
    }

    #[test]
    fn test_swap_move_budget() {
        let g = scattered(10);
        let mut t = Tour::new(&g, (0..10).collect());
        let stats = pairwise_swap_improve(&g, &mut t, 2);
        // i = 0 tries 9 partners, i = 1 tries 8.
        assert_eq!(stats.moves_evaluated, 17);
        assert_eq!(stats.passes, 1);
    }

    #[test]
    fn test_swap_depth_larger_than_tour() {
        let g = scattered(4);
        let mut t = Tour::new(&g, vec![3, 1, 0, 2]);
        let stats = pairwise_swap_improve(&g, &mut t, 100);
        assert_eq!(stats.moves_evaluated, 6);
        assert!(is_complete_tour(&g, t.path()));
    }

    #[test]
    fn test_swap_trivial_tours() {
        let g = scattered(2);
        let mut single = Tour::singleton(1);
        assert_eq!(pairwise_swap_improve(&g, &mut single, 2), LocalSearchStats::default());
        let mut pair = Tour::new(&g, vec![0, 1]);
        let before = pair.length();
        pairwise_swap_improve(&g, &mut pair, 2);
        assert!((pair.length() - before).abs() < 1e-12);
    }
}
