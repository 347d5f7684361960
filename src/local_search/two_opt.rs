//! 2-opt segment reversal.
//!
//! # Algorithm
//!
//! For each pair of non-adjacent tour edges (a→b) at positions (i, i+1) and
//! (c→d) at positions (j, j+1), compute the change in length from replacing
//! them with (a→c) and (b→d):
//!
//! ```text
//! delta = d(a, c) + d(b, d) - d(a, b) - d(c, d)
//! ```
//!
//! If delta < 0, reverse the segment [i+1..=j] and shift the cached tour
//! length by delta. Passes repeat until one makes no move (a 2-opt local
//! optimum) or the pass ceiling is reached (first-improvement strategy).
//!
//! # Complexity
//!
//! O(n²) per pass.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::Geometry;
use crate::models::Tour;

use super::{LocalSearchStats, IMPROVEMENT_EPSILON};

/// Applies 2-opt improvement to `tour` in place.
///
/// Stops after a pass with no improving move, or after `max_passes`
/// passes. Tours with fewer than four vertices have no pair of
/// non-adjacent edges and are left unchanged.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::Geometry;
/// use u_tsp::models::Tour;
/// use u_tsp::local_search::two_opt_improve;
///
/// let g = Geometry::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
/// let mut tour = Tour::new(&g, vec![0, 2, 1, 3]); // crossing
/// let stats = two_opt_improve(&g, &mut tour, 100);
/// assert!(stats.moves_applied > 0);
/// assert!((tour.length() - 4.0).abs() < 1e-10);
/// ```
pub fn two_opt_improve(geometry: &Geometry, tour: &mut Tour, max_passes: usize) -> LocalSearchStats {
    let mut stats = LocalSearchStats::default();
    let m = tour.len();
    if m < 4 {
        return stats;
    }

    let mut improved = true;
    while improved && stats.passes < max_passes {
        improved = false;
        stats.passes += 1;

        for i in 0..m - 2 {
            // With i = 0 the edge (m-1, 0) shares vertex path[0] with (0, 1).
            let j_end = if i == 0 { m - 1 } else { m };
            for j in i + 2..j_end {
                stats.moves_evaluated += 1;
                let delta = two_opt_delta(geometry, tour.path(), i, j);
                if delta < -IMPROVEMENT_EPSILON {
                    tour.reverse_segment(i + 1, j, delta);
                    stats.moves_applied += 1;
                    improved = true;
                }
            }
        }
    }

    stats
}

/// Length change from replacing edges (i, i+1) and (j, j+1 mod m) with
/// (i, j) and (i+1, j+1 mod m).
///
/// Before: `... a → b ... c → d ...`
/// After:  `... a → c ... b → d ...` (segment b..=c reversed)
pub fn two_opt_delta(geometry: &Geometry, path: &[usize], i: usize, j: usize) -> f64 {
    let m = path.len();
    let a = path[i];
    let b = path[i + 1];
    let c = path[j];
    let d = path[(j + 1) % m];

    let old_cost = geometry.distance(a, b) + geometry.distance(c, d);
    let new_cost = geometry.distance(a, c) + geometry.distance(b, d);

    new_cost - old_cost
}
