//! Clustered divide-and-conquer construction.
//!
//! # Algorithm
//!
//! 1. Pick K leaders by farthest-point selection: the first leader is a
//!    random vertex, each further leader is the vertex farthest from its
//!    nearest existing leader.
//! 2. Assign every other vertex to its nearest leader.
//! 3. Order the clusters by a nearest-neighbor tour over their centroids,
//!    keeping the shortest of several starting clusters.
//! 4. Solve each cluster independently with nearest-neighbor restarts and
//!    concatenate the cluster tours in cluster order.
//!
//! # Complexity
//!
//! O(n·K) for clustering plus O(Σ|Cᵢ|²) for the per-cluster tours. With
//! K ≈ √n and balanced clusters this is roughly O(n^1.5), against O(n²) for
//! a single nearest-neighbor pass.
//!
//! # Reference
//!
//! Gonzalez, T.F. (1985). "Clustering to minimize the maximum intercluster
//! distance", *Theoretical Computer Science* 38, 293-306.

use std::fmt;
use std::str::FromStr;

use log::trace;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::distance::Geometry;
use crate::models::{Cluster, DistanceMetric, Tour};

use super::nearest_neighbor::nearest_neighbor;

/// How many clusters to form.
///
/// # Examples
///
/// ```
/// use u_tsp::constructive::ClusterCount;
///
/// assert_eq!(ClusterCount::Fixed(4).resolve(100), 4);
/// assert_eq!(ClusterCount::SqrtN.resolve(100), 10);
/// assert_eq!("sqrt".parse::<ClusterCount>().unwrap(), ClusterCount::SqrtN);
/// assert_eq!("7".parse::<ClusterCount>().unwrap(), ClusterCount::Fixed(7));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterCount {
    /// A fixed number of clusters.
    Fixed(usize),
    /// `round(√n)` clusters.
    #[default]
    SqrtN,
}

impl ClusterCount {
    /// Requested cluster count for `n` points, before clamping.
    pub fn resolve(self, n: usize) -> usize {
        match self {
            Self::Fixed(k) => k,
            Self::SqrtN => ((n as f64).sqrt().round() as usize).max(1),
        }
    }
}

impl fmt::Display for ClusterCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(k) => write!(f, "{k}"),
            Self::SqrtN => f.write_str("sqrt"),
        }
    }
}

impl FromStr for ClusterCount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sqrt" | "sqrt-n" | "sqrt_n" => Ok(Self::SqrtN),
            other => other
                .parse::<usize>()
                .map(Self::Fixed)
                .map_err(|_| format!("expected a cluster count or 'sqrt', got '{other}'")),
        }
    }
}

/// Clamps a requested cluster count into `[1, n-1]` (or 1 when `n ≤ 2`).
pub fn clamp_cluster_count(requested: usize, n: usize) -> usize {
    if n <= 2 {
        return 1;
    }
    requested.clamp(1, n - 1)
}

/// Partitions the vertices into `k` clusters by farthest-point leader
/// selection.
///
/// `k` is clamped with [`clamp_cluster_count`]. Ties in both leader
/// selection and member assignment go to the lowest index (the earliest
/// leader for assignment).
///
/// # Examples
///
/// ```
/// use u_tsp::distance::Geometry;
/// use u_tsp::constructive::farthest_point_clusters;
///
/// let g = Geometry::from_coords(&[(0.0, 0.0), (0.5, 0.0), (100.0, 0.0), (100.5, 0.0)]).unwrap();
/// let mut rng = u_numflow::random::create_rng(1);
/// let clusters = farthest_point_clusters(&g, 2, &mut rng);
/// assert_eq!(clusters.len(), 2);
/// assert_eq!(clusters.iter().map(|c| c.len()).sum::<usize>(), 4);
/// ```
pub fn farthest_point_clusters<R: Rng>(geometry: &Geometry, k: usize, rng: &mut R) -> Vec<Cluster> {
    let n = geometry.size();
    let k = clamp_cluster_count(k, n);

    let first = rng.random_range(0..n as u64) as usize;
    let mut leaders = vec![first];
    let mut is_leader = vec![false; n];
    is_leader[first] = true;
    let mut owner = vec![0usize; n];
    let mut nearest: Vec<f64> = (0..n).map(|v| geometry.distance(v, first)).collect();

    while leaders.len() < k {
        let mut far: Option<(usize, f64)> = None;
        for v in 0..n {
            if is_leader[v] {
                continue;
            }
            if far.is_none_or(|(_, fd)| nearest[v] > fd) {
                far = Some((v, nearest[v]));
            }
        }
        // k ≤ n - 1 guarantees a non-leader remains.
        let Some((leader, _)) = far else { break };

        let cluster_idx = leaders.len();
        leaders.push(leader);
        is_leader[leader] = true;
        owner[leader] = cluster_idx;
        nearest[leader] = 0.0;
        for v in 0..n {
            if is_leader[v] {
                continue;
            }
            let d = geometry.distance(v, leader);
            if d < nearest[v] {
                nearest[v] = d;
                owner[v] = cluster_idx;
            }
        }
    }

    let mut clusters: Vec<Cluster> = leaders.iter().map(|&l| Cluster::new(l)).collect();
    for v in 0..n {
        if !is_leader[v] {
            clusters[owner[v]].push_member(v);
        }
    }
    for cluster in &mut clusters {
        cluster.update_centroid(geometry);
    }
    clusters
}

/// Constructs a tour by clustered divide-and-conquer.
///
/// * `k` — Requested cluster count (clamped to `[1, n-1]`)
/// * `local_restarts` — Nearest-neighbor attempts per cluster; the first
///   starts at the leader, the rest at random members
/// * `centroid_restarts` — Starting clusters tried for the inter-cluster
///   order; all clusters are tried when the budget covers them
///
/// # Examples
///
/// ```
/// use u_tsp::distance::Geometry;
/// use u_tsp::constructive::clustered_tour;
/// use u_tsp::evaluation::is_complete_tour;
///
/// let coords: Vec<(f64, f64)> = (0..25).map(|i| ((i % 5) as f64, (i / 5) as f64)).collect();
/// let g = Geometry::from_coords(&coords).unwrap();
/// let mut rng = u_numflow::random::create_rng(42);
/// let tour = clustered_tour(&g, 5, 3, 5, &mut rng);
/// assert!(is_complete_tour(&g, tour.path()));
/// ```
pub fn clustered_tour<R: Rng>(
    geometry: &Geometry,
    k: usize,
    local_restarts: usize,
    centroid_restarts: usize,
    rng: &mut R,
) -> Tour {
    let n = geometry.size();
    if n == 1 {
        return Tour::singleton(0);
    }

    let clusters = farthest_point_clusters(geometry, k, rng);
    trace!(
        "clustered: n={} k={} sizes={:?}",
        n,
        clusters.len(),
        clusters.iter().map(Cluster::len).collect::<Vec<_>>()
    );

    let order = order_clusters(&clusters, centroid_restarts, rng);
    let mut path = Vec::with_capacity(n);
    for &ci in &order {
        path.extend(solve_cluster(geometry, &clusters[ci], local_restarts, rng));
    }

    Tour::new(geometry, path)
}

/// Visiting order of the clusters: the shortest nearest-neighbor tour over
/// centroids among the tried starting clusters.
fn order_clusters<R: Rng>(clusters: &[Cluster], restarts: usize, rng: &mut R) -> Vec<usize> {
    let k = clusters.len();
    if k == 1 {
        return vec![0];
    }

    let centroids: Vec<(f64, f64)> = clusters.iter().map(Cluster::centroid).collect();
    let centroid_geometry = Geometry::from_derived_coords(&centroids);

    let starts: Vec<usize> = if restarts >= k {
        (0..k).collect()
    } else {
        std::iter::once(0)
            .chain((1..restarts.max(1)).map(|_| rng.random_range(0..k as u64) as usize))
            .collect()
    };

    let mut best = nearest_neighbor(&centroid_geometry, starts[0], DistanceMetric::Euclidean);
    for &start in &starts[1..] {
        let candidate = nearest_neighbor(&centroid_geometry, start, DistanceMetric::Euclidean);
        if candidate.is_shorter_than(&best) {
            best = candidate;
        }
    }
    best.into_path()
}

/// Best nearest-neighbor tour over one cluster's members, in global ids.
fn solve_cluster<R: Rng>(
    geometry: &Geometry,
    cluster: &Cluster,
    restarts: usize,
    rng: &mut R,
) -> Vec<usize> {
    let members = cluster.members();
    if members.len() == 1 {
        return members.to_vec();
    }

    let local = geometry.subset(members);
    let size = members.len();
    // The first attempt starts at the leader, local id 0.
    let mut best = nearest_neighbor(&local, 0, DistanceMetric::Euclidean);
    for _ in 1..restarts {
        let start = rng.random_range(0..size as u64) as usize;
        let candidate = nearest_neighbor(&local, start, DistanceMetric::Euclidean);
        if candidate.is_shorter_than(&best) {
            best = candidate;
        }
    }

    best.into_path()
        .into_iter()
        .map(|local_id| members[local_id])
        .collect()
}
