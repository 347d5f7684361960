//! Cluster type used by clustered divide-and-conquer construction.

use serde::Serialize;

use crate::distance::Geometry;

/// A group of vertices assigned to one leader.
///
/// The leader is itself a member. Member ids refer to the global geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    leader: usize,
    members: Vec<usize>,
    centroid: (f64, f64),
}

impl Cluster {
    /// Creates a cluster containing only its leader.
    pub fn new(leader: usize) -> Self {
        Self {
            leader,
            members: vec![leader],
            centroid: (0.0, 0.0),
        }
    }

    /// Adds a member to the cluster.
    pub fn push_member(&mut self, id: usize) {
        self.members.push(id);
    }

    /// Recomputes the centroid from the current members.
    pub fn update_centroid(&mut self, geometry: &Geometry) {
        self.centroid = geometry.centroid_of(&self.members);
    }

    /// Leader vertex id.
    pub fn leader(&self) -> usize {
        self.leader
    }

    /// Member vertex ids, leader first.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Mean position of the members.
    pub fn centroid(&self) -> (f64, f64) {
        self.centroid
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`: a cluster holds at least its leader.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
