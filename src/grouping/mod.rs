mod build_groups;

pub use build_groups::BuildVertexGroups;

use crate::math::Point3;

/// Parameters controlling how a mesh's vertices are partitioned into groups.
#[derive(Debug, Clone, Copy)]
pub struct GroupingParams {
    /// Desired number of vertices per group.
    pub target_group_size: usize,
    /// Upper bound on the number of grid cells along any axis.
    pub max_cells_per_axis: usize,
}

impl Default for GroupingParams {
    fn default() -> Self {
        Self {
            target_group_size: 32,
            max_cells_per_axis: 64,
        }
    }
}

/// A spatially coherent subset of a mesh's vertices.
///
/// Groups narrow nearest-vertex searches: instead of scanning every vertex
/// of a mesh, the search first selects the group whose centroid is closest
/// to the query point and then scans only that group's members.
#[derive(Debug, Clone)]
pub struct VertexGroup {
    /// Indices into the parent mesh's vertex sequence.
    pub indices: Vec<u32>,
    /// Mean position of the member vertices.
    pub centroid: Point3,
}

impl VertexGroup {
    /// Returns the number of vertices in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` when the group has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
