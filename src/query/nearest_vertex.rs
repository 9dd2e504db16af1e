use crate::error::{QueryError, Result};
use crate::index::VertexGroupIndex;
use crate::math::Point3;
use crate::scene::{MeshData, MeshId, SceneStore};

/// Result of a nearest-vertex query.
#[derive(Debug, Clone, Copy)]
pub struct NearestVertexResult {
    /// Index of the nearest vertex in the mesh's vertex sequence.
    pub vertex: u32,
    /// Position of the nearest vertex.
    pub point: Point3,
    /// The distance from the query point to the nearest vertex.
    pub distance: f64,
}

/// Finds the mesh vertex closest to a query point.
///
/// When the mesh has a vertex-group mapping, the search first selects the
/// group whose centroid is closest to the query point and then scans only
/// that group's members. Without a mapping every vertex is scanned.
pub struct NearestVertex {
    mesh: MeshId,
    point: Point3,
}

impl NearestVertex {
    /// Creates a new `NearestVertex` query.
    #[must_use]
    pub fn new(mesh: MeshId, point: Point3) -> Self {
        Self { mesh, point }
    }

    /// Executes the query, returning the nearest vertex.
    ///
    /// The group-restricted search is a heuristic: it is exact whenever the
    /// nearest vertex lies in the group with the nearest centroid, which
    /// holds for the cursor-sized motions vertex snapping is used for.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh is not found or has no vertices.
    pub fn execute(
        &self,
        store: &SceneStore,
        index: &VertexGroupIndex,
    ) -> Result<NearestVertexResult> {
        let data = store.mesh(self.mesh)?;
        if data.is_empty() {
            return Err(QueryError::EmptyMesh.into());
        }

        let nearest_group = index
            .mapped_groups(store, self.mesh)
            .and_then(|groups| {
                groups.iter().min_by(|a, b| {
                    let da = (self.point - a.centroid).norm_squared();
                    let db = (self.point - b.centroid).norm_squared();
                    da.total_cmp(&db)
                })
            });

        match nearest_group {
            Some(group) => Ok(nearest_among(
                data,
                group.indices.iter().copied(),
                &self.point,
            )),
            None => {
                #[allow(clippy::cast_possible_truncation)]
                let all = 0..data.vertex_count() as u32;
                Ok(nearest_among(data, all, &self.point))
            }
        }
    }
}

/// Scans the candidate vertices for the one closest to `point`.
///
/// `candidates` must be non-empty and hold only valid vertex indices.
fn nearest_among(
    data: &MeshData,
    candidates: impl Iterator<Item = u32>,
    point: &Point3,
) -> NearestVertexResult {
    let mut best_vertex = 0;
    let mut best_dist_sq = f64::INFINITY;

    for i in candidates {
        let d = (point - data.positions[i as usize]).norm_squared();
        if d < best_dist_sq {
            best_dist_sq = d;
            best_vertex = i;
        }
    }

    NearestVertexResult {
        vertex: best_vertex,
        point: data.positions[best_vertex as usize],
        distance: best_dist_sq.sqrt(),
    }
}
