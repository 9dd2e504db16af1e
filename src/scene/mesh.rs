use crate::math::Point3;

slotmap::new_key_type! {
    /// Unique identifier for a mesh in the scene store.
    pub struct MeshId;
}

/// Vertex data for a mesh registered with the scene store.
///
/// Only the vertex positions matter for grouping and snapping; connectivity
/// stays with the host engine.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// The ordered vertex positions of the mesh.
    pub positions: Vec<Point3>,
}

impl MeshData {
    /// Creates a mesh from its vertex positions.
    #[must_use]
    pub fn new(positions: Vec<Point3>) -> Self {
        Self { positions }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` when the mesh has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
