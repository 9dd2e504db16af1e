pub mod mesh;
pub mod object;

pub use mesh::{MeshData, MeshId};
pub use object::{ObjectData, ObjectId};

use crate::error::SceneError;
use slotmap::SlotMap;

/// Central arena that owns all scene entities.
///
/// Entities are referenced via typed IDs (generational indices), so a stale
/// handle to a removed mesh can never alias a mesh added later in the same
/// slot.
#[derive(Debug, Default)]
pub struct SceneStore {
    meshes: SlotMap<MeshId, MeshData>,
    objects: SlotMap<ObjectId, ObjectData>,
}

impl SceneStore {
    /// Creates a new, empty scene store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Mesh operations ---

    /// Inserts a mesh and returns its ID.
    pub fn add_mesh(&mut self, data: MeshData) -> MeshId {
        self.meshes.insert(data)
    }

    /// Returns a reference to the mesh data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn mesh(&self, id: MeshId) -> Result<&MeshData, SceneError> {
        self.meshes
            .get(id)
            .ok_or_else(|| SceneError::EntityNotFound("mesh".into()))
    }

    /// Returns a mutable reference to the mesh data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn mesh_mut(&mut self, id: MeshId) -> Result<&mut MeshData, SceneError> {
        self.meshes
            .get_mut(id)
            .ok_or_else(|| SceneError::EntityNotFound("mesh".into()))
    }

    /// Removes a mesh, returning its data if it was present.
    pub fn remove_mesh(&mut self, id: MeshId) -> Option<MeshData> {
        self.meshes.remove(id)
    }

    /// Returns `true` when the mesh is currently live in the store.
    #[must_use]
    pub fn contains_mesh(&self, id: MeshId) -> bool {
        self.meshes.contains_key(id)
    }

    // --- Object operations ---

    /// Inserts an object and returns its ID.
    pub fn add_object(&mut self, data: ObjectData) -> ObjectId {
        self.objects.insert(data)
    }

    /// Returns a reference to the object data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn object(&self, id: ObjectId) -> Result<&ObjectData, SceneError> {
        self.objects
            .get(id)
            .ok_or_else(|| SceneError::EntityNotFound("object".into()))
    }

    /// Removes an object, returning its data if it was present.
    ///
    /// The attached mesh, if any, stays in the store.
    pub fn remove_object(&mut self, id: ObjectId) -> Option<ObjectData> {
        self.objects.remove(id)
    }

    /// Iterates over all objects in the scene.
    ///
    /// Iteration order is unspecified.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &ObjectData)> {
        self.objects.iter()
    }
}
