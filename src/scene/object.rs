use super::MeshId;

slotmap::new_key_type! {
    /// Unique identifier for an object in the scene store.
    pub struct ObjectId;
}

/// Data associated with a scene object.
///
/// Objects are the unit of scene enumeration; a mesh is attached to at most
/// one per object, and not every object carries one.
#[derive(Debug, Clone)]
pub struct ObjectData {
    /// Display name of the object.
    pub name: String,
    /// The mesh attached to this object, if any.
    pub mesh: Option<MeshId>,
}

impl ObjectData {
    /// Creates an object without a mesh.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mesh: None,
        }
    }

    /// Creates an object with an attached mesh.
    #[must_use]
    pub fn with_mesh(name: impl Into<String>, mesh: MeshId) -> Self {
        Self {
            name: name.into(),
            mesh: Some(mesh),
        }
    }
}
