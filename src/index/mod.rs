use slotmap::SecondaryMap;
use tracing::debug;

use crate::grouping::{BuildVertexGroups, GroupingParams, VertexGroup};
use crate::scene::{MeshId, SceneStore};

/// Cache of computed vertex groups, keyed by mesh identity.
///
/// The index is an owned value constructed by the embedding session and
/// passed by reference to collaborators. Mappings are built on demand and
/// persist until they are explicitly replaced or removed; nothing expires.
#[derive(Debug, Default)]
pub struct VertexGroupIndex {
    params: GroupingParams,
    mappings: SecondaryMap<MeshId, Vec<VertexGroup>>,
}

impl VertexGroupIndex {
    /// Creates an empty index using default grouping parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty index with the given grouping parameters.
    #[must_use]
    pub fn with_params(params: GroupingParams) -> Self {
        Self {
            params,
            mappings: SecondaryMap::new(),
        }
    }

    /// (Re)builds the vertex-group mapping for a mesh.
    ///
    /// Any existing mapping for the mesh is discarded first. Returns `false`
    /// with no side effects when the mesh is not live in the store. Also
    /// returns `false` when the rebuild produces no groups (a mesh without
    /// vertices); the discarded mapping is not restored in that case, so the
    /// mesh reads as unmapped afterwards.
    pub fn create_mapping(&mut self, store: &SceneStore, mesh: MeshId) -> bool {
        let Ok(data) = store.mesh(mesh) else {
            return false;
        };

        let replaced = self.mappings.remove(mesh).is_some();

        let groups = BuildVertexGroups::new(self.params).execute(data);
        if groups.is_empty() {
            if replaced {
                debug!(?mesh, "rebuild produced no groups, mesh left unmapped");
            }
            return false;
        }

        debug!(
            ?mesh,
            groups = groups.len(),
            replaced,
            "vertex-group mapping built"
        );
        self.mappings.insert(mesh, groups);
        true
    }

    /// Builds mappings for every scene object that carries a mesh.
    ///
    /// Enumeration order is the store's object order and is not guaranteed
    /// stable. Meshes that fail to map (stale handles, empty meshes) are
    /// skipped.
    pub fn create_mappings_for_scene(&mut self, store: &SceneStore) {
        for (_, object) in store.objects() {
            if let Some(mesh) = object.mesh {
                self.create_mapping(store, mesh);
            }
        }
    }

    /// Borrows the groups mapped to a mesh, if it is live and mapped.
    #[must_use]
    pub fn mapped_groups(&self, store: &SceneStore, mesh: MeshId) -> Option<&[VertexGroup]> {
        if !store.contains_mesh(mesh) {
            return None;
        }
        self.mappings.get(mesh).map(Vec::as_slice)
    }

    /// Returns a copy of the groups mapped to a mesh.
    ///
    /// The copy is the caller's to mutate; the cached groups are unaffected.
    /// An unmapped or stale mesh yields an empty list.
    #[must_use]
    pub fn groups(&self, store: &SceneStore, mesh: MeshId) -> Vec<VertexGroup> {
        self.mapped_groups(store, mesh)
            .map(<[VertexGroup]>::to_vec)
            .unwrap_or_default()
    }

    /// Returns `true` when the mesh is live in the store and has a mapping.
    #[must_use]
    pub fn has_mapping(&self, store: &SceneStore, mesh: MeshId) -> bool {
        store.contains_mesh(mesh) && self.mappings.contains_key(mesh)
    }

    /// Removes the mapping for a mesh, returning whether one existed.
    pub fn remove_mapping(&mut self, mesh: MeshId) -> bool {
        self.mappings.remove(mesh).is_some()
    }

    /// Removes all mappings.
    pub fn clear(&mut self) {
        self.mappings.clear();
    }

    /// Returns the number of mapped meshes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Returns `true` when no mesh is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
