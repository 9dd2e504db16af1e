use thiserror::Error;

/// Top-level error type for the snapgrid library.
#[derive(Debug, Error)]
pub enum SnapgridError {
    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Errors related to scene-store lookups.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Errors related to snapping queries.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("mesh has no vertices")]
    EmptyMesh,
}

/// Convenience type alias for results using [`SnapgridError`].
pub type Result<T> = std::result::Result<T, SnapgridError>;
