mod nearest_vertex;

pub use nearest_vertex::{NearestVertex, NearestVertexResult};
