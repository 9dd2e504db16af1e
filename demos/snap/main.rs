//! Snapgrid demo — indexes a small scene and runs snapping queries.
//!
//! Usage:
//! ```text
//! cargo run --example snap
//! ```

use snapgrid::index::VertexGroupIndex;
use snapgrid::math::Point3;
use snapgrid::query::NearestVertex;
use snapgrid::scene::{MeshData, ObjectData, SceneStore};
use snapgrid::SnapgridError;

fn main() -> Result<(), SnapgridError> {
    // Default: WARN for everything, DEBUG for snapgrid.
    // Override with RUST_LOG env var (e.g. RUST_LOG=snapgrid=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("snapgrid=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut store = SceneStore::new();
    let lattice = store.add_mesh(lattice_mesh(8, 1.0));
    store.add_object(ObjectData::with_mesh("lattice", lattice));
    store.add_object(ObjectData::new("camera"));

    let mut index = VertexGroupIndex::new();
    index.create_mappings_for_scene(&store);
    println!(
        "indexed {} mesh(es), {} group(s) for the lattice",
        index.len(),
        index.groups(&store, lattice).len()
    );

    for probe in [
        Point3::new(0.4, 0.2, 0.1),
        Point3::new(3.7, 6.1, 2.2),
        Point3::new(7.9, 7.9, 7.9),
    ] {
        let hit = NearestVertex::new(lattice, probe).execute(&store, &index)?;
        println!(
            "probe ({:.1}, {:.1}, {:.1}) -> vertex {} at ({:.0}, {:.0}, {:.0}), distance {:.3}",
            probe.x, probe.y, probe.z, hit.vertex, hit.point.x, hit.point.y, hit.point.z, hit.distance
        );
    }

    Ok(())
}

/// A cubic lattice of `n`^3 vertices with the given spacing.
fn lattice_mesh(n: u32, spacing: f64) -> MeshData {
    let mut positions = Vec::with_capacity((n * n * n) as usize);
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                positions.push(Point3::new(
                    f64::from(x) * spacing,
                    f64::from(y) * spacing,
                    f64::from(z) * spacing,
                ));
            }
        }
    }
    MeshData::new(positions)
}
