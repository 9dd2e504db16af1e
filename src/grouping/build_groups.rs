use std::collections::BTreeMap;

use crate::math::{Aabb, Point3, TOLERANCE, Vector3};
use crate::scene::MeshData;

use super::{GroupingParams, VertexGroup};

/// Partitions a mesh's vertices into spatially coherent groups.
///
/// Vertices are binned into a uniform grid sized so that each cell holds
/// roughly `target_group_size` vertices. Every vertex lands in exactly one
/// cell and only non-empty cells become groups, so the resulting groups
/// partition the mesh's full vertex index range.
pub struct BuildVertexGroups {
    params: GroupingParams,
}

impl BuildVertexGroups {
    /// Creates a new `BuildVertexGroups` operation.
    #[must_use]
    pub fn new(params: GroupingParams) -> Self {
        Self { params }
    }

    /// Executes the operation, returning the groups for the mesh.
    ///
    /// A mesh with no vertices yields an empty list. A mesh whose vertices
    /// are all coincident yields a single group. Groups are ordered by
    /// grid-cell coordinate, which is deterministic for a given mesh and
    /// parameter set.
    #[must_use]
    pub fn execute(&self, mesh: &MeshData) -> Vec<VertexGroup> {
        let positions = &mesh.positions;
        let Some(bounds) = Aabb::from_points(positions) else {
            return Vec::new();
        };

        let target = self.params.target_group_size.max(1);
        let group_count = positions.len().div_ceil(target);
        let resolution = cells_per_axis(group_count, self.params.max_cells_per_axis);

        // Axes with near-zero extent collapse to a single cell.
        let extent = bounds.extent();
        let cells = [
            axis_cells(extent.x, resolution),
            axis_cells(extent.y, resolution),
            axis_cells(extent.z, resolution),
        ];

        let mut binned: BTreeMap<(usize, usize, usize), Vec<u32>> = BTreeMap::new();
        for (i, p) in positions.iter().enumerate() {
            let key = (
                cell_of(p.x - bounds.min.x, extent.x, cells[0]),
                cell_of(p.y - bounds.min.y, extent.y, cells[1]),
                cell_of(p.z - bounds.min.z, extent.z, cells[2]),
            );
            #[allow(clippy::cast_possible_truncation)]
            binned.entry(key).or_default().push(i as u32);
        }

        binned
            .into_values()
            .map(|indices| {
                let centroid = centroid_of(positions, &indices);
                VertexGroup { indices, centroid }
            })
            .collect()
    }
}

/// Returns the grid resolution whose cell count covers `group_count` groups.
fn cells_per_axis(group_count: usize, max_cells: usize) -> usize {
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let cells = (group_count as f64).cbrt().ceil() as usize;
    cells.clamp(1, max_cells.max(1))
}

/// Returns the cell count for one axis given its spatial extent.
fn axis_cells(extent: f64, resolution: usize) -> usize {
    if extent < TOLERANCE {
        1
    } else {
        resolution
    }
}

/// Maps an offset from the minimum corner to a cell index along one axis.
///
/// Offsets on the maximum boundary land in the last cell.
fn cell_of(offset: f64, extent: f64, cells: usize) -> usize {
    if cells <= 1 || extent < TOLERANCE {
        return 0;
    }
    #[allow(clippy::cast_precision_loss)]
    let cell_size = extent / cells as f64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cell = (offset / cell_size).floor() as usize;
    cell.min(cells - 1)
}

/// Mean position of the given vertices.
fn centroid_of(positions: &[Point3], indices: &[u32]) -> Point3 {
    let mut sum = Vector3::zeros();
    for &i in indices {
        sum += positions[i as usize].coords;
    }
    #[allow(clippy::cast_precision_loss)]
    Point3::from(sum / indices.len() as f64)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn groups_of(positions: Vec<Point3>, params: GroupingParams) -> Vec<VertexGroup> {
        BuildVertexGroups::new(params).execute(&MeshData::new(positions))
    }

    /// Collects every vertex index across all groups, sorted.
    fn collect_indices(groups: &[VertexGroup]) -> Vec<u32> {
        let mut indices: Vec<u32> = groups
            .iter()
            .flat_map(|g| g.indices.iter().copied())
            .collect();
        indices.sort_unstable();
        indices
    }

    #[test]
    fn empty_mesh_yields_no_groups() {
        let groups = groups_of(Vec::new(), GroupingParams::default());
        assert!(groups.is_empty());
    }

    #[test]
    fn coincident_vertices_yield_single_group() {
        let point = Point3::new(2.0, -1.0, 3.0);
        let groups = groups_of(
            vec![point; 5],
            GroupingParams {
                target_group_size: 1,
                ..GroupingParams::default()
            },
        );

        assert_eq!(groups.len(), 1);
        assert_eq!(collect_indices(&groups), vec![0, 1, 2, 3, 4]);
        assert_relative_eq!(groups[0].centroid, point);
    }

    #[test]
    fn three_clusters_form_three_groups() {
        // Three well-separated clusters of three vertices each.
        let mut positions = Vec::new();
        for center in [(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)] {
            positions.push(Point3::new(center.0, center.1, 0.0));
            positions.push(Point3::new(center.0 + 0.2, center.1, 0.0));
            positions.push(Point3::new(center.0, center.1 + 0.2, 0.0));
        }

        let groups = groups_of(
            positions,
            GroupingParams {
                target_group_size: 3,
                ..GroupingParams::default()
            },
        );

        assert_eq!(groups.len(), 3);
        assert!(groups.iter().all(|g| g.len() == 3));
        assert_eq!(collect_indices(&groups), (0..9).collect::<Vec<u32>>());
    }

    #[test]
    fn lattice_partitions_into_even_cells() {
        // A 4x4x4 lattice with unit spacing splits into 2 cells per axis.
        let mut positions = Vec::new();
        for x in 0..4 {
            for y in 0..4 {
                for z in 0..4 {
                    positions.push(Point3::new(f64::from(x), f64::from(y), f64::from(z)));
                }
            }
        }

        let groups = groups_of(
            positions,
            GroupingParams {
                target_group_size: 10,
                ..GroupingParams::default()
            },
        );

        assert_eq!(groups.len(), 8);
        assert!(groups.iter().all(|g| g.len() == 8));
        assert_eq!(collect_indices(&groups), (0..64).collect::<Vec<u32>>());
    }

    #[test]
    fn zero_target_group_size_is_clamped() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ];

        let groups = groups_of(
            positions,
            GroupingParams {
                target_group_size: 0,
                ..GroupingParams::default()
            },
        );

        assert!(!groups.is_empty());
        assert_eq!(collect_indices(&groups), vec![0, 1, 2, 3]);
    }

    #[test]
    fn max_cells_per_axis_caps_resolution() {
        // 100 vertices along a line, one-vertex groups requested, but the
        // grid may not exceed 2 cells per axis: exactly 2 groups result.
        let positions: Vec<Point3> = (0..100)
            .map(|i| Point3::new(f64::from(i), 0.0, 0.0))
            .collect();

        let groups = groups_of(
            positions,
            GroupingParams {
                target_group_size: 1,
                max_cells_per_axis: 2,
            },
        );

        assert_eq!(groups.len(), 2);
        assert_eq!(collect_indices(&groups), (0..100).collect::<Vec<u32>>());
    }

    #[test]
    fn centroid_is_member_mean() {
        let groups = groups_of(
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 4.0, 6.0)],
            GroupingParams::default(),
        );

        assert_eq!(groups.len(), 1);
        assert_relative_eq!(groups[0].centroid, Point3::new(1.0, 2.0, 3.0));
    }
}
