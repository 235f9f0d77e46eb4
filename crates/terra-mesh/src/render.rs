//! Rendering collaborator seam and a bundled in-memory target.
use crate::mesh::TerrainMesh;

/// Consumer of generated meshes.
///
/// `publish` replaces whatever mesh the target held before; the generator
/// never hands over a partially built mesh.
pub trait RenderTarget {
    fn publish(&mut self, mesh: TerrainMesh);

    /// World-space translation applied to the published mesh.
    fn set_anchor(&mut self, anchor: [f32; 3]);
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl Bounds {
    /// Bounds of `points`, or `None` when there are none.
    pub fn of(points: &[[f32; 3]]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut b = Bounds { min: *first, max: *first };
        for p in rest {
            for k in 0..3 {
                b.min[k] = b.min[k].min(p[k]);
                b.max[k] = b.max[k].max(p[k]);
            }
        }
        Some(b)
    }

    pub fn center(&self) -> [f32; 3] {
        [
            (self.min[0] + self.max[0]) * 0.5,
            (self.min[1] + self.max[1]) * 0.5,
            (self.min[2] + self.max[2]) * 0.5,
        ]
    }

    pub fn size(&self) -> [f32; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }
}

/// Per-vertex normals by area-weighted face averaging.
///
/// Each triangle adds its unnormalized cross product (length = 2·area) to its
/// three vertices; sums are then normalized. Vertices without a
/// non-degenerate adjacent face get `[0, 1, 0]`.
pub fn vertex_normals(mesh: &TerrainMesh) -> Vec<[f32; 3]> {
    let mut acc = vec![[0.0f32; 3]; mesh.vertices.len()];
    for [a, b, c] in mesh.triangles() {
        let (a, b, c) = (a as usize, b as usize, c as usize);
        let (pa, pb, pc) = (mesh.vertices[a], mesh.vertices[b], mesh.vertices[c]);
        let u = sub(pb, pa);
        let v = sub(pc, pa);
        let n = cross(u, v);
        for i in [a, b, c] {
            for k in 0..3 {
                acc[i][k] += n[k];
            }
        }
    }

    acc.into_iter()
        .map(|n| {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            if len > f32::EPSILON {
                [n[0] / len, n[1] / len, n[2] / len]
            } else {
                [0.0, 1.0, 0.0]
            }
        })
        .collect()
}

#[inline]
fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
fn cross(u: [f32; 3], v: [f32; 3]) -> [f32; 3] {
    [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ]
}

// ── In-memory target ──────────────────────────────────────────────────────────

/// Holds the most recently published mesh with its finalized attributes.
#[derive(Debug, Default)]
pub struct MeshStore {
    mesh: Option<TerrainMesh>,
    normals: Vec<[f32; 3]>,
    bounds: Option<Bounds>,
    anchor: [f32; 3],
    publish_count: u64,
}

impl MeshStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mesh(&self) -> Option<&TerrainMesh> {
        self.mesh.as_ref()
    }

    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    /// Bounds in mesh-local space (before the anchor translation).
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn anchor(&self) -> [f32; 3] {
        self.anchor
    }

    pub fn publish_count(&self) -> u64 {
        self.publish_count
    }
}

impl RenderTarget for MeshStore {
    fn publish(&mut self, mesh: TerrainMesh) {
        self.bounds = Bounds::of(&mesh.vertices);
        self.normals = vertex_normals(&mesh);
        self.mesh = Some(mesh);
        self.publish_count += 1;
    }

    fn set_anchor(&mut self, anchor: [f32; 3]) {
        self.anchor = anchor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::triangulate;
    use crate::grid::GridDims;
    use approx::assert_relative_eq;

    fn flat_quad() -> TerrainMesh {
        TerrainMesh {
            vertices: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 1.0]],
            indices: triangulate(GridDims::new(2, 2)),
        }
    }

    #[test]
    fn flat_mesh_normals_point_up() {
        for n in vertex_normals(&flat_quad()) {
            assert_relative_eq!(n[0], 0.0);
            assert_relative_eq!(n[1], 1.0);
            assert_relative_eq!(n[2], 0.0);
        }
    }

    #[test]
    fn larger_faces_weigh_more() {
        // Vertex 0 touches a big flat face and a small steep one.
        let mesh = TerrainMesh {
            vertices: vec![
                [0.0, 0.0, 0.0],
                [0.0, 0.0, 10.0],
                [10.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, -1.0],
            ],
            indices: vec![0, 1, 2, 0, 3, 4],
        };
        let normals = vertex_normals(&mesh);
        let n0 = normals[0];
        assert!(n0[1] > 0.99, "big horizontal face should dominate, got {n0:?}");
    }

    #[test]
    fn isolated_vertex_defaults_up() {
        let mesh = TerrainMesh { vertices: vec![[3.0, 4.0, 5.0]], indices: vec![] };
        assert_eq!(vertex_normals(&mesh), vec![[0.0, 1.0, 0.0]]);
    }

    #[test]
    fn bounds_cover_all_points() {
        let b = Bounds::of(&[[1.0, -2.0, 3.0], [-1.0, 5.0, 0.0], [0.5, 0.0, 7.0]]).unwrap();
        assert_eq!(b.min, [-1.0, -2.0, 0.0]);
        assert_eq!(b.max, [1.0, 5.0, 7.0]);
        assert_eq!(b.size(), [2.0, 7.0, 7.0]);
        assert_eq!(b.center(), [0.0, 1.5, 3.5]);
        assert!(Bounds::of(&[]).is_none());
    }

    #[test]
    fn publish_replaces_previous_mesh() {
        let mut store = MeshStore::new();
        assert!(store.mesh().is_none());

        store.publish(flat_quad());
        store.publish(TerrainMesh { vertices: vec![[0.0; 3]], indices: vec![] });

        assert_eq!(store.publish_count(), 2);
        assert_eq!(store.mesh().unwrap().vertex_count(), 1);
        assert_eq!(store.normals().len(), 1);
        assert_eq!(store.bounds().unwrap().size(), [0.0, 0.0, 0.0]);
    }
}
