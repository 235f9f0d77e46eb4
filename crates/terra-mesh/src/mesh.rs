//! Heightmap → triangle mesh.
//!
//! One vertex per heightmap cell and two triangles per interior quad. For the
//! quad with top-left corner `(x, y)`:
//!
//! ```text
//!   A: (x+1, y+1) (x+1, y) (x, y)
//!   B: (x, y)     (x, y+1) (x+1, y+1)
//! ```
//!
//! Both triangles share the `(x, y)`–`(x+1, y+1)` diagonal and wind the same
//! way in every cell, giving a crack-free surface facing +Y.
use serde::{Deserialize, Serialize};

use crate::config::TerrainConfig;
use crate::grid::GridDims;
use crate::heightmap::Heightmap;

/// Vertex and index buffers of a generated terrain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TerrainMesh {
    /// World-space positions, row-major (`GridDims::index` order).
    pub vertices: Vec<[f32; 3]>,
    /// Triangle list, three vertex indices per triangle.
    pub indices: Vec<u32>,
}

impl TerrainMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

/// Build the terrain mesh for `heightmap` under `config`.
///
/// Vertex `(x, y)` sits at `(x·spacing/detail, h·max_height, y·spacing/detail)`.
/// Grids narrower than two samples on either axis give vertices but no
/// triangles.
pub fn build_mesh(heightmap: &Heightmap, config: &TerrainConfig) -> TerrainMesh {
    let dims = heightmap.dims;
    let detail = config.detail as f32;

    let mut vertices = vec![[0.0f32; 3]; dims.len()];
    for (x, y) in dims.positions() {
        vertices[dims.index(x, y)] = [
            x as f32 * config.point_spacing / detail,
            heightmap.get(x, y) * config.max_height,
            y as f32 * config.point_spacing / detail,
        ];
    }

    let indices = triangulate(dims);

    tracing::debug!(
        vertices = vertices.len(),
        triangles = indices.len() / 3,
        "built terrain mesh"
    );
    TerrainMesh { vertices, indices }
}

/// Index buffer for a `dims` grid: six indices per interior quad.
///
/// Callers guarantee `dims.len()` fits the `u32` range.
pub fn triangulate(dims: GridDims) -> Vec<u32> {
    let at = |x: usize, y: usize| dims.index(x, y) as u32;

    let mut indices = Vec::with_capacity(dims.quad_count() * 6);
    for y in 0..dims.depth.saturating_sub(1) {
        for x in 0..dims.width.saturating_sub(1) {
            indices.extend_from_slice(&[at(x + 1, y + 1), at(x + 1, y), at(x, y)]);
            indices.extend_from_slice(&[at(x, y), at(x, y + 1), at(x + 1, y + 1)]);
        }
    }
    indices
}
