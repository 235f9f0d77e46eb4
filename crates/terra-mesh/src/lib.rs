//! Deterministic procedural terrain meshes.
//!
//! A coherent-noise field is sampled over a rectangular grid, the samples are
//! scaled to elevations, and the grid is triangulated into a vertex/index mesh
//! that is handed to a rendering collaborator.
//!
//! Pipeline: [`sampler::sample_heightmap`] → [`mesh::build_mesh`], driven by
//! [`generator::TerrainGenerator`].
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod heightmap;
pub mod mesh;
pub mod noise_field;
pub mod orbit;
pub mod render;
pub mod sampler;
pub mod seed;

pub use config::TerrainConfig;
pub use error::{Collaborator, TerrainError};
pub use generator::TerrainGenerator;
pub use mesh::TerrainMesh;
pub use render::{MeshStore, RenderTarget};
