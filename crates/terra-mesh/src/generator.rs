//! Terrain generation orchestrator.
//!
//! Owns the configuration and the noise field, draws an origin offset from
//! the seed source, runs sampling and mesh building, and publishes the result
//! to the render target.

use noise::{NoiseFn, Perlin};
use rand_chacha::ChaCha8Rng;

use crate::config::TerrainConfig;
use crate::error::{Collaborator, Result, TerrainError};
use crate::mesh::build_mesh;
use crate::noise_field::NoiseField;
use crate::orbit::OrbitRig;
use crate::render::{MeshStore, RenderTarget};
use crate::sampler::sample_heightmap;
use crate::seed::{self, draw_offset, SeedSource};

/// Drives heightmap sampling and meshing on request.
///
/// Setters only store values; nothing is regenerated until the next
/// [`generate`](Self::generate). A generation pass works on a snapshot of the
/// configuration taken when it starts. `generate` takes `&mut self`, so two
/// passes can never overlap.
pub struct TerrainGenerator<S = ChaCha8Rng, T = MeshStore, N = Perlin> {
    config: TerrainConfig,
    field: NoiseField<N>,
    seed_source: Option<S>,
    render_target: Option<T>,
    orbit: OrbitRig,
    last_offset: Option<(f64, f64)>,
}

impl TerrainGenerator {
    /// Generator on Perlin noise with no collaborators attached.
    pub fn new(config: TerrainConfig) -> Self {
        Self::with_noise(config, Perlin::new(0))
    }

    /// Generator with a `ChaCha8Rng` seed source and an in-memory [`MeshStore`].
    pub fn seeded(config: TerrainConfig, seed: u64) -> Self {
        let mut gen = Self::new(config);
        gen.attach_seed_source(seed::seeded(seed));
        gen.attach_render_target(MeshStore::new());
        gen
    }
}

impl<S, T, N> TerrainGenerator<S, T, N>
where
    S: SeedSource,
    T: RenderTarget,
    N: NoiseFn<f64, 2> + Sync,
{
    pub fn with_noise(config: TerrainConfig, noise: N) -> Self {
        Self {
            config,
            field: NoiseField::new(noise, 0.0, 0.0),
            seed_source: None,
            render_target: None,
            orbit: OrbitRig::default(),
            last_offset: None,
        }
    }

    pub fn attach_seed_source(&mut self, source: S) {
        self.seed_source = Some(source);
    }

    pub fn attach_render_target(&mut self, target: T) {
        self.render_target = Some(target);
    }

    pub fn render_target(&self) -> Option<&T> {
        self.render_target.as_ref()
    }

    pub fn take_render_target(&mut self) -> Option<T> {
        self.render_target.take()
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Orbit rig computed by the last successful generation.
    pub fn orbit(&self) -> OrbitRig {
        self.orbit
    }

    /// Noise-space origin used by the last successful generation.
    pub fn last_offset(&self) -> Option<(f64, f64)> {
        self.last_offset
    }

    // ── Setters ──────────────────────────────────────────────────────────────

    pub fn set_point_spacing(&mut self, value: f32) {
        self.config.point_spacing = value;
    }

    pub fn set_detail(&mut self, value: u32) {
        self.config.detail = value;
    }

    pub fn set_max_height(&mut self, value: f32) {
        self.config.max_height = value;
    }

    pub fn set_noise_step(&mut self, value: f64) {
        self.config.noise_step = value;
    }

    pub fn set_grid_size(&mut self, width: u32, depth: u32) {
        self.config.grid_width = width;
        self.config.grid_depth = depth;
    }

    pub fn set_noise_offset_scale(&mut self, value: f64) {
        self.config.noise_offset_scale = value;
    }

    pub fn set_config(&mut self, config: TerrainConfig) {
        self.config = config;
    }

    // ── Generation ───────────────────────────────────────────────────────────

    /// Regenerate the terrain at a freshly drawn noise origin.
    ///
    /// On failure nothing is published, no seed value is consumed, and the
    /// previously published mesh stays in place.
    pub fn generate(&mut self) -> Result<()> {
        let config = self.config.clone();
        self.check_ready(&config)?;

        let source = self
            .seed_source
            .as_mut()
            .ok_or(TerrainError::CollaboratorUnavailable(Collaborator::SeedSource))?;
        let (ox, oy) = draw_offset(source, config.noise_offset_scale);

        self.run(config, ox, oy)
    }

    /// Regenerate at an explicit noise origin. Does not touch the seed source.
    pub fn generate_with_offset(&mut self, offset_x: f64, offset_y: f64) -> Result<()> {
        let config = self.config.clone();
        self.check_ready(&config)?;
        self.run(config, offset_x, offset_y)
    }

    /// Validation and collaborator checks, all before any state changes.
    fn check_ready(&self, config: &TerrainConfig) -> Result<()> {
        let checked = match config.validate() {
            Ok(_) if self.render_target.is_none() => {
                Err(TerrainError::CollaboratorUnavailable(Collaborator::RenderTarget))
            }
            other => other.map(|_| ()),
        };
        if let Err(e) = &checked {
            tracing::warn!(error = %e, "terrain generation rejected");
        }
        checked
    }

    fn run(&mut self, config: TerrainConfig, offset_x: f64, offset_y: f64) -> Result<()> {
        let target = self
            .render_target
            .as_mut()
            .ok_or(TerrainError::CollaboratorUnavailable(Collaborator::RenderTarget))?;

        self.field.set_offset(offset_x, offset_y);
        let heightmap = sample_heightmap(&config, &self.field);
        let mesh = build_mesh(&heightmap, &config);
        drop(heightmap);

        let (vertices, triangles) = (mesh.vertex_count(), mesh.triangle_count());
        target.publish(mesh);
        target.set_anchor(config.anchor());

        self.orbit = OrbitRig::for_config(&config);
        self.last_offset = Some((offset_x, offset_y));

        tracing::info!(
            vertices,
            triangles,
            offset_x,
            offset_y,
            radius = self.orbit.radius,
            "published terrain mesh"
        );
        Ok(())
    }
}
