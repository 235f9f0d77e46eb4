use serde::{Deserialize, Serialize};

use crate::error::{Result, TerrainError};
use crate::grid::GridDims;

/// Parameter set for one terrain generation pass.
///
/// Spacing, height, and noise step are deliberately unchecked: zero or
/// negative values give degenerate but well-defined geometry. Only the grid
/// dimensions and detail are validated, and only when generation starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Footprint along X in base-grid cells (before detail).
    pub grid_width: u32,
    /// Footprint along Z in base-grid cells (before detail).
    pub grid_depth: u32,
    /// World-space distance between adjacent base-grid vertices.
    pub point_spacing: f32,
    /// Elevation of a noise sample of 1.0.
    pub max_height: f32,
    /// Sample-density multiplier; leaves the world footprint unchanged.
    pub detail: u32,
    /// Noise-space distance between adjacent base-grid samples.
    pub noise_step: f64,
    /// Scales a `[0, 1)` seed draw into a noise-space origin offset.
    pub noise_offset_scale: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            grid_width: 30,
            grid_depth: 30,
            point_spacing: 10.0,
            max_height: 10.0,
            detail: 1,
            noise_step: 0.25,
            noise_offset_scale: 1024.0,
        }
    }
}

impl TerrainConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject configurations that cannot produce a sample grid.
    ///
    /// Every vertex must also be addressable by a `u32` index.
    pub fn validate(&self) -> Result<GridDims> {
        if self.grid_width == 0 || self.grid_depth == 0 {
            return Err(TerrainError::InvalidConfiguration(format!(
                "grid dimensions must be positive, got {}x{}",
                self.grid_width, self.grid_depth
            )));
        }
        if self.detail == 0 {
            return Err(TerrainError::InvalidConfiguration(
                "detail must be at least 1".to_string(),
            ));
        }

        let width = self.grid_width as u64 * self.detail as u64;
        let depth = self.grid_depth as u64 * self.detail as u64;
        let addressable = width
            .checked_mul(depth)
            .is_some_and(|n| n - 1 <= u32::MAX as u64 && usize::try_from(n).is_ok());
        if !addressable {
            return Err(TerrainError::InvalidConfiguration(format!(
                "effective grid {width}x{depth} exceeds the u32 index range"
            )));
        }

        Ok(GridDims::new(width as usize, depth as usize))
    }

    /// Effective sample grid `(grid_width·detail) × (grid_depth·detail)`.
    ///
    /// Does not validate; call [`validate`](Self::validate) first when the
    /// configuration comes from outside.
    pub fn effective_dims(&self) -> GridDims {
        GridDims::new(
            self.grid_width as usize * self.detail as usize,
            self.grid_depth as usize * self.detail as usize,
        )
    }

    /// World-space extent `(X, Z)` of the terrain. Independent of `detail`.
    pub fn footprint(&self) -> (f32, f32) {
        (
            self.grid_width as f32 * self.point_spacing,
            self.grid_depth as f32 * self.point_spacing,
        )
    }

    /// Translation that centres the footprint on the world origin.
    pub fn anchor(&self) -> [f32; 3] {
        let (fx, fz) = self.footprint();
        [-fx / 2.0, 0.0, -fz / 2.0]
    }

    /// Camera orbit radius: the longer footprint side.
    pub fn orbit_radius(&self) -> f32 {
        self.grid_width.max(self.grid_depth) as f32 * self.point_spacing
    }

    /// World-space distance between adjacent effective-grid vertices.
    #[inline]
    pub fn vertex_spacing(&self) -> f32 {
        self.point_spacing / self.detail as f32
    }

    /// Noise-space distance between adjacent effective-grid samples.
    #[inline]
    pub fn sample_step(&self) -> f64 {
        self.noise_step / self.detail as f64
    }
}
