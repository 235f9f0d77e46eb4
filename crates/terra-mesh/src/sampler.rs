//! Heightmap sampling: one noise sample per effective-grid cell.
//!
//! Grid index `(x, y)` maps to noise-space
//! `(origin_x + x·noise_step/detail, origin_y + y·noise_step/detail)`, so a
//! higher `detail` samples the same noise-space span more densely and the
//! terrain keeps its shape across detail changes at a fixed origin.
use noise::NoiseFn;

use crate::config::TerrainConfig;
use crate::heightmap::Heightmap;
use crate::noise_field::NoiseField;

/// Sample `field` over the effective grid of `config`.
///
/// Expects a validated configuration; an empty effective grid yields an
/// empty heightmap.
pub fn sample_heightmap<N>(config: &TerrainConfig, field: &NoiseField<N>) -> Heightmap
where
    N: NoiseFn<f64, 2> + Sync,
{
    let dims = config.effective_dims();
    let mut hm = Heightmap::new(dims, 0.0);
    if dims.is_empty() {
        return hm;
    }

    let step = config.sample_step();
    // Each chunk is one row of `width` samples, i.e. GridDims::index(0, y)..
    let fill_row = |(y, row): (usize, &mut [f32])| {
        for (x, v) in row.iter_mut().enumerate() {
            *v = field.sample(x as f64 * step, y as f64 * step) as f32;
        }
    };

    #[cfg(feature = "threading")]
    {
        use rayon::prelude::*;
        hm.data.par_chunks_mut(dims.width).enumerate().for_each(fill_row);
    }
    #[cfg(not(feature = "threading"))]
    hm.data.chunks_mut(dims.width).enumerate().for_each(fill_row);

    tracing::debug!(width = dims.width, depth = dims.depth, step, "sampled heightmap");
    hm
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Primitive that returns `x / 100` so every sample encodes its x coordinate.
    struct RampX;

    impl NoiseFn<f64, 2> for RampX {
        fn get(&self, point: [f64; 2]) -> f64 {
            point[0] / 100.0
        }
    }

    fn small_config(detail: u32) -> TerrainConfig {
        TerrainConfig {
            grid_width: 4,
            grid_depth: 3,
            detail,
            noise_step: 0.5,
            ..TerrainConfig::default()
        }
    }

    #[test]
    fn shape_is_effective_grid() {
        let field = NoiseField::perlin(0, 0.0, 0.0);
        let hm = sample_heightmap(&small_config(3), &field);
        assert_eq!((hm.width(), hm.depth()), (12, 9));
        assert_eq!(hm.data.len(), 108);
    }

    #[test]
    fn samples_match_noise_coordinates() {
        let cfg = small_config(2);
        let field = NoiseField::perlin(11, 37.5, 12.25);
        let hm = sample_heightmap(&cfg, &field);
        let step = cfg.noise_step / cfg.detail as f64;
        for (x, y) in hm.dims.positions() {
            let expected = field.sample(x as f64 * step, y as f64 * step) as f32;
            assert_eq!(hm.get(x, y), expected, "mismatch at ({x}, {y})");
        }
    }

    #[test]
    fn x_index_drives_first_noise_coordinate() {
        let cfg = small_config(1);
        let field = NoiseField::new(RampX, 0.0, 0.0);
        let hm = sample_heightmap(&cfg, &field);
        // x·0.5 / 100 normalized: (v + 1) / 2.
        for (x, y) in hm.dims.positions() {
            let expected = (x as f64 * 0.5 / 100.0 + 1.0) / 2.0;
            assert_abs_diff_eq!(hm.get(x, y) as f64, expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn doubling_detail_interleaves_original_samples() {
        let field = NoiseField::perlin(5, 200.0, 300.0);
        let coarse = sample_heightmap(&small_config(1), &field);
        let fine = sample_heightmap(&small_config(2), &field);
        for (x, y) in coarse.dims.positions() {
            assert_abs_diff_eq!(coarse.get(x, y), fine.get(2 * x, 2 * y), epsilon = 1e-6);
        }
    }

    #[test]
    fn values_are_normalized() {
        let field = NoiseField::perlin(9, 1000.0, 17.0);
        let hm = sample_heightmap(&small_config(4), &field);
        assert!(hm.min_value() >= 0.0 && hm.max_value() <= 1.0);
    }
}
