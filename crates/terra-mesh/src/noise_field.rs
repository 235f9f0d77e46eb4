//! Normalized 2D coherent noise with a noise-space origin offset.
//!
//! Wraps any `noise::NoiseFn<f64, 2>` (Perlin by default). The primitive's
//! native `[-1, 1]` range is mapped to `[0, 1]` so a sample can be used
//! directly as a fraction of the terrain's maximum height.
use noise::{NoiseFn, Perlin};

pub struct NoiseField<N = Perlin> {
    noise: N,
    offset_x: f64,
    offset_y: f64,
}

impl NoiseField<Perlin> {
    /// Perlin field with the given permutation seed and origin offset.
    pub fn perlin(seed: u32, offset_x: f64, offset_y: f64) -> Self {
        Self::new(Perlin::new(seed), offset_x, offset_y)
    }
}

impl<N: NoiseFn<f64, 2>> NoiseField<N> {
    pub fn new(noise: N, offset_x: f64, offset_y: f64) -> Self {
        Self { noise, offset_x, offset_y }
    }

    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    /// Move the noise-space origin. Called once per generation pass.
    pub fn set_offset(&mut self, offset_x: f64, offset_y: f64) {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
    }

    /// Sample at `(x, y)` relative to the origin offset. Always in `[0, 1]`.
    #[inline]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let raw = self.noise.get([self.offset_x + x, self.offset_y + y]);
        normalize(raw)
    }
}

/// Map a `[-1, 1]` primitive value to `[0, 1]`, clamping overshoot.
#[inline]
pub fn normalize(raw: f64) -> f64 {
    ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use noise::Constant;

    #[test]
    fn constant_primitive_is_rescaled() {
        let field = NoiseField::new(Constant::new(0.5), 3.0, 4.0);
        assert_abs_diff_eq!(field.sample(0.0, 0.0), 0.75);
        assert_abs_diff_eq!(NoiseField::new(Constant::new(-1.0), 0.0, 0.0).sample(1.0, 1.0), 0.0);
        assert_abs_diff_eq!(NoiseField::new(Constant::new(1.0), 0.0, 0.0).sample(1.0, 1.0), 1.0);
    }

    #[test]
    fn overshoot_is_clamped() {
        assert_eq!(normalize(1.3), 1.0);
        assert_eq!(normalize(-1.7), 0.0);
    }

    #[test]
    fn perlin_samples_stay_in_unit_range() {
        let field = NoiseField::perlin(7, 512.3, 91.7);
        for i in 0..64 {
            for j in 0..64 {
                let v = field.sample(i as f64 * 0.173, j as f64 * 0.311);
                assert!((0.0..=1.0).contains(&v), "sample ({i}, {j}) = {v}");
            }
        }
    }

    #[test]
    fn offset_translates_the_field() {
        let shifted = NoiseField::perlin(1, 10.0, 20.0);
        let origin = NoiseField::perlin(1, 0.0, 0.0);
        assert_abs_diff_eq!(shifted.sample(0.3, 0.4), origin.sample(10.3, 20.4), epsilon = 1e-9);

        let mut moved = NoiseField::perlin(1, 0.0, 0.0);
        moved.set_offset(10.0, 20.0);
        assert_eq!(moved.offset(), (10.0, 20.0));
        assert_eq!(moved.sample(0.3, 0.4), shifted.sample(0.3, 0.4));
    }

    #[test]
    fn nearby_inputs_give_nearby_outputs() {
        let field = NoiseField::perlin(3, 100.0, 200.0);
        let a = field.sample(1.5, 2.5);
        let b = field.sample(1.5001, 2.5001);
        assert!((a - b).abs() < 1e-2, "|{a} - {b}| too large for a 1e-4 step");
    }
}
