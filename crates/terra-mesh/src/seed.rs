//! Seed sources for the noise-space origin offset.
//!
//! Any `rand::Rng` is a seed source. [`seeded`] builds the default one on
//! `ChaCha8Rng`, whose stream is identical across platforms for a given seed.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Supplies values in `[0, 1)`, advancing its sequence on every call.
pub trait SeedSource {
    fn next_value(&mut self) -> f64;
}

impl<R: Rng> SeedSource for R {
    fn next_value(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Portable deterministic seed source.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Draw an `(x, y)` origin offset: one value per axis, X first.
pub fn draw_offset<S: SeedSource + ?Sized>(source: &mut S, scale: f64) -> (f64, f64) {
    let x = source.next_value() * scale;
    let y = source.next_value() * scale;
    (x, y)
}
