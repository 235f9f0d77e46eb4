use crate::grid::GridDims;

/// A 2D grid of normalized noise samples in `[0, 1]`, row-major.
///
/// Built fresh for every generation pass and dropped once the mesh exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Heightmap {
    /// Row-major samples, addressed through [`GridDims::index`].
    pub data: Vec<f32>,
    pub dims: GridDims,
}

impl Heightmap {
    /// Create a heightmap filled with the given value.
    pub fn new(dims: GridDims, fill: f32) -> Self {
        Self { data: vec![fill; dims.len()], dims }
    }

    pub fn width(&self) -> usize {
        self.dims.width
    }

    pub fn depth(&self) -> usize {
        self.dims.depth
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.dims.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, val: f32) {
        let idx = self.dims.index(x, y);
        self.data[idx] = val;
    }

    /// One row of samples (`y` fixed, `x` ascending).
    pub fn row(&self, y: usize) -> &[f32] {
        let start = self.dims.index(0, y);
        &self.data[start..start + self.dims.width]
    }

    pub fn min_value(&self) -> f32 {
        self.data.iter().cloned().fold(f32::INFINITY, f32::min)
    }

    pub fn max_value(&self) -> f32 {
        self.data.iter().cloned().fold(f32::NEG_INFINITY, f32::max)
    }
}
