//! Effective sample-grid dimensions and row-major addressing.
//!
//! `GridDims::index` is the only place a 2D grid position is flattened.
//! Heightmap storage, vertex emission, and triangle indices all go through it.

/// Width (`x`, fast-varying) and depth (`y`, rows) of a sample grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDims {
    pub width: usize,
    pub depth: usize,
}

impl GridDims {
    pub fn new(width: usize, depth: usize) -> Self {
        Self { width, depth }
    }

    /// Flattened position of column `x` in row `y`: `y·width + x`.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.depth, "({x}, {y}) outside {self:?}");
        y * self.width + x
    }

    /// Number of cells (and mesh vertices).
    pub fn len(&self) -> usize {
        self.width * self.depth
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of interior quads, i.e. cells with a right and a lower neighbour.
    pub fn quad_count(&self) -> usize {
        self.width.saturating_sub(1) * self.depth.saturating_sub(1)
    }

    /// Iterate `(x, y)` in row-major order (`y` outer, `x` inner).
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.depth).flat_map(move |y| (0..self.width).map(move |x| (x, y)))
    }
}
