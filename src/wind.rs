use crate::grid::{GridDims, Vec2};

/// Immutable 3-D wind field: one displacement vector per
/// (row, column, altitude tier). Built once at load time.
///
/// Tiers are 1-based and map directly onto storage: tier t lives at
/// flat offset (t-1)*rows*cols. Tier 0 ("grounded") has no wind.
#[derive(Clone, Debug)]
pub struct WindField {
    dims: GridDims,
    data: Vec<Vec2>,
}

impl WindField {
    pub fn new(dims: GridDims, data: Vec<Vec2>) -> Self {
        assert_eq!(
            data.len(),
            dims.alts as usize * dims.rows as usize * dims.cols as usize,
            "wind field size must be alts * rows * cols"
        );
        Self { dims, data }
    }

    /// Field with the same vector everywhere (test scenarios).
    pub fn uniform(dims: GridDims, v: Vec2) -> Self {
        let n = dims.alts as usize * dims.rows as usize * dims.cols as usize;
        Self {
            dims,
            data: vec![v; n],
        }
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    #[inline]
    fn idx(&self, row: usize, col: usize, tier: usize) -> usize {
        debug_assert!(
            row < self.dims.rows as usize
                && col < self.dims.cols as usize
                && (1..=self.dims.alts as usize).contains(&tier)
        );
        ((tier - 1) * self.dims.rows as usize + row) * self.dims.cols as usize + col
    }

    /// Vector at a 0-based grid cell and a 1-based altitude tier.
    #[inline]
    pub fn at(&self, row: usize, col: usize, tier: usize) -> Vec2 {
        self.data[self.idx(row, col, tier)]
    }

    /// Displacement acting on a balloon at `pos` (1-based row) flying
    /// at `tier`. Caller guarantees the position is still on the map.
    #[inline]
    pub fn drift(&self, pos: Vec2, tier: u8) -> Vec2 {
        debug_assert!(self.dims.row_in_range(pos.r));
        self.at((pos.r - 1) as usize, pos.c as usize, tier as usize)
    }
}
