/// Grid geometry for the cylindrical map: rows are bounded, columns
/// wrap east-west. Balloon rows live in [1, rows]; wind-field rows in
/// [0, rows); columns in [0, cols) everywhere.
#[derive(Clone, Copy, Debug)]
pub struct GridDims {
    pub rows: i32,
    pub cols: i32,
    pub alts: u8,
}

impl GridDims {
    /// True while a balloon is still over the map (rows are 1-based).
    #[inline]
    pub fn row_in_range(&self, r: i32) -> bool {
        r >= 1 && r <= self.rows
    }
}

/// Signed integer pair used both as a position and as a displacement.
/// Addition wraps the column; the row is unbounded (bounds are checked
/// separately by the lifecycle code).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vec2 {
    pub r: i32,
    pub c: i32,
}

impl Vec2 {
    pub fn new(r: i32, c: i32) -> Self {
        Self { r, c }
    }

    #[inline]
    pub fn add_wrapped(self, d: Vec2, cols: i32) -> Vec2 {
        Vec2 {
            r: self.r + d.r,
            c: (self.c + d.c).rem_euclid(cols),
        }
    }
}

/// Shortest column distance on the cylinder.
#[inline]
pub fn column_dist(c1: i32, c2: i32, cols: i32) -> i32 {
    let d = (c1 - c2).abs();
    d.min(cols - d)
}

/// Squared Euclidean distance with E-W wrapping on the column axis.
#[inline]
pub fn dist_sq(a: Vec2, b: Vec2, cols: i32) -> i64 {
    let dr = (a.r - b.r) as i64;
    let dc = column_dist(a.c, b.c, cols) as i64;
    dr * dr + dc * dc
}
