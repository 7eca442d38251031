use crate::grid::{Vec2, column_dist};

/// One altitude-steerable balloon. Grounded at altitude 0, airborne in
/// tiers 1..=A, or lost (terminal — frozen and excluded from coverage).
#[derive(Clone, Debug)]
pub struct Balloon {
    pub pos: Vec2,
    pub altitude: u8,
    pub target_row: i32,
    pub radius: i32,
    pub lost: bool,
}

impl Balloon {
    pub fn grounded(start: Vec2, target_row: i32, radius: i32) -> Self {
        Self {
            pos: start,
            altitude: 0,
            target_row,
            radius,
            lost: false,
        }
    }

    /// Circular coverage with wrapped columns. Strict inequality: a
    /// cell exactly at distance `radius` is not covered.
    #[inline]
    pub fn covers(&self, target: Vec2, cols: i32) -> bool {
        let dr = (self.pos.r - target.r) as i64;
        let dc = column_dist(self.pos.c, target.c, cols) as i64;
        dr * dr + dc * dc < (self.radius as i64) * (self.radius as i64)
    }
}

/// Altitude deltas available at tier `alt`, in tie-break order:
/// hold, then ascend (if below the top tier), then descend (if above
/// tier 1 — airborne balloons never steer back to the ground).
#[inline]
pub fn altitude_options(alt: u8, alts: u8) -> impl Iterator<Item = i8> {
    debug_assert!(alt >= 1, "options are for airborne balloons");
    let mut out = [0i8; 3];
    let mut n = 1;
    if alt < alts {
        out[n] = 1;
        n += 1;
    }
    if alt > 1 {
        out[n] = -1;
        n += 1;
    }
    out.into_iter().take(n)
}
