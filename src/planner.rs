use crate::balloon::{Balloon, altitude_options};
use crate::config::Params;
use crate::grid::{GridDims, Vec2, dist_sq};
use crate::wind::WindField;

/// Bounded-horizon lookahead over altitude-delta sequences.
///
/// Pure function over the immutable wind field: branching factor <= 3,
/// cost O(3^horizon) wind lookups per call. Returns the delta to apply
/// this tick; ties resolve in option order (hold, ascend, descend).
pub fn plan(wind: &WindField, b: &Balloon, params: &Params) -> i8 {
    let dims = wind.dims();
    // Over dense target bands the speed term flips: hover, don't race.
    let alpha = if in_slow_band(b.pos.c, &params.slow_bands) {
        -params.speed_weight
    } else {
        params.speed_weight
    };
    let search = Search {
        wind,
        dims,
        start: b.pos,
        target_row: b.target_row,
        horizon: params.horizon,
        alpha,
        bounds_penalty: params.bounds_penalty,
    };

    let mut best_delta = 0i8;
    let mut best = f32::NEG_INFINITY;
    for delta in altitude_options(b.altitude, dims.alts) {
        // Wind is sampled at the tier the delta puts us on.
        let tier = (b.altitude as i8 + delta) as u8;
        let next = b.pos.add_wrapped(wind.drift(b.pos, tier), dims.cols);
        let score = search.descend(next, tier, 1);
        if score > best {
            best = score;
            best_delta = delta;
        }
    }
    best_delta
}

fn in_slow_band(col: i32, bands: &[(i32, i32)]) -> bool {
    bands.iter().any(|&(lo, hi)| col > lo && col < hi)
}

struct Search<'a> {
    wind: &'a WindField,
    dims: GridDims,
    start: Vec2,
    target_row: i32,
    horizon: usize,
    alpha: f32,
    bounds_penalty: f32,
}

impl Search<'_> {
    /// Value of a node = best achievable leaf score below it. Nodes
    /// that have already left the map rows are scored immediately (the
    /// wind field is never indexed out of range).
    fn descend(&self, pos: Vec2, alt: u8, depth: usize) -> f32 {
        if depth >= self.horizon || !self.dims.row_in_range(pos.r) {
            return self.leaf_score(pos);
        }
        let mut best = f32::NEG_INFINITY;
        for delta in altitude_options(alt, self.dims.alts) {
            let tier = (alt as i8 + delta) as u8;
            let next = pos.add_wrapped(self.wind.drift(pos, tier), self.dims.cols);
            best = best.max(self.descend(next, tier, depth + 1));
        }
        best
    }

    fn leaf_score(&self, pos: Vec2) -> f32 {
        let row_gap = (pos.r - self.target_row).abs() as f32;
        let speed = (dist_sq(self.start, pos, self.dims.cols) as f32).sqrt();
        let mut score = 3.0 / (row_gap + 1.0) + self.alpha * speed;
        if !self.dims.row_in_range(pos.r) {
            score += self.bounds_penalty;
        }
        score
    }
}
