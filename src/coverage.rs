use rayon::prelude::*;

use crate::balloon::Balloon;
use crate::grid::Vec2;

/// A fixed ground cell to cover. The counter accrues at most one point
/// per tick however many balloons sit overhead.
#[derive(Clone, Debug)]
pub struct TargetCell {
    pub pos: Vec2,
    pub coverage: u32,
}

impl TargetCell {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, coverage: 0 }
    }
}

/// Mark every target covered by at least one non-lost balloon this
/// tick. The check short-circuits at the first covering balloon, and
/// targets are independent, so the pass parallelizes cleanly.
/// Returns how many targets were covered this tick.
pub fn accumulate(targets: &mut [TargetCell], balloons: &[Balloon], cols: i32) -> usize {
    targets
        .par_iter_mut()
        .map(|t| {
            if balloons.iter().any(|b| !b.lost && b.covers(t.pos, cols)) {
                t.coverage += 1;
                1
            } else {
                0
            }
        })
        .sum()
}

/// Final score: sum of all per-target counters.
pub fn total(targets: &[TargetCell]) -> u64 {
    targets.iter().map(|t| t.coverage as u64).sum()
}
