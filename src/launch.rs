use std::collections::HashMap;

use crate::balloon::Balloon;
use crate::grid::dist_sq;

/// Most recently launched balloon per target row, by index into the
/// fleet. Scoped to one simulation run.
#[derive(Default)]
pub struct LaunchHistory {
    last: HashMap<i32, usize>,
}

impl LaunchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spacing policy: a grounded balloon may ascend if no balloon has
    /// launched toward its target row yet, or if the last one has
    /// drifted more than twice the coverage radius away. Keeps
    /// same-row balloons from covering the same cells in lockstep.
    pub fn clears(&self, idx: usize, balloons: &[Balloon], cols: i32) -> bool {
        let b = &balloons[idx];
        match self.last.get(&b.target_row) {
            None => true,
            Some(&prev) => {
                let spacing = 2 * b.radius as i64;
                dist_sq(b.pos, balloons[prev].pos, cols) > spacing * spacing
            }
        }
    }

    pub fn record(&mut self, target_row: i32, idx: usize) {
        self.last.insert(target_row, idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Vec2;

    fn fleet(positions: &[(i32, i32)], target_row: i32, radius: i32) -> Vec<Balloon> {
        positions
            .iter()
            .map(|&(r, c)| Balloon {
                pos: Vec2::new(r, c),
                altitude: 0,
                target_row,
                radius,
                lost: false,
            })
            .collect()
    }

    #[test]
    fn first_launch_per_row_always_clears() {
        let balloons = fleet(&[(1, 0)], 5, 3);
        let hist = LaunchHistory::new();
        assert!(hist.clears(0, &balloons, 300));
    }

    #[test]
    fn spacing_is_strict_at_twice_the_radius() {
        // Previous balloon sits exactly 2r away: not cleared yet.
        let mut balloons = fleet(&[(1, 0), (7, 0)], 5, 3);
        let mut hist = LaunchHistory::new();
        hist.record(5, 1);
        assert!(!hist.clears(0, &balloons, 300));
        // One row further and the pad clears.
        balloons[1].pos = Vec2::new(8, 0);
        assert!(hist.clears(0, &balloons, 300));
    }

    #[test]
    fn rows_do_not_contend_with_each_other() {
        let mut balloons = fleet(&[(1, 0), (1, 0)], 5, 3);
        balloons[1].target_row = 9;
        let mut hist = LaunchHistory::new();
        hist.record(9, 1);
        // Row 5 has no launch on record; co-located row-9 entry is irrelevant.
        assert!(hist.clears(0, &balloons, 300));
    }
}
