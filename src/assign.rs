use rayon::prelude::*;

use crate::Scenario;
use crate::config::{AssignRule, Params};
use crate::rng::Rng;
use crate::sim::Simulation;

pub const SALT_ASSIGN: u64 = 0x7A26_E7A5_51C9_B045;

/// Pre-simulation policy: one target row per balloon.
pub fn assign_targets(scenario: &Scenario, params: &Params, seed: u64) -> Vec<i32> {
    match params.assign {
        AssignRule::RandomRows => random_proportional(scenario, None, seed),
        AssignRule::RandomBands { stride } => random_proportional(scenario, Some(stride), seed),
        AssignRule::Greedy { row_hi, row_lo } => {
            greedy_incremental(scenario, params, row_hi, row_lo, seed)
        }
    }
}

/// Density-proportional draw: every target cell contributes its row
/// (or its band's center row) to a weighted pool, clipped into the
/// safe range [radius, rows - radius - 1], and each balloon draws
/// independently.
fn random_proportional(scenario: &Scenario, stride: Option<i32>, seed: u64) -> Vec<i32> {
    let radius = scenario.radius;
    let lo = radius;
    let hi = scenario.dims.rows - radius - 1;

    let pool: Vec<i32> = scenario
        .targets
        .iter()
        .map(|t| {
            let row = match stride {
                None => t.r,
                Some(s) => {
                    // Bands of `s` rows starting at `radius`; a band is
                    // represented by its center row.
                    let band = (t.r - radius).div_euclid(s);
                    radius + band * s + s / 2
                }
            };
            row.clamp(lo, hi)
        })
        .collect();
    assert!(!pool.is_empty(), "no target cells to weight");

    let mut rng = Rng::new(seed ^ SALT_ASSIGN);
    (0..scenario.balloon_count)
        .map(|_| pool[rng.range_usize(pool.len())])
        .collect()
}

/// Greedy incremental search: grow the assignment one balloon at a
/// time, scoring every candidate row with a full-horizon trial run of
/// the fleet so far plus one trial balloon. Trials own their state and
/// run in parallel; ties go to the largest row.
fn greedy_incremental(
    scenario: &Scenario,
    params: &Params,
    row_hi: i32,
    row_lo: i32,
    seed: u64,
) -> Vec<i32> {
    assert!(row_lo <= row_hi, "empty greedy scan range");
    let mut assigned: Vec<i32> = Vec::with_capacity(scenario.balloon_count);

    for _ in 0..scenario.balloon_count {
        let scores: Vec<u64> = (row_lo..=row_hi)
            .into_par_iter()
            .map(|row| {
                let mut rows = assigned.clone();
                rows.push(row);
                Simulation::new(scenario, &rows, params, seed).run_to_end()
            })
            .collect();

        let mut best_row = row_lo;
        let mut best_score = 0u64;
        for (row, &score) in (row_lo..=row_hi).zip(scores.iter()) {
            // >= so the largest row wins ties in this ascending scan.
            if score >= best_score {
                best_row = row;
                best_score = score;
            }
        }
        assigned.push(best_row);
    }
    assigned
}
