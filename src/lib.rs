pub mod assign;
pub mod balloon;
pub mod config;
pub mod coverage;
pub mod grid;
pub mod launch;
pub mod loader;
pub mod movelog;
pub mod planner;
pub mod render;
pub mod rng;
pub mod sim;
pub mod wind;

use std::time::Instant;

use balloon::Balloon;
use config::Params;
use coverage::TargetCell;
use grid::{GridDims, Vec2};
use sim::Simulation;
use wind::WindField;

/// One loaded problem instance: grid geometry, fleet parameters, the
/// ground targets, and the immutable wind field.
pub struct Scenario {
    pub dims: GridDims,
    pub radius: i32,
    pub balloon_count: usize,
    pub total_ticks: usize,
    pub start: Vec2,
    pub targets: Vec<Vec2>,
    pub wind: WindField,
}

pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

/// Everything a run produces: the assignment, the per-tick deltas for
/// the move log, and the final balloon/target state for renderers.
pub struct RunResult {
    pub target_rows: Vec<i32>,
    pub moves: Vec<Vec<i8>>,
    pub targets: Vec<TargetCell>,
    pub balloons: Vec<Balloon>,
    pub score: u64,
}

pub fn run(scenario: &Scenario, params: &Params, seed: u64) -> (RunResult, Vec<Timing>) {
    let mut timings = Vec::new();
    let total_start = Instant::now();

    // 1. Assign a target row to every balloon
    let t = Instant::now();
    let target_rows = assign::assign_targets(scenario, params, seed);
    timings.push(Timing {
        name: "assign",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    // 2. Advance the fleet tick by tick
    let t = Instant::now();
    let mut sim = Simulation::new(scenario, &target_rows, params, seed);
    let mut moves = Vec::with_capacity(scenario.total_ticks);
    for _ in 0..scenario.total_ticks {
        moves.push(sim.step());
    }
    timings.push(Timing {
        name: "simulate",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    timings.push(Timing {
        name: "TOTAL",
        ms: total_start.elapsed().as_secs_f64() * 1000.0,
    });

    let score = sim.score();
    let (balloons, targets) = sim.into_parts();
    (
        RunResult {
            target_rows,
            moves,
            targets,
            balloons,
            score,
        },
        timings,
    )
}
