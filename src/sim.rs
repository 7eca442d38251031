use crate::Scenario;
use crate::balloon::Balloon;
use crate::config::{LaunchRule, Params};
use crate::coverage::{self, TargetCell};
use crate::launch::LaunchHistory;
use crate::planner;
use crate::rng::Rng;

pub const SALT_LAUNCH: u64 = 0x10A6_C4ED_BA11_0075;

/// One simulation run: a fleet over the shared wind field, advanced in
/// discrete ticks. Balloons are processed in fixed index order each
/// tick so launch-pad contention resolves deterministically.
pub struct Simulation<'a> {
    scenario: &'a Scenario,
    params: &'a Params,
    balloons: Vec<Balloon>,
    targets: Vec<TargetCell>,
    history: LaunchHistory,
    rng: Rng,
    tick: usize,
}

impl<'a> Simulation<'a> {
    /// One balloon per entry of `target_rows`, all grounded at the
    /// shared starting cell. Greedy-assignment trials pass partial
    /// fleets here; the real run passes the full assignment.
    pub fn new(scenario: &'a Scenario, target_rows: &[i32], params: &'a Params, seed: u64) -> Self {
        let balloons = target_rows
            .iter()
            .map(|&row| Balloon::grounded(scenario.start, row, scenario.radius))
            .collect();
        let targets = scenario.targets.iter().map(|&p| TargetCell::new(p)).collect();
        Self {
            scenario,
            params,
            balloons,
            targets,
            history: LaunchHistory::new(),
            rng: Rng::new(seed ^ SALT_LAUNCH),
            tick: 0,
        }
    }

    /// Advance one tick. Returns the altitude delta applied per
    /// balloon in fleet order: +1 on launch, 0 for grounded holds and
    /// lost balloons.
    pub fn step(&mut self) -> Vec<i8> {
        let dims = self.scenario.dims;
        let cols = dims.cols;
        let mut deltas = vec![0i8; self.balloons.len()];

        for i in 0..self.balloons.len() {
            if self.balloons[i].lost {
                continue;
            }
            if self.balloons[i].altitude == 0 {
                let go = match self.params.launch {
                    LaunchRule::Spacing => self.history.clears(i, &self.balloons, cols),
                    LaunchRule::Probabilistic { threshold } => self.rng.next_f32() < threshold,
                };
                if go {
                    let b = &mut self.balloons[i];
                    let v = self.scenario.wind.drift(b.pos, 1);
                    b.pos = b.pos.add_wrapped(v, cols);
                    b.altitude = 1;
                    if !dims.row_in_range(b.pos.r) {
                        b.lost = true;
                    }
                    self.history.record(b.target_row, i);
                    deltas[i] = 1;
                }
                continue;
            }

            let delta = planner::plan(&self.scenario.wind, &self.balloons[i], self.params);
            let b = &mut self.balloons[i];
            let tier = (b.altitude as i8 + delta) as u8;
            let v = self.scenario.wind.drift(b.pos, tier);
            b.pos = b.pos.add_wrapped(v, cols);
            b.altitude = tier;
            if !dims.row_in_range(b.pos.r) {
                b.lost = true;
            }
            deltas[i] = delta;
        }

        // Coverage is sampled after every balloon has moved.
        coverage::accumulate(&mut self.targets, &self.balloons, cols);
        self.tick += 1;
        deltas
    }

    /// Run the remaining ticks and return the final score.
    pub fn run_to_end(&mut self) -> u64 {
        while self.tick < self.scenario.total_ticks {
            self.step();
        }
        self.score()
    }

    pub fn score(&self) -> u64 {
        coverage::total(&self.targets)
    }

    pub fn balloons(&self) -> &[Balloon] {
        &self.balloons
    }

    pub fn targets(&self) -> &[TargetCell] {
        &self.targets
    }

    pub fn tick(&self) -> usize {
        self.tick
    }

    /// Final balloon and target state, for external samplers.
    pub fn into_parts(self) -> (Vec<Balloon>, Vec<TargetCell>) {
        (self.balloons, self.targets)
    }
}
