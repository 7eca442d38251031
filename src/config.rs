use serde::Deserialize;

/// How grounded balloons decide to ascend.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchRule {
    /// Launch once the previous balloon for the same target row has
    /// drifted more than twice the coverage radius away. Deterministic.
    Spacing,
    /// Independent per-tick coin flip. Weaker fallback; balloons for
    /// the same row may launch nearly co-located.
    Probabilistic { threshold: f32 },
}

/// How balloons get their target rows before the run starts.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignRule {
    /// Draw rows proportionally to per-row target density.
    RandomRows,
    /// Draw band anchors proportionally to per-band target density.
    RandomBands { stride: i32 },
    /// One full trial simulation per candidate row per balloon slot,
    /// scanning `row_hi` down to `row_lo`; ties go to the larger row.
    Greedy { row_hi: i32, row_lo: i32 },
}

/// All tunable parameters. Any subset can be overridden from a JSON
/// file; missing fields keep their defaults.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Lookahead depth in ticks.
    pub horizon: usize,

    /// Weight of the displacement term in the leaf score.
    pub speed_weight: f32,

    /// Exclusive column bands over dense target areas where the speed
    /// term flips sign (slow down instead of speeding through).
    pub slow_bands: Vec<(i32, i32)>,

    /// Leaf penalty for positions that have left the map rows.
    pub bounds_penalty: f32,

    pub launch: LaunchRule,
    pub assign: AssignRule,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            horizon: 3,
            speed_weight: 0.03,
            slow_bands: vec![(80, 130), (160, 200)],
            bounds_penalty: -10.0,
            launch: LaunchRule::Spacing,
            assign: AssignRule::RandomBands { stride: 14 },
        }
    }
}
