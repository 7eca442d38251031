use rayon::prelude::*;

use crate::Scenario;
use crate::balloon::Balloon;
use crate::coverage::TargetCell;
use crate::grid::Vec2;

/// Pixels per grid cell in diagnostic renders.
pub const SCALE: usize = 4;

const BACKGROUND: [u8; 4] = [14, 18, 28, 255];
const TARGET: [u8; 4] = [45, 80, 165, 255]; // navy
const START: [u8; 4] = [70, 185, 80, 255]; // launch cell
const BALLOON: [u8; 4] = [235, 235, 235, 255];
const HEAT_COLD: [u8; 4] = [40, 60, 130, 255];
const HEAT_HOT: [u8; 4] = [250, 210, 60, 255];

/// Canvas size in pixels for a scenario's grid.
pub fn image_size(scenario: &Scenario) -> (usize, usize) {
    (
        scenario.dims.cols as usize * SCALE,
        scenario.dims.rows as usize * SCALE,
    )
}

#[inline]
fn lerp_color(a: [u8; 4], b: [u8; 4], t: f32) -> [u8; 4] {
    let t = t.clamp(0.0, 1.0);
    [
        (a[0] as f32 + (b[0] as f32 - a[0] as f32) * t).round() as u8,
        (a[1] as f32 + (b[1] as f32 - a[1] as f32) * t).round() as u8,
        (a[2] as f32 + (b[2] as f32 - a[2] as f32) * t).round() as u8,
        255,
    ]
}

fn blank(scenario: &Scenario) -> Vec<u8> {
    let (w, h) = image_size(scenario);
    let mut rgba = vec![0u8; w * h * 4];
    rgba.par_chunks_mut(4).for_each(|px| px.copy_from_slice(&BACKGROUND));
    rgba
}

/// Paint one grid cell as a SCALE x SCALE block. Positions off the map
/// rows (e.g. lost balloons) are skipped.
fn fill_cell(rgba: &mut [u8], scenario: &Scenario, pos: Vec2, color: [u8; 4]) {
    if !scenario.dims.row_in_range(pos.r) {
        return;
    }
    let (w, _) = image_size(scenario);
    let x0 = pos.c.rem_euclid(scenario.dims.cols) as usize * SCALE;
    let y0 = (pos.r - 1) as usize * SCALE;
    for y in y0..y0 + SCALE {
        for x in x0..x0 + SCALE {
            let i = (y * w + x) * 4;
            rgba[i..i + 4].copy_from_slice(&color);
        }
    }
}

/// Scatter of target cells with the shared launch cell highlighted.
pub fn render_targets(scenario: &Scenario) -> Vec<u8> {
    let mut rgba = blank(scenario);
    for &t in &scenario.targets {
        fill_cell(&mut rgba, scenario, t, TARGET);
    }
    fill_cell(&mut rgba, scenario, scenario.start, START);
    rgba
}

/// Post-run heat map: targets shaded by accumulated coverage, final
/// balloon positions overlaid.
pub fn render_coverage(
    scenario: &Scenario,
    targets: &[TargetCell],
    balloons: &[Balloon],
) -> Vec<u8> {
    let mut rgba = blank(scenario);
    let max = targets.iter().map(|t| t.coverage).max().unwrap_or(0).max(1);
    for t in targets {
        let heat = lerp_color(HEAT_COLD, HEAT_HOT, t.coverage as f32 / max as f32);
        fill_cell(&mut rgba, scenario, t.pos, heat);
    }
    fill_cell(&mut rgba, scenario, scenario.start, START);
    for b in balloons {
        if !b.lost {
            fill_cell(&mut rgba, scenario, b.pos, BALLOON);
        }
    }
    rgba
}
