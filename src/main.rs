use std::path::PathBuf;
use std::process;

use loonsim::config::Params;
use loonsim::movelog::MoveLog;
use loonsim::{loader, render};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let Some(input) = args.get(1).map(PathBuf::from) else {
        eprintln!("usage: loonsim <input-file> [seed] [out-dir] [params.json]");
        process::exit(2);
    };
    let seed: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(42);
    let out_dir: PathBuf = args
        .get(3)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("artifacts"));

    let params: Params = match args.get(4) {
        Some(path) => {
            let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("failed to read params {}: {}", path, e);
                process::exit(2);
            });
            serde_json::from_str(&text).unwrap_or_else(|e| {
                eprintln!("bad params file {}: {}", path, e);
                process::exit(2);
            })
        }
        None => Params::default(),
    };

    let scenario = loader::load(&input).unwrap_or_else(|e| {
        eprintln!("failed to load {}: {}", input.display(), e);
        process::exit(1);
    });

    std::fs::create_dir_all(&out_dir).expect("failed to create output directory");

    eprintln!(
        "Simulating {} balloons for {} ticks on a {}x{} grid with {} altitude tiers, seed={}",
        scenario.balloon_count,
        scenario.total_ticks,
        scenario.dims.rows,
        scenario.dims.cols,
        scenario.dims.alts,
        seed
    );

    let (result, timings) = loonsim::run(&scenario, &params, seed);

    eprintln!("\nTimings:");
    for t in &timings {
        eprintln!("  {:20} {:8.1} ms", t.name, t.ms);
    }

    // Move log: one line per tick, renamed to carry the score.
    let mut log = MoveLog::create(&out_dir).expect("failed to create move log");
    for deltas in &result.moves {
        log.append(deltas).expect("failed to write move log");
    }
    let log_path = log.finalize(result.score).expect("failed to finalize move log");
    eprintln!("Saved {}", log_path.display());

    // Diagnostic PNGs
    let (w, h) = render::image_size(&scenario);
    let save = |name: &str, rgba: &[u8]| {
        let path = out_dir.join(name);
        image::save_buffer(&path, rgba, w as u32, h as u32, image::ColorType::Rgba8)
            .expect("failed to save image");
        eprintln!("Saved {}", path.display());
    };
    save("targets.png", &render::render_targets(&scenario));
    save(
        "coverage.png",
        &render::render_coverage(&scenario, &result.targets, &result.balloons),
    );

    let lost = result.balloons.iter().filter(|b| b.lost).count();
    eprintln!(
        "\n{} balloons lost, final coverage score: {}",
        lost, result.score
    );
}
