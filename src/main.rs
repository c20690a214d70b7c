//! Headless demo: relax a small quantum graph and animate it for a couple of
//! seconds, logging where everything ends up.
//!
//! Usage: `quanto-view [options.toml]`

use std::path::Path;
use std::sync::Arc;

use glam::Vec2;
use quanto_view::animation::{Relaxer, SmoothLayout};
use quanto_view::error::QuantoViewError;
use quanto_view::layout::{ForceLayout, ForceParams, Layout};
use quanto_view::options::Options;
use quanto_view::paint::{Backdrop, VertexKind};
use quanto_view::util::frame_timing::FrameTiming;
use web_time::Instant;

const TARGET_FPS: u32 = 60;
const FRAMES: u64 = 120;

const VERTICES: [(&str, VertexKind); 6] = [
    ("in", VertexKind::Boundary),
    ("z0", VertexKind::Red),
    ("h", VertexKind::Hadamard),
    ("x0", VertexKind::Green),
    ("z1", VertexKind::Red),
    ("out", VertexKind::Boundary),
];

const EDGES: [(&str, &str); 6] = [
    ("in", "z0"),
    ("z0", "h"),
    ("h", "x0"),
    ("x0", "z1"),
    ("z0", "z1"),
    ("z1", "out"),
];

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), QuantoViewError> {
    let options = match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path))?,
        None => Options::default(),
    };

    let layout = Arc::new(ForceLayout::new(
        Vec2::new(640.0, 480.0),
        ForceParams::default(),
    ));
    for (v, _) in VERTICES {
        layout.add_vertex(v);
    }
    for (a, b) in EDGES {
        layout.add_edge(a, b);
    }

    let smooth = SmoothLayout::with_options(
        Arc::clone(&layout),
        &options.animation,
        &options.relax,
    );
    let warmup = smooth.initialize();
    log::info!("prerelaxed {warmup} steps");

    let mut relaxer = Relaxer::spawn(layout.clone(), &options.relax)?;
    let mut timing = FrameTiming::new(TARGET_FPS, Instant::now());

    while timing.frames() < FRAMES {
        let now = Instant::now();
        if !timing.is_due(now) {
            std::thread::sleep(timing.until_due(now));
            continue;
        }

        let moved = smooth.advance()?;
        log::debug!("frame {}: moved={moved}", timing.frames());

        if timing.frames() == FRAMES / 2 {
            // A vertex added mid-animation shows up at its target and the
            // relaxation restarts around it.
            layout.add_vertex("x1");
            layout.add_edge("h", "x1");
            layout.initialize();
            relaxer.resume();
            log::info!("added x1 at frame {}", timing.frames());
        }

        timing.end_frame(Instant::now());
    }

    relaxer.shutdown();
    log::info!(
        "{} frames at {:.1} fps, {} relaxation steps",
        timing.frames(),
        timing.fps(),
        relaxer.steps()
    );

    let backdrop = Backdrop::new(smooth.size(), &options.backdrop);
    log::info!(
        "backdrop {}x{} fill {:?} stroke {:?}",
        backdrop.size().x,
        backdrop.size().y,
        backdrop.fill,
        backdrop.stroke
    );

    let kinds = VERTICES.into_iter().chain([("x1", VertexKind::Green)]);
    for (v, kind) in kinds {
        if let Some(p) = smooth.position(&v) {
            log::info!(
                "{v:>3} {kind:?} {:?} at ({:.1}, {:.1})",
                kind.color(&options.colors),
                p.x,
                p.y
            );
        }
    }

    Ok(())
}
