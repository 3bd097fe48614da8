//! Liquidbox headless demo
//!
//! Runs one interactive session without a window: seeds the tank, replays a
//! scripted drag gesture, ticks the driver at the display rate and logs
//! snapshot statistics. A real frontend would forward its own pointer events
//! and draw from [`FrameDriver::snapshot`] instead.

use liquidbox::config::SimConfig;
use liquidbox::consts::DEFAULT_TIMESTEP;
use liquidbox::sim::{FrameDriver, PassiveSolver};

const DEMO_FRAMES: u32 = 600;

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match SimConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => SimConfig::default(),
    };

    let mut driver = match FrameDriver::new(&config, PassiveSolver::new()) {
        Ok(driver) => driver,
        Err(e) => {
            log::error!("setup failed: {e}");
            std::process::exit(1);
        }
    };

    // Scripted gesture: press at the window centre, then drag right across a
    // quarter of the window over 60 frames.
    let (cx, cy) = (config.window_width / 2.0, config.window_height / 2.0);
    let drag_span = config.window_width / 4.0;

    for frame in 0..DEMO_FRAMES {
        match frame {
            60 => driver.pointer_pressed(cx, cy),
            61..=120 => {
                let t = (frame - 60) as f32 / 60.0;
                driver.pointer_dragged(cx + t * drag_span, cy);
            }
            _ => {}
        }

        driver.tick(DEFAULT_TIMESTEP);

        if frame % 120 == 0 {
            let snap = driver.snapshot();
            let peak = snap
                .cells
                .iter()
                .map(|c| c.velocity.length())
                .fold(0.0f32, f32::max);
            log::info!(
                "frame {frame}: {} particles, peak cell speed {peak:.3}",
                snap.particles.len()
            );
        }
    }

    let snap = driver.snapshot();
    log::info!(
        "done: {} frames, {} particles on a {}x{} grid (dx {:.4})",
        driver.frames(),
        snap.particles.len(),
        snap.cols,
        snap.rows,
        snap.dx,
    );
}
