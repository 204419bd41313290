//! Duel Pong entry point
//!
//! Runs the match headlessly: a fixed-rate scheduler stands in for the
//! display refresh and a draw-dropping surface stands in for a real canvas.
//! Embedders with a real window implement `Surface` and `FrameScheduler`
//! and reuse the same driver.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use duel_pong::driver::FrameDriver;
use duel_pong::platform::{Color, FixedRateScheduler, FrameBudget, LogNotifier, Surface};
use duel_pong::sim::MatchState;
use duel_pong::tuning::Tuning;

/// Surface that drops draw calls and only reports dimensions, so the match
/// can run without a window
struct HeadlessSurface {
    width: f32,
    height: f32,
}

impl Surface for HeadlessSurface {
    fn width(&self) -> f32 {
        self.width
    }
    fn height(&self) -> f32 {
        self.height
    }
    fn clear(&mut self) {}
    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: Color) {}
    fn fill_circle(&mut self, _cx: f32, _cy: f32, _radius: f32, _color: Color) {}
}

fn main() {
    env_logger::init();

    let tuning = Tuning::load_or_default(Path::new("tuning.json"));
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Duel Pong starting with seed {seed}");

    let mut surface = HeadlessSurface {
        width: 1280.0,
        height: 800.0,
    };
    let state = MatchState::new(seed, surface.width(), surface.height(), tuning);
    let mut driver = FrameDriver::new(state, LogNotifier);

    // Ten seconds of play at display cadence; with nobody on the keys the
    // serve decides each round
    let mut scheduler = FrameBudget::new(FixedRateScheduler::new(60), 600);
    driver.run(&mut scheduler, &mut surface);

    let ball = driver.state().ball.position();
    log::info!("Demo finished, ball at ({:.1}, {:.1})", ball.x, ball.y);
}
