//! Platform abstraction layer
//!
//! The collaborators the core consumes but never implements itself: a 2D
//! drawing surface, a frame scheduler standing in for the display refresh,
//! a key source and a winner-notification sink. Hosts with a real window
//! implement these traits; the crate ships simple native stand-ins for
//! headless runs and tests.

use std::time::Duration;

/// RGBA color, each channel 0.0-1.0
pub type Color = [f32; 4];

/// Parse a hex string of 6 or 8 characters into a color.
/// Format is rrggbbaa, where the aa is optional.
#[track_caller]
pub fn hex(color: &str) -> Color {
    let a = match color.len() {
        8 => u8::from_str_radix(&color[6..], 16).unwrap(),
        6 => 255,
        _ => panic!("color string must be 6 or 8 characters"),
    };
    let r = u8::from_str_radix(&color[..2], 16).unwrap();
    let g = u8::from_str_radix(&color[2..4], 16).unwrap();
    let b = u8::from_str_radix(&color[4..6], 16).unwrap();
    [
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    ]
}

/// Key identifiers the input source can deliver. Only four of these drive
/// paddles; the router ignores everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    S,
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    Space,
}

/// A 2D drawing surface with primitive filled shapes. No return values are
/// consumed from draw calls.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    /// Clear the full surface rect
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color);
}

/// Host frame scheduling. `next_frame` blocks until the next display
/// refresh; returning `false` ends the loop, which lets tests and the
/// headless demo bound a run.
pub trait FrameScheduler {
    fn next_frame(&mut self) -> bool;
}

/// Winner announcement sink. Implementations may block; the core does not
/// depend on it either way.
pub trait Notifier {
    fn announce(&mut self, message: &str);
}

/// Scheduler that sleeps to approximate a fixed refresh cadence. Simulation
/// speed follows this cadence, so a different rate changes the observed
/// game speed.
#[derive(Debug)]
pub struct FixedRateScheduler {
    frame: Duration,
}

impl FixedRateScheduler {
    pub fn new(refresh_hz: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / refresh_hz.max(1),
        }
    }
}

impl FrameScheduler for FixedRateScheduler {
    fn next_frame(&mut self) -> bool {
        std::thread::sleep(self.frame);
        true
    }
}

/// Wrapper that stops an inner scheduler after a fixed number of frames
#[derive(Debug)]
pub struct FrameBudget<S> {
    inner: S,
    remaining: u64,
}

impl<S: FrameScheduler> FrameBudget<S> {
    pub fn new(inner: S, frames: u64) -> Self {
        Self {
            inner,
            remaining: frames,
        }
    }
}

impl<S: FrameScheduler> FrameScheduler for FrameBudget<S> {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.inner.next_frame()
    }
}

/// Notifier that writes announcements to the log
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn announce(&mut self, message: &str) {
        log::info!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_six_chars() {
        assert_eq!(hex("ff0000"), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(hex("00ff00"), [0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_hex_eight_chars() {
        let c = hex("0000ff80");
        assert_eq!(c[2], 1.0);
        assert!((c[3] - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_frame_budget_stops_after_n_frames() {
        struct Always;
        impl FrameScheduler for Always {
            fn next_frame(&mut self) -> bool {
                true
            }
        }
        let mut budget = FrameBudget::new(Always, 3);
        let mut frames = 0;
        while budget.next_frame() {
            frames += 1;
        }
        assert_eq!(frames, 3);
    }
}
