//! Duel Pong - a classic two-paddle court game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, per-frame tick, scoring)
//! - `driver`: Frame loop over the host's scheduler and drawing surface
//! - `input`: Key-edge to paddle-command routing
//! - `platform`: Collaborator traits the host implements
//! - `tuning`: Data-driven gameplay numbers

pub mod driver;
pub mod input;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use driver::FrameDriver;
pub use input::InputRouter;
pub use tuning::Tuning;

/// Default gameplay constants
pub mod consts {
    /// Paddle rectangle, surface units
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 200.0;
    /// Speed a paddle starts moving at when a key goes down
    pub const PADDLE_START_SPEED: f32 = 10.0;
    /// Per-tick speed compounding while a paddle keeps moving in bounds
    pub const PADDLE_ACCEL: f32 = 1.05;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Serve speed magnitude ranges; x is wider than y so serves bias
    /// toward fast horizontal travel
    pub const BALL_SPEED_X_MIN: f32 = 5.0;
    pub const BALL_SPEED_X_MAX: f32 = 10.0;
    pub const BALL_SPEED_Y_MIN: f32 = 1.0;
    pub const BALL_SPEED_Y_MAX: f32 = 10.0;

    /// The left goal line sits this far in from the edge; the right goal
    /// line is the surface width itself
    pub const GOAL_MARGIN: f32 = 3.0;
}
