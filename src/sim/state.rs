//! Match state and core simulation types
//!
//! One ball, two paddles, and the orchestrator that owns them for the
//! lifetime of a match.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Which side of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Vertical movement direction for a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDir {
    Up,
    Down,
}

/// Emitted by the tick when a round ends. A miss is a designed terminal
/// event for the round, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    RoundWon(Side),
}

/// The ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Serve a ball centered on the surface with a randomized velocity.
    /// Sign and magnitude are drawn independently per axis; magnitudes stay
    /// within the tuned ranges so neither axis can come up zero.
    pub fn spawn(rng: &mut Pcg32, surface: Vec2, tuning: &Tuning) -> Self {
        let vx = random_signed(rng, tuning.ball_speed_x_min, tuning.ball_speed_x_max);
        let vy = random_signed(rng, tuning.ball_speed_y_min, tuning.ball_speed_y_max);
        Self {
            pos: surface / 2.0,
            vel: Vec2::new(vx, vy),
            radius: tuning.ball_radius,
        }
    }

    /// Integrate one tick. A ball at or past the top/bottom edge flips its
    /// vertical velocity exactly once before moving; there is no sub-tick
    /// correction, so the ball may briefly render out of bounds until the
    /// next evaluation.
    pub fn advance(&mut self, surface_height: f32) {
        if self.pos.y <= 0.0 || self.pos.y >= surface_height {
            self.vel.y = -self.vel.y;
        }
        self.pos += self.vel;
    }

    /// Scale horizontal velocity by a paddle reflection factor. The sign of
    /// the factor sets the travel direction and its magnitude scales the
    /// speed; growth over a long rally is deliberately uncapped.
    pub fn reflect(&mut self, factor: f32) {
        self.vel.x *= factor;
    }

    /// Current position snapshot
    pub fn position(&self) -> Vec2 {
        self.pos
    }
}

/// Uniform magnitude in `min..max` with a random sign
fn random_signed(rng: &mut Pcg32, min: f32, max: f32) -> f32 {
    let magnitude = rng.random_range(min..max);
    if rng.random_bool(0.5) { -magnitude } else { magnitude }
}

/// A player paddle. `x` is fixed for the paddle's lifetime; `y` is the top
/// edge of the paddle rectangle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Signed vertical speed, 0 when idle
    pub speed: f32,
    start_speed: f32,
    accel: f32,
}

impl Paddle {
    /// Create a paddle at the vertical center of the surface
    pub fn new(x: f32, surface_height: f32, tuning: &Tuning) -> Self {
        Self {
            x,
            y: surface_height / 2.0 - tuning.paddle_height / 2.0,
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            speed: 0.0,
            start_speed: tuning.paddle_start_speed,
            accel: tuning.paddle_accel,
        }
    }

    /// Start moving. Only acts from a standstill: while the paddle is
    /// already moving the call is ignored in either direction, so the
    /// opposite key cannot reverse it and only `stop` clears the motion.
    pub fn set_direction(&mut self, dir: MoveDir) {
        if self.speed == 0.0 {
            self.speed = match dir {
                MoveDir::Up => -self.start_speed,
                MoveDir::Down => self.start_speed,
            };
        }
    }

    /// Halt immediately
    pub fn stop(&mut self) {
        self.speed = 0.0;
    }

    /// Integrate one tick with boundary clamping. Speed compounds by the
    /// accel factor every tick the paddle is moving and still in bounds.
    /// Once pinned at a wall, position AND speed stay untouched: the paddle
    /// keeps a stale nonzero speed until `stop` or the round resets.
    pub fn advance(&mut self, surface_height: f32) {
        let moving_up = self.speed < 0.0 && self.y > 0.0;
        let moving_down = self.speed > 0.0 && self.y + self.height < surface_height;
        if moving_up || moving_down {
            self.y = (self.y + self.speed).clamp(0.0, surface_height - self.height);
            self.speed *= self.accel;
        }
    }

    /// Hit test against the paddle's vertical span, exclusive at both ends.
    /// On hit, returns the reflection bias in [-1.5, -0.5]: near -0.5 for a
    /// dead-center hit, approaching -1.5 toward the edges. The bias is
    /// always negative, so a paddle bounce always reverses the ball's
    /// horizontal direction and speeds it up.
    pub fn contains_y(&self, y: f32) -> Option<f32> {
        if self.y < y && y < self.y + self.height {
            let center_delta = self.y + self.height / 2.0 - y;
            let normalized = center_delta.abs() / (self.height / 2.0);
            Some(-normalized - 0.5)
        } else {
            None
        }
    }
}

/// Complete match state: one ball, two paddles, and the RNG that serves
/// each round
#[derive(Debug, Clone)]
pub struct MatchState {
    /// Surface dimensions, read once at creation. Resizing mid-match is
    /// unsupported.
    pub surface: Vec2,
    pub tuning: Tuning,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    rng: Pcg32,
}

impl MatchState {
    pub fn new(seed: u64, surface_width: f32, surface_height: f32, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let surface = Vec2::new(surface_width, surface_height);
        let left = Paddle::new(0.0, surface.y, &tuning);
        let right = Paddle::new(surface.x - tuning.paddle_width, surface.y, &tuning);
        let ball = Ball::spawn(&mut rng, surface, &tuning);
        Self {
            surface,
            tuning,
            left,
            right,
            ball,
            rng,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Rebuild both paddles and serve a fresh ball. All three entities are
    /// replaced within the same tick, so no frame ever observes a
    /// half-reset match.
    pub fn reset(&mut self) {
        self.left = Paddle::new(0.0, self.surface.y, &self.tuning);
        self.right = Paddle::new(
            self.surface.x - self.tuning.paddle_width,
            self.surface.y,
            &self.tuning,
        );
        self.ball = Ball::spawn(&mut self.rng, self.surface, &self.tuning);
    }
}
