//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only
//! - One integration step per tick invocation
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{Ball, MatchEvent, MatchState, MoveDir, Paddle, Side};
pub use tick::tick;
