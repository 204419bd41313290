//! Frame driver
//!
//! Owns the match and runs the render loop: each frame clears the surface,
//! ticks the simulation, forwards round results to the notifier and redraws
//! every entity.

use crate::platform::{hex, Color, FrameScheduler, Notifier, Surface};
use crate::sim::{self, MatchEvent, MatchState, Side};

/// Drives one match against a host surface and scheduler
pub struct FrameDriver<N: Notifier> {
    state: MatchState,
    notifier: N,
    paddle_color: Color,
    ball_color: Color,
}

impl<N: Notifier> FrameDriver<N> {
    pub fn new(state: MatchState, notifier: N) -> Self {
        Self {
            state,
            notifier,
            // Classic palette: green paddles, red ball
            paddle_color: hex("00ff00"),
            ball_color: hex("ff0000"),
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Input edges mutate paddle speed through here between frames
    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    /// Run one frame: clear, tick, announce, render
    pub fn frame(&mut self, surface: &mut dyn Surface) {
        surface.clear();
        if let Some(MatchEvent::RoundWon(winner)) = sim::tick(&mut self.state) {
            self.notifier.announce(match winner {
                Side::Left => "Left won!",
                Side::Right => "Right won!",
            });
        }
        self.render(surface);
    }

    /// Keep requesting frames from the host until the scheduler declines
    pub fn run(&mut self, scheduler: &mut dyn FrameScheduler, surface: &mut dyn Surface) {
        while scheduler.next_frame() {
            self.frame(surface);
        }
        log::debug!("scheduler stopped, frame loop ending");
    }

    fn render(&self, surface: &mut dyn Surface) {
        for paddle in [&self.state.left, &self.state.right] {
            surface.fill_rect(
                paddle.x,
                paddle.y,
                paddle.width,
                paddle.height,
                self.paddle_color,
            );
        }
        let ball = &self.state.ball;
        surface.fill_circle(ball.pos.x, ball.pos.y, ball.radius, self.ball_color);
    }
}
