//! Input routing
//!
//! Translates raw key down/up edges into paddle commands. Bindings are
//! fixed: W/S drive the left paddle, ArrowUp/ArrowDown the right; every
//! other key is ignored. Commands apply immediately to the bound paddle,
//! no queuing or debouncing, most recent edge wins.

use crate::platform::Key;
use crate::sim::{MatchState, MoveDir, Side};

/// Maps key edges onto paddle move/stop commands
#[derive(Debug, Clone, Copy, Default)]
pub struct InputRouter;

impl InputRouter {
    /// Resolve a key to the paddle and direction it drives, if any
    fn binding(key: Key) -> Option<(Side, MoveDir)> {
        match key {
            Key::W => Some((Side::Left, MoveDir::Up)),
            Key::S => Some((Side::Left, MoveDir::Down)),
            Key::ArrowUp => Some((Side::Right, MoveDir::Up)),
            Key::ArrowDown => Some((Side::Right, MoveDir::Down)),
            _ => None,
        }
    }

    /// Key-press edge: starts the bound paddle if it is idle
    pub fn key_down(&self, state: &mut MatchState, key: Key) {
        if let Some((side, dir)) = Self::binding(key) {
            state.paddle_mut(side).set_direction(dir);
        }
    }

    /// Key-release edge: stops the bound paddle. Either of a paddle's two
    /// keys releases it, matching how a press of either key starts it.
    pub fn key_up(&self, state: &mut MatchState, key: Key) {
        if let Some((side, _)) = Self::binding(key) {
            state.paddle_mut(side).stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn fresh_match() -> MatchState {
        MatchState::new(1, 1280.0, 800.0, Tuning::default())
    }

    #[test]
    fn test_w_and_s_drive_left_paddle() {
        let router = InputRouter;
        let mut state = fresh_match();
        router.key_down(&mut state, Key::W);
        assert_eq!(state.left.speed, -10.0);
        assert_eq!(state.right.speed, 0.0);

        router.key_up(&mut state, Key::W);
        router.key_down(&mut state, Key::S);
        assert_eq!(state.left.speed, 10.0);
    }

    #[test]
    fn test_arrows_drive_right_paddle() {
        let router = InputRouter;
        let mut state = fresh_match();
        router.key_down(&mut state, Key::ArrowDown);
        assert_eq!(state.right.speed, 10.0);
        assert_eq!(state.left.speed, 0.0);
    }

    #[test]
    fn test_opposite_key_cannot_reverse_motion() {
        let router = InputRouter;
        let mut state = fresh_match();
        router.key_down(&mut state, Key::S);
        router.key_down(&mut state, Key::W);
        // Still moving down; only a release clears it
        assert_eq!(state.left.speed, 10.0);
        router.key_up(&mut state, Key::S);
        assert_eq!(state.left.speed, 0.0);
    }

    #[test]
    fn test_either_key_release_stops_the_paddle() {
        let router = InputRouter;
        let mut state = fresh_match();
        router.key_down(&mut state, Key::ArrowUp);
        router.key_up(&mut state, Key::ArrowDown);
        assert_eq!(state.right.speed, 0.0);
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let router = InputRouter;
        let mut state = fresh_match();
        router.key_down(&mut state, Key::Space);
        router.key_down(&mut state, Key::Escape);
        router.key_up(&mut state, Key::Enter);
        assert_eq!(state.left.speed, 0.0);
        assert_eq!(state.right.speed, 0.0);
    }
}
