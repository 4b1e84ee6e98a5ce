//! Held-key tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout.
//! The catch-and-aim mechanic depends on knowing whether the action key is
//! still down, so releases (real or synthesized) also surface as edge actions.

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::input::map::{map_key, InputKey};
use crate::types::{GameAction, InputFlags};

// In terminals without key-release events, a short timeout prevents a single
// tap from turning into a sustained "held" state. Auto-repeat refreshes it.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks which logical keys are currently held.
#[derive(Debug, Clone)]
pub struct InputHandler {
    flags: InputFlags,
    last_key_time: std::time::Instant,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            flags: InputFlags::default(),
            last_key_time: std::time::Instant::now(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Current held-key state, sampled by the frame loop each tick.
    pub fn flags(&self) -> InputFlags {
        self.flags
    }

    /// Track a key press. Returns the edge action for a fresh action press.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let key = map_key(code)?;
        self.last_key_time = std::time::Instant::now();
        match key {
            InputKey::Left => {
                self.flags.left = true;
                None
            }
            InputKey::Right => {
                self.flags.right = true;
                None
            }
            InputKey::Action => {
                if self.flags.action {
                    None
                } else {
                    self.flags.action = true;
                    Some(GameAction::Launch)
                }
            }
        }
    }

    /// Track a key release. Returns the edge action for an action release.
    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<GameAction> {
        match map_key(code)? {
            InputKey::Left => {
                self.flags.left = false;
                None
            }
            InputKey::Right => {
                self.flags.right = false;
                None
            }
            InputKey::Action => {
                if self.flags.action {
                    self.flags.action = false;
                    Some(GameAction::ReleaseHold)
                } else {
                    None
                }
            }
        }
    }

    /// Per-tick maintenance: synthesize releases when the terminal never
    /// delivers them. Returns the edge actions of any synthesized release.
    pub fn update(&mut self) -> ArrayVec<GameAction, 2> {
        let mut actions = ArrayVec::new();

        let since_last_key = self.last_key_time.elapsed().as_millis() as u32;
        if since_last_key > self.key_release_timeout_ms {
            self.flags.left = false;
            self.flags.right = false;
            if self.flags.action {
                self.flags.action = false;
                let _ = actions.try_push(GameAction::ReleaseHold);
            }
        }

        actions
    }

    pub fn reset(&mut self) {
        self.flags = InputFlags::default();
        self.last_key_time = std::time::Instant::now();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release_toggle_flags() {
        let mut ih = InputHandler::new();

        ih.handle_key_press(KeyCode::Left);
        assert!(ih.flags().left);

        ih.handle_key_release(KeyCode::Left);
        assert!(!ih.flags().left);
    }

    #[test]
    fn test_action_press_is_an_edge() {
        let mut ih = InputHandler::new();

        assert_eq!(
            ih.handle_key_press(KeyCode::Char(' ')),
            Some(GameAction::Launch)
        );
        // Auto-repeat of a held key is not a fresh press.
        assert_eq!(ih.handle_key_press(KeyCode::Char(' ')), None);

        assert_eq!(
            ih.handle_key_release(KeyCode::Char(' ')),
            Some(GameAction::ReleaseHold)
        );
        assert_eq!(ih.handle_key_release(KeyCode::Char(' ')), None);
    }

    #[test]
    fn test_auto_release_triggers_after_timeout_without_key_release_events() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);

        ih.handle_key_press(KeyCode::Char(' '));
        assert!(ih.flags().action);

        // Simulate no key-release events by moving the last key time into the past.
        ih.last_key_time = std::time::Instant::now() - std::time::Duration::from_millis(51);

        let actions = ih.update();
        assert_eq!(actions.as_slice(), &[GameAction::ReleaseHold]);
        assert!(!ih.flags().action);
    }

    #[test]
    fn test_auto_release_of_movement_emits_no_action() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);

        ih.handle_key_press(KeyCode::Right);
        ih.last_key_time = std::time::Instant::now() - std::time::Duration::from_millis(51);

        let actions = ih.update();
        assert!(actions.is_empty());
        assert!(!ih.flags().right);
    }

    #[test]
    fn test_unmapped_key_does_not_extend_auto_release_timeout() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);

        ih.handle_key_press(KeyCode::Left);
        ih.last_key_time = std::time::Instant::now() - std::time::Duration::from_millis(51);
        assert_eq!(ih.handle_key_press(KeyCode::Up), None);

        ih.update();
        assert!(!ih.flags().left);
    }

    #[test]
    fn test_reset_clears_held_state() {
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyCode::Left);
        ih.handle_key_press(KeyCode::Char(' '));

        ih.reset();
        assert_eq!(ih.flags(), InputFlags::default());
    }
}
