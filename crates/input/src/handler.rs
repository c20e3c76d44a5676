//! Paddle steering from terminal key events.
//!
//! Translates key presses and releases into [`GameAction`]s. Supports terminals
//! that do not emit key release events by auto-releasing a held direction after
//! a timeout; as soon as one real release event arrives the timeout is disabled.

use std::time::Instant;

use arrayvec::ArrayVec;
use crossterm::event::{Event, KeyEvent, KeyEventKind};

use crate::map::{map_key, should_quit, Key};
use crate::types::{DirectionEvent, GameAction, KEY_RELEASE_TIMEOUT_MS};

/// Upper bound on actions collected during one tick's input wait.
pub const INPUT_BATCH_CAPACITY: usize = 32;

/// Actions gathered between two ticks, in arrival order.
pub type InputBatch = ArrayVec<GameAction, INPUT_BATCH_CAPACITY>;

/// Tracks which steering key is held.
#[derive(Debug, Clone)]
pub struct InputHandler {
    held: Option<Key>,
    last_key_time: Instant,
    key_release_timeout_ms: u32,
    release_events_seen: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            held: None,
            last_key_time: Instant::now(),
            key_release_timeout_ms: KEY_RELEASE_TIMEOUT_MS,
            release_events_seen: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn release_events_seen(&self) -> bool {
        self.release_events_seen
    }

    /// Dispatch any terminal event; non-key events are ignored.
    pub fn handle_event(&mut self, event: &Event) -> Option<GameAction> {
        let Event::Key(key) = event else {
            return None;
        };
        match key.kind {
            KeyEventKind::Press => self.handle_key_press(*key),
            // Repeats of a steering key count as presses: they keep the hold
            // alive and pick the direction back up after a reset.
            KeyEventKind::Repeat => {
                if map_key(*key).is_some_and(Key::is_steering) {
                    self.handle_key_press(*key)
                } else {
                    None
                }
            }
            KeyEventKind::Release => self.handle_key_release(*key),
        }
    }

    pub fn handle_key_press(&mut self, key: KeyEvent) -> Option<GameAction> {
        if should_quit(key) {
            return Some(GameAction::Quit);
        }

        match map_key(key)? {
            k @ (Key::Left | Key::Right) => {
                self.last_key_time = Instant::now();
                if self.held == Some(k) {
                    return None;
                }
                self.held = Some(k);
                let event = if k == Key::Left {
                    DirectionEvent::LeftPressed
                } else {
                    DirectionEvent::RightPressed
                };
                Some(GameAction::Steer(event))
            }
            Key::Pause => Some(GameAction::Pause),
            Key::Restart => {
                // A fresh session starts idle; a key still held must be pressed again.
                self.reset();
                Some(GameAction::Restart)
            }
        }
    }

    /// Releasing either steering key stops the paddle, even if the other one is
    /// still down.
    pub fn handle_key_release(&mut self, key: KeyEvent) -> Option<GameAction> {
        self.release_events_seen = true;
        if !map_key(key).is_some_and(Key::is_steering) {
            return None;
        }
        self.held = None;
        Some(GameAction::Steer(DirectionEvent::Released))
    }

    /// Auto-release when the terminal does not emit release events.
    pub fn update(&mut self) -> Option<GameAction> {
        if self.release_events_seen || self.held.is_none() {
            return None;
        }
        let since_last_key = self.last_key_time.elapsed().as_millis();
        if since_last_key > self.key_release_timeout_ms as u128 {
            self.held = None;
            return Some(GameAction::Steer(DirectionEvent::Released));
        }
        None
    }

    pub fn reset(&mut self) {
        self.held = None;
        self.last_key_time = Instant::now();
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
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};
    use std::time::Duration;

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_press_steers_once_while_held() {
        let mut ih = InputHandler::new();
        assert_eq!(
            ih.handle_key_press(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::Steer(DirectionEvent::LeftPressed))
        );
        assert_eq!(ih.handle_key_press(KeyEvent::from(KeyCode::Left)), None);
        assert_eq!(
            ih.handle_key_press(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::Steer(DirectionEvent::RightPressed))
        );
    }

    #[test]
    fn test_release_of_either_key_stops() {
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyEvent::from(KeyCode::Right));
        assert_eq!(
            ih.handle_event(&Event::Key(release(KeyCode::Left))),
            Some(GameAction::Steer(DirectionEvent::Released))
        );
        assert!(ih.release_events_seen());
        assert_eq!(ih.handle_key_release(release(KeyCode::Char('p'))), None);
    }

    #[test]
    fn test_action_keys() {
        let mut ih = InputHandler::new();
        assert_eq!(
            ih.handle_key_press(KeyEvent::from(KeyCode::Char('p'))),
            Some(GameAction::Pause)
        );
        assert_eq!(
            ih.handle_key_press(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Restart)
        );
        assert_eq!(
            ih.handle_key_press(KeyEvent::from(KeyCode::Char('q'))),
            Some(GameAction::Quit)
        );
        assert_eq!(ih.handle_key_press(KeyEvent::from(KeyCode::Up)), None);
    }

    #[test]
    fn test_auto_release_triggers_after_timeout_without_key_release_events() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_press(KeyEvent::from(KeyCode::Left));
        assert_eq!(ih.update(), None);

        // Simulate no key-release events by moving the last key time into the past.
        ih.last_key_time = Instant::now() - Duration::from_millis(51);
        assert_eq!(
            ih.update(),
            Some(GameAction::Steer(DirectionEvent::Released))
        );
        assert_eq!(ih.held, None);
        assert_eq!(ih.update(), None);
    }

    #[test]
    fn test_repeat_extends_hold() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_press(KeyEvent::from(KeyCode::Right));
        ih.last_key_time = Instant::now() - Duration::from_millis(51);

        let repeat = KeyEvent {
            kind: KeyEventKind::Repeat,
            ..KeyEvent::from(KeyCode::Right)
        };
        assert_eq!(ih.handle_event(&Event::Key(repeat)), None);
        assert_eq!(ih.update(), None);
        assert_eq!(ih.held, Some(Key::Right));
    }

    #[test]
    fn test_real_release_events_disable_auto_release() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_release(release(KeyCode::Left));
        ih.handle_key_press(KeyEvent::from(KeyCode::Left));
        ih.last_key_time = Instant::now() - Duration::from_millis(500);
        assert_eq!(ih.update(), None);
    }

    #[test]
    fn test_non_key_events_are_ignored() {
        let mut ih = InputHandler::new();
        assert_eq!(ih.handle_event(&Event::Resize(80, 24)), None);
        assert_eq!(ih.handle_event(&Event::FocusLost), None);
    }

    #[test]
    fn test_default_key_release_timeout_is_non_zero() {
        assert!(InputHandler::new().key_release_timeout_ms() > 0);
    }

    #[test]
    fn test_restart_forgets_held_key() {
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyEvent::from(KeyCode::Left));
        assert_eq!(
            ih.handle_key_press(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Restart)
        );
        assert_eq!(ih.held, None);
        assert_eq!(
            ih.handle_key_press(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::Steer(DirectionEvent::LeftPressed))
        );
    }

    #[test]
    fn test_repeat_after_restart_resumes_steering() {
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyEvent::from(KeyCode::Right));
        ih.handle_key_press(KeyEvent::from(KeyCode::Char('r')));

        let repeat = KeyEvent {
            kind: KeyEventKind::Repeat,
            ..KeyEvent::from(KeyCode::Right)
        };
        assert_eq!(
            ih.handle_event(&Event::Key(repeat)),
            Some(GameAction::Steer(DirectionEvent::RightPressed))
        );
        assert_eq!(ih.handle_event(&Event::Key(repeat)), None);
    }

    #[test]
    fn test_reset_clears_held_state() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(0);
        ih.handle_key_press(KeyEvent::from(KeyCode::Left));
        ih.reset();
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(ih.update(), None);
    }
}
