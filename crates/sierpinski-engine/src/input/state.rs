use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState};

/// Current input state for the window.
///
/// Holds "is down" information. Per-frame transitions are recorded into an
/// `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Release events are not delivered to an unfocused window.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(*key) {
                        frame.keys_pressed.insert(*key);
                    }
                }
                KeyState::Released => {
                    if self.keys_down.remove(key) {
                        frame.keys_released.insert(*key);
                    }
                }
            },
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key, state, repeat: false }
    }

    #[test]
    fn press_marks_key_down_and_pressed_this_frame() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed));

        assert!(state.key_down(Key::Escape));
        assert!(frame.key_pressed(Key::Escape));
        assert_eq!(frame.events.len(), 1);
    }

    #[test]
    fn repeated_press_is_not_a_new_transition() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed));
        frame.clear();
        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed));

        assert!(state.key_down(Key::Escape));
        assert!(!frame.key_pressed(Key::Escape));
    }

    #[test]
    fn press_and_release_within_one_frame_is_still_seen() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed));
        state.apply_event(&mut frame, key(Key::Escape, KeyState::Released));

        assert!(!state.key_down(Key::Escape));
        assert!(frame.key_pressed(Key::Escape));
        assert!(frame.keys_released.contains(&Key::Escape));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Escape, KeyState::Released));

        assert!(frame.keys_released.is_empty());
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::Focused(true));
        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed));
        state.apply_event(&mut frame, InputEvent::Focused(false));

        assert!(!state.focused);
        assert!(!state.key_down(Key::Escape));
    }
}
