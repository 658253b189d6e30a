//! Keyboard input tracking
//!
//! Key events are folded into per-button state between ticks. Each tick takes
//! an [`InputFrame`] snapshot, which also clears the per-frame press counters.

use serde::{Deserialize, Serialize};

/// Symbolic key identifier delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    A,
    D,
    W,
    S,
    Space,
    Escape,
    Other,
}

/// Key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyState {
    Pressed,
    Released,
}

/// A discrete key event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    pub state: KeyState,
}

impl KeyEvent {
    pub fn down(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Pressed,
        }
    }

    pub fn up(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Released,
        }
    }
}

/// A single button: held level plus presses since the last frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Button {
    pressed: bool,
    downs: u8,
}

impl Button {
    fn press(&mut self) {
        self.downs = self.downs.saturating_add(1);
        self.pressed = true;
    }

    fn release(&mut self) {
        self.pressed = false;
    }

    /// Whether the button is currently held
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Number of key-down events since the last frame
    pub fn downs(&self) -> u8 {
        self.downs
    }
}

/// Resolve two opposing buttons into -1, 0 or +1
fn axis(positive: Button, negative: Button) -> f32 {
    match (positive.pressed, negative.pressed) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

/// Input snapshot consumed by one simulation tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub left: Button,
    pub right: Button,
    pub up: Button,
    pub down: Button,
}

impl InputFrame {
    /// Net movement along x. The camera looks back along +y, so "left" is +x.
    pub fn x_axis(&self) -> f32 {
        axis(self.left, self.right)
    }

    /// Net movement along z
    pub fn z_axis(&self) -> f32 {
        axis(self.up, self.down)
    }
}

/// Accumulates key events between ticks
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    frame: InputFrame,
    restart: Button,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a key event. Returns whether the core consumed it.
    ///
    /// Escape is left to the host (mouse capture is not a gameplay concern).
    pub fn on_key(&mut self, event: KeyEvent) -> bool {
        let button = match event.key {
            Key::A => &mut self.frame.left,
            Key::D => &mut self.frame.right,
            Key::W => &mut self.frame.up,
            Key::S => &mut self.frame.down,
            Key::Space => &mut self.restart,
            Key::Escape | Key::Other => return false,
        };
        match event.state {
            KeyState::Pressed => button.press(),
            // Restart only acts on key-down
            KeyState::Released if event.key == Key::Space => return false,
            KeyState::Released => button.release(),
        }
        true
    }

    /// Current button state without clearing anything
    #[cfg(test)]
    pub(crate) fn peek(&self) -> &InputFrame {
        &self.frame
    }

    /// Take and clear a pending restart request
    pub fn take_restart(&mut self) -> bool {
        let requested = self.restart.downs > 0;
        self.restart = Button::default();
        requested
    }

    /// Snapshot the buttons for this tick and reset the press counters
    pub fn take_frame(&mut self) -> InputFrame {
        let frame = self.frame;
        for button in [
            &mut self.frame.left,
            &mut self.frame.right,
            &mut self.frame.up,
            &mut self.frame.down,
        ] {
            button.downs = 0;
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = InputTracker::new();
        assert!(input.on_key(KeyEvent::down(Key::A)));
        assert!(input.peek().left.pressed());
        assert_eq!(input.peek().left.downs(), 1);

        assert!(input.on_key(KeyEvent::up(Key::A)));
        assert!(!input.peek().left.pressed());
        // Release does not clear the edge counter
        assert_eq!(input.peek().left.downs(), 1);
    }

    #[test]
    fn test_take_frame_resets_downs_but_keeps_level() {
        let mut input = InputTracker::new();
        input.on_key(KeyEvent::down(Key::W));
        input.on_key(KeyEvent::down(Key::W));

        let frame = input.take_frame();
        assert_eq!(frame.up.downs(), 2);
        assert!(frame.up.pressed());

        let next = input.take_frame();
        assert_eq!(next.up.downs(), 0);
        assert!(next.up.pressed());
    }

    #[test]
    fn test_opposing_buttons_cancel() {
        let mut input = InputTracker::new();
        input.on_key(KeyEvent::down(Key::A));
        assert_eq!(input.peek().x_axis(), 1.0);
        input.on_key(KeyEvent::down(Key::D));
        assert_eq!(input.peek().x_axis(), 0.0);
        input.on_key(KeyEvent::up(Key::A));
        assert_eq!(input.peek().x_axis(), -1.0);

        input.on_key(KeyEvent::down(Key::S));
        assert_eq!(input.peek().z_axis(), -1.0);
    }

    #[test]
    fn test_escape_and_unknown_keys_not_consumed() {
        let mut input = InputTracker::new();
        assert!(!input.on_key(KeyEvent::down(Key::Escape)));
        assert!(!input.on_key(KeyEvent::down(Key::Other)));
        assert_eq!(*input.peek(), InputFrame::default());
    }

    #[test]
    fn test_restart_is_edge_triggered() {
        let mut input = InputTracker::new();
        assert!(!input.take_restart());
        assert!(input.on_key(KeyEvent::down(Key::Space)));
        assert!(!input.on_key(KeyEvent::up(Key::Space)));
        assert!(input.take_restart());
        assert!(!input.take_restart());
    }

    #[test]
    fn test_downs_saturate() {
        let mut input = InputTracker::new();
        for _ in 0..300 {
            input.on_key(KeyEvent::down(Key::D));
        }
        assert_eq!(input.peek().right.downs(), u8::MAX);
    }
}
