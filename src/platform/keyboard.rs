//! Held-key tracking for winit keyboard events

use std::collections::HashSet;

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::input::{InputSource, Key};

/// Keys currently held, plus a latched quit request
#[derive(Debug, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
    quit: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Physical key bound to a game key
    pub fn binding(key: Key) -> KeyCode {
        match key {
            Key::Left => KeyCode::ArrowLeft,
            Key::Right => KeyCode::ArrowRight,
            Key::Thrust => KeyCode::ArrowUp,
            Key::Fire => KeyCode::Space,
        }
    }

    /// Record a key press or release
    pub fn handle_key(&mut self, code: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if code == KeyCode::Escape {
                    self.quit = true;
                }
                self.held.insert(code);
            }
            ElementState::Released => {
                self.held.remove(&code);
            }
        }
    }

    /// Window close button or similar
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Forget held keys, e.g. when focus is lost and releases won't arrive
    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

impl InputSource for KeyboardState {
    fn poll_quit(&mut self) -> bool {
        self.quit
    }

    fn key_down(&self, key: Key) -> bool {
        self.held.contains(&Self::binding(key))
    }
}
