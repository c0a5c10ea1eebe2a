use std::collections::HashSet;

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Bridges winit keyboard events to the [`Controller`] trait. Held state
/// tracks press/release transitions; discrete presses queue up until a
/// sketch consumes them (OS key-repeat is ignored for the queue).
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    held: HashSet<Button>,
    pressed_queue: Vec<Button>,
}

impl WinitController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a winit window event into the input state.
    pub fn process_event(&mut self, event: &WindowEvent) {
        let WindowEvent::KeyboardInput { event, .. } = event else {
            return;
        };
        let PhysicalKey::Code(keycode) = event.physical_key else {
            return;
        };
        let Some(button) = Self::keycode_to_button(keycode) else {
            return;
        };

        match event.state {
            ElementState::Pressed => {
                if !event.repeat && self.held.insert(button) {
                    self.pressed_queue.push(button);
                }
            }
            ElementState::Released => {
                self.held.remove(&button);
            }
        }
    }

    /// Drop press events nobody consumed this frame so they cannot fire on
    /// a later frame. Call once per frame after the sketch update.
    pub fn end_frame(&mut self) {
        self.pressed_queue.clear();
    }

    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::ArrowLeft => Some(Button::ArrowLeft),
            KeyCode::ArrowRight => Some(Button::ArrowRight),
            KeyCode::ArrowUp => Some(Button::ArrowUp),
            KeyCode::ArrowDown => Some(Button::ArrowDown),
            KeyCode::KeyQ => Some(Button::KeyQ),
            KeyCode::KeyE => Some(Button::KeyE),
            KeyCode::KeyC => Some(Button::KeyC),
            KeyCode::KeyR => Some(Button::KeyR),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.held.contains(&button)
    }

    fn take_pressed(&mut self, button: Button) -> bool {
        if let Some(idx) = self.pressed_queue.iter().position(|&b| b == button) {
            self.pressed_queue.remove(idx);
            true
        } else {
            false
        }
    }
}
