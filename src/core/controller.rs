/// Logical input buttons for the sketches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    KeyQ,
    KeyE,
    KeyC,
    KeyR,
}

/// Input state with two distinct reads: a level query for held keys,
/// sampled once per frame, and an edge query for discrete presses that is
/// consumed once per occurrence. Holding a key never re-triggers the edge
/// query.
pub trait Controller {
    /// Is the button held down right now?
    fn is_down(&self, button: Button) -> bool;

    /// Was the button pressed since the last time this was asked? Consumes
    /// the press event.
    fn take_pressed(&mut self, button: Button) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptedController {
        down: Vec<Button>,
        pressed: Vec<Button>,
    }

    impl Controller for ScriptedController {
        fn is_down(&self, button: Button) -> bool {
            self.down.contains(&button)
        }

        fn take_pressed(&mut self, button: Button) -> bool {
            if let Some(idx) = self.pressed.iter().position(|&b| b == button) {
                self.pressed.remove(idx);
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn level_query_does_not_consume() {
        let mut ctrl = ScriptedController {
            down: vec![Button::ArrowLeft],
            pressed: vec![],
        };
        assert!(ctrl.is_down(Button::ArrowLeft));
        assert!(ctrl.is_down(Button::ArrowLeft));
        assert!(!ctrl.take_pressed(Button::ArrowLeft));
    }

    #[test]
    fn edge_query_consumes_once() {
        let mut ctrl = ScriptedController {
            down: vec![],
            pressed: vec![Button::KeyC],
        };
        assert!(ctrl.take_pressed(Button::KeyC));
        assert!(!ctrl.take_pressed(Button::KeyC));
    }
}
