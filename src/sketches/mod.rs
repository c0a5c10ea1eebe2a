pub mod cube;
pub mod square;

pub use cube::CubeSketch;
pub use square::SquareSketch;

use crate::core::{Canvas, Controller, DisplayContext, FrameInfo};

/// One self-contained interactive drawing. The host calls `update` then
/// `render` once per display refresh tick; nothing suspends mid-frame.
pub trait Sketch {
    /// Advance state one frame. Held keys are sampled here, discrete
    /// presses consumed here.
    fn update(&mut self, frame: &FrameInfo, controller: &mut dyn Controller);

    /// Draw the current state into a fresh canvas covering the surface.
    fn render(&self, context: &DisplayContext) -> Canvas;

    /// Status lines for the HUD overlay.
    fn hud_lines(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Look up a sketch by its CLI name.
pub fn by_name(name: &str) -> Option<Box<dyn Sketch>> {
    match name {
        "cube" => Some(Box::new(CubeSketch::new())),
        "square" => Some(Box::new(SquareSketch)),
        _ => None,
    }
}

/// Names accepted by [`by_name`].
pub const SKETCH_NAMES: &[&str] = &["cube", "square"];
