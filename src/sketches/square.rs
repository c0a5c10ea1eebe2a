use crate::core::{Canvas, Color, Controller, DisplayContext, FrameInfo, Viewport};

use super::Sketch;

const BACKDROP: Color = [64, 64, 64, 255];
const SQUARE: Color = [0, 0, 0, 255];

/// The simplest sketch: a static black square, 3/4 of the smaller surface
/// side, centered. No state, no input.
pub struct SquareSketch;

impl Sketch for SquareSketch {
    fn update(&mut self, _frame: &FrameInfo, _controller: &mut dyn Controller) {}

    fn render(&self, context: &DisplayContext) -> Canvas {
        let mut canvas = Canvas::new(context.width, context.height);
        canvas.clear(BACKDROP);

        let vp = Viewport::centered(context.width, context.height);
        canvas.fill_rect(vp.x, vp.y, vp.side, vp.side, SQUARE);
        canvas
    }
}
