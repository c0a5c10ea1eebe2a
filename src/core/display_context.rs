/// Drawing surface dimensions for one frame.
#[derive(Debug, Clone, Copy)]
pub struct DisplayContext {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl DisplayContext {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total size in bytes for an RGBA buffer.
    pub fn buffer_size(&self) -> usize {
        (self.width * self.height * 4) as usize
    }
}

/// The fixed square viewport every sketch draws into: side length is 3/4 of
/// the smaller surface dimension, floored, centered with floored offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub side: u32,
}

impl Viewport {
    pub fn centered(width: u32, height: u32) -> Self {
        let side = (width.min(height) as f32 * 0.75).floor() as u32;
        Self {
            x: ((width - side) / 2) as i32,
            y: ((height - side) / 2) as i32,
            side,
        }
    }

    /// Horizontal center on the full surface, used as the projection origin.
    pub fn center_x(&self) -> f32 {
        self.x as f32 + self.side as f32 / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y as f32 + self.side as f32 / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_size_is_rgba() {
        let ctx = DisplayContext::new(100, 50);
        assert_eq!(ctx.buffer_size(), 100 * 50 * 4);
    }

    #[test]
    fn viewport_side_is_three_quarters_of_min() {
        let vp = Viewport::centered(800, 600);
        assert_eq!(vp.side, 450);
        assert_eq!(vp.x, 175);
        assert_eq!(vp.y, 75);
    }

    #[test]
    fn viewport_floors_odd_dimensions() {
        // 0.75 * 333 = 249.75, floored to 249; offsets floor too.
        let vp = Viewport::centered(333, 777);
        assert_eq!(vp.side, 249);
        assert_eq!(vp.x, (333 - 249) / 2);
        assert_eq!(vp.y, (777 - 249) / 2);
    }

    #[test]
    fn viewport_center_tracks_offsets() {
        let vp = Viewport::centered(800, 600);
        assert_eq!(vp.center_x(), 175.0 + 225.0);
        assert_eq!(vp.center_y(), 75.0 + 225.0);
    }
}
