/// RGBA color, straight (non-premultiplied) alpha.
pub type Color = [u8; 4];

/// CPU canvas: an RGBA8 pixel buffer with immediate-mode drawing
/// primitives. All drawing blends source-over and is bounds-checked, so
/// off-surface coordinates are safe and simply clipped.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create a transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; (width * height * 4) as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Read one pixel; `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        Some([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }

    /// Overwrite every pixel with `color`, alpha included.
    pub fn clear(&mut self, color: Color) {
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&color);
        }
    }

    /// Blend one pixel source-over. Fully opaque sources overwrite, fully
    /// transparent ones are a no-op.
    fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;

        match color[3] {
            0 => {}
            255 => self.pixels[idx..idx + 4].copy_from_slice(&color),
            a => {
                let sa = a as f32 / 255.0;
                let da = self.pixels[idx + 3] as f32 / 255.0;
                let out_a = sa + da * (1.0 - sa);
                if out_a <= 0.0 {
                    return;
                }
                for c in 0..3 {
                    let src = color[c] as f32;
                    let dst = self.pixels[idx + c] as f32;
                    let blended = (src * sa + dst * da * (1.0 - sa)) / out_a;
                    self.pixels[idx + c] = blended.round() as u8;
                }
                self.pixels[idx + 3] = (out_a * 255.0).round() as u8;
            }
        }
    }

    /// Filled axis-aligned rectangle. `x`/`y` may be negative.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        for dy in 0..height as i32 {
            for dx in 0..width as i32 {
                self.blend_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Line segment via Bresenham on rounded endpoints.
    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color) {
        let (mut x, mut y) = (x1.round() as i32, y1.round() as i32);
        let (x2, y2) = (x2.round() as i32, y2.round() as i32);

        let dx = (x2 - x).abs();
        let dy = -(y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.blend_pixel(x, y, color);

            if x == x2 && y == y2 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Filled circle with float center and diameter, tested against pixel
    /// centers.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, diameter: f32, color: Color) {
        let radius = diameter / 2.0;
        if radius <= 0.0 {
            return;
        }
        let r_sq = radius * radius;

        let x0 = (cx - radius).floor() as i32;
        let x1 = (cx + radius).ceil() as i32;
        let y0 = (cy - radius).floor() as i32;
        let y1 = (cy + radius).ceil() as i32;

        for py in y0..=y1 {
            for px in x0..=x1 {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r_sq {
                    self.blend_pixel(px, py, color);
                }
            }
        }
    }

    /// Composite another canvas onto this one at `(x, y)`, source-over.
    /// Transparent source pixels leave the destination untouched, which is
    /// what clips layer contents to the layer bounds.
    pub fn blit(&mut self, src: &Canvas, x: i32, y: i32) {
        for sy in 0..src.height {
            for sx in 0..src.width {
                let idx = ((sy * src.width + sx) * 4) as usize;
                let color = [
                    src.pixels[idx],
                    src.pixels[idx + 1],
                    src.pixels[idx + 2],
                    src.pixels[idx + 3],
                ];
                if color[3] != 0 {
                    self.blend_pixel(x + sx as i32, y + sy as i32, color);
                }
            }
        }
    }
}
