/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Map `value` from `[in_start, in_end]` onto `[out_start, out_end]`,
/// clamping to the input range first. Output ranges may run downhill
/// (e.g. depth 100..800 mapped to size 8..2).
pub fn remap_clamped(value: f32, in_start: f32, in_end: f32, out_start: f32, out_end: f32) -> f32 {
    let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    lerp(out_start, out_end, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(220.0, 0.0, 0.0), 220.0);
        assert_eq!(lerp(220.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn lerp_midpoint() {
        assert!((lerp(0.0, 10.0, 0.5) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn remap_inside_range() {
        // Depth 450 is the midpoint of 100..800.
        let size = remap_clamped(450.0, 100.0, 800.0, 8.0, 2.0);
        assert!((size - 5.0).abs() < 1e-5);
    }

    #[test]
    fn remap_clamps_below() {
        let size = remap_clamped(10.0, 100.0, 800.0, 8.0, 2.0);
        assert_eq!(size, 8.0);
    }

    #[test]
    fn remap_clamps_above() {
        let size = remap_clamped(5000.0, 100.0, 800.0, 8.0, 2.0);
        assert_eq!(size, 2.0);
    }

    #[test]
    fn remap_uphill_output() {
        let v = remap_clamped(0.75, 0.0, 1.0, 0.0, 220.0);
        assert!((v - 165.0).abs() < 1e-4);
    }
}
