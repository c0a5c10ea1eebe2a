use glam::Vec3;

/// Rotate `v` by Euler angles applied in a fixed order: roll about Z, then
/// pitch about X, then yaw about Y. The order is part of the sketch's look
/// and must not change.
///
/// Zero angles skip their axis entirely; rotating by zero is the identity,
/// so the skip never changes the result.
pub fn rotate(v: Vec3, yaw: f32, pitch: f32, roll: f32) -> Vec3 {
    let mut out = v;

    if roll != 0.0 {
        let (s, c) = roll.sin_cos();
        out = Vec3::new(out.x * c - out.y * s, out.x * s + out.y * c, out.z);
    }

    if pitch != 0.0 {
        let (s, c) = pitch.sin_cos();
        out = Vec3::new(out.x, out.y * c - out.z * s, out.y * s + out.z * c);
    }

    if yaw != 0.0 {
        let (s, c) = yaw.sin_cos();
        out = Vec3::new(out.x * c + out.z * s, out.y, -out.x * s + out.z * c);
    }

    out
}

/// Yaw/pitch/roll in radians. Angles accumulate without wraparound; the
/// magnitude growing unbounded over a long session is accepted behavior.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl EulerAngles {
    pub const fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Rotate a vector by these angles.
    pub fn apply(&self, v: Vec3) -> Vec3 {
        rotate(v, self.yaw, self.pitch, self.roll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < TOLERANCE
    }

    #[test]
    fn zero_angles_are_identity() {
        let v = Vec3::new(1.5, -2.0, 3.25);
        assert_eq!(rotate(v, 0.0, 0.0, 0.0), v);
    }

    #[test]
    fn rotation_preserves_magnitude() {
        let v = Vec3::new(3.0, -4.0, 12.0);
        let angles = [
            (0.3, 0.0, 0.0),
            (0.0, 1.2, 0.0),
            (0.0, 0.0, -0.7),
            (0.6, 0.4, 0.0),
            (2.1, -0.9, 1.8),
            (10.0, -7.0, 4.0),
        ];

        for (yaw, pitch, roll) in angles {
            let rotated = rotate(v, yaw, pitch, roll);
            assert!(
                (rotated.length() - v.length()).abs() < TOLERANCE,
                "magnitude changed for ({yaw}, {pitch}, {roll})"
            );
        }
    }

    #[test]
    fn yaw_quarter_turn() {
        // Rotating -Z about Y by +90 degrees swings it onto -X.
        let v = rotate(Vec3::new(0.0, 0.0, -1.0), std::f32::consts::FRAC_PI_2, 0.0, 0.0);
        assert!(approx(v, Vec3::new(-1.0, 0.0, 0.0)), "{v:?}");
    }

    #[test]
    fn pitch_quarter_turn() {
        // Rotating +Y about X by +90 degrees swings it onto +Z.
        let v = rotate(Vec3::new(0.0, 1.0, 0.0), 0.0, std::f32::consts::FRAC_PI_2, 0.0);
        assert!(approx(v, Vec3::new(0.0, 0.0, 1.0)), "{v:?}");
    }

    #[test]
    fn roll_quarter_turn() {
        // Rotating +X about Z by +90 degrees swings it onto +Y.
        let v = rotate(Vec3::new(1.0, 0.0, 0.0), 0.0, 0.0, std::f32::consts::FRAC_PI_2);
        assert!(approx(v, Vec3::new(0.0, 1.0, 0.0)), "{v:?}");
    }

    #[test]
    fn composition_order_is_roll_pitch_yaw() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let step_by_step = rotate(
            rotate(rotate(v, 0.0, 0.0, 0.5), 0.0, 0.8, 0.0),
            1.1,
            0.0,
            0.0,
        );
        let composed = rotate(v, 1.1, 0.8, 0.5);
        assert!(approx(step_by_step, composed), "{step_by_step:?} vs {composed:?}");
    }

    #[test]
    fn input_is_not_mutated() {
        let v = Vec3::new(1.0, 0.0, 0.0);
        let _ = rotate(v, 1.0, 2.0, 3.0);
        assert_eq!(v, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn angles_apply_matches_rotate() {
        let v = Vec3::new(0.5, -1.5, 2.0);
        let angles = EulerAngles::new(0.6, 0.4, -0.2);
        assert_eq!(angles.apply(v), rotate(v, 0.6, 0.4, -0.2));
    }
}
