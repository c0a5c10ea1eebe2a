use glam::Vec3;

use crate::math::{rotate, EulerAngles};

/// Camera-space depth at or below which a point counts as behind the camera.
pub const NEAR_EPSILON: f32 = 1e-4;

/// Pinhole focal length in pixels. There is no field-of-view parameter;
/// this constant is the whole projection model.
pub const FOCAL_LENGTH: f32 = 700.0;

/// Screen-space result of projecting a world point. `depth` is the
/// camera-space Z (distance along the forward axis), always positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
}

/// Orthonormal basis derived from the camera's Euler angles, recomputed
/// once per frame.
#[derive(Debug, Clone, Copy)]
pub struct CameraAxes {
    pub right: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
}

/// World-space camera with its own yaw/pitch/roll orientation.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub angles: EulerAngles,
}

impl Camera {
    pub fn new(position: Vec3, angles: EulerAngles) -> Self {
        Self { position, angles }
    }

    /// Derive the right/up/forward basis by Euler-rotating the canonical
    /// axes. Normalization guards against drift from the trig composition.
    pub fn axes(&self) -> CameraAxes {
        let EulerAngles { yaw, pitch, roll } = self.angles;
        CameraAxes {
            right: rotate(Vec3::X, yaw, pitch, roll).normalize(),
            up: rotate(Vec3::Y, yaw, pitch, roll).normalize(),
            forward: rotate(Vec3::NEG_Z, yaw, pitch, roll).normalize(),
        }
    }

    /// Facing direction from yaw and pitch alone. Roll twists the frame
    /// around this axis but never changes where the camera looks.
    pub fn direction(yaw: f32, pitch: f32) -> Vec3 {
        rotate(Vec3::NEG_Z, yaw, pitch, 0.0).normalize()
    }

    /// Perspective-project a world point onto the screen. Returns `None`
    /// when the point sits behind (or effectively at) the camera, so the
    /// perspective divide never sees a non-positive depth.
    ///
    /// Screen Y grows downward while camera-up points up, hence the flip.
    /// Points outside the visible raster still project; clipping is the
    /// drawing surface's problem.
    pub fn project(
        &self,
        axes: &CameraAxes,
        world: Vec3,
        center_x: f32,
        center_y: f32,
        focal_length: f32,
    ) -> Option<ProjectedPoint> {
        let rel = world - self.position;
        let cx = rel.dot(axes.right);
        let cy = rel.dot(axes.up);
        let cz = rel.dot(axes.forward);

        if cz <= NEAR_EPSILON {
            return None;
        }

        Some(ProjectedPoint {
            x: cx / cz * focal_length + center_x,
            y: -(cy / cz) * focal_length + center_y,
            depth: cz,
        })
    }
}
