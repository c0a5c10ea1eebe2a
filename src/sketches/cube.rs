use glam::Vec3;

use crate::camera::{Camera, ProjectedPoint, FOCAL_LENGTH};
use crate::core::{Button, Canvas, Color, Controller, DisplayContext, FrameInfo, Viewport};
use crate::geometry::{self, EDGES};
use crate::math::{lerp, remap_clamped, EulerAngles};
use crate::trail::{TrailBuffer, TRAIL_LIFE};

use super::Sketch;

/// Angle increment per frame for a held key, radians. Deliberately tied to
/// frame count rather than elapsed time; rotation speed follows the
/// display refresh rate.
const ROTATE_STEP: f32 = 0.03;

/// Cube edge length in world units.
const CUBE_SIZE: f32 = 200.0;

/// Depth range over which point sizes shrink.
const DEPTH_NEAR: f32 = 100.0;
const DEPTH_FAR: f32 = 800.0;

const START_CUBE_ANGLES: EulerAngles = EulerAngles::new(0.6, 0.4, 0.0);
const START_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 600.0);

const BACKDROP: Color = [64, 64, 64, 255];
const VIEWPORT_BG: Color = [0, 0, 0, 255];
const EDGE_COLOR: Color = [230, 230, 230, 255];
const VERTEX_COLOR: Color = [255, 130, 60, 255];
const TRAIL_RGB: [u8; 3] = [130, 200, 255];

/// Which state the directional keys steer this frame. Exactly one is
/// active; the only transition is a toggle on a discrete key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    Cube,
    Camera,
}

impl ControlMode {
    pub fn toggled(self) -> Self {
        match self {
            ControlMode::Cube => ControlMode::Camera,
            ControlMode::Camera => ControlMode::Cube,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ControlMode::Cube => "CUBE",
            ControlMode::Camera => "CAMERA",
        }
    }
}

/// Cube pose; vertices are derived from it each frame, never stored.
#[derive(Debug, Clone, Copy)]
pub struct CubeState {
    pub size: f32,
    pub angles: EulerAngles,
}

/// The wireframe-cube sketch: Euler-rotated cube, orbit camera, and fading
/// vertex trails. All mutable scene state lives here, owned explicitly.
pub struct CubeSketch {
    cube: CubeState,
    camera: Camera,
    mode: ControlMode,
    trail: TrailBuffer,
    /// Last frame's world-space vertices, kept as copies so the trail
    /// comparison never aliases state mutated later in the frame.
    prev_world: Option<[Vec3; 8]>,
    now: f32,
}

impl CubeSketch {
    pub fn new() -> Self {
        Self {
            cube: CubeState {
                size: CUBE_SIZE,
                angles: START_CUBE_ANGLES,
            },
            camera: Camera::new(START_CAMERA_POSITION, EulerAngles::default()),
            mode: ControlMode::Cube,
            trail: TrailBuffer::new(),
            prev_world: None,
            now: 0.0,
        }
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    pub fn cube(&self) -> &CubeState {
        &self.cube
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    /// Restore the startup pose, drop the whole trail, and forget the
    /// previous-vertex cache so the jump back sheds no samples. One atomic
    /// step from the caller's point of view.
    pub fn reset(&mut self) {
        self.cube.angles = START_CUBE_ANGLES;
        self.camera.position = START_CAMERA_POSITION;
        self.camera.angles = EulerAngles::default();
        self.trail = TrailBuffer::new();
        self.prev_world = None;
    }

    /// This frame's world-space vertices: static corners rotated by the
    /// cube's current angles.
    pub fn world_vertices(&self) -> [Vec3; 8] {
        let mut corners = geometry::vertices(self.cube.size);
        for corner in &mut corners {
            *corner = self.cube.angles.apply(*corner);
        }
        corners
    }

    fn apply_held_input(&mut self, controller: &dyn Controller) {
        let angles = match self.mode {
            ControlMode::Cube => &mut self.cube.angles,
            ControlMode::Camera => &mut self.camera.angles,
        };

        if controller.is_down(Button::ArrowLeft) {
            angles.yaw -= ROTATE_STEP;
        }
        if controller.is_down(Button::ArrowRight) {
            angles.yaw += ROTATE_STEP;
        }
        if controller.is_down(Button::ArrowUp) {
            angles.pitch += ROTATE_STEP;
        }
        if controller.is_down(Button::ArrowDown) {
            angles.pitch -= ROTATE_STEP;
        }
        if controller.is_down(Button::KeyQ) {
            angles.roll -= ROTATE_STEP;
        }
        if controller.is_down(Button::KeyE) {
            angles.roll += ROTATE_STEP;
        }
    }
}

impl Default for CubeSketch {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketch for CubeSketch {
    fn update(&mut self, frame: &FrameInfo, controller: &mut dyn Controller) {
        self.now = frame.time;

        if controller.take_pressed(Button::KeyC) {
            self.mode = self.mode.toggled();
        }
        if controller.take_pressed(Button::KeyR) {
            self.reset();
        }

        self.apply_held_input(controller);

        let world = self.world_vertices();
        if let Some(prev) = self.prev_world {
            for (current, previous) in world.iter().zip(prev.iter()) {
                self.trail.record_if_moved(*current, *previous, frame.time);
            }
        }
        self.prev_world = Some(world);

        self.trail.evict_expired(frame.time);
    }

    fn render(&self, context: &DisplayContext) -> Canvas {
        let mut surface = Canvas::new(context.width, context.height);
        surface.clear(BACKDROP);

        let vp = Viewport::centered(context.width, context.height);
        surface.fill_rect(vp.x, vp.y, vp.side, vp.side, VIEWPORT_BG);

        let axes = self.camera.axes();

        // Trail first: the faded background layer, drawn straight onto the
        // full surface, unclipped by the viewport.
        for sample in self.trail.samples() {
            let Some(p) = self.camera.project(
                &axes,
                sample.position,
                vp.center_x(),
                vp.center_y(),
                FOCAL_LENGTH,
            ) else {
                // Behind the camera: skip drawing, keep the sample.
                continue;
            };

            let age = sample.age(self.now);
            let alpha = lerp(220.0, 0.0, (age / TRAIL_LIFE).clamp(0.0, 1.0)).round() as u8;
            let diameter = remap_clamped(p.depth, DEPTH_NEAR, DEPTH_FAR, 8.0, 2.0) * 1.8;
            surface.fill_circle(
                p.x,
                p.y,
                diameter,
                [TRAIL_RGB[0], TRAIL_RGB[1], TRAIL_RGB[2], alpha],
            );
        }

        // Edges and vertices go through a viewport-sized layer whose bounds
        // clip them, then composite onto the surface.
        let mut wire = Canvas::new(vp.side, vp.side);
        let half = vp.side as f32 / 2.0;

        let projected: Vec<Option<ProjectedPoint>> = self
            .world_vertices()
            .iter()
            .map(|v| self.camera.project(&axes, *v, half, half, FOCAL_LENGTH))
            .collect();

        for [a, b] in EDGES {
            // An edge is drawn only when both endpoints are visible.
            if let (Some(pa), Some(pb)) = (&projected[a], &projected[b]) {
                wire.line(pa.x, pa.y, pb.x, pb.y, EDGE_COLOR);
            }
        }

        for p in projected.iter().flatten() {
            let radius = remap_clamped(p.depth, DEPTH_NEAR, DEPTH_FAR, 6.0, 2.0);
            wire.fill_circle(p.x, p.y, radius * 2.0, VERTEX_COLOR);
        }

        surface.blit(&wire, vp.x, vp.y);
        surface
    }

    fn hud_lines(&self) -> Vec<String> {
        let c = self.cube.angles;
        let k = self.camera.angles;
        let dir = Camera::direction(k.yaw, k.pitch);
        vec![
            format!("mode: {}  (C toggles, R resets)", self.mode.label()),
            format!("cube   yaw {:.2}  pitch {:.2}  roll {:.2}", c.yaw, c.pitch, c.roll),
            format!("camera yaw {:.2}  pitch {:.2}  roll {:.2}", k.yaw, k.pitch, k.roll),
            format!("facing ({:.2}, {:.2}, {:.2})", dir.x, dir.y, dir.z),
            format!("trail  {} samples", self.trail.len()),
        ]
    }
}
