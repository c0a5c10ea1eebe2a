use std::collections::HashSet;

use glam::Vec3;
use wirecube::camera::FOCAL_LENGTH;
use wirecube::core::{Button, Controller, DisplayContext, FrameInfo};
use wirecube::math::EulerAngles;
use wirecube::sketches::cube::{ControlMode, CubeSketch};
use wirecube::sketches::Sketch;

/// Test double: held keys are levels, presses are a queue consumed once.
#[derive(Default)]
struct ScriptedController {
    down: HashSet<Button>,
    pressed: Vec<Button>,
}

impl ScriptedController {
    fn holding(buttons: &[Button]) -> Self {
        Self {
            down: buttons.iter().copied().collect(),
            pressed: Vec::new(),
        }
    }

    fn pressing(button: Button) -> Self {
        Self {
            down: HashSet::new(),
            pressed: vec![button],
        }
    }
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

fn frame(number: u64, time: f32) -> FrameInfo {
    FrameInfo {
        number,
        time,
        delta: 1.0 / 60.0,
    }
}

fn idle() -> ScriptedController {
    ScriptedController::default()
}

#[test]
fn starts_in_cube_mode_with_startup_pose() {
    let sketch = CubeSketch::new();
    assert_eq!(sketch.mode(), ControlMode::Cube);
    assert_eq!(sketch.cube().angles, EulerAngles::new(0.6, 0.4, 0.0));
    assert_eq!(sketch.camera().position, Vec3::new(0.0, 0.0, 600.0));
    assert_eq!(sketch.camera().angles, EulerAngles::default());
    assert!(sketch.trail().is_empty());
}

#[test]
fn mode_toggle_is_edge_triggered() {
    let mut sketch = CubeSketch::new();

    sketch.update(&frame(0, 0.0), &mut ScriptedController::pressing(Button::KeyC));
    assert_eq!(sketch.mode(), ControlMode::Camera);

    // Holding the key without a new press event does not re-toggle.
    sketch.update(&frame(1, 0.02), &mut ScriptedController::holding(&[Button::KeyC]));
    assert_eq!(sketch.mode(), ControlMode::Camera);

    sketch.update(&frame(2, 0.04), &mut ScriptedController::pressing(Button::KeyC));
    assert_eq!(sketch.mode(), ControlMode::Cube);
}

#[test]
fn held_arrows_step_cube_angles_per_frame() {
    let mut sketch = CubeSketch::new();

    for i in 0..10 {
        sketch.update(
            &frame(i, i as f32 * 0.016),
            &mut ScriptedController::holding(&[Button::ArrowRight]),
        );
    }

    assert!((sketch.cube().angles.yaw - (0.6 + 10.0 * 0.03)).abs() < 1e-5);
    assert!((sketch.cube().angles.pitch - 0.4).abs() < 1e-6);
    // Camera is untouched while in cube mode.
    assert_eq!(sketch.camera().angles, EulerAngles::default());
}

#[test]
fn camera_mode_steers_camera_angles() {
    let mut sketch = CubeSketch::new();
    sketch.update(&frame(0, 0.0), &mut ScriptedController::pressing(Button::KeyC));

    let cube_angles = sketch.cube().angles;
    for i in 1..6 {
        sketch.update(
            &frame(i, i as f32 * 0.016),
            &mut ScriptedController::holding(&[Button::ArrowUp, Button::KeyE]),
        );
    }

    assert!((sketch.camera().angles.pitch - 5.0 * 0.03).abs() < 1e-6);
    assert!((sketch.camera().angles.roll - 5.0 * 0.03).abs() < 1e-6);
    assert_eq!(sketch.cube().angles, cube_angles);
}

#[test]
fn roll_keys_run_opposite_directions() {
    let mut sketch = CubeSketch::new();
    sketch.update(&frame(0, 0.0), &mut ScriptedController::holding(&[Button::KeyQ]));
    assert!((sketch.cube().angles.roll + 0.03).abs() < 1e-6);

    sketch.update(&frame(1, 0.02), &mut ScriptedController::holding(&[Button::KeyE]));
    assert!(sketch.cube().angles.roll.abs() < 1e-6);
}

#[test]
fn rotation_sheds_one_trail_sample_per_vertex() {
    let mut sketch = CubeSketch::new();

    // First frame only seeds the previous-vertex cache.
    sketch.update(&frame(0, 0.0), &mut idle());
    assert!(sketch.trail().is_empty());

    // A 0.03 rad step moves every corner (radius ≈ 173) by about 5 world
    // units, well past the 0.5 threshold.
    sketch.update(
        &frame(1, 0.016),
        &mut ScriptedController::holding(&[Button::ArrowRight]),
    );
    assert_eq!(sketch.trail().len(), 8);
}

#[test]
fn static_cube_sheds_no_trail() {
    let mut sketch = CubeSketch::new();
    for i in 0..5 {
        sketch.update(&frame(i, i as f32 * 0.016), &mut idle());
    }
    assert!(sketch.trail().is_empty());
}

#[test]
fn trail_samples_expire_after_lifetime() {
    let mut sketch = CubeSketch::new();
    sketch.update(&frame(0, 0.0), &mut idle());
    sketch.update(
        &frame(1, 0.1),
        &mut ScriptedController::holding(&[Button::ArrowRight]),
    );
    assert_eq!(sketch.trail().len(), 8);

    // 3.5 seconds later the samples are past their lifetime.
    sketch.update(&frame(2, 0.1 + 3.6), &mut idle());
    assert!(sketch.trail().is_empty());
}

#[test]
fn reset_restores_startup_state_atomically() {
    let mut sketch = CubeSketch::new();

    // Scramble everything: rotate the cube, then the camera.
    for i in 0..20 {
        sketch.update(
            &frame(i, i as f32 * 0.016),
            &mut ScriptedController::holding(&[Button::ArrowRight, Button::ArrowUp]),
        );
    }
    sketch.update(&frame(20, 0.33), &mut ScriptedController::pressing(Button::KeyC));
    for i in 21..30 {
        sketch.update(
            &frame(i, i as f32 * 0.016),
            &mut ScriptedController::holding(&[Button::ArrowLeft, Button::KeyQ]),
        );
    }
    assert!(!sketch.trail().is_empty());

    sketch.update(&frame(30, 0.5), &mut ScriptedController::pressing(Button::KeyR));

    assert_eq!(sketch.cube().angles, EulerAngles::new(0.6, 0.4, 0.0));
    assert_eq!(sketch.camera().position, Vec3::new(0.0, 0.0, 600.0));
    assert_eq!(sketch.camera().angles, EulerAngles::default());
    assert!(sketch.trail().is_empty());
}

#[test]
fn reset_jump_sheds_no_spurious_trail() {
    let mut sketch = CubeSketch::new();

    // Rotate far away from the startup pose so the reset is a big jump.
    for i in 0..30 {
        sketch.update(
            &frame(i, i as f32 * 0.016),
            &mut ScriptedController::holding(&[Button::ArrowRight]),
        );
    }

    sketch.update(&frame(30, 0.5), &mut ScriptedController::pressing(Button::KeyR));
    assert!(sketch.trail().is_empty());

    // The frame after the reset still records nothing: the cache was
    // invalidated, not compared against the pre-reset pose.
    sketch.update(&frame(31, 0.52), &mut idle());
    assert!(sketch.trail().is_empty());
}

#[test]
fn trail_behind_camera_survives_until_camera_turns_back() {
    let mut sketch = CubeSketch::new();

    // Seed the cache, then shed one sample per vertex.
    sketch.update(&frame(0, 0.00), &mut idle());
    sketch.update(
        &frame(1, 0.01),
        &mut ScriptedController::holding(&[Button::ArrowRight]),
    );
    assert_eq!(sketch.trail().len(), 8);

    // Swing the camera past 180 degrees so the cube (and every sample near
    // it) sits behind the near plane. 110 held frames at 0.03 rad is
    // 3.3 rad of yaw; timestamps stay well inside the trail lifetime.
    sketch.update(&frame(2, 0.02), &mut ScriptedController::pressing(Button::KeyC));
    for i in 0..110 {
        sketch.update(
            &frame(3 + i, 0.03 + i as f32 * 0.01),
            &mut ScriptedController::holding(&[Button::ArrowRight]),
        );
    }

    let axes = sketch.camera().axes();
    let sample = sketch.trail().samples()[0];
    assert!(sketch
        .camera()
        .project(&axes, sample.position, 225.0, 225.0, FOCAL_LENGTH)
        .is_none());

    // Rendering skips the occluded samples but never drops them.
    let before = sketch.trail().len();
    let _ = sketch.render(&DisplayContext::new(800, 600));
    sketch.update(&frame(113, 1.14), &mut idle());
    assert_eq!(sketch.trail().len(), before);

    // Turn back; the same samples project again.
    for i in 0..110 {
        sketch.update(
            &frame(114 + i, 1.15 + i as f32 * 0.01),
            &mut ScriptedController::holding(&[Button::ArrowLeft]),
        );
    }
    let axes = sketch.camera().axes();
    assert_eq!(sketch.trail().len(), before);
    assert!(sketch
        .camera()
        .project(&axes, sample.position, 225.0, 225.0, FOCAL_LENGTH)
        .is_some());
}

#[test]
fn world_vertices_keep_corner_distance() {
    let sketch = CubeSketch::new();
    let expected = (3.0f32).sqrt() * 100.0;
    for v in sketch.world_vertices() {
        assert!((v.length() - expected).abs() < 1e-3);
    }
}

#[test]
fn render_fills_backdrop_and_viewport() {
    let mut sketch = CubeSketch::new();
    sketch.update(&frame(0, 0.0), &mut idle());

    let context = DisplayContext::new(800, 600);
    let canvas = sketch.render(&context);

    assert_eq!(canvas.pixels().len(), context.buffer_size());
    // Surface corner: backdrop gray.
    assert_eq!(canvas.pixel(0, 0), Some([64, 64, 64, 255]));
    // Viewport corner (175, 75): black, far from the centered cube.
    assert_eq!(canvas.pixel(175, 75), Some([0, 0, 0, 255]));
    // Just outside the viewport: still backdrop.
    assert_eq!(canvas.pixel(174, 75), Some([64, 64, 64, 255]));
}

#[test]
fn render_draws_some_wireframe_pixels() {
    let mut sketch = CubeSketch::new();
    sketch.update(&frame(0, 0.0), &mut idle());

    let canvas = sketch.render(&DisplayContext::new(800, 600));

    // The cube is centered and spans on the order of 200 projected pixels;
    // something non-background must be inside the viewport.
    let mut non_background = 0;
    for y in 200..400 {
        for x in 300..500 {
            match canvas.pixel(x, y) {
                Some([0, 0, 0, 255]) | Some([64, 64, 64, 255]) => {}
                Some(_) => non_background += 1,
                None => {}
            }
        }
    }
    assert!(non_background > 50, "only {non_background} drawn pixels");
}

#[test]
fn hud_reports_mode_and_angles() {
    let sketch = CubeSketch::new();
    let lines = sketch.hud_lines();

    assert!(lines[0].contains("CUBE"));
    assert!(lines.iter().any(|l| l.contains("0.60") && l.contains("0.40")));
}
