use gallery_common::{Camera, GalleryConfig};
use glam::Vec3;

use crate::bounds::RoomBounds;
use crate::input::{InputState, NavMode};

/// Reference frame rate the speed constants are tuned against. Scaling by
/// `delta * 60` keeps walk speed independent of the actual refresh rate.
const REFERENCE_FPS: f32 = 60.0;

/// Converts discrete input flags and camera orientation into a per-tick
/// camera displacement, constrained to the room volume.
///
/// Look state is split between controller and camera: drag input accumulates
/// into `target_yaw`/`target_pitch` here, and the camera's live orientation
/// approaches the target exponentially each tick.
pub struct MotionController {
    base_speed: f32,
    rotation_speed: f32,
    rotation_smoothing: f32,
    target_yaw: f32,
    target_pitch: f32,
    bob_freq: f32,
    bob_amp: f32,
    debug_step: f32,
}

impl MotionController {
    pub fn new(config: &GalleryConfig, camera: &Camera) -> Self {
        Self {
            base_speed: config.base_move_speed,
            rotation_speed: 0.02,
            rotation_smoothing: config.rotation_smoothing,
            target_yaw: camera.yaw,
            target_pitch: camera.pitch,
            bob_freq: 10.0,
            bob_amp: 0.01,
            debug_step: 0.1,
        }
    }

    pub fn target_yaw(&self) -> f32 {
        self.target_yaw
    }

    pub fn target_pitch(&self) -> f32 {
        self.target_pitch
    }

    /// Directional displacement for this tick, excluding bob. Pure over the
    /// input flags and the camera's horizontal basis.
    pub fn displacement(&self, input: &InputState, camera: &Camera, delta: f32) -> Vec3 {
        let mut speed = self.base_speed;
        if input.boost {
            speed *= 2.0;
        }
        if input.slow {
            speed *= 0.5;
        }
        let scale = speed * delta * REFERENCE_FPS;

        let forward = camera.horizontal_forward();
        let right = camera.horizontal_right();
        let mut motion = Vec3::ZERO;
        if input.forward {
            motion += forward * scale;
        }
        if input.backward {
            motion -= forward * scale;
        }
        if input.right {
            motion += right * scale;
        }
        if input.left {
            motion -= right * scale;
        }
        motion
    }

    /// Vertical bob term while walking.
    pub fn bob_offset(&self, wall_secs: f64) -> f32 {
        (wall_secs as f32 * self.bob_freq).sin() * self.bob_amp
    }

    /// Advance one tick: consume drag input, smooth the look rotation, apply
    /// gated displacement, and clamp the result into the room.
    ///
    /// Keyboard displacement applies in FirstPerson mode, or in Orbit mode
    /// only while the external orbit collaborator is disabled; otherwise
    /// motion is fully delegated to that collaborator. DirectDebug applies
    /// fixed world-axis steps regardless of camera orientation.
    pub fn step(
        &mut self,
        input: &mut InputState,
        camera: &mut Camera,
        bounds: &RoomBounds,
        delta: f32,
        wall_secs: f64,
        orbit_enabled: bool,
    ) {
        let drag = input.take_drag();
        if drag != glam::Vec2::ZERO {
            self.target_yaw += drag.x * self.rotation_speed;
            self.target_pitch = (self.target_pitch - drag.y * self.rotation_speed)
                .clamp(-std::f32::consts::FRAC_PI_2, std::f32::consts::FRAC_PI_2);
        }
        if input.mode == NavMode::FirstPerson {
            camera.yaw += (self.target_yaw - camera.yaw) * self.rotation_smoothing;
            camera.pitch += (self.target_pitch - camera.pitch) * self.rotation_smoothing;
        }

        let motion = match input.mode {
            NavMode::FirstPerson => self.displacement(input, camera, delta),
            NavMode::Orbit if !orbit_enabled => self.displacement(input, camera, delta),
            // The orbit collaborator owns the camera; no displacement, no bob.
            NavMode::Orbit => return,
            NavMode::DirectDebug => self.debug_displacement(input, delta),
        };

        if !input.any_directional() {
            return;
        }

        let mut next = camera.position + motion;
        if input.mode != NavMode::DirectDebug {
            next.y += self.bob_offset(wall_secs);
        }
        camera.position = bounds.clamp(next);
        tracing::trace!(position = ?camera.position, "camera moved");
    }

    /// Fixed-axis displacement for DirectDebug mode. Ignores where the
    /// camera is looking; forward is always -Z.
    fn debug_displacement(&self, input: &InputState, delta: f32) -> Vec3 {
        let step = self.debug_step * delta * REFERENCE_FPS;
        let mut motion = Vec3::ZERO;
        if input.forward {
            motion.z -= step;
        }
        if input.backward {
            motion.z += step;
        }
        if input.right {
            motion.x += step;
        }
        if input.left {
            motion.x -= step;
        }
        motion
    }
}
