use glam::{Vec2, Vec3};

/// A ray in world space. Direction is unit-length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize(),
        }
    }

    /// Point along the ray at distance `t`.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Walk camera with position, yaw, pitch, and projection parameters.
///
/// The camera is externally owned state in the tick loop: the motion
/// controller writes position and smoothed yaw/pitch, the picker reads it
/// to cast pointer rays.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub aspect: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.6, 5.0),
            yaw: -90.0_f32.to_radians(),
            pitch: 0.0,
            fov: 75.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
        }
    }
}

impl Camera {
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }

    /// Forward vector projected onto the horizontal plane and renormalized.
    /// Keeps keyboard movement level regardless of where the camera looks.
    pub fn horizontal_forward(&self) -> Vec3 {
        let mut f = self.forward();
        f.y = 0.0;
        f.normalize_or(Vec3::NEG_Z)
    }

    /// Right vector projected onto the horizontal plane and renormalized.
    pub fn horizontal_right(&self) -> Vec3 {
        let mut r = self.right();
        r.y = 0.0;
        r.normalize_or(Vec3::X)
    }

    /// Cast a ray from the camera through a pointer position in normalized
    /// device coordinates (x, y in [-1, 1], y up).
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray {
        let half_h = (self.fov * 0.5).tan();
        let half_w = half_h * self.aspect;
        let dir = self.forward() + self.right() * (ndc.x * half_w) + self.up() * (ndc.y * half_h);
        Ray::new(self.position, dir)
    }
}
