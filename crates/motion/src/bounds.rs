use gallery_common::GalleryConfig;
use glam::Vec3;

/// Axis-aligned room volume the camera is confined to.
///
/// `clamp` saturates a position into the volume; it is total, deterministic,
/// and idempotent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomBounds {
    pub half_size: f32,
    pub wall_margin: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl RoomBounds {
    pub fn new(half_size: f32, wall_margin: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            half_size,
            wall_margin,
            min_height,
            max_height,
        }
    }

    pub fn from_config(config: &GalleryConfig) -> Self {
        Self::new(
            config.room_half_size,
            config.wall_margin,
            config.min_height,
            config.max_height,
        )
    }

    /// Saturate a position into the room volume.
    pub fn clamp(&self, position: Vec3) -> Vec3 {
        let extent = self.half_size - self.wall_margin;
        Vec3::new(
            position.x.clamp(-extent, extent),
            position.y.clamp(self.min_height, self.max_height),
            position.z.clamp(-extent, extent),
        )
    }

    pub fn contains(&self, position: Vec3) -> bool {
        self.clamp(position) == position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> RoomBounds {
        RoomBounds::new(25.0, 0.5, 0.5, 9.5)
    }

    #[test]
    fn wall_collision_scenario() {
        // (24.9, 1, 0) displaced by (1, 0, 0) clamps to x = 24.5.
        let clamped = bounds().clamp(Vec3::new(24.9, 1.0, 0.0) + Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(clamped, Vec3::new(24.5, 1.0, 0.0));
    }

    #[test]
    fn interior_points_pass_through() {
        let b = bounds();
        let p = Vec3::new(3.0, 1.6, -7.0);
        assert_eq!(b.clamp(p), p);
        assert!(b.contains(p));
    }

    #[test]
    fn clamp_is_idempotent() {
        let b = bounds();
        for p in [
            Vec3::new(100.0, -5.0, -100.0),
            Vec3::new(-30.0, 20.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::splat(f32::MAX),
        ] {
            let once = b.clamp(p);
            assert_eq!(b.clamp(once), once);
            assert!(b.contains(once));
        }
    }

    #[test]
    fn height_saturates_to_floor_and_ceiling() {
        let b = bounds();
        assert_eq!(b.clamp(Vec3::new(0.0, -3.0, 0.0)).y, 0.5);
        assert_eq!(b.clamp(Vec3::new(0.0, 42.0, 0.0)).y, 9.5);
    }
}
