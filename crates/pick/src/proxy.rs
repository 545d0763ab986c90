use gallery_common::Ray;
use glam::Vec3;

/// Identifier for a single hit proxy within the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProxyId(pub u64);

/// Axis-aligned box used as selection geometry for an exhibit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Box described by its center and half extents, the way exhibit frames
    /// are registered.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Slab-method ray intersection. Returns the distance to the nearest
    /// hit point, or `None` on a miss. A ray starting inside the box hits
    /// at distance zero.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let dir = ray.dir[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);
            if dir.abs() < 1e-9 {
                // Parallel to the slab: miss unless the origin is inside it.
                if origin < lo || origin > hi {
                    return None;
                }
            } else {
                let t0 = (lo - origin) / dir;
                let t1 = (hi - origin) / dir;
                let (t0, t1) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
                t_near = t_near.max(t0);
                t_far = t_far.min(t1);
                if t_near > t_far {
                    return None;
                }
            }
        }
        if t_far < 0.0 {
            return None;
        }
        Some(t_near.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box_at(center: Vec3) -> Aabb {
        Aabb::from_center_half_extents(center, Vec3::splat(0.5))
    }

    #[test]
    fn central_hit_reports_distance() {
        let aabb = unit_box_at(Vec3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let t = aabb.intersect_ray(&ray).unwrap();
        assert!((t - 4.5).abs() < 1e-5);
    }

    #[test]
    fn ray_pointing_away_misses() {
        let aabb = unit_box_at(Vec3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(aabb.intersect_ray(&ray).is_none());
    }

    #[test]
    fn parallel_offset_ray_misses() {
        let aabb = unit_box_at(Vec3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::NEG_Z);
        assert!(aabb.intersect_ray(&ray).is_none());
    }

    #[test]
    fn origin_inside_hits_at_zero() {
        let aabb = unit_box_at(Vec3::ZERO);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert_eq!(aabb.intersect_ray(&ray), Some(0.0));
    }

    #[test]
    fn degenerate_min_max_order_is_repaired() {
        let aabb = Aabb::new(Vec3::splat(1.0), Vec3::splat(-1.0));
        assert_eq!(aabb.min, Vec3::splat(-1.0));
        assert_eq!(aabb.max, Vec3::splat(1.0));
    }
}
