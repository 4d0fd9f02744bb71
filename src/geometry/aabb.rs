//! Axis-aligned bounding boxes.

use crate::math::{Ray, Vec3};

/// An axis-aligned bounding box stored as a center plus half-extents.
///
/// A box with zero half-extents is a point; [`Aabb::encapsulate`] grows it
/// to cover additional points, which is how scene bounds are accumulated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl Aabb {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self {
            center: (min + max) * 0.5,
            half_extents: (max - min) * 0.5,
        }
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }

    pub fn size(&self) -> Vec3 {
        self.half_extents * 2.0
    }

    /// Returns true if `point` lies inside the box (boundaries inclusive).
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min()).all() && point.cmple(self.max()).all()
    }

    /// Grows the box to include `point`, keeping it axis-aligned.
    pub fn encapsulate(&mut self, point: Vec3) {
        let min = self.min().min(point);
        let max = self.max().max(point);
        *self = Self::from_min_max(min, max);
    }

    /// The same box with its size scaled by `factor` about its center.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            center: self.center,
            half_extents: self.half_extents * factor,
        }
    }

    /// Slab test: does `ray` pass through this box?
    ///
    /// A ray starting inside the box intersects it; a box entirely behind
    /// the ray origin does not. Axes with a zero direction component
    /// reduce to an interval check on the origin.
    pub fn intersects_ray(&self, ray: &Ray) -> bool {
        let min = self.min();
        let max = self.max();
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let dir = ray.direction[axis];
            if dir == 0.0 {
                if origin < min[axis] || origin > max[axis] {
                    return false;
                }
                continue;
            }

            let inv = 1.0 / dir;
            let mut t0 = (min[axis] - origin) * inv;
            let mut t1 = (max[axis] - origin) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_near = t_near.max(t0);
            t_far = t_far.min(t1);
            if t_near > t_far {
                return false;
            }
        }

        t_far >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max_roundtrip() {
        let aabb = Aabb::from_min_max(Vec3::new(-1.0, -2.0, -3.0), Vec3::new(3.0, 2.0, 1.0));
        assert_eq!(aabb.center, Vec3::new(1.0, 0.0, -1.0));
        assert_eq!(aabb.half_extents, Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(aabb.min(), Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(aabb.max(), Vec3::new(3.0, 2.0, 1.0));
        assert_eq!(aabb.size(), Vec3::new(4.0, 4.0, 4.0));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(1.0));
        assert!(aabb.contains(Vec3::ZERO));
        assert!(aabb.contains(Vec3::splat(1.0)));
        assert!(aabb.contains(Vec3::splat(-1.0)));
        assert!(!aabb.contains(Vec3::new(1.01, 0.0, 0.0)));
    }

    #[test]
    fn test_encapsulate_grows() {
        let mut aabb = Aabb::new(Vec3::ZERO, Vec3::ZERO);
        aabb.encapsulate(Vec3::new(2.0, 0.0, 0.0));
        aabb.encapsulate(Vec3::new(-2.0, 1.0, 0.0));
        assert_eq!(aabb.min(), Vec3::new(-2.0, 0.0, 0.0));
        assert_eq!(aabb.max(), Vec3::new(2.0, 1.0, 0.0));
    }

    #[test]
    fn test_scaled_keeps_center() {
        let aabb = Aabb::new(Vec3::new(1.0, 2.0, 3.0), Vec3::splat(1.0));
        let scaled = aabb.scaled(2.0);
        assert_eq!(scaled.center, aabb.center);
        assert_eq!(scaled.half_extents, Vec3::splat(2.0));
    }

    #[test]
    fn test_ray_hits_box_head_on() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(1.0));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(aabb.intersects_ray(&ray));
    }

    #[test]
    fn test_ray_pointing_away_misses() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(1.0));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(!aabb.intersects_ray(&ray));
    }

    #[test]
    fn test_ray_from_inside_hits() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(1.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(aabb.intersects_ray(&ray));
    }

    #[test]
    fn test_axis_parallel_ray_outside_slab_misses() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(1.0));
        // parallel to z, offset outside the x slab
        let ray = Ray::new(Vec3::new(2.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(!aabb.intersects_ray(&ray));
        // same offset but inside the slab
        let ray = Ray::new(Vec3::new(0.5, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(aabb.intersects_ray(&ray));
    }

    #[test]
    fn test_diagonal_ray_grazing_corner() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(1.0));
        let ray = Ray::new(Vec3::new(-3.0, -3.0, -3.0), Vec3::new(1.0, 1.0, 1.0));
        assert!(aabb.intersects_ray(&ray));
        let ray = Ray::new(Vec3::new(-3.0, -3.0, 5.0), Vec3::new(1.0, 1.0, 1.0));
        assert!(!aabb.intersects_ray(&ray));
    }
}
