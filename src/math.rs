//! Math types for EchoRay

pub use glam::{Affine3A, Vec2, Vec3};

/// A half-line through world space, defined by an origin and a direction.
///
/// The direction is not required to be normalized: every distance produced
/// by the engine is measured in units of the direction's length, so a ray
/// with a direction of length 2 reports half the metric distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
