//! Hit result model.

use std::sync::Arc;

use crate::math::{Vec2, Vec3};
use crate::scene::SceneObject;

/// A single ray-triangle intersection.
#[derive(Debug, Clone)]
pub struct RayHit {
    /// Distance from the ray origin to the hit, in units of the ray
    /// direction's length.
    pub distance: f32,

    /// The object that owns the hit triangle.
    pub object: Arc<SceneObject>,

    /// Barycentric coordinates (u, v) of the hit within the triangle,
    /// relative to its first two edges.
    pub barycentric: Vec2,

    /// Texture coordinate interpolated across the triangle at the hit.
    pub tex_coord: Vec2,

    /// World-space hit point interpolated across the triangle.
    pub point: Vec3,
}
