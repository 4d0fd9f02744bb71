//! World-space triangle geometry.

use std::sync::Arc;

use crate::geometry::Aabb;
use crate::math::{Vec2, Vec3};
use crate::scene::SceneObject;

/// A world-space triangle with per-vertex texture coordinates and a
/// reference to the object it came from.
///
/// Vertices are baked into world space exactly once, at construction time,
/// through the owner's transform. The triangle does not track the owner
/// afterwards: if the owner moves, the caller is responsible for
/// re-baking (constructing the triangle again) and rebuilding the index.
/// The owner reference is hit metadata only and is never used to mutate
/// the object.
#[derive(Debug, Clone)]
pub struct Triangle {
    positions: [Vec3; 3],
    uvs: [Vec2; 3],
    object: Arc<SceneObject>,
}

impl Triangle {
    /// Bakes a triangle given in the owner's local space into world space
    /// through the owner's transform.
    pub fn bake(positions: [Vec3; 3], uvs: [Vec2; 3], object: Arc<SceneObject>) -> Self {
        let transform = object.transform();
        Self {
            positions: positions.map(|p| transform.transform_point3(p)),
            uvs,
            object,
        }
    }

    /// Wraps vertices that are already in world space.
    pub fn from_world(positions: [Vec3; 3], uvs: [Vec2; 3], object: Arc<SceneObject>) -> Self {
        Self {
            positions,
            uvs,
            object,
        }
    }

    pub fn positions(&self) -> &[Vec3; 3] {
        &self.positions
    }

    pub fn uvs(&self) -> &[Vec2; 3] {
        &self.uvs
    }

    pub fn object(&self) -> &Arc<SceneObject> {
        &self.object
    }

    /// Per-axis min/max bounding box of the three vertices.
    pub fn aabb(&self) -> Aabb {
        let [p0, p1, p2] = self.positions;
        Aabb::from_min_max(p0.min(p1).min(p2), p0.max(p1).max(p2))
    }
}
