//! Geometry provider interface and a simple in-memory implementation.

use std::sync::Arc;

use crate::geometry::{Aabb, Triangle};
use crate::math::{Vec2, Vec3};
use crate::scene::SceneObject;

/// Source of scene geometry for index construction.
///
/// Implement this trait to feed an existing scene representation into the
/// engine. The provider is consulted once per build: the bounds size the
/// octree root, then every triangle is enumerated and inserted. Malformed
/// upstream geometry (missing meshes, incomplete triples) is the
/// provider's concern to filter; the engine assumes well-formed
/// triangles.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use echoray::geometry::{Aabb, Triangle};
/// use echoray::math::{Vec2, Vec3};
/// use echoray::scene::{GeometryProvider, SceneObject};
///
/// struct SingleQuad {
///     object: Arc<SceneObject>,
/// }
///
/// impl GeometryProvider for SingleQuad {
///     fn scene_bounds(&self) -> Aabb {
///         Aabb::new(Vec3::ZERO, Vec3::splat(10.0))
///     }
///
///     fn for_each_triangle(&self, f: &mut dyn FnMut(Triangle)) {
///         let uvs = [Vec2::ZERO, Vec2::X, Vec2::Y];
///         f(Triangle::bake(
///             [Vec3::ZERO, Vec3::X, Vec3::Y],
///             uvs,
///             self.object.clone(),
///         ));
///         f(Triangle::bake(
///             [Vec3::X, Vec3::ONE.with_z(0.0), Vec3::Y],
///             uvs,
///             self.object.clone(),
///         ));
///     }
/// }
/// ```
pub trait GeometryProvider {
    /// World-space bounds used to size the octree root. Must be finite
    /// and non-degenerate on every axis, or index construction fails.
    fn scene_bounds(&self) -> Aabb;

    /// Enumerates every triangle of the scene exactly once.
    fn for_each_triangle(&self, f: &mut dyn FnMut(Triangle));
}

/// Scene bounds from object positions: the union of all positions,
/// expanded by a factor of 2 so geometry hanging off the outermost object
/// centers still falls inside the root.
pub fn scene_bounds_from_positions(positions: impl IntoIterator<Item = Vec3>) -> Aabb {
    let mut bounds = Aabb::new(Vec3::ZERO, Vec3::ZERO);
    for position in positions {
        bounds.encapsulate(position);
    }
    bounds.scaled(2.0)
}

/// In-memory geometry provider for embedders without a scene graph of
/// their own (and for tests): owns object records and their baked
/// triangles.
#[derive(Debug, Default)]
pub struct SceneGeometry {
    objects: Vec<Arc<SceneObject>>,
    triangles: Vec<Triangle>,
}

impl SceneGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an object and returns the shared handle to attach
    /// triangles to.
    pub fn add_object(&mut self, object: SceneObject) -> Arc<SceneObject> {
        let object = Arc::new(object);
        self.objects.push(object.clone());
        object
    }

    /// Bakes a local-space triangle through `object`'s transform and
    /// stores it.
    pub fn add_triangle(
        &mut self,
        positions: [Vec3; 3],
        uvs: [Vec2; 3],
        object: &Arc<SceneObject>,
    ) {
        self.triangles.push(Triangle::bake(positions, uvs, object.clone()));
    }

    pub fn objects(&self) -> &[Arc<SceneObject>] {
        &self.objects
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

impl GeometryProvider for SceneGeometry {
    fn scene_bounds(&self) -> Aabb {
        scene_bounds_from_positions(
            self.objects
                .iter()
                .map(|object| object.transform().translation.into()),
        )
    }

    fn for_each_triangle(&self, f: &mut dyn FnMut(Triangle)) {
        for triangle in &self.triangles {
            f(triangle.clone());
        }
    }
}
