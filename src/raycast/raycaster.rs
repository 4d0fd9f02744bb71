//! Octree traversal and the query entry points.

use crate::math::Ray;
use crate::octree::{NodeId, Octree};
use crate::raycast::hit::RayHit;
use crate::raycast::intersect::{build_hit, intersect_triangle};
use crate::scene::LayerMask;

/// Resolves rays against a built octree.
///
/// A raycaster borrows its index explicitly, so independent indices can
/// be queried side by side and a query can never outlive the geometry it
/// reads. Construction is free; make one wherever a query is issued.
pub struct Raycaster<'a> {
    octree: &'a Octree,
}

impl<'a> Raycaster<'a> {
    pub fn new(octree: &'a Octree) -> Self {
        Self { octree }
    }

    /// The nearest hit along `ray`, or `None`.
    ///
    /// An empty index, or a ray that misses the root bounds entirely, is
    /// a normal miss, not an error.
    pub fn cast_nearest(&self, ray: &Ray) -> Option<RayHit> {
        let mut hits = self.collect_hits(ray);
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits.into_iter().next()
    }

    /// Every hit along `ray`, sorted ascending by distance.
    ///
    /// `max_distance` drops hits farther than the given distance (in
    /// units of the ray direction's length); `mask` drops hits whose
    /// owning object's layer is not in the mask. Both filters run after
    /// collection, so the result is exactly collect, filter, sort.
    pub fn cast_all(&self, ray: &Ray, max_distance: Option<f32>, mask: LayerMask) -> Vec<RayHit> {
        let mut hits = self.collect_hits(ray);
        if let Some(max) = max_distance {
            hits.retain(|hit| hit.distance <= max);
        }
        hits.retain(|hit| mask.contains(hit.object.layer()));
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    fn collect_hits(&self, ray: &Ray) -> Vec<RayHit> {
        let mut hits = Vec::new();
        let root = self.octree.root();
        if self.octree.node(root).bounds().intersects_ray(ray) {
            self.collect_node(root, ray, &mut hits);
        }
        hits
    }

    /// Tests the triangles stored directly at `id` (intermediate nodes
    /// hold straddling triangles, so every visited node is tested, the
    /// root included), then recurses into each child the ray's slab test
    /// lets through. Subtrees are not ordered or pruned by distance:
    /// every overlapping subtree is visited and sorting happens once at
    /// the end.
    fn collect_node(&self, id: NodeId, ray: &Ray, hits: &mut Vec<RayHit>) {
        let node = self.octree.node(id);
        for triangle in node.triangles() {
            if let Some((distance, barycentric)) = intersect_triangle(triangle, ray) {
                hits.push(build_hit(triangle, distance, barycentric));
            }
        }

        if let Some(children) = node.children() {
            for &child in children {
                if self.octree.node(child).bounds().intersects_ray(ray) {
                    self.collect_node(child, ray, hits);
                }
            }
        }
    }
}
