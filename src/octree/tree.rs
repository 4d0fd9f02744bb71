//! The octree itself: eager construction, triangle indexing, teardown.

use crate::error::{EchoRayError, Result};
use crate::geometry::{Aabb, Triangle};
use crate::octree::node::{Node, NodeId, OCTANT_SIGNS, octant_code};

/// Largest accepted construction depth. The tree is allocated eagerly, so
/// node count grows as `8^depth`; depth 6 is already ~300k nodes.
pub const MAX_DEPTH: u32 = 6;

/// A fixed-depth octree over world-space triangles.
///
/// Nodes live in a flat arena addressed by [`NodeId`]; parent and child
/// links are indices into that arena, so the recursive structure carries
/// no reference cycles and teardown is an arena reset.
///
/// Mutation (`insert`, `clear`) requires `&mut self`, queries only
/// `&self`: the build phase is exclusive and the query phase is freely
/// shareable across threads, with no locking.
#[derive(Debug)]
pub struct Octree {
    nodes: Vec<Node>,
    depth: u32,
}

impl Octree {
    /// Builds the complete tree eagerly: the root covers `bounds`, and
    /// each node spawns 8 children with half its half-extents, centered
    /// at the 8 octant offsets, for `depth` generations. Depth 0 yields a
    /// childless root.
    ///
    /// Fails with [`EchoRayError::Geometry`] if `bounds` is non-finite or
    /// degenerate, and with [`EchoRayError::InvalidDepth`] if `depth`
    /// exceeds [`MAX_DEPTH`]. Preconditions are rejected, never clamped.
    pub fn build(bounds: Aabb, depth: u32) -> Result<Self> {
        if !bounds.center.is_finite() || !bounds.half_extents.is_finite() {
            return Err(EchoRayError::Geometry(format!(
                "octree bounds must be finite, got center {} half-extents {}",
                bounds.center, bounds.half_extents
            )));
        }
        if bounds.half_extents.min_element() <= 0.0 {
            return Err(EchoRayError::Geometry(format!(
                "octree bounds must have positive extent on every axis, got {}",
                bounds.half_extents
            )));
        }
        if depth > MAX_DEPTH {
            return Err(EchoRayError::InvalidDepth {
                depth,
                max: MAX_DEPTH,
            });
        }

        let node_count = ((8u64.pow(depth + 1) - 1) / 7) as usize;
        let mut nodes = Vec::with_capacity(node_count);
        nodes.push(Node::new(bounds, None));
        let mut tree = Self { nodes, depth };
        tree.create_children(NodeId::ROOT, depth);

        log::debug!(
            "built octree: depth {}, {} nodes",
            depth,
            tree.nodes.len()
        );
        Ok(tree)
    }

    fn create_children(&mut self, parent: NodeId, generations: u32) {
        if generations == 0 {
            return;
        }

        let parent_bounds = self.nodes[parent.index()].bounds();
        let child_half = parent_bounds.half_extents * 0.5;
        let mut children = [NodeId::ROOT; 8];
        for (code, signs) in OCTANT_SIGNS.iter().enumerate() {
            let center = parent_bounds.center + child_half * *signs;
            children[code] = NodeId(self.nodes.len() as u32);
            self.nodes
                .push(Node::new(Aabb::new(center, child_half), Some(parent)));
        }
        self.nodes[parent.index()].set_children(children);

        for child in children {
            self.create_children(child, generations - 1);
        }
    }

    /// Indexes a triangle at the shallowest node that can contain it
    /// without ambiguity and returns that node's handle.
    ///
    /// Single-pass descent from the root: a triangle whose bounding box
    /// straddles the current node's center plane on any axis stays at the
    /// current node; otherwise the descent follows the octant of the
    /// box's minimum corner until a childless node takes the triangle.
    pub fn insert(&mut self, triangle: Triangle) -> NodeId {
        let aabb = triangle.aabb();
        let min = aabb.min();
        let max = aabb.max();

        let mut current = NodeId::ROOT;
        loop {
            let node = &self.nodes[current.index()];
            let center = node.bounds().center;

            let straddles = (min.x < center.x && max.x >= center.x)
                || (min.y < center.y && max.y >= center.y)
                || (min.z < center.z && max.z >= center.z);
            if straddles {
                break;
            }

            match node.children() {
                Some(children) => current = children[octant_code(min, center)],
                None => break,
            }
        }

        self.nodes[current.index()].push_triangle(triangle);
        current
    }

    /// Releases all indexed geometry: walks the tree children-first,
    /// emptying every triangle list and detaching every link, then resets
    /// the arena to a childless root with the original bounds.
    ///
    /// Returns the number of nodes visited. The cleared tree answers
    /// queries as an empty index; all previously returned [`NodeId`]s are
    /// invalidated.
    pub fn clear(&mut self) -> usize {
        let visited = self.detach_recursive(NodeId::ROOT);
        let bounds = self.nodes[NodeId::ROOT.index()].bounds();
        self.nodes.clear();
        self.nodes.push(Node::new(bounds, None));
        self.nodes.shrink_to_fit();
        self.depth = 0;

        log::info!("cleared {} octree nodes", visited);
        visited
    }

    fn detach_recursive(&mut self, id: NodeId) -> usize {
        let mut count = 0;
        if let Some(children) = self.nodes[id.index()].children().copied() {
            for child in children {
                count += self.detach_recursive(child);
            }
        }
        self.nodes[id.index()].detach();
        count + 1
    }

    /// Diagnostic total of triangles across all nodes.
    pub fn triangle_count(&self) -> usize {
        self.nodes.iter().map(|node| node.triangles().len()).sum()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The root node's bounds.
    pub fn bounds(&self) -> Aabb {
        self.nodes[NodeId::ROOT.index()].bounds()
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::math::{Affine3A, Vec2, Vec3};
    use crate::scene::SceneObject;

    fn world_triangle(p0: Vec3, p1: Vec3, p2: Vec3) -> Triangle {
        let object = Arc::new(SceneObject::new("test", 0, Affine3A::IDENTITY));
        Triangle::from_world([p0, p1, p2], [Vec2::ZERO, Vec2::X, Vec2::Y], object)
    }

    fn cube_bounds(half: f32) -> Aabb {
        Aabb::new(Vec3::ZERO, Vec3::splat(half))
    }

    #[test]
    fn test_depth_zero_is_a_childless_root() {
        let tree = Octree::build(cube_bounds(4.0), 0).unwrap();
        assert_eq!(tree.node_count(), 1);
        assert!(tree.node(tree.root()).is_leaf());
    }

    #[test]
    fn test_complete_tree_allocation() {
        assert_eq!(Octree::build(cube_bounds(4.0), 1).unwrap().node_count(), 9);
        assert_eq!(
            Octree::build(cube_bounds(4.0), 3).unwrap().node_count(),
            585
        );
    }

    #[test]
    fn test_child_bounds_quarter_parent_extents() {
        let tree = Octree::build(cube_bounds(4.0), 1).unwrap();
        let children = tree.node(tree.root()).children().unwrap();

        // code 0 is the (+x, +y, +z) octant
        let first = tree.node(children[0]);
        assert_eq!(first.bounds().center, Vec3::splat(2.0));
        assert_eq!(first.bounds().half_extents, Vec3::splat(2.0));
        assert_eq!(first.parent(), Some(tree.root()));

        // code 7 is the (-x, -y, -z) octant
        let last = tree.node(children[7]);
        assert_eq!(last.bounds().center, Vec3::splat(-2.0));
    }

    #[test]
    fn test_excessive_depth_is_rejected() {
        let err = Octree::build(cube_bounds(4.0), MAX_DEPTH + 1).unwrap_err();
        assert!(matches!(err, EchoRayError::InvalidDepth { .. }));
    }

    #[test]
    fn test_degenerate_bounds_are_rejected() {
        let err = Octree::build(Aabb::new(Vec3::ZERO, Vec3::ZERO), 2).unwrap_err();
        assert!(matches!(err, EchoRayError::Geometry(_)));
        let err =
            Octree::build(Aabb::new(Vec3::ZERO, Vec3::new(1.0, f32::NAN, 1.0)), 2).unwrap_err();
        assert!(matches!(err, EchoRayError::Geometry(_)));
    }

    #[test]
    fn test_straddling_triangle_stays_at_root() {
        // spans the z = 0 center plane, so no child can safely contain it
        let tri = world_triangle(
            Vec3::new(0.5, 0.5, -1.0),
            Vec3::new(2.0, 0.5, 1.0),
            Vec3::new(0.5, 2.0, 1.0),
        );
        for depth in [1, 3] {
            let mut tree = Octree::build(cube_bounds(8.0), depth).unwrap();
            let node = tree.insert(tri.clone());
            assert_eq!(node, tree.root());
            assert_eq!(tree.node(tree.root()).triangles().len(), 1);
        }
    }

    #[test]
    fn test_octant_local_triangle_descends_to_deepest_node() {
        let mut tree = Octree::build(cube_bounds(8.0), 3).unwrap();
        // fully inside the (+,+,+) octant at every level
        let tri = world_triangle(
            Vec3::new(6.2, 6.2, 6.2),
            Vec3::new(6.7, 6.2, 6.2),
            Vec3::new(6.2, 6.7, 6.2),
        );
        let id = tree.insert(tri);

        let node = tree.node(id);
        assert!(node.is_leaf());
        assert_eq!(node.bounds().half_extents, Vec3::splat(1.0));
        assert_eq!(node.bounds().center, Vec3::splat(7.0));
        assert_eq!(node.triangles().len(), 1);

        // the chain of parents walks back to the root
        let level2 = node.parent().unwrap();
        assert_eq!(tree.node(level2).bounds().center, Vec3::splat(6.0));
        let level1 = tree.node(level2).parent().unwrap();
        assert_eq!(tree.node(level1).bounds().center, Vec3::splat(4.0));
        assert_eq!(tree.node(level1).parent(), Some(tree.root()));
    }

    #[test]
    fn test_leaf_takes_triangle_when_no_children_remain() {
        let mut tree = Octree::build(cube_bounds(8.0), 0).unwrap();
        let tri = world_triangle(
            Vec3::new(6.2, 6.2, 6.2),
            Vec3::new(6.7, 6.2, 6.2),
            Vec3::new(6.2, 6.7, 6.2),
        );
        assert_eq!(tree.insert(tri), tree.root());
    }

    #[test]
    fn test_triangle_count_sums_all_nodes() {
        let mut tree = Octree::build(cube_bounds(8.0), 2).unwrap();
        // one at the root (straddler), one deep
        tree.insert(world_triangle(
            Vec3::new(-1.0, 0.5, 0.5),
            Vec3::new(1.0, 0.5, 0.5),
            Vec3::new(0.5, 1.0, 0.5),
        ));
        tree.insert(world_triangle(
            Vec3::new(6.2, 6.2, 6.2),
            Vec3::new(6.7, 6.2, 6.2),
            Vec3::new(6.2, 6.7, 6.2),
        ));
        assert_eq!(tree.triangle_count(), 2);
    }

    #[test]
    fn test_clear_resets_to_empty_index() {
        let mut tree = Octree::build(cube_bounds(8.0), 3).unwrap();
        tree.insert(world_triangle(
            Vec3::new(6.2, 6.2, 6.2),
            Vec3::new(6.7, 6.2, 6.2),
            Vec3::new(6.2, 6.7, 6.2),
        ));

        let visited = tree.clear();
        assert_eq!(visited, 585);
        assert_eq!(tree.triangle_count(), 0);
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.depth(), 0);
        assert!(tree.node(tree.root()).is_leaf());
        // bounds survive, so the cleared tree still answers queries
        assert_eq!(tree.bounds(), cube_bounds(8.0));

        // re-population without a rebuild lands at the childless root
        let id = tree.insert(world_triangle(
            Vec3::new(6.2, 6.2, 6.2),
            Vec3::new(6.7, 6.2, 6.2),
            Vec3::new(6.2, 6.7, 6.2),
        ));
        assert_eq!(id, tree.root());
    }
}
