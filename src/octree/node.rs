//! Node records of the octree arena.

use crate::geometry::{Aabb, Triangle};
use crate::math::Vec3;

/// Handle to a node in the octree arena.
///
/// Handles stay valid until [`Octree::clear`](crate::octree::Octree::clear),
/// which resets the arena and invalidates every previously returned id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Octant sign vectors in child-code order.
///
/// Code 0 is the (+x, +y, +z) octant; setting bit 2 flips to the -x half,
/// bit 1 to -y, bit 0 to -z.
pub(crate) const OCTANT_SIGNS: [Vec3; 8] = [
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(-1.0, -1.0, -1.0),
];

/// 3-bit child code of `point` relative to `center`.
pub(crate) fn octant_code(point: Vec3, center: Vec3) -> usize {
    let mut code = 0;
    if point.x < center.x {
        code |= 4;
    }
    if point.y < center.y {
        code |= 2;
    }
    if point.z < center.z {
        code |= 1;
    }
    code
}

/// One node of the octree: its bounds, the triangles assigned directly to
/// it, and either exactly 8 children or none.
///
/// The parent link exists for traversal only; ownership lives in the
/// arena.
#[derive(Debug)]
pub struct Node {
    bounds: Aabb,
    triangles: Vec<Triangle>,
    parent: Option<NodeId>,
    children: Option<[NodeId; 8]>,
}

impl Node {
    pub(crate) fn new(bounds: Aabb, parent: Option<NodeId>) -> Self {
        Self {
            bounds,
            triangles: Vec::new(),
            parent,
            children: None,
        }
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Triangles assigned directly to this node (not descendants).
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> Option<&[NodeId; 8]> {
        self.children.as_ref()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub(crate) fn push_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub(crate) fn set_children(&mut self, children: [NodeId; 8]) {
        self.children = Some(children);
    }

    /// Empties the triangle list and drops both link directions.
    pub(crate) fn detach(&mut self) {
        self.triangles.clear();
        self.parent = None;
        self.children = None;
    }
}
