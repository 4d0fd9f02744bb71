//! Fixed-depth octree spatial index.
//!
//! The tree is allocated eagerly at construction: building with depth `d`
//! produces a complete 8-ary tree of `d` generations below the root, each
//! child covering one octant of its parent's bounds. Triangles are then
//! assigned to whichever node first fully contains them: a triangle
//! whose bounding box straddles a node's center plane on any axis stays
//! at that node; everything else descends toward the leaves.
//!
//! # Phases
//!
//! The index has two phases with different sharing rules. During the
//! build phase an [`IndexBuilder`] (or an exclusive `&mut Octree`) owns
//! the tree, so no query can observe a half-built index. Once built, the
//! tree is immutable and `&Octree` queries are safe from any number of
//! threads.

pub mod builder;
pub mod node;
pub mod tree;

pub use builder::{IndexBuilder, build_index};
pub use node::{Node, NodeId};
pub use tree::{MAX_DEPTH, Octree};
