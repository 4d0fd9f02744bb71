//! Ray resolution against a built octree.
//!
//! A [`Raycaster`] borrows an index and resolves rays against it:
//! recursive descent over the tree, pruning subtrees whose bounds the ray
//! misses, with a single-sided triangle intersection test at every node
//! the ray reaches. Hits come back ordered nearest-first.
//!
//! Queries never mutate the index and keep all intermediate state on the
//! stack, so any number of threads may query the same `&Octree`
//! concurrently.

pub mod hit;
mod intersect;
pub mod raycaster;

pub use hit::RayHit;
pub use raycaster::Raycaster;
