//! EchoRay: octree spatial index and ray intersection engine for
//! acoustic scene queries.
//!
//! Scene geometry arrives once through a [`scene::GeometryProvider`], is
//! indexed into a fixed-depth [`octree::Octree`], and is then queried any
//! number of times through a [`raycast::Raycaster`] while the index stays
//! static. Hits carry the owning object, barycentric coordinates, the
//! interpolated texture coordinate, and the world-space hit point, sorted
//! nearest-first.

pub mod config;
pub mod error;
pub mod events;
pub mod geometry;
pub mod math;
pub mod octree;
pub mod raycast;
pub mod scene;

pub use config::IndexDesc;
pub use error::EchoRayError;
pub use events::IndexEvent;
pub use geometry::{Aabb, Triangle};
pub use octree::{IndexBuilder, NodeId, Octree, build_index};
pub use raycast::{RayHit, Raycaster};
pub use scene::{GeometryProvider, LayerMask, SceneGeometry, SceneObject};
