//! Scene-side input for the spatial index.
//!
//! The engine does not walk a scene graph itself: an external geometry
//! provider enumerates world-space triangles once and supplies a scene
//! bounding box used to size the octree root.
//!
//! # Workflow
//!
//! 1. Register each geometry-contributing object as a [`SceneObject`]
//!    (identity, layer, local-to-world transform)
//! 2. Implement [`GeometryProvider`] over your scene representation, or
//!    collect baked triangles into a [`SceneGeometry`]
//! 3. Hand the provider to [`build_index`](crate::octree::build_index)
//! 4. Query the built index through a [`Raycaster`](crate::raycast::Raycaster)

pub mod object;
pub mod provider;

pub use object::{LayerMask, SceneObject};
pub use provider::{GeometryProvider, SceneGeometry, scene_bounds_from_positions};
